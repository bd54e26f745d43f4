//! Integration tests for Grocereasy.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p grocereasy-integration-tests
//! ```
//!
//! Every test works on its own temporary SQLite file, so no setup is needed
//! and tests can run in parallel.
//!
//! # Test Categories
//!
//! - `ledger_properties` - Storage guarantees of the ledger (schema, distinct
//!   names, append-only ordering, input policy)

use std::path::PathBuf;

use grocereasy_core::{NewGroceryEntry, RawEntry};
use grocereasy_ledger::{LedgerConfig, LedgerStore};
use tempfile::TempDir;

/// A ledger on a throwaway file. The file is removed when this is dropped.
pub struct TestLedger {
    pub dir: TempDir,
    pub store: LedgerStore,
}

impl TestLedger {
    /// Create and initialize a fresh ledger.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory or database cannot be created.
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = LedgerStore::connect(&LedgerConfig::new(dir.path().join("Groceries.db")))
            .await
            .expect("Failed to open test ledger");
        Self { dir, store }
    }

    /// Path of the backing database file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("Groceries.db")
    }
}

/// Raw form input for one purchase with a fixed date.
#[must_use]
pub fn raw_entry(product: &str, volume: &str, unit: &str, price: f64, store: &str) -> RawEntry {
    RawEntry {
        product_name: product.to_owned(),
        unit_volume: volume.to_owned(),
        unit: unit.to_owned(),
        price,
        store_name: store.to_owned(),
        date_entered: Some("01:01:2024".to_owned()),
    }
}

/// A validated purchase.
///
/// # Panics
///
/// Panics if the input is not a valid entry.
#[must_use]
pub fn entry(product: &str, volume: &str, unit: &str, price: f64, store: &str) -> NewGroceryEntry {
    raw_entry(product, volume, unit, price, store)
        .validate()
        .expect("Test entry should be valid")
}
