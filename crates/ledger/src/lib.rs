//! Grocereasy Ledger - Durable storage for grocery purchases.
//!
//! # Database: single SQLite file (default `Groceries.db`)
//!
//! ## Tables
//!
//! - `groceries` - One row per purchase, append-only
//!
//! The schema is created on first use by [`LedgerStore::initialize`]; there is
//! no separate migration step. Rows are never updated or deleted.
//!
//! # Usage
//!
//! ```rust,no_run
//! use grocereasy_core::RawEntry;
//! use grocereasy_ledger::{LedgerConfig, LedgerStore};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LedgerConfig::from_env()?;
//! let store = LedgerStore::connect(&config).await?;
//!
//! let entry = RawEntry {
//!     product_name: "apples".to_owned(),
//!     unit_volume: "2".to_owned(),
//!     unit: "kg".to_owned(),
//!     price: 1.99,
//!     store_name: "auchan".to_owned(),
//!     date_entered: None,
//! }
//! .validate()?;
//!
//! store.insert(&entry).await?;
//! let names = store.distinct_product_names().await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod store;

pub use config::{ConfigError, LedgerConfig};
pub use error::LedgerError;
pub use store::LedgerStore;
