//! List every stored entry.
//!
//! # Usage
//!
//! ```bash
//! # Aligned table, oldest first
//! grocereasy entries
//!
//! # JSON array, for scripts
//! grocereasy entries --json
//! ```

use std::io::Write;

use grocereasy_core::GroceryEntry;
use grocereasy_ledger::{LedgerConfig, LedgerStore};

use super::CommandError;

/// Print all entries in insertion order, as a table or as JSON.
///
/// # Errors
///
/// Returns `CommandError::Ledger` if the ledger cannot be read or holds an
/// invalid row, and `CommandError::Json` if serialization fails.
pub async fn run<W: Write>(
    config: &LedgerConfig,
    json: bool,
    out: &mut W,
) -> Result<(), CommandError> {
    let store = LedgerStore::connect(config).await?;
    let entries = store.entries().await?;
    store.close().await;

    if json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
    } else {
        write_table(out, &entries)?;
    }
    Ok(())
}

fn write_table<W: Write>(out: &mut W, entries: &[GroceryEntry]) -> std::io::Result<()> {
    writeln!(
        out,
        "{:>5}  {:<12}  {:<20}  {:>8}  {:>9}  {}",
        "id", "date", "product", "volume", "price", "store"
    )?;
    for stored in entries {
        let entry = &stored.entry;
        let volume = format!("{}{}", entry.unit_volume, entry.unit);
        writeln!(
            out,
            "{:>5}  {:<12}  {:<20}  {:>8}  {:>9}  {}",
            stored.id.to_string(),
            entry.date_entered.to_string(),
            entry.product_name.as_str(),
            volume,
            entry.price.to_string(),
            entry.store_name
        )?;
    }
    Ok(())
}
