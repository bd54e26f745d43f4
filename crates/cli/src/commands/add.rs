//! Add a purchase to the ledger.
//!
//! # Usage
//!
//! ```bash
//! grocereasy add --product apples --volume 2 --unit kg --price 1.99 --store auchan
//! grocereasy add -p milk -v 1 -u l --price 0.89 -s pingodoce --date 02:01:2024
//! ```
//!
//! Without `--date` the entry is stamped with today's date (`DD:MM:YYYY`).

use std::io::Write;

use grocereasy_core::{EntryId, RawEntry};
use grocereasy_ledger::{LedgerConfig, LedgerStore};

use super::{CommandError, write_name_list};

/// Heading printed after a successful insert.
pub const UPDATED_HEADING: &str = "Updated unique product names:";

/// Validate and store one entry, then print the refreshed product list.
///
/// Validation happens before the database is touched, so a rejected entry
/// leaves no trace.
///
/// # Errors
///
/// Returns `CommandError::InvalidEntry` if a field fails validation.
/// Returns `CommandError::Ledger` if the ledger cannot be opened or written.
pub async fn run<W: Write>(
    config: &LedgerConfig,
    raw: &RawEntry,
    out: &mut W,
) -> Result<EntryId, CommandError> {
    let entry = raw.validate()?;

    let store = LedgerStore::connect(config).await?;
    let id = store.insert(&entry).await?;
    tracing::info!(%id, product = %entry.product_name, "Product added");

    let names = store.distinct_product_names().await?;
    store.close().await;

    writeln!(
        out,
        "Product added successfully! ({} {}{} at {} for {}, {})",
        entry.product_name,
        entry.unit_volume,
        entry.unit,
        entry.store_name,
        entry.price,
        entry.date_entered
    )?;
    write_name_list(out, UPDATED_HEADING, &names)?;
    Ok(id)
}
