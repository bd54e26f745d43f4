//! Distinct product listing command.
//!
//! # Usage
//!
//! ```bash
//! grocereasy products
//! ```

use std::io::Write;

use grocereasy_ledger::{LedgerConfig, LedgerStore};

use super::{CommandError, PRODUCTS_HEADING, write_name_list};

/// Print every product name bought so far, once each.
///
/// # Errors
///
/// Returns `CommandError::Ledger` if the ledger cannot be opened or read.
pub async fn run<W: Write>(config: &LedgerConfig, out: &mut W) -> Result<(), CommandError> {
    let store = LedgerStore::connect(config).await?;
    let names = store.distinct_product_names().await?;
    store.close().await;

    write_name_list(out, PRODUCTS_HEADING, &names)?;
    Ok(())
}
