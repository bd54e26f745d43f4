//! Ledger initialization command.
//!
//! # Usage
//!
//! ```bash
//! grocereasy init
//! grocereasy --database /srv/groceries.db init
//! ```

use std::io::Write;

use grocereasy_ledger::{LedgerConfig, LedgerStore};

use super::CommandError;

/// Create the database file and schema if they do not exist yet.
///
/// Running it again against an existing ledger changes nothing.
///
/// # Errors
///
/// Returns `CommandError::Ledger` if the database cannot be opened or
/// initialized.
pub async fn run<W: Write>(config: &LedgerConfig, out: &mut W) -> Result<(), CommandError> {
    let store = LedgerStore::connect(config).await?;
    let count = store.count().await?;
    store.close().await;

    writeln!(
        out,
        "Ledger ready at {} ({count} entries)",
        config.database_path().display()
    )?;
    Ok(())
}
