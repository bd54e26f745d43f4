//! CLI command implementations.
//!
//! Each command opens the ledger from a [`LedgerConfig`], does its work, and
//! writes human-readable output to the given writer. Diagnostics go through
//! `tracing` (stderr), so stdout only carries command output.

pub mod add;
pub mod entries;
pub mod init;
pub mod products;

use grocereasy_core::EntryError;
use grocereasy_ledger::{ConfigError, LedgerError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The ledger rejected the operation.
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// The entry failed validation and was not stored.
    #[error("Invalid entry: {0}")]
    InvalidEntry(#[from] EntryError),

    /// Writing output failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// Serializing JSON output failed.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Heading printed above the distinct product list.
pub const PRODUCTS_HEADING: &str = "Previously bought (no duplicates):";

/// Write a heading followed by one indented name per line.
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn write_name_list<W: std::io::Write>(
    out: &mut W,
    heading: &str,
    names: &[String],
) -> std::io::Result<()> {
    writeln!(out, "{heading}")?;
    if names.is_empty() {
        writeln!(out, "  (none yet)")?;
    }
    for name in names {
        writeln!(out, "  {name}")?;
    }
    Ok(())
}
