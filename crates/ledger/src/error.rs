//! Error types for ledger operations.

use thiserror::Error;

/// Errors that can occur while talking to the ledger database.
///
/// Each variant carries the underlying error untouched; nothing is retried or
/// swallowed. Callers decide how to present failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The database file could not be opened or created, or the schema could
    /// not be set up.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[source] sqlx::Error),

    /// An insert failed. No partial row is left behind.
    #[error("storage write failed: {0}")]
    StorageWrite(#[source] sqlx::Error),

    /// A query failed.
    #[error("storage read failed: {0}")]
    StorageRead(#[source] sqlx::Error),

    /// A stored row does not hold valid entry data.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}
