//! Ledger configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `GROCEREASY_DATABASE_PATH` - Path to the SQLite file (default: `Groceries.db`)

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable holding the database path.
pub const DATABASE_PATH_VAR: &str = "GROCEREASY_DATABASE_PATH";

/// Database file used when nothing is configured.
pub const DEFAULT_DATABASE_PATH: &str = "Groceries.db";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Ledger configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Location of the SQLite database file.
    pub database_path: PathBuf,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
        }
    }
}

impl LedgerConfig {
    /// Use an explicit database path.
    #[must_use]
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the database path is blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = match lookup(DATABASE_PATH_VAR) {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    DATABASE_PATH_VAR.to_string(),
                    "path cannot be empty".to_string(),
                ));
            }
            Some(value) => PathBuf::from(value),
            None => PathBuf::from(DEFAULT_DATABASE_PATH),
        };

        Ok(Self { database_path })
    }

    /// Replace the database path, e.g. from a command-line flag.
    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    /// Path to the database file.
    #[must_use]
    pub fn database_path(&self) -> &Path {
        &self.database_path
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_when_unset() {
        let config = LedgerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.database_path(), Path::new("Groceries.db"));
        assert_eq!(config, LedgerConfig::default());
    }

    #[test]
    fn test_path_from_variable() {
        let config = LedgerConfig::from_lookup(|key| {
            (key == DATABASE_PATH_VAR).then(|| "/var/lib/grocereasy/ledger.db".to_string())
        })
        .unwrap();
        assert_eq!(
            config.database_path(),
            Path::new("/var/lib/grocereasy/ledger.db")
        );
    }

    #[test]
    fn test_blank_path_rejected() {
        let result = LedgerConfig::from_lookup(|_| Some("   ".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(var, _)) if var == DATABASE_PATH_VAR));
    }

    #[test]
    fn test_with_database_path_overrides() {
        let config = LedgerConfig::default().with_database_path("other.db");
        assert_eq!(config.database_path(), Path::new("other.db"));
    }
}
