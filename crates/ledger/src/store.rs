//! The grocery ledger store.
//!
//! [`LedgerStore`] owns the connection pool for one SQLite file. It is cheap to
//! clone and safe to share across tasks and threads; every clone talks to the
//! same pool. The pool holds a single connection, so reads and writes are
//! serialized and each statement commits on its own before returning.

use std::path::Path;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use tracing::instrument;

use grocereasy_core::{
    EntryDate, EntryId, GroceryEntry, NewGroceryEntry, Price, ProductName, StoreName, Unit,
    UnitVolume,
};

use crate::config::LedgerConfig;
use crate::error::LedgerError;

/// Schema for the `groceries` table.
///
/// `unit_volume` is declared INTEGER and `date_entered` DATE; the date is
/// stored as `DD:MM:YYYY` text.
const CREATE_GROCERIES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS groceries (
        id INTEGER PRIMARY KEY,
        product_name TEXT,
        unit_volume INTEGER,
        unit TEXT,
        price REAL,
        store_name TEXT,
        date_entered DATE
    )
";

/// Row shape used when reading entries back.
///
/// `unit_volume` is selected as text so rows written by older, permissive
/// writers ("two") surface as corruption instead of a decode failure. Every
/// column is nullable in the schema, so each field is optional here and a
/// NULL is reported rather than decoded as an empty or zero value.
#[derive(Debug, sqlx::FromRow)]
struct GroceryRow {
    id: i64,
    product_name: Option<String>,
    unit_volume: Option<String>,
    unit: Option<String>,
    price: Option<f64>,
    store_name: Option<String>,
    date_entered: Option<String>,
}

fn corrupt(id: i64, err: impl std::fmt::Display) -> LedgerError {
    LedgerError::DataCorruption(format!("invalid entry in row {id}: {err}"))
}

fn required<T>(id: i64, field: &str, value: Option<T>) -> Result<T, LedgerError> {
    value.ok_or_else(|| corrupt(id, format!("{field} is NULL")))
}

impl GroceryRow {
    fn into_entry(self) -> Result<GroceryEntry, LedgerError> {
        let id = self.id;

        let product_name = required(id, "product_name", self.product_name)?;
        let unit_volume = required(id, "unit_volume", self.unit_volume)?;
        let unit = required(id, "unit", self.unit)?;
        let price = required(id, "price", self.price)?;
        let store_name = required(id, "store_name", self.store_name)?;
        let date_entered = required(id, "date_entered", self.date_entered)?;

        let entry = NewGroceryEntry {
            product_name: ProductName::parse(&product_name).map_err(|e| corrupt(id, e))?,
            unit_volume: UnitVolume::parse(&unit_volume).map_err(|e| corrupt(id, e))?,
            unit: Unit::parse(&unit).map_err(|e| corrupt(id, e))?,
            price: Price::new(price).map_err(|e| corrupt(id, e))?,
            store_name: StoreName::parse(&store_name).map_err(|e| corrupt(id, e))?,
            date_entered: EntryDate::parse(&date_entered).map_err(|e| corrupt(id, e))?,
        };

        Ok(GroceryEntry {
            id: EntryId::new(id),
            entry,
        })
    }
}

/// Append-only store of grocery purchases.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    pool: SqlitePool,
}

impl LedgerStore {
    /// Open (creating if missing) the database file at `path`.
    ///
    /// Does not create the schema; call [`Self::initialize`] next, or use
    /// [`Self::connect`] to do both.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::StorageUnavailable` if the file cannot be opened
    /// or created (missing directory, permission denied, disk full).
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let path = path.as_ref();

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            // Keep the ledger a single file: no -wal/-shm sidecars
            .journal_mode(SqliteJournalMode::Delete)
            .synchronous(SqliteSynchronous::Full)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await
            .map_err(LedgerError::StorageUnavailable)?;

        tracing::info!(path = %path.display(), "Ledger database opened");
        Ok(Self { pool })
    }

    /// Open the configured database and make sure the schema exists.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::StorageUnavailable` if the file cannot be opened
    /// or the table cannot be created.
    pub async fn connect(config: &LedgerConfig) -> Result<Self, LedgerError> {
        let store = Self::open(config.database_path()).await?;
        store.initialize().await?;
        Ok(store)
    }

    /// Create the `groceries` table if it does not exist.
    ///
    /// Safe to call on every start: an existing table and its rows are left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::StorageUnavailable` if the statement fails.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> Result<(), LedgerError> {
        sqlx::query(CREATE_GROCERIES_TABLE)
            .execute(&self.pool)
            .await
            .map_err(LedgerError::StorageUnavailable)?;

        tracing::info!("Ledger schema ready");
        Ok(())
    }

    /// Append one entry and return the ID assigned to it.
    ///
    /// The row is committed before this returns.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::StorageWrite` if the insert fails.
    #[instrument(skip(self, entry), fields(product = %entry.product_name))]
    pub async fn insert(&self, entry: &NewGroceryEntry) -> Result<EntryId, LedgerError> {
        let result = sqlx::query(
            r"
            INSERT INTO groceries (product_name, unit_volume, unit, price, store_name, date_entered)
            VALUES (?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(entry.product_name.as_str())
        .bind(i64::from(entry.unit_volume.get()))
        .bind(entry.unit.as_str())
        .bind(entry.price.amount())
        .bind(entry.store_name.as_str())
        .bind(entry.date_entered.to_string())
        .execute(&self.pool)
        .await
        .map_err(LedgerError::StorageWrite)?;

        let id = EntryId::new(result.last_insert_rowid());
        tracing::debug!(%id, "Grocery entry inserted");
        Ok(id)
    }

    /// Every distinct product name in the ledger.
    ///
    /// Order is whatever the engine produces and must not be relied on. An
    /// empty ledger yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::StorageRead` if the query fails.
    #[instrument(skip(self))]
    pub async fn distinct_product_names(&self) -> Result<Vec<String>, LedgerError> {
        let names = sqlx::query_scalar::<_, String>(
            r"
            SELECT DISTINCT product_name
            FROM groceries
            WHERE product_name IS NOT NULL
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(LedgerError::StorageRead)?;

        tracing::debug!(count = names.len(), "Fetched distinct product names");
        Ok(names)
    }

    /// All entries in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::StorageRead` if the query fails.
    /// Returns `LedgerError::DataCorruption` if a stored row is not a valid entry.
    #[instrument(skip(self))]
    pub async fn entries(&self) -> Result<Vec<GroceryEntry>, LedgerError> {
        let rows = sqlx::query_as::<_, GroceryRow>(
            r"
            SELECT id, product_name, CAST(unit_volume AS TEXT) AS unit_volume,
                   unit, price, store_name, date_entered
            FROM groceries
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(LedgerError::StorageRead)?;

        rows.into_iter().map(GroceryRow::into_entry).collect()
    }

    /// Number of stored entries.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::StorageRead` if the query fails.
    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<i64, LedgerError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM groceries")
            .fetch_one(&self.pool)
            .await
            .map_err(LedgerError::StorageRead)?;

        tracing::debug!(count, "Counted grocery entries");
        Ok(count)
    }

    /// The underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the pool, waiting for in-flight statements to finish.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use grocereasy_core::RawEntry;
    use tempfile::TempDir;

    use super::*;

    fn raw(product: &str, volume: &str) -> RawEntry {
        RawEntry {
            product_name: product.to_owned(),
            unit_volume: volume.to_owned(),
            unit: "kg".to_owned(),
            price: 1.99,
            store_name: "auchan".to_owned(),
            date_entered: Some("01:01:2024".to_owned()),
        }
    }

    async fn fresh_store() -> (TempDir, LedgerStore) {
        let dir = tempfile::tempdir().unwrap();
        let config = LedgerConfig::new(dir.path().join("ledger.db"));
        let store = LedgerStore::connect(&config).await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_open_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.db");
        assert!(!path.exists());

        LedgerStore::open(&path).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_open_missing_directory_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("ledger.db");

        let result = LedgerStore::open(&path).await;
        assert!(matches!(result, Err(LedgerError::StorageUnavailable(_))));
    }

    #[tokio::test]
    async fn test_insert_returns_increasing_ids() {
        let (_dir, store) = fresh_store().await;

        let first = store.insert(&raw("apples", "2").validate().unwrap()).await.unwrap();
        let second = store.insert(&raw("pears", "1").validate().unwrap()).await.unwrap();

        assert!(first < second);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_entries_round_trip_fields() {
        let (_dir, store) = fresh_store().await;
        let new_entry = raw("apples", "2").validate().unwrap();
        let id = store.insert(&new_entry).await.unwrap();

        let entries = store.entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, id);
        assert_eq!(entries[0].entry, new_entry);
    }

    #[tokio::test]
    async fn test_distinct_names_empty_store() {
        let (_dir, store) = fresh_store().await;
        assert!(store.distinct_product_names().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_distinct_names_keeps_case_variants() {
        let (_dir, store) = fresh_store().await;
        for product in ["apples", "Apples", "apples"] {
            store.insert(&raw(product, "1").validate().unwrap()).await.unwrap();
        }

        let mut names = store.distinct_product_names().await.unwrap();
        names.sort();
        assert_eq!(names, vec!["Apples".to_owned(), "apples".to_owned()]);
    }

    #[tokio::test]
    async fn test_legacy_text_volume_is_corruption() {
        let (_dir, store) = fresh_store().await;
        sqlx::query(
            "INSERT INTO groceries (product_name, unit_volume, unit, price, store_name, date_entered)
             VALUES ('milk', 'two', 'l', 0.89, 'pingodoce', '02:01:2024')",
        )
        .execute(store.pool())
        .await
        .unwrap();

        // Names still read fine; only full entries need valid fields
        assert_eq!(store.distinct_product_names().await.unwrap(), vec!["milk"]);
        assert!(matches!(
            store.entries().await,
            Err(LedgerError::DataCorruption(msg)) if msg.contains("row 1")
        ));
    }

    #[tokio::test]
    async fn test_null_price_is_corruption() {
        let (_dir, store) = fresh_store().await;
        sqlx::query(
            "INSERT INTO groceries (product_name, unit_volume, unit, price, store_name, date_entered)
             VALUES ('milk', 2, 'kg', NULL, 'auchan', '01:01:2024')",
        )
        .execute(store.pool())
        .await
        .unwrap();

        assert!(matches!(
            store.entries().await,
            Err(LedgerError::DataCorruption(msg)) if msg.contains("row 1") && msg.contains("price is NULL")
        ));
    }

    #[tokio::test]
    async fn test_null_product_name_skipped_by_names_and_rejected_by_entries() {
        let (_dir, store) = fresh_store().await;
        store.insert(&raw("apples", "2").validate().unwrap()).await.unwrap();
        sqlx::query(
            "INSERT INTO groceries (product_name, unit_volume, unit, price, store_name, date_entered)
             VALUES (NULL, 1, 'kg', 0.5, 'auchan', '01:01:2024')",
        )
        .execute(store.pool())
        .await
        .unwrap();

        assert_eq!(store.distinct_product_names().await.unwrap(), vec!["apples"]);
        assert!(matches!(
            store.entries().await,
            Err(LedgerError::DataCorruption(msg)) if msg.contains("row 2") && msg.contains("product_name is NULL")
        ));
    }

    #[tokio::test]
    async fn test_closed_store_fails_reads_and_writes() {
        let (_dir, store) = fresh_store().await;
        store.close().await;

        assert!(matches!(
            store.distinct_product_names().await,
            Err(LedgerError::StorageRead(_))
        ));
        assert!(matches!(
            store.insert(&raw("apples", "2").validate().unwrap()).await,
            Err(LedgerError::StorageWrite(_))
        ));
    }
}
