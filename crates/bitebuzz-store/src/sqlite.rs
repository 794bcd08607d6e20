//! SQLite implementation of the Store trait.
//!
//! This is the primary storage backend for the catalog. It uses rusqlite
//! with bundled SQLite, wrapped in async via tokio::spawn_blocking.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, Connection};

use bitebuzz_core::{CategoryFilter, FoodItem, ItemId, SortOrder};

use crate::error::{Result, StoreError};
use crate::schema;
use crate::traits::{with_sentinel, CategoryInsert, Store};

/// Item columns, with `timestamp` read as Unix milliseconds.
///
/// Tables created by older releases declare `timestamp TEXT DEFAULT
/// (DATETIME('now'))` and keep doing so, since initialization never alters an
/// existing table. Their values are `YYYY-MM-DD HH:MM:SS` text in UTC, both
/// for old rows and for rows inserted now, so text values are converted
/// through `julianday` and integer values are taken as they are.
const SELECT_ITEMS: &str = "SELECT item_id, name, description, category, added_by, \
     CASE WHEN typeof(timestamp) IN ('integer', 'real') THEN CAST(timestamp AS INTEGER) \
     ELSE CAST(ROUND((julianday(timestamp) - 2440587.5) * 86400000.0) AS INTEGER) END \
     AS timestamp_ms \
     FROM food_items";

/// Where connections come from.
#[derive(Clone)]
enum Backing {
    /// A database file. Each operation opens its own connection and drops
    /// it when the operation ends, success or failure.
    File(PathBuf),
    /// A private in-memory database. It only lives as long as its single
    /// connection, so that connection is shared behind a mutex.
    Memory(Arc<Mutex<Connection>>),
}

impl Backing {
    /// Run `f` against a connection scoped to this call.
    fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        match self {
            Backing::File(path) => {
                let conn = Connection::open(path)?;
                f(&conn)
            }
            Backing::Memory(conn) => {
                let conn = conn
                    .lock()
                    .map_err(|e| StoreError::Lock(format!("sqlite connection: {}", e)))?;
                f(&conn)
            }
        }
    }
}

/// SQLite-based store implementation.
///
/// Thread-safe: file-backed stores share nothing between operations, and
/// the in-memory variant serializes access through a mutex. All operations
/// use spawn_blocking to avoid blocking the async runtime.
#[derive(Clone)]
pub struct SqliteStore {
    backing: Backing,
}

impl SqliteStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and the catalog tables if they don't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let store = Self {
            backing: Backing::File(path),
        };
        store.backing.with_conn(schema::initialize)?;
        tracing::debug!(path = %store.describe(), "opened sqlite store");
        Ok(store)
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;
        Ok(Self {
            backing: Backing::Memory(Arc::new(Mutex::new(conn))),
        })
    }

    /// The database path, or `:memory:`.
    pub fn describe(&self) -> String {
        match &self.backing {
            Backing::File(path) => path.display().to_string(),
            Backing::Memory(_) => ":memory:".to_string(),
        }
    }

    /// Execute a blocking operation on a scoped connection.
    async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let backing = self.backing.clone();
        tokio::task::spawn_blocking(move || backing.with_conn(f)).await?
    }
}

// Helper to convert a row to FoodItem
fn row_to_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<FoodItem> {
    // Only `name` is NOT NULL in the schema; rows written by other tools
    // may leave the rest empty.
    let text = |column: &str| -> rusqlite::Result<String> {
        Ok(row.get::<_, Option<String>>(column)?.unwrap_or_default())
    };

    Ok(FoodItem {
        id: ItemId(row.get("item_id")?),
        name: row.get("name")?,
        description: text("description")?,
        category: text("category")?,
        added_by: text("added_by")?,
        timestamp: row
            .get::<_, Option<i64>>("timestamp_ms")?
            .ok_or_else(|| unreadable_timestamp(row))?,
    })
}

// NULL after conversion: a missing value or text `julianday` cannot parse.
fn unreadable_timestamp(row: &rusqlite::Row<'_>) -> rusqlite::Error {
    let id = row.get::<_, i64>("item_id").unwrap_or_default();
    rusqlite::Error::FromSqlConversionFailure(
        5,
        rusqlite::types::Type::Null,
        format!("food item {} has an unreadable timestamp", id).into(),
    )
}

fn order_clause(order: SortOrder) -> &'static str {
    if order.is_descending() {
        " ORDER BY timestamp_ms DESC, item_id DESC"
    } else {
        " ORDER BY timestamp_ms ASC, item_id ASC"
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn initialize(&self) -> Result<()> {
        self.run(schema::initialize).await
    }

    async fn add_category(&self, name: &str) -> Result<CategoryInsert> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Ok(CategoryInsert::Empty);
        }

        self.run(move |conn| {
            let changed = conn.execute(
                "INSERT OR IGNORE INTO categories (category_name) VALUES (?1)",
                params![name],
            )?;

            if changed == 0 {
                Ok(CategoryInsert::AlreadyExists)
            } else {
                tracing::debug!(category = %name, "category inserted");
                Ok(CategoryInsert::Inserted)
            }
        })
        .await
    }

    async fn list_categories(&self, include_all: bool) -> Result<Vec<String>> {
        let names = self
            .run(|conn| {
                let mut stmt =
                    conn.prepare("SELECT category_name FROM categories ORDER BY category_name")?;
                let names = stmt
                    .query_map([], |row| row.get::<_, Option<String>>(0))?
                    .filter_map(|r| r.transpose())
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(names)
            })
            .await?;

        Ok(with_sentinel(names, include_all))
    }

    async fn insert_item(
        &self,
        name: &str,
        description: &str,
        category: &str,
        added_by: &str,
    ) -> Result<ItemId> {
        let fields = [
            name.trim().to_string(),
            description.trim().to_string(),
            category.trim().to_string(),
            added_by.trim().to_string(),
        ];

        self.run(move |conn| {
            conn.execute(
                "INSERT INTO food_items (name, description, category, added_by)
                 VALUES (?1, ?2, ?3, ?4)",
                params![fields[0], fields[1], fields[2], fields[3]],
            )?;
            let id = ItemId(conn.last_insert_rowid());
            tracing::debug!(item_id = %id, category = %fields[2], "food item inserted");
            Ok(id)
        })
        .await
    }

    async fn fetch_items(&self, filter: &CategoryFilter, order: SortOrder) -> Result<Vec<FoodItem>> {
        let category = filter.category().map(str::to_string);

        self.run(move |conn| {
            let items = match category {
                Some(category) => {
                    let sql = format!("{} WHERE category = ?1{}", SELECT_ITEMS, order_clause(order));
                    let mut stmt = conn.prepare(&sql)?;
                    let rows = stmt.query_map(params![category], row_to_item)?;
                    rows.collect::<rusqlite::Result<Vec<_>>>()?
                }
                None => {
                    let sql = format!("{}{}", SELECT_ITEMS, order_clause(order));
                    let mut stmt = conn.prepare(&sql)?;
                    let rows = stmt.query_map([], row_to_item)?;
                    rows.collect::<rusqlite::Result<Vec<_>>>()?
                }
            };
            Ok(items)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::StoreExt;
    use bitebuzz_core::NewFoodItem;

    async fn insert(store: &SqliteStore, name: &str, category: &str) -> ItemId {
        store
            .insert_item(name, "tasty", category, "tester")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_category_idempotent() {
        let store = SqliteStore::open_memory().unwrap();

        let r1 = store.add_category("Snacks").await.unwrap();
        assert_eq!(r1, CategoryInsert::Inserted);

        // Second insert - should be ignored, trimmed name collides
        let r2 = store.add_category("  Snacks ").await.unwrap();
        assert_eq!(r2, CategoryInsert::AlreadyExists);

        let names = store.list_categories(false).await.unwrap();
        assert_eq!(names, vec!["Snacks".to_string()]);
    }

    #[tokio::test]
    async fn test_add_blank_category_is_noop() {
        let store = SqliteStore::open_memory().unwrap();

        assert_eq!(store.add_category("").await.unwrap(), CategoryInsert::Empty);
        assert_eq!(store.add_category("   ").await.unwrap(), CategoryInsert::Empty);
        assert!(store.list_categories(false).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_categories_are_case_sensitive() {
        let store = SqliteStore::open_memory().unwrap();
        store.add_category("snacks").await.unwrap();
        store.add_category("Snacks").await.unwrap();

        let names = store.list_categories(false).await.unwrap();
        // Binary collation: uppercase sorts first
        assert_eq!(names, vec!["Snacks".to_string(), "snacks".to_string()]);
    }

    #[tokio::test]
    async fn test_list_categories_sentinel_first() {
        let store = SqliteStore::open_memory().unwrap();
        for name in ["Lunch", "Breakfast", "Dinner"] {
            store.add_category(name).await.unwrap();
        }

        let names = store.list_categories(true).await.unwrap();
        assert_eq!(names, vec!["All", "Breakfast", "Dinner", "Lunch"]);
    }

    #[tokio::test]
    async fn test_insert_item_trims_fields() {
        let store = SqliteStore::open_memory().unwrap();
        let id = store
            .insert_item(" Samosa ", " Fried pastry ", " Snacks ", " alice@example.com ")
            .await
            .unwrap();

        let items = store
            .fetch_items(&CategoryFilter::All, SortOrder::Latest)
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id);
        assert_eq!(items[0].name, "Samosa");
        assert_eq!(items[0].description, "Fried pastry");
        assert_eq!(items[0].category, "Snacks");
        assert_eq!(items[0].added_by, "alice@example.com");
    }

    #[tokio::test]
    async fn test_fetch_filters_by_exact_category() {
        let store = SqliteStore::open_memory().unwrap();
        insert(&store, "Samosa", "Snacks").await;
        insert(&store, "Lassi", "Drinks").await;
        insert(&store, "Chips", "snacks").await;

        let snacks = store
            .fetch_items(&CategoryFilter::Only("Snacks".into()), SortOrder::Latest)
            .await
            .unwrap();
        assert_eq!(snacks.len(), 1);
        assert_eq!(snacks[0].name, "Samosa");

        // Unregistered categories are not an error
        let none = store
            .fetch_items(&CategoryFilter::Only("Soup".into()), SortOrder::Latest)
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_latest_is_reverse_of_oldest() {
        let store = SqliteStore::open_memory().unwrap();
        for name in ["a", "b", "c", "d"] {
            insert(&store, name, "Snacks").await;
        }

        let latest = store
            .fetch_items(&CategoryFilter::All, SortOrder::Latest)
            .await
            .unwrap();
        let mut oldest = store
            .fetch_items(&CategoryFilter::All, SortOrder::Oldest)
            .await
            .unwrap();
        oldest.reverse();

        assert_eq!(latest, oldest);
        assert_eq!(latest.first().unwrap().name, "d");
        assert!(latest.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[tokio::test]
    async fn test_item_category_need_not_be_registered() {
        let store = SqliteStore::open_memory().unwrap();
        let item = NewFoodItem::new("Pho", "Noodle soup", "Soups", "bob").unwrap();
        store.insert_new_item(&item).await.unwrap();

        assert!(store.list_categories(false).await.unwrap().is_empty());
        let soups = store
            .fetch_items(&CategoryFilter::Only("Soups".into()), SortOrder::Oldest)
            .await
            .unwrap();
        assert_eq!(soups.len(), 1);
    }

    #[tokio::test]
    async fn test_file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.add_category("Desserts").await.unwrap();
            insert(&store, "Kheer", "Desserts").await;
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.list_categories(false).await.unwrap(), vec!["Desserts"]);
        let items = store
            .fetch_items(&CategoryFilter::All, SortOrder::Latest)
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Kheer");
    }

    #[tokio::test]
    async fn test_reads_text_timestamps_from_older_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.db");

        // Layout written by earlier releases: text timestamps, seconds only.
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE food_items (
                    item_id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL,
                    description TEXT,
                    category TEXT,
                    added_by TEXT,
                    timestamp TEXT DEFAULT (DATETIME('now'))
                );
                INSERT INTO food_items (name, description, category, added_by, timestamp)
                VALUES ('Samosa', 'Fried pastry', 'Snacks', 'alice', '2023-01-01 08:00:00');",
            )
            .unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        let items = store
            .fetch_items(&CategoryFilter::All, SortOrder::Latest)
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].timestamp, 1_672_560_000_000);

        // New rows pick up the old text default and still list
        let lassi = insert(&store, "Lassi", "Drinks").await;
        let drinks = store
            .fetch_items(&CategoryFilter::Only("Drinks".into()), SortOrder::Latest)
            .await
            .unwrap();
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].id, lassi);
        assert!(drinks[0].timestamp > items[0].timestamp);

        let latest = store
            .fetch_items(&CategoryFilter::All, SortOrder::Latest)
            .await
            .unwrap();
        let mut oldest = store
            .fetch_items(&CategoryFilter::All, SortOrder::Oldest)
            .await
            .unwrap();
        assert_eq!(latest[0].name, "Lassi");
        oldest.reverse();
        assert_eq!(latest, oldest);
    }

    #[tokio::test]
    async fn test_unparseable_timestamp_is_an_error() {
        let store = SqliteStore::open_memory().unwrap();
        store
            .backing
            .with_conn(|conn| {
                conn.execute(
                    "INSERT INTO food_items (name, timestamp) VALUES ('Tea', 'yesterday')",
                    [],
                )?;
                Ok(())
            })
            .unwrap();

        let result = store
            .fetch_items(&CategoryFilter::All, SortOrder::Latest)
            .await;
        assert!(matches!(result, Err(StoreError::Database(_))));
    }

    #[tokio::test]
    async fn test_open_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("catalog.db");

        let result = SqliteStore::open(&path);
        assert!(matches!(result, Err(StoreError::Database(_))));
    }

    #[tokio::test]
    async fn test_seed_categories_counts_new_rows() {
        let store = SqliteStore::open_memory().unwrap();
        store.add_category("Snacks").await.unwrap();

        let names: Vec<String> = ["Snacks", "Drinks", " ", "Lunch"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let created = store.seed_categories(&names).await.unwrap();
        assert_eq!(created, 2);
    }
}
