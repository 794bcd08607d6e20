//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use bitebuzz::{Catalog, CatalogConfig, CategoryFilter, FoodItem, ItemId, NewFoodItem, SortOrder};
use bitebuzz_store::{MemoryStore, SqliteStore, Store};
use tempfile::TempDir;

/// The item used by the end-to-end scenario.
pub fn samosa() -> NewFoodItem {
    NewFoodItem::new("Samosa", "Fried pastry", "Snacks", "alice@example.com")
        .expect("fixture item is valid")
}

/// A test fixture holding a catalog opened with the default seeds.
pub struct TestFixture<S: Store> {
    pub catalog: Catalog<S>,
}

impl TestFixture<MemoryStore> {
    /// Seeded catalog over a [`MemoryStore`].
    pub async fn memory() -> Self {
        Self::open(MemoryStore::new()).await
    }
}

impl TestFixture<SqliteStore> {
    /// Seeded catalog over an in-memory SQLite database.
    pub async fn sqlite() -> Self {
        let store = SqliteStore::open_memory().expect("in-memory sqlite opens");
        Self::open(store).await
    }

    /// Seeded catalog over a SQLite file in a fresh temporary directory.
    ///
    /// The directory is deleted when the returned [`TempDir`] drops, so keep
    /// it alive for as long as the catalog is used.
    pub async fn sqlite_file() -> (Self, TempDir) {
        let dir = TempDir::new().expect("temp dir is created");
        let fixture = Self::reopen(&dir).await;
        (fixture, dir)
    }

    /// Open another catalog over the database file in `dir`.
    pub async fn reopen(dir: &TempDir) -> Self {
        let store = SqliteStore::open(dir.path().join("database.db")).expect("sqlite file opens");
        Self::open(store).await
    }
}

impl<S: Store> TestFixture<S> {
    /// Seeded catalog over any store.
    pub async fn open(store: S) -> Self {
        let catalog = Catalog::open(store, CatalogConfig::default())
            .await
            .expect("catalog opens");
        Self { catalog }
    }

    /// Add the scenario item and return its id.
    pub async fn add_samosa(&self) -> ItemId {
        self.catalog
            .add_item(&samosa())
            .await
            .expect("insert succeeds")
    }

    /// Add an item with fixed description and submitter.
    pub async fn add(&self, name: &str, category: &str) -> ItemId {
        let item = NewFoodItem::new(name, "fixture item", category, "fixture@example.com")
            .expect("fixture item is valid");
        self.catalog.add_item(&item).await.expect("insert succeeds")
    }

    /// Uncached listing straight from the store.
    pub async fn raw_items(&self, filter: &CategoryFilter, order: SortOrder) -> Vec<FoodItem> {
        self.catalog
            .store_unchecked()
            .fetch_items(filter, order)
            .await
            .expect("fetch succeeds")
    }
}
