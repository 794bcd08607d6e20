//! In-memory implementation of the Store trait.
//!
//! This is primarily for testing. It has the same semantics as SQLite
//! but keeps everything in memory with no persistence.

use std::collections::BTreeSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use bitebuzz_core::{CategoryFilter, FoodItem, ItemId, SortOrder};

use crate::error::{Result, StoreError};
use crate::traits::{with_sentinel, CategoryInsert, Store};

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryStore {
    inner: RwLock<MemoryStoreInner>,
}

#[derive(Default)]
struct MemoryStoreInner {
    /// Category names. `BTreeSet` orders them like SQLite's binary collation.
    categories: BTreeSet<String>,

    /// Items in insertion order.
    items: Vec<FoodItem>,

    /// Last assigned item id.
    last_id: i64,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryStoreInner::default()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryStoreInner>> {
        self.inner
            .read()
            .map_err(|e| StoreError::Lock(format!("memory store: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryStoreInner>> {
        self.inner
            .write()
            .map_err(|e| StoreError::Lock(format!("memory store: {}", e)))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    async fn add_category(&self, name: &str) -> Result<CategoryInsert> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(CategoryInsert::Empty);
        }

        let mut inner = self.write()?;
        if inner.categories.insert(name.to_string()) {
            Ok(CategoryInsert::Inserted)
        } else {
            Ok(CategoryInsert::AlreadyExists)
        }
    }

    async fn list_categories(&self, include_all: bool) -> Result<Vec<String>> {
        let inner = self.read()?;
        let names = inner.categories.iter().cloned().collect();
        Ok(with_sentinel(names, include_all))
    }

    async fn insert_item(
        &self,
        name: &str,
        description: &str,
        category: &str,
        added_by: &str,
    ) -> Result<ItemId> {
        let mut inner = self.write()?;

        // Never let the clock run backwards relative to stored rows.
        let floor = inner.items.last().map_or(i64::MIN, |item| item.timestamp);
        let timestamp = now_millis().max(floor);

        inner.last_id += 1;
        let id = ItemId(inner.last_id);
        inner.items.push(FoodItem {
            id,
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            category: category.trim().to_string(),
            added_by: added_by.trim().to_string(),
            timestamp,
        });

        Ok(id)
    }

    async fn fetch_items(&self, filter: &CategoryFilter, order: SortOrder) -> Result<Vec<FoodItem>> {
        let inner = self.read()?;

        let mut items: Vec<FoodItem> = inner
            .items
            .iter()
            .filter(|item| filter.category().map_or(true, |c| item.category == c))
            .cloned()
            .collect();

        items.sort_by_key(|item| (item.timestamp, item.id));
        if order.is_descending() {
            items.reverse();
        }

        Ok(items)
    }
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}
