//! Store trait: the abstract interface for catalog persistence.
//!
//! This trait keeps the catalog storage-agnostic. Implementations
//! include SQLite (primary) and in-memory (for tests).

use async_trait::async_trait;
use bitebuzz_core::{CategoryFilter, FoodItem, ItemId, NewFoodItem, SortOrder, ALL_CATEGORIES};

use crate::error::Result;

/// Result of registering a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryInsert {
    /// A new category row was written.
    Inserted,
    /// A category with this name already exists (not an error).
    AlreadyExists,
    /// The name was blank after trimming; nothing was written.
    Empty,
}

impl CategoryInsert {
    /// Whether the call changed the stored category set.
    pub const fn is_inserted(self) -> bool {
        matches!(self, CategoryInsert::Inserted)
    }
}

/// The Store trait: async interface for catalog persistence.
///
/// The store is the sole reader and writer of the underlying storage.
/// It performs no error translation and no validation beyond trimming.
#[async_trait]
pub trait Store: Send + Sync {
    /// Ensure the `users`, `categories` and `food_items` tables exist.
    ///
    /// Idempotent. Implementations also run it when the store is opened.
    async fn initialize(&self) -> Result<()>;

    // ─────────────────────────────────────────────────────────────────────────
    // Category Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a category by name.
    ///
    /// The name is trimmed first. A blank name is a no-op; a duplicate is
    /// ignored and the existing row is kept unchanged.
    async fn add_category(&self, name: &str) -> Result<CategoryInsert>;

    /// List category names in ascending order.
    ///
    /// With `include_all`, the `All` sentinel is prepended.
    async fn list_categories(&self, include_all: bool) -> Result<Vec<String>>;

    // ─────────────────────────────────────────────────────────────────────────
    // Item Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Insert a food item with a store-assigned id and timestamp.
    ///
    /// All four fields are trimmed. No validation happens here; callers
    /// must ensure none is empty.
    async fn insert_item(
        &self,
        name: &str,
        description: &str,
        category: &str,
        added_by: &str,
    ) -> Result<ItemId>;

    /// Fetch all items matching `filter`, ordered by insert time.
    ///
    /// Ties on timestamp are broken by id in the same direction, so
    /// `Latest` is always the exact reverse of `Oldest`.
    async fn fetch_items(&self, filter: &CategoryFilter, order: SortOrder) -> Result<Vec<FoodItem>>;
}

/// Extension trait for common store patterns.
#[async_trait]
pub trait StoreExt: Store {
    /// Insert an item that already passed validation.
    async fn insert_new_item(&self, item: &NewFoodItem) -> Result<ItemId> {
        self.insert_item(item.name(), item.description(), item.category(), item.added_by())
            .await
    }

    /// Register each name in turn. Existing names are left untouched.
    ///
    /// Returns how many categories were newly created.
    async fn seed_categories(&self, names: &[String]) -> Result<usize> {
        let mut created = 0;
        for name in names {
            if self.add_category(name).await?.is_inserted() {
                created += 1;
            }
        }
        Ok(created)
    }
}

impl<S: Store + ?Sized> StoreExt for S {}

/// Prepend the `All` sentinel to an already sorted name list if requested.
pub(crate) fn with_sentinel(names: Vec<String>, include_all: bool) -> Vec<String> {
    if !include_all {
        return names;
    }
    let mut out = Vec::with_capacity(names.len() + 1);
    out.push(ALL_CATEGORIES.to_string());
    out.extend(names);
    out
}
