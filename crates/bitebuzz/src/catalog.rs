//! The Catalog: the read and write surface of the food catalog.
//!
//! The Catalog owns the store and the query cache. Reads go through the
//! cache; every write goes through [`Catalog::write`], which invalidates the
//! cache after the store mutation succeeds.

use std::future::Future;
use std::sync::Arc;

use bitebuzz_core::{normalize, CategoryFilter, ItemId, NewFoodItem, SortOrder};
use bitebuzz_store::{CategoryInsert, Store, StoreError, StoreExt};

use crate::cache::{CacheStats, Listing, QueryCache, QueryKey};
use crate::config::CatalogConfig;
use crate::error::Result;

/// Raw input of the "add item" form, before trimming or validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub name: String,
    pub description: String,
    /// The category chosen from the existing list, if any.
    pub category: Option<String>,
    /// A new category typed by the user. Takes precedence when non-blank.
    pub new_category: String,
    pub added_by: String,
}

/// A successful form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: ItemId,
    pub item: NewFoodItem,
    /// Set when the form registered a new category on the way.
    pub category_insert: Option<CategoryInsert>,
}

impl Submission {
    /// The confirmation shown to the user.
    pub fn confirmation(&self) -> String {
        format!("'{}' added to {}.", self.item.name(), self.item.category())
    }
}

/// The main Catalog struct.
///
/// Provides a unified API for:
/// - Registering and listing categories
/// - Adding food items, directly or through the form flow
/// - Cached, filtered and sorted item listings
pub struct Catalog<S: Store> {
    /// The storage backend.
    store: Arc<S>,
    /// Memoized listings.
    cache: QueryCache,
    /// Configuration.
    config: CatalogConfig,
}

impl<S: Store> Catalog<S> {
    /// Create a catalog over `store` without touching storage.
    pub fn new(store: S, config: CatalogConfig) -> Self {
        Self {
            store: Arc::new(store),
            cache: QueryCache::new(),
            config,
        }
    }

    /// Create a catalog, make sure the schema exists and seed categories.
    pub async fn open(store: S, config: CatalogConfig) -> Result<Self> {
        let catalog = Self::new(store, config);
        catalog.store.initialize().await?;

        let seeds = catalog.config.seed_categories.clone();
        let created = catalog.write(catalog.store.seed_categories(&seeds)).await?;
        tracing::info!(created, configured = seeds.len(), "catalog opened");

        Ok(catalog)
    }

    /// Get the store reference, outside the write wrapper.
    ///
    /// Writes made through it are invisible to the query cache until the
    /// next [`Catalog::invalidate_cache`] or catalog write.
    pub fn store_unchecked(&self) -> &S {
        &self.store
    }

    /// Get the configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Run a store mutation, then invalidate the query cache.
    ///
    /// Every write path goes through here. A failed mutation leaves the
    /// cache as it was.
    async fn write<T, F>(&self, mutation: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, StoreError>>,
    {
        let out = mutation.await?;
        self.cache.invalidate_all()?;
        Ok(out)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Category Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a category. Blank names and duplicates are no-ops.
    pub async fn add_category(&self, name: &str) -> Result<CategoryInsert> {
        self.write(self.store.add_category(name)).await
    }

    /// Category names in ascending order, optionally led by `All`.
    pub async fn list_categories(&self, include_all: bool) -> Result<Vec<String>> {
        Ok(self.store.list_categories(include_all).await?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Item Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Store a validated item.
    pub async fn add_item(&self, item: &NewFoodItem) -> Result<ItemId> {
        self.write(self.store.insert_new_item(item)).await
    }

    /// Handle an "add item" form submission.
    ///
    /// A non-blank new category is registered first and replaces the chosen
    /// one. The four fields are then validated; on failure nothing further
    /// is stored and the error names every empty field.
    pub async fn submit_item(&self, form: &ItemForm) -> Result<Submission> {
        let mut category = form.category.clone().unwrap_or_default();
        let mut category_insert = None;

        if let Some(new_category) = normalize(&form.new_category) {
            category_insert = Some(self.add_category(new_category).await?);
            category = new_category.to_string();
        }

        let item = NewFoodItem::new(&form.name, &form.description, &category, &form.added_by)?;
        let id = self.add_item(&item).await?;

        Ok(Submission {
            id,
            item,
            category_insert,
        })
    }

    /// Items matching `filter` in `order`, served from the cache when
    /// possible.
    pub async fn items(&self, filter: CategoryFilter, order: SortOrder) -> Result<Listing> {
        let key = QueryKey::new(filter, order);
        Ok(self.cache.get(self.store.as_ref(), &key).await?)
    }

    /// Drop every cached listing.
    pub fn invalidate_cache(&self) -> Result<()> {
        Ok(self.cache.invalidate_all()?)
    }

    /// Query cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
