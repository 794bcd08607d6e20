//! Query cache: memoized item listings.
//!
//! Entries are keyed by the exact `(filter, order)` pair and live until
//! [`QueryCache::invalidate_all`]. There is no per-key invalidation, no TTL
//! and no size bound. Staleness is prevented only by invalidating after
//! every write, which [`crate::Catalog`] does in one place.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use bitebuzz_core::{CategoryFilter, FoodItem, SortOrder};
use bitebuzz_store::{Store, StoreError};

/// Cache key: the arguments of one listing query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub filter: CategoryFilter,
    pub order: SortOrder,
}

impl QueryKey {
    pub fn new(filter: CategoryFilter, order: SortOrder) -> Self {
        Self { filter, order }
    }
}

/// A cached listing. Shared so repeated hits do not copy rows.
pub type Listing = Arc<Vec<FoodItem>>;

/// Counters describing cache behaviour since creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

#[derive(Default)]
struct Entries {
    listings: HashMap<QueryKey, Listing>,
    /// Bumped by every invalidation.
    generation: u64,
}

/// Memoization layer over [`Store::fetch_items`].
#[derive(Default)]
pub struct QueryCache {
    entries: Mutex<Entries>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl QueryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, Entries>, StoreError> {
        self.entries
            .lock()
            .map_err(|e| StoreError::Lock(format!("query cache: {}", e)))
    }

    /// Return the cached listing for `key`, querying `store` on a miss.
    ///
    /// The lock is not held while the store runs. If the cache is
    /// invalidated meanwhile, the result is returned but not kept, since it
    /// may predate the write that caused the invalidation. A store error
    /// leaves the cache untouched.
    pub async fn get<S: Store + ?Sized>(
        &self,
        store: &S,
        key: &QueryKey,
    ) -> Result<Listing, StoreError> {
        let (cached, generation) = {
            let entries = self.entries()?;
            (entries.listings.get(key).cloned(), entries.generation)
        };
        if let Some(listing) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(filter = %key.filter, order = %key.order, "query cache hit");
            return Ok(listing);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(filter = %key.filter, order = %key.order, "query cache miss");

        let listing: Listing = Arc::new(store.fetch_items(&key.filter, key.order).await?);
        let mut entries = self.entries()?;
        if entries.generation == generation {
            entries.listings.insert(key.clone(), Arc::clone(&listing));
        } else {
            tracing::debug!(
                filter = %key.filter,
                order = %key.order,
                "query cache invalidated during fetch, result not kept"
            );
        }
        Ok(listing)
    }

    /// Discard every cached listing.
    pub fn invalidate_all(&self) -> Result<(), StoreError> {
        let mut entries = self.entries()?;
        let dropped = entries.listings.len();
        entries.listings.clear();
        entries.generation += 1;
        tracing::debug!(dropped, "query cache invalidated");
        Ok(())
    }

    /// Current counters and entry count.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries().map(|e| e.listings.len()).unwrap_or_default(),
        }
    }
}
