//! # Bite Buzz
//!
//! The unified API for the Bite Buzz food catalog: browse, filter and sort
//! food items, and add new items and categories.
//!
//! ## Overview
//!
//! - **Store**: persists categories and food items (see [`store`])
//! - **Query Cache**: memoizes listings per `(category filter, sort order)`
//! - **Catalog**: owns both and routes every write through a single wrapper
//!   that invalidates the cache
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bitebuzz::{Catalog, CatalogConfig, CategoryFilter, NewFoodItem, SortOrder};
//! use bitebuzz::store::SqliteStore;
//!
//! async fn example() {
//!     let store = SqliteStore::open("database.db").unwrap();
//!     let catalog = Catalog::open(store, CatalogConfig::default()).await.unwrap();
//!
//!     let item = NewFoodItem::new("Samosa", "Fried pastry", "Snacks", "alice@example.com")
//!         .unwrap();
//!     catalog.add_item(&item).await.unwrap();
//!
//!     let snacks = catalog
//!         .items(CategoryFilter::Only("Snacks".into()), SortOrder::Latest)
//!         .await
//!         .unwrap();
//!     assert_eq!(snacks.len(), 1);
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `bitebuzz::core` - Core types (FoodItem, CategoryFilter, etc.)
//! - `bitebuzz::store` - Storage abstraction and SQLite

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;

// Re-export component crates
pub use bitebuzz_core as core;
pub use bitebuzz_store as store;

// Re-export main types for convenience
pub use cache::{CacheStats, Listing, QueryCache, QueryKey};
pub use catalog::{Catalog, ItemForm, Submission};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};

// Re-export commonly used core types
pub use bitebuzz_core::{
    CategoryFilter, Field, FoodItem, ItemId, NewFoodItem, SortOrder, ValidationError,
    ALL_CATEGORIES, SEED_CATEGORIES,
};
pub use bitebuzz_store::CategoryInsert;
