//! # Bite Buzz Store
//!
//! Storage abstraction for the Bite Buzz catalog. Provides a trait-based
//! interface for category and food item persistence with SQLite and
//! in-memory implementations.
//!
//! ## Key Types
//!
//! - [`Store`] - The async trait for all storage operations
//! - [`SqliteStore`] - SQLite-based persistent storage
//! - [`MemoryStore`] - In-memory storage for tests
//! - [`CategoryInsert`] - Outcome of registering a category
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bitebuzz_core::{CategoryFilter, SortOrder};
//! use bitebuzz_store::{SqliteStore, Store};
//!
//! async fn example() {
//!     let store = SqliteStore::open("database.db").unwrap();
//!
//!     store.add_category("Snacks").await.unwrap();
//!     store
//!         .insert_item("Samosa", "Fried pastry", "Snacks", "alice@example.com")
//!         .await
//!         .unwrap();
//!
//!     let items = store
//!         .fetch_items(&CategoryFilter::All, SortOrder::Latest)
//!         .await
//!         .unwrap();
//!     assert_eq!(items.len(), 1);
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Idempotent categories**: Registering a name twice keeps the first row
//! - **Append-only items**: There is no update or delete
//! - **Loose coupling**: An item's category is a label, not a foreign key

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{CategoryInsert, Store, StoreExt};
