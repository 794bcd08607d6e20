//! # Bite Buzz Core
//!
//! Pure types for the Bite Buzz food catalog: items, categories, listing
//! filters and the validation rules for user-submitted items.
//!
//! This crate contains no I/O and no storage. Persistence lives in
//! `bitebuzz-store`; caching and the write discipline live in `bitebuzz`.
//!
//! ## Key Types
//!
//! - [`FoodItem`] - A stored food item as returned by listings
//! - [`NewFoodItem`] - A validated, trimmed item ready for insertion
//! - [`CategoryFilter`] - Either the `All` sentinel or one category label
//! - [`SortOrder`] - `Latest` (newest first) or `Oldest`

pub mod error;
pub mod types;
pub mod validation;

pub use error::{Field, ValidationError};
pub use types::{
    Category, CategoryFilter, CategoryId, FoodItem, ItemId, SortOrder, User, UserId,
    ALL_CATEGORIES, SEED_CATEGORIES,
};
pub use validation::{normalize, NewFoodItem};
