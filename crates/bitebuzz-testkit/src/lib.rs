//! # Bite Buzz Testkit
//!
//! Testing utilities for the Bite Buzz catalog.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Seeded catalogs over in-memory backends or a temporary
//!   SQLite file
//! - **Generators**: Proptest strategies for item fields and categories
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use bitebuzz_testkit::generators::ItemParams;
//!
//! proptest! {
//!     #[test]
//!     fn valid_params_validate(params: ItemParams) {
//!         prop_assert!(params.to_new_item().is_ok());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust,no_run
//! use bitebuzz_testkit::fixtures::TestFixture;
//!
//! async fn example() {
//!     let fixture = TestFixture::memory().await;
//!     fixture.add_samosa().await;
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{samosa, TestFixture};
pub use generators::{blank, category_name, field, ItemParams};
