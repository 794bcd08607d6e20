//! Error types for the Catalog.

use bitebuzz_core::ValidationError;
use bitebuzz_store::StoreError;
use thiserror::Error;

/// Errors that can occur during Catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A submitted item had empty required fields. Nothing was stored.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Storage error, passed through untranslated.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl CatalogError {
    /// Whether this is a user input problem rather than a storage failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::Validation(_))
    }
}

/// Result type for Catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
