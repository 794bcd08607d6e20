//! Catalog configuration.

use bitebuzz_core::SEED_CATEGORIES;
use serde::{Deserialize, Serialize};

/// Configuration for the Catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Categories registered when the catalog is opened. Existing names are
    /// left alone.
    pub seed_categories: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_categories: SEED_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CatalogConfig {
    /// A configuration that seeds nothing.
    pub fn unseeded() -> Self {
        Self {
            seed_categories: Vec::new(),
        }
    }
}
