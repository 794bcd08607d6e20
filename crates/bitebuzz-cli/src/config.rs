//! Front-end configuration.
//!
//! Loaded from an optional TOML file; command-line flags override it.
//!
//! ```toml
//! database = "bitebuzz.db"
//! log = "json"
//!
//! [catalog]
//! seed_categories = ["Snacks", "Drinks"]
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use bitebuzz::CatalogConfig;
use serde::{Deserialize, Serialize};

use crate::logging::LogProfile;

/// Database file used when nothing else is configured.
pub const DEFAULT_DATABASE: &str = "database.db";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite database file.
    pub database: PathBuf,
    /// Log output format.
    pub log: LogProfile,
    /// Catalog settings.
    pub catalog: CatalogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            log: LogProfile::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read `path` if given, else use defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Parse TOML text. Missing keys take their defaults.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
