//! Logging initialization.
//!
//! Logs go to stderr so that listings on stdout stay machine-readable.

use std::sync::Once;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "bitebuzz=info,bitebuzz_store=info";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogProfile {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per event.
    Json,
}

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber. Later calls are ignored.
pub fn init(profile: LogProfile) {
    INIT_ONCE.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);

        let result = match profile {
            LogProfile::Human => builder.try_init(),
            LogProfile::Json => builder.json().try_init(),
        };
        if let Err(e) = result {
            eprintln!("logging already initialized: {}", e);
        }
    });
}
