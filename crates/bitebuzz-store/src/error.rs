//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during store operations.
///
/// Storage failures are surfaced as-is; the store never retries.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The blocking task running a query panicked or was cancelled.
    #[error("storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// A lock guarding shared state was poisoned by a panicking holder.
    #[error("lock poisoned: {0}")]
    Lock(String),

    /// Invalid data in storage.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
