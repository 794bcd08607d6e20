//! Database schema for SQLite.
//!
//! There is no versioning: every table is created with `IF NOT EXISTS`, so
//! initialization can run on every open.

use rusqlite::Connection;

use crate::error::Result;

/// Current time in Unix milliseconds, evaluated by SQLite.
///
/// `julianday('now')` carries millisecond precision and is stable within
/// one statement.
pub const NOW_MILLIS_SQL: &str =
    "CAST(ROUND((julianday('now') - 2440587.5) * 86400000.0) AS INTEGER)";

/// Create the catalog tables if they are absent.
///
/// This function is idempotent - it can be called multiple times safely.
pub fn initialize(conn: &Connection) -> Result<()> {
    conn.execute_batch(&format!(
        r#"
        -- Declared for completeness; no catalog operation uses it.
        CREATE TABLE IF NOT EXISTS users (
            user_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            email TEXT UNIQUE
        );

        CREATE TABLE IF NOT EXISTS categories (
            category_id INTEGER PRIMARY KEY AUTOINCREMENT,
            category_name TEXT UNIQUE
        );

        -- category is a free-text label, deliberately not a foreign key.
        CREATE TABLE IF NOT EXISTS food_items (
            item_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT,
            category TEXT,
            added_by TEXT,
            timestamp INTEGER NOT NULL DEFAULT ({now})
        );

        CREATE INDEX IF NOT EXISTS idx_food_items_category ON food_items(category);
        "#,
        now = NOW_MILLIS_SQL,
    ))?;

    Ok(())
}
