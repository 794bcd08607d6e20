//! Strong type definitions for the food catalog.
//!
//! Identifiers are newtypes over the SQLite rowid so an item id can never be
//! passed where a category id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Filter value meaning "no category restriction". Never persisted.
pub const ALL_CATEGORIES: &str = "All";

/// Categories registered at startup if not already present.
pub const SEED_CATEGORIES: [&str; 6] = [
    "Snacks",
    "Desserts",
    "Drinks",
    "Breakfast",
    "Lunch",
    "Dinner",
];

/// Identifier of a stored food item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a registered category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

/// Identifier of a user row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

/// A registered category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A user row. The schema declares it; no catalog operation reads or writes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// A stored food item, as returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Free-text label. Need not name a registered category.
    pub category: String,
    pub added_by: String,
    /// Insert time, Unix milliseconds.
    pub timestamp: i64,
}

/// Ordering of a listing by insert time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Newest first.
    #[default]
    Latest,
    /// Oldest first.
    Oldest,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortOrder::Latest => "Latest",
            SortOrder::Oldest => "Oldest",
        }
    }

    pub const fn is_descending(self) -> bool {
        matches!(self, SortOrder::Latest)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latest" => Ok(SortOrder::Latest),
            "oldest" => Ok(SortOrder::Oldest),
            other => Err(format!("unknown sort order '{}', expected Latest or Oldest", other)),
        }
    }
}

/// Category restriction of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// No restriction.
    #[default]
    All,
    /// Exact, case-sensitive match on the item's category label.
    Only(String),
}

impl CategoryFilter {
    /// Interpret a selection from a filter control.
    ///
    /// `None`, the empty string and the `All` sentinel all mean no filter.
    /// Any other value is matched exactly, without trimming.
    pub fn from_selection(selection: Option<&str>) -> Self {
        match selection {
            None | Some("") | Some(ALL_CATEGORIES) => CategoryFilter::All,
            Some(category) => CategoryFilter::Only(category.to_string()),
        }
    }

    /// The category to match, or `None` for [`CategoryFilter::All`].
    pub fn category(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(category),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category().unwrap_or(ALL_CATEGORIES))
    }
}
