//! Subcommands, one per page of the catalog: listing, adding items and
//! managing categories.

pub mod add_item;
pub mod categories;
pub mod list;
