//! List command
//!
//! Usage: bitebuzz list [--category <NAME|All>] [--sort latest|oldest] [--json]

use std::io::Write;

use bitebuzz::store::Store;
use bitebuzz::{Catalog, CategoryFilter, SortOrder, ALL_CATEGORIES};
use clap::Args;

use crate::render;

/// Shown instead of an empty table.
pub const EMPTY_HINT: &str = "No items yet. Use `bitebuzz add-item` to create the first one!";

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Category to show, or "All"
    #[arg(short, long, default_value = ALL_CATEGORIES)]
    pub category: String,

    /// Sort by insert time: latest or oldest
    #[arg(short, long, default_value = "latest")]
    pub sort: SortOrder,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Execute list command
pub async fn execute<S: Store>(
    args: ListArgs,
    catalog: &Catalog<S>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let filter = CategoryFilter::from_selection(Some(&args.category));
    let items = catalog.items(filter, args.sort).await?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, items.as_slice())?;
        writeln!(out)?;
    } else if items.is_empty() {
        writeln!(out, "{}", EMPTY_HINT)?;
    } else {
        write!(out, "{}", render::table(&items))?;
    }

    Ok(())
}
