//! Category commands
//!
//! Usage: bitebuzz add-category <NAME>
//!        bitebuzz categories

use std::io::Write;

use bitebuzz::store::Store;
use bitebuzz::{Catalog, CategoryInsert};
use clap::Args;

#[derive(Debug, Args)]
pub struct AddCategoryArgs {
    /// Category name (trimmed before storage)
    pub name: String,
}

/// Execute add-category command
pub async fn execute_add<S: Store>(
    args: AddCategoryArgs,
    catalog: &Catalog<S>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match catalog.add_category(&args.name).await? {
        CategoryInsert::Empty => writeln!(out, "Please type a category name.")?,
        CategoryInsert::Inserted | CategoryInsert::AlreadyExists => {
            writeln!(out, "Added category '{}'.", args.name.trim())?
        }
    }
    Ok(())
}

/// Execute categories command
pub async fn execute_list<S: Store>(catalog: &Catalog<S>, out: &mut dyn Write) -> anyhow::Result<()> {
    let names = catalog.list_categories(false).await?;
    if names.is_empty() {
        writeln!(out, "No categories yet. Add one with `bitebuzz add-category`.")?;
    } else {
        writeln!(out, "Current categories: {}", names.join(", "))?;
    }
    Ok(())
}
