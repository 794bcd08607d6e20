//! Add item command
//!
//! Usage: bitebuzz add-item --name <NAME> --description <TEXT>
//!        [--category <NAME>] [--new-category <NAME>] --added-by <WHO>

use std::io::Write;

use bitebuzz::store::Store;
use bitebuzz::{Catalog, CatalogError, ItemForm};
use clap::Args;

/// Shown when any required field is blank.
pub const MISSING_FIELDS: &str = "Please fill all required fields marked with *.";

#[derive(Debug, Args)]
pub struct AddItemArgs {
    /// Food name *
    #[arg(long, default_value = "")]
    pub name: String,

    /// Description *
    #[arg(long, default_value = "")]
    pub description: String,

    /// Existing category *
    #[arg(long)]
    pub category: Option<String>,

    /// ...or a new category, registered and used instead
    #[arg(long, default_value = "")]
    pub new_category: String,

    /// Added by (name or email) *
    #[arg(long, default_value = "")]
    pub added_by: String,
}

impl From<AddItemArgs> for ItemForm {
    fn from(args: AddItemArgs) -> Self {
        ItemForm {
            name: args.name,
            description: args.description,
            category: args.category,
            new_category: args.new_category,
            added_by: args.added_by,
        }
    }
}

/// Execute add-item command
pub async fn execute<S: Store>(
    args: AddItemArgs,
    catalog: &Catalog<S>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let form = ItemForm::from(args);
    match catalog.submit_item(&form).await {
        Ok(submission) => {
            writeln!(out, "✅ {}", submission.confirmation())?;
            Ok(())
        }
        Err(CatalogError::Validation(e)) => {
            anyhow::bail!("{} ({})", MISSING_FIELDS, e)
        }
        Err(e) => Err(e.into()),
    }
}
