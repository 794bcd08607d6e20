//! Proptest strategies for catalog inputs.

use bitebuzz_core::{NewFoodItem, ValidationError};
use proptest::prelude::*;

/// Leading or trailing whitespace the store must strip.
fn padding() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

/// A required field: at least one visible character, maybe padded.
pub fn field() -> impl Strategy<Value = String> {
    (padding(), "[A-Za-z0-9@.][A-Za-z0-9@. ]{0,23}", padding())
        .prop_map(|(pre, body, post)| format!("{pre}{body}{post}"))
}

/// A string that is empty after trimming.
pub fn blank() -> impl Strategy<Value = String> {
    "[ \t\n]{0,6}"
}

/// A category name, possibly padded. Drawn from a small alphabet so that
/// collisions (and thus duplicate registrations) actually happen.
pub fn category_name() -> impl Strategy<Value = String> {
    (
        padding(),
        prop::sample::select(vec![
            "Snacks", "snacks", "Drinks", "Soups", "Street Food", "All", "Zebra Cakes",
        ]),
        padding(),
    )
        .prop_map(|(pre, name, post)| format!("{pre}{name}{post}"))
}

/// Parameters for one valid item submission.
#[derive(Debug, Clone)]
pub struct ItemParams {
    pub name: String,
    pub description: String,
    pub category: String,
    pub added_by: String,
}

impl ItemParams {
    pub fn to_new_item(&self) -> Result<NewFoodItem, ValidationError> {
        NewFoodItem::new(&self.name, &self.description, &self.category, &self.added_by)
    }
}

impl Arbitrary for ItemParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (field(), field(), category_name(), field())
            .prop_map(|(name, description, category, added_by)| ItemParams {
                name,
                description,
                category,
                added_by,
            })
            .boxed()
    }
}
