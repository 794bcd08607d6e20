//! Item validation: the non-empty-after-trimming rule.

use crate::error::{Field, ValidationError};

/// Trim `value`, returning `None` if nothing is left.
pub fn normalize(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// A food item that passed validation.
///
/// Every field is trimmed and non-empty. The only way to build one is
/// [`NewFoodItem::new`], so holding a value is proof of validity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFoodItem {
    name: String,
    description: String,
    category: String,
    added_by: String,
}

impl NewFoodItem {
    /// Validate and trim the four required fields.
    ///
    /// Reports every empty field, not just the first.
    pub fn new(
        name: &str,
        description: &str,
        category: &str,
        added_by: &str,
    ) -> Result<Self, ValidationError> {
        let values = [name, description, category, added_by];
        let missing: Vec<Field> = Field::ALL
            .iter()
            .zip(values)
            .filter(|(_, value)| normalize(value).is_none())
            .map(|(field, _)| *field)
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        Ok(Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            category: category.trim().to_string(),
            added_by: added_by.trim().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn added_by(&self) -> &str {
        &self.added_by
    }
}
