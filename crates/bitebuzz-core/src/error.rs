//! Error types for the Bite Buzz core.

use std::fmt;

use thiserror::Error;

/// A required field of a food item submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Category,
    AddedBy,
}

impl Field {
    /// All required fields, in form order.
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Description,
        Field::Category,
        Field::AddedBy,
    ];

    /// Human-readable label, as shown next to the form input.
    pub const fn label(self) -> &'static str {
        match self {
            Field::Name => "Food Name",
            Field::Description => "Description",
            Field::Category => "Category",
            Field::AddedBy => "Added By",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation errors for user-submitted items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields are empty after trimming.
    #[error("required fields are empty: {}", join(.0))]
    MissingFields(Vec<Field>),
}

impl ValidationError {
    /// The fields that failed validation, in form order.
    pub fn fields(&self) -> &[Field] {
        match self {
            ValidationError::MissingFields(fields) => fields,
        }
    }
}

fn join(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}
