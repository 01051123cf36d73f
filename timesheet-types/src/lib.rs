//! Core type definitions for the timesheet helpers.
//!
//! This crate defines the small set of values the helper functions pass
//! around:
//! - [`Identifier`], the comparable id read out of nested records
//! - [`ParsedDate`] and [`ParseOutcome`], the results of date parsing
//! - the shared [`Error`] type
//!
//! Records themselves stay as `serde_json::Value`; their shape is owned by
//! whatever API produced them.

mod date;
mod ids;

pub use date::{ParseOutcome, ParsedDate};
pub use ids::Identifier;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in helper operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required field is absent. The message is either the default
    /// `Param <field> does not exist.` or one supplied by the caller.
    #[error("{message}")]
    MissingField { field: String, message: String },

    /// A field is present but holds a value of the wrong type.
    #[error("field `{field}` must be {expected}")]
    InvalidField { field: String, expected: &'static str },

    /// An id value that is neither an integer nor a string.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Hours that cannot be rendered as a clock string.
    #[error("invalid hours value: {0}")]
    InvalidHours(f64),
}

impl Error {
    /// Builds a [`Error::MissingField`] with the default message.
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("Param {field} does not exist.");
        Self::MissingField { field, message }
    }

    /// Returns the name of the field this error is about, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field, .. } | Self::InvalidField { field, .. } => {
                Some(field.as_str())
            }
            _ => None,
        }
    }
}
