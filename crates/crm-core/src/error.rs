//! Error types for message validation.

use thiserror::Error;

/// Errors raised when a raw message record fails boundary validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// One or more required fields are absent.
    #[error("message record is missing required fields: {}", fields.join(", "))]
    MissingFields {
        /// Names of every missing required field.
        fields: Vec<&'static str>,
    },

    /// The direction field is present but not `received` or `sent`.
    #[error("unknown message direction: {0:?}")]
    UnknownDirection(String),
}
