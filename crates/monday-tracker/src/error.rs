//! Error types for the Monday client.

use thiserror::Error;

/// Errors that can occur when talking to Monday.com.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the API.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// GraphQL-level error in a 2xx response.
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    /// The response was missing the expected data section.
    #[error("response contained no data")]
    MissingData,

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}
