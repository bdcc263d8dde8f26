//! Error types for the drafting assistant.

use thiserror::Error;

/// Errors that can occur while generating text.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// HTTP transport failure (connection, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response from the API.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The API answered but produced no usable text.
    #[error("response contained no generated text")]
    EmptyResponse,

    /// The conversation has no inbound message to work from.
    #[error("conversation has no inbound message to reply to")]
    NoInboundMessage,
}
