//! Error types for the relay client.

use thiserror::Error;

/// Errors that can occur when talking to the WhatsApp relay.
#[derive(Debug, Error)]
pub enum RelayError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Relay health check failed.
    #[error("health check failed")]
    HealthCheckFailed,

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The relay rejected the send.
    #[error("send failed ({status}): {body}")]
    SendFailed { status: u16, body: String },
}
