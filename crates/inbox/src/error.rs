//! Error types for inbox operations.

use thiserror::Error;

/// Errors that can occur in the inbox service layer.
#[derive(Debug, Error)]
pub enum InboxError {
    /// Message store failure.
    #[error("store error: {0}")]
    Store(#[from] message_store::StoreError),

    /// Assistant failure.
    #[error("generation error: {0}")]
    Generation(#[from] grok_assistant::GenerationError),

    /// Relay transport failure.
    #[error("relay error: {0}")]
    Relay(#[from] zapy_relay::RelayError),

    /// Monday tracker failure.
    #[error("tracker error: {0}")]
    Tracker(#[from] monday_tracker::TrackerError),

    /// The relay accepted the call but rejected the message.
    #[error("send rejected: {0}")]
    SendRejected(String),

    /// No messages exist for the requested counterpart.
    #[error("unknown counterpart: {0}")]
    UnknownCounterpart(String),
}
