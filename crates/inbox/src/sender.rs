//! Message sender trait and implementations.

use async_trait::async_trait;
use zapy_relay::{RelayClient, SendOutcome};

use crate::error::InboxError;

/// Trait for the outbound transport.
///
/// Abstracted to support different transports (the Zapy relay, tests).
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Send a text message to a phone number.
    async fn send_text(&self, phone: &str, body: &str) -> Result<SendOutcome, InboxError>;
}

#[async_trait]
impl MessageSender for RelayClient {
    async fn send_text(&self, phone: &str, body: &str) -> Result<SendOutcome, InboxError> {
        Ok(RelayClient::send_text(self, phone, body).await?)
    }
}

/// A message sender for tests that accepts everything and sends nothing.
#[derive(Debug, Clone, Default)]
pub struct NoOpSender;

#[async_trait]
impl MessageSender for NoOpSender {
    async fn send_text(&self, phone: &str, body: &str) -> Result<SendOutcome, InboxError> {
        tracing::debug!(phone, body, "NoOpSender discarding message");
        Ok(SendOutcome {
            success: true,
            status: "descartada (NoOpSender)".to_string(),
        })
    }
}
