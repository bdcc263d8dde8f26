//! Zapy relay HTTP client.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::RelayConfig;
use crate::error::RelayError;

/// Request body for the send endpoint.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    phone: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    account: Option<&'a str>,
}

/// Response body from the send endpoint.
#[derive(Debug, Deserialize)]
struct SendResponse {
    #[serde(default = "default_success")]
    success: bool,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

fn default_success() -> bool {
    true
}

/// Result of a send attempt: success flag plus a human-readable status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    /// Whether the relay accepted the message.
    pub success: bool,
    /// Human-readable status string for the operator.
    pub status: String,
}

impl SendOutcome {
    fn from_response(response: SendResponse) -> Self {
        let status = response
            .status
            .or(response.error)
            .unwrap_or_else(|| "mensagem enviada".to_string());
        Self {
            success: response.success,
            status,
        }
    }
}

/// Client for communicating with the Zapy relay.
#[derive(Clone)]
pub struct RelayClient {
    http: Client,
    config: RelayConfig,
    connected: Arc<AtomicBool>,
}

impl RelayClient {
    /// Connect to the relay, verifying it with a health check.
    pub async fn connect(config: RelayConfig) -> Result<Self, RelayError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(RelayError::Http)?;

        let client = Self {
            http,
            config,
            connected: Arc::new(AtomicBool::new(false)),
        };

        if client.health_check().await? {
            client.connected.store(true, Ordering::SeqCst);
            info!("Connected to Zapy relay at {}", client.config.base_url);
        } else {
            return Err(RelayError::HealthCheckFailed);
        }

        Ok(client)
    }

    /// Check if currently connected to the relay.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Perform a health check against the relay.
    pub async fn health_check(&self) -> Result<bool, RelayError> {
        let url = self.config.status_url();
        debug!("Health check: {}", url);

        match self
            .http
            .get(&url)
            .bearer_auth(&self.config.api_token)
            .send()
            .await
        {
            Ok(resp) => {
                let ok = resp.status().is_success();
                self.connected.store(ok, Ordering::SeqCst);
                Ok(ok)
            }
            Err(e) => {
                self.connected.store(false, Ordering::SeqCst);
                Err(RelayError::Http(e))
            }
        }
    }

    /// Send a text message to a phone number.
    ///
    /// Returns the relay's verdict as a [`SendOutcome`]; a delivered-but-
    /// rejected send is a successful call with `success == false`.
    pub async fn send_text(&self, phone: &str, message: &str) -> Result<SendOutcome, RelayError> {
        let request = SendRequest {
            phone,
            message,
            account: self.config.account.as_deref(),
        };

        debug!(phone, "sending message via relay");

        let response = self
            .http
            .post(self.config.send_url())
            .bearer_auth(&self.config.api_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::SendFailed {
                status: status.as_u16(),
                body,
            });
        }

        let body: SendResponse = response.json().await?;
        let outcome = SendOutcome::from_response(body);
        info!(phone, success = outcome.success, status = %outcome.status, "relay send finished");

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_response_defaults_to_success() {
        let response: SendResponse = serde_json::from_str("{}").unwrap();
        let outcome = SendOutcome::from_response(response);
        assert!(outcome.success);
        assert_eq!(outcome.status, "mensagem enviada");
    }

    #[test]
    fn test_send_response_with_status() {
        let response: SendResponse =
            serde_json::from_str(r#"{"success": true, "status": "na fila"}"#).unwrap();
        let outcome = SendOutcome::from_response(response);
        assert!(outcome.success);
        assert_eq!(outcome.status, "na fila");
    }

    #[test]
    fn test_send_response_with_error() {
        let response: SendResponse =
            serde_json::from_str(r#"{"success": false, "error": "número inválido"}"#).unwrap();
        let outcome = SendOutcome::from_response(response);
        assert!(!outcome.success);
        assert_eq!(outcome.status, "número inválido");
    }

    #[test]
    fn test_send_request_omits_missing_account() {
        let request = SendRequest {
            phone: "+5511999990000",
            message: "olá",
            account: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("account").is_none());
    }
}
