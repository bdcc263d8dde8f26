//! Configuration types for the relay client.

use std::env;

use crate::error::RelayError;

/// Configuration for connecting to the Zapy relay.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Base URL of the relay HTTP API (e.g., "https://relay.zapy.app").
    pub base_url: String,
    /// API token for authentication.
    pub api_token: String,
    /// Account to send from, for multi-account setups.
    /// If None, assumes single-account mode.
    pub account: Option<String>,
}

impl RelayConfig {
    /// Create a new configuration with the given base URL and token.
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
            account: None,
        }
    }

    /// Create configuration with a specific account for multi-account mode.
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Create configuration from environment variables.
    ///
    /// Required:
    /// - `ZAPY_BASE_URL` - Relay base URL
    /// - `ZAPY_API_TOKEN` - API token
    ///
    /// Optional:
    /// - `ZAPY_ACCOUNT` - Sending account for multi-account mode
    pub fn from_env() -> Result<Self, RelayError> {
        let base_url = env::var("ZAPY_BASE_URL")
            .map_err(|_| RelayError::Config("ZAPY_BASE_URL not set".to_string()))?;
        let api_token = env::var("ZAPY_API_TOKEN")
            .map_err(|_| RelayError::Config("ZAPY_API_TOKEN not set".to_string()))?;
        let account = env::var("ZAPY_ACCOUNT").ok();

        Ok(Self {
            base_url,
            api_token,
            account,
        })
    }

    /// Get the send endpoint URL.
    pub fn send_url(&self) -> String {
        format!("{}/api/v1/send", self.base_url)
    }

    /// Get the status/health endpoint URL.
    pub fn status_url(&self) -> String {
        format!("{}/api/v1/status", self.base_url)
    }
}
