//! Configuration for the Monday client.

use std::env;

use crate::error::TrackerError;

/// Default Monday.com GraphQL endpoint.
pub const DEFAULT_API_URL: &str = "https://api.monday.com/v2/";

/// API version header value the queries were written against.
pub const API_VERSION: &str = "2023-10";

/// Configuration for [`crate::MondayClient`].
#[derive(Debug, Clone)]
pub struct MondayConfig {
    /// GraphQL endpoint URL.
    pub api_url: String,
    /// API key for the `Authorization` header.
    pub api_key: String,
    /// Value for the `API-Version` header.
    pub api_version: String,
}

impl MondayConfig {
    /// Create a configuration with the default endpoint and version.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            api_version: API_VERSION.to_string(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Required:
    /// - `MONDAY_API_KEY` - API key
    ///
    /// Optional:
    /// - `MONDAY_API_URL` - endpoint (default: https://api.monday.com/v2/)
    /// - `MONDAY_API_VERSION` - version header (default: 2023-10)
    pub fn from_env() -> Result<Self, TrackerError> {
        let api_key = env::var("MONDAY_API_KEY")
            .map_err(|_| TrackerError::Config("MONDAY_API_KEY not set".to_string()))?;

        let api_url = env::var("MONDAY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_version =
            env::var("MONDAY_API_VERSION").unwrap_or_else(|_| API_VERSION.to_string());

        Ok(Self {
            api_url,
            api_key,
            api_version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = MondayConfig::new("key");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.api_version, "2023-10");
        assert_eq!(config.api_key, "key");
    }
}
