//! Configuration for the drafting assistant.

use std::env;
use std::time::Duration;

use crate::error::GenerationError;

/// Configuration for [`crate::GrokAssistant`].
#[derive(Debug, Clone)]
pub struct GrokConfig {
    /// xAI API URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// Temperature for generation. Drafting wants determinism, so zero.
    pub temperature: f32,

    /// Maximum tokens for response, if capped.
    pub max_tokens: Option<u32>,

    /// Request timeout.
    pub timeout: Duration,
}

impl Default for GrokConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.x.ai".to_string(),
            api_key: String::new(),
            model: "grok-2-latest".to_string(),
            temperature: 0.0,
            max_tokens: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl GrokConfig {
    /// Create configuration from environment variables.
    ///
    /// Required:
    /// - `GROK_API_KEY` - API key for authentication
    ///
    /// Optional:
    /// - `GROK_API_URL` - API URL (default: https://api.x.ai)
    /// - `GROK_MODEL` - Model name (default: grok-2-latest)
    /// - `GROK_TEMPERATURE` - Temperature (default: 0.0)
    /// - `GROK_MAX_TOKENS` - Max tokens (default: unset)
    /// - `GROK_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self, GenerationError> {
        let api_key = env::var("GROK_API_KEY")
            .map_err(|_| GenerationError::Configuration("GROK_API_KEY not set".to_string()))?;

        let api_url = env::var("GROK_API_URL").unwrap_or_else(|_| "https://api.x.ai".to_string());

        let model = env::var("GROK_MODEL").unwrap_or_else(|_| "grok-2-latest".to_string());

        let temperature = env::var("GROK_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.0);

        let max_tokens = env::var("GROK_MAX_TOKENS").ok().and_then(|v| v.parse().ok());

        let timeout = env::var("GROK_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        Ok(Self {
            api_url,
            api_key,
            model,
            temperature,
            max_tokens,
            timeout,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> GrokConfigBuilder {
        GrokConfigBuilder::default()
    }
}

/// Builder for [`GrokConfig`].
#[derive(Debug, Default)]
pub struct GrokConfigBuilder {
    config: GrokConfig,
}

impl GrokConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = temp;
        self
    }

    /// Cap the response token count.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = Some(tokens);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GrokConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GrokConfig::default();

        assert_eq!(config.api_url, "https://api.x.ai");
        assert!(config.api_key.is_empty());
        assert_eq!(config.model, "grok-2-latest");
        assert_eq!(config.temperature, 0.0);
        assert!(config.max_tokens.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_all_options() {
        let config = GrokConfig::builder()
            .api_key("my-key")
            .api_url("https://custom.api.com")
            .model("grok-4")
            .temperature(0.3)
            .max_tokens(512)
            .timeout(Duration::from_secs(10))
            .build();

        assert_eq!(config.api_key, "my-key");
        assert_eq!(config.api_url, "https://custom.api.com");
        assert_eq!(config.model, "grok-4");
        assert_eq!(config.temperature, 0.3);
        assert_eq!(config.max_tokens, Some(512));
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_grok_vars() {
            std::env::remove_var("GROK_API_KEY");
            std::env::remove_var("GROK_API_URL");
            std::env::remove_var("GROK_MODEL");
            std::env::remove_var("GROK_TEMPERATURE");
            std::env::remove_var("GROK_MAX_TOKENS");
            std::env::remove_var("GROK_TIMEOUT_SECS");
        }

        // Missing API key should error
        clear_all_grok_vars();
        let result = GrokConfig::from_env();
        assert!(matches!(result, Err(GenerationError::Configuration(_))));

        // Only API key set, defaults used
        clear_all_grok_vars();
        std::env::set_var("GROK_API_KEY", "test-env-key");

        let config = GrokConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-env-key");
        assert_eq!(config.model, "grok-2-latest");
        assert_eq!(config.temperature, 0.0);

        // All vars set
        clear_all_grok_vars();
        std::env::set_var("GROK_API_KEY", "full-test-key");
        std::env::set_var("GROK_API_URL", "https://test.api.com");
        std::env::set_var("GROK_MODEL", "grok-4");
        std::env::set_var("GROK_TEMPERATURE", "0.5");
        std::env::set_var("GROK_MAX_TOKENS", "2048");
        std::env::set_var("GROK_TIMEOUT_SECS", "5");

        let config = GrokConfig::from_env().unwrap();
        assert_eq!(config.api_key, "full-test-key");
        assert_eq!(config.api_url, "https://test.api.com");
        assert_eq!(config.model, "grok-4");
        assert_eq!(config.temperature, 0.5);
        assert_eq!(config.max_tokens, Some(2048));
        assert_eq!(config.timeout, Duration::from_secs(5));

        clear_all_grok_vars();
    }
}
