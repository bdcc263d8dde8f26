//! GrokAssistant implementation using the xAI API.

use crm_core::Message;
use reqwest::Client;
use tracing::{debug, warn};

use crate::api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::GrokConfig;
use crate::error::GenerationError;
use crate::prompts;
use crate::transcript::{build_transcript, last_client_message};

/// Drafting assistant backed by xAI's chat-completion API.
///
/// Stateless between calls: every helper rebuilds the transcript from the
/// messages it is given, so the store remains the single source of truth.
pub struct GrokAssistant {
    client: Client,
    config: GrokConfig,
}

impl GrokAssistant {
    /// Create a new assistant with the given configuration.
    pub fn new(config: GrokConfig) -> Result<Self, GenerationError> {
        if config.api_key.is_empty() {
            return Err(GenerationError::Configuration(
                "API key is empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                GenerationError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    /// Create an assistant from environment variables.
    ///
    /// See [`GrokConfig::from_env`] for the variables involved.
    pub fn from_env() -> Result<Self, GenerationError> {
        Self::new(GrokConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GrokConfig {
        &self.config
    }

    /// Make a chat completion request and return the generated text.
    pub async fn chat(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GenerationError> {
        let url = format!("{}/v1/chat/completions", self.config.api_url);

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(user_prompt),
            ],
            temperature: self.config.temperature,
            stream: false,
            max_tokens: self.config.max_tokens,
        };

        debug!(model = %request.model, "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Prefer the structured API error message when the body parses.
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(GenerationError::Api {
                    status: status.as_u16(),
                    message: api_error.error.message,
                });
            }

            return Err(GenerationError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "token usage"
            );
        }

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                warn!("chat completion returned no content");
                GenerationError::EmptyResponse
            })
    }

    /// Answer a free-form question about a conversation.
    pub async fn answer_question(
        &self,
        messages: &[Message],
        question: &str,
    ) -> Result<String, GenerationError> {
        let transcript = build_transcript(messages);
        self.chat(
            prompts::SYSTEM_GENERAL,
            &prompts::general_analysis(&transcript, question),
        )
        .await
    }

    /// Suggest a professional reply to the client's last message.
    pub async fn suggest_reply(&self, messages: &[Message]) -> Result<String, GenerationError> {
        let last = last_client_message(messages).ok_or(GenerationError::NoInboundMessage)?;
        let transcript = build_transcript(messages);
        self.chat(
            prompts::SYSTEM_SUGGESTION,
            &prompts::suggestion(&transcript, &last),
        )
        .await
    }

    /// Build a document checklist for the case discussed in a conversation.
    pub async fn documents_checklist(
        &self,
        messages: &[Message],
    ) -> Result<String, GenerationError> {
        let transcript = build_transcript(messages);
        self.chat(
            prompts::SYSTEM_DOCUMENTS,
            &prompts::documents_checklist(&transcript),
        )
        .await
    }

    /// Score the chances of success of the case discussed in a conversation.
    pub async fn case_analysis(&self, messages: &[Message]) -> Result<String, GenerationError> {
        let transcript = build_transcript(messages);
        self.chat(
            prompts::SYSTEM_CASE_ANALYSIS,
            &prompts::case_analysis(&transcript),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_api_key() {
        let config = GrokConfig::default();
        assert!(matches!(
            GrokAssistant::new(config),
            Err(GenerationError::Configuration(_))
        ));
    }

    #[test]
    fn test_new_with_key() {
        let config = GrokConfig::builder().api_key("test-key").build();
        let assistant = GrokAssistant::new(config).unwrap();
        assert_eq!(assistant.config().model, "grok-2-latest");
    }

    #[tokio::test]
    async fn test_suggest_reply_requires_inbound_message() {
        let config = GrokConfig::builder().api_key("test-key").build();
        let assistant = GrokAssistant::new(config).unwrap();

        let result = assistant.suggest_reply(&[]).await;
        assert!(matches!(result, Err(GenerationError::NoInboundMessage)));
    }
}
