//! xAI Grok-based drafting assistant for the legal-office CRM.
//!
//! Wraps the xAI chat-completion API behind task-specific helpers: answering
//! questions about a client conversation, suggesting a reply, building a
//! document checklist, and scoring a case. The conversation transcript is
//! rebuilt from the message store on every call; the assistant itself holds
//! no state beyond its HTTP client and configuration.

mod api_types;
mod assistant;
mod config;
mod error;
pub mod prompts;
mod transcript;

pub use api_types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Usage};
pub use assistant::GrokAssistant;
pub use config::{GrokConfig, GrokConfigBuilder};
pub use error::GenerationError;
pub use transcript::{build_transcript, last_client_message};
