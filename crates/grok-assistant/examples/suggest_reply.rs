//! Ask the assistant to suggest a reply for a small sample conversation.
//!
//! Requires `GROK_API_KEY` (see `GrokConfig::from_env`). Run with:
//!
//! ```sh
//! cargo run -p grok-assistant --example suggest_reply
//! ```

use chrono::{Duration, Utc};
use crm_core::Message;
use grok_assistant::GrokAssistant;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let assistant = GrokAssistant::from_env()?;

    let now = Utc::now();
    let messages = vec![
        Message::received("m1", now - Duration::minutes(30), "Ana", "+5511999990000")
            .with_text("Boa tarde, meu voo para Lisboa foi cancelado sem aviso"),
        Message::sent("m2", now - Duration::minutes(25), "Ana", "+5511999990000")
            .with_text("Boa tarde, Ana. Pode nos enviar o bilhete e o comprovante do cancelamento?"),
        Message::received("m3", now - Duration::minutes(5), "Ana", "+5511999990000")
            .with_text("Enviei tudo por email, e agora?"),
    ];

    let suggestion = assistant.suggest_reply(&messages).await?;
    println!("Sugestão de resposta:\n{}", suggestion);

    Ok(())
}
