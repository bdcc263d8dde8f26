//! Conversation transcript building for prompt context.

use crm_core::{Direction, Message};

/// Render one conversation as a role-labeled transcript, oldest first.
///
/// Received messages speak as `Cliente`, sent messages as `Atendente`.
/// OCR text and audio transcriptions are appended to the body so the
/// assistant sees attachment content too.
pub fn build_transcript(messages: &[Message]) -> String {
    let mut ordered: Vec<&Message> = messages.iter().collect();
    ordered.sort_by_key(|m| m.created_at);

    let mut lines = Vec::with_capacity(ordered.len());
    for message in ordered {
        let role = match message.direction {
            Direction::Received => "Cliente",
            Direction::Sent => "Atendente",
        };

        let mut content = message.text.clone().unwrap_or_default();
        if let Some(ocr) = &message.ocr_text {
            content.push_str("\nOCR: ");
            content.push_str(ocr);
        }
        if let Some(audio) = &message.audio_transcription {
            content.push_str("\nTranscrição: ");
            content.push_str(audio);
        }

        lines.push(format!("{}: {}", role, content));
    }

    lines.join("\n")
}

/// The body of the most recent inbound message with text, if any.
pub fn last_client_message(messages: &[Message]) -> Option<String> {
    let mut ordered: Vec<&Message> = messages.iter().collect();
    ordered.sort_by_key(|m| m.created_at);

    ordered
        .iter()
        .rev()
        .filter(|m| m.direction == Direction::Received)
        .find_map(|m| m.text.clone().filter(|t| !t.trim().is_empty()))
}
