//! Conversation aggregation.
//!
//! Collapses a flat message collection into one summary row per counterpart,
//! newest conversation first. A conversation only surfaces once it has at
//! least one inbound message; outbound-only threads are invisible here.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::message::{CounterpartKey, Direction, Message};

/// Per-counterpart summary of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    /// Grouping identity of the counterpart.
    pub counterpart: CounterpartKey,
    /// Number of received messages.
    pub received_count: u64,
    /// Timestamp of the most recent message in either direction.
    pub last_message_at: DateTime<Utc>,
    /// Direction of the most recent message.
    pub last_direction: Direction,
    /// First non-null account label among the received messages.
    pub account_name: Option<String>,
    /// Received messages carrying OCR text.
    pub ocr_count: u64,
    /// Received messages carrying an attachment URL.
    pub attachment_count: u64,
    /// Received messages carrying an audio transcription.
    pub audio_count: u64,
}

/// Group messages by counterpart and compute per-conversation statistics.
///
/// Pure and idempotent: the same input always yields the same summaries in
/// the same order. Output is sorted descending by last activity; ties keep
/// the order in which counterparts first appear in the input.
pub fn aggregate(messages: &[Message]) -> Vec<ConversationSummary> {
    let mut groups: IndexMap<CounterpartKey, ConversationSummary> = IndexMap::new();

    // First pass: received messages establish the conversations and the counts.
    for message in messages.iter().filter(|m| m.direction == Direction::Received) {
        let key = CounterpartKey::for_message(message);
        let summary = groups
            .entry(key.clone())
            .or_insert_with(|| ConversationSummary {
                counterpart: key,
                received_count: 0,
                last_message_at: message.created_at,
                last_direction: message.direction,
                account_name: None,
                ocr_count: 0,
                attachment_count: 0,
                audio_count: 0,
            });

        summary.received_count += 1;
        if summary.account_name.is_none() {
            summary.account_name = message.account_name.clone();
        }
        if message.ocr_text.is_some() {
            summary.ocr_count += 1;
        }
        if message.file_url.is_some() {
            summary.attachment_count += 1;
        }
        if message.audio_transcription.is_some() {
            summary.audio_count += 1;
        }
    }

    // Second pass: last activity considers both directions.
    for message in messages {
        let key = CounterpartKey::for_message(message);
        if let Some(summary) = groups.get_mut(&key) {
            if message.created_at > summary.last_message_at {
                summary.last_message_at = message.created_at;
                summary.last_direction = message.direction;
            }
        }
    }

    let mut summaries: Vec<ConversationSummary> = groups.into_values().collect();
    // Stable sort keeps first-appearance order for equal timestamps.
    summaries.sort_by(|a, b| b.last_message_at.cmp(&a.last_message_at));
    summaries
}
