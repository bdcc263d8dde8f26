//! Thread views and response-time reports.

use chrono::{DateTime, Utc};
use crm_core::{format_duration, response_times, Direction, Message};
use message_store::ThreadHeader;
use serde::Serialize;

/// One counterpart's conversation as the operator sees it.
#[derive(Debug, Clone)]
pub struct ThreadView {
    /// Header details from the latest stored row, when present.
    pub header: Option<ThreadHeader>,
    /// The thread's messages, newest first.
    pub messages: Vec<Message>,
    /// Messages carrying an attachment, newest first.
    pub attachments: Vec<Attachment>,
    /// Response-time report for the inbound messages, oldest first.
    pub responses: Vec<ResponseEntry>,
}

/// A file attached somewhere in the thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    /// Attachment URL.
    pub url: String,
    /// Attachment filename, when the relay captured one.
    pub filename: Option<String>,
}

/// How one inbound message was (or was not yet) answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseEntry {
    /// Uid of the inbound message.
    pub uid: String,
    /// When the inbound message arrived.
    pub received_at: DateTime<Utc>,
    /// Elapsed seconds until the answering outbound message, if one exists.
    pub seconds: Option<i64>,
}

impl ResponseEntry {
    /// Human-readable response time, or the awaiting-response label.
    pub fn formatted(&self) -> String {
        match self.seconds {
            Some(seconds) => format_duration(seconds),
            None => "Aguardando resposta".to_string(),
        }
    }
}

/// Build the response report for one conversation's messages.
///
/// One entry per inbound message that is either answered (with elapsed
/// seconds) or still open, in chronological order.
pub fn response_report(messages: &[Message]) -> Vec<ResponseEntry> {
    let times = response_times(messages);

    let mut inbound: Vec<&Message> = messages
        .iter()
        .filter(|m| m.direction == Direction::Received)
        .collect();
    inbound.sort_by_key(|m| m.created_at);

    inbound
        .into_iter()
        .map(|m| ResponseEntry {
            uid: m.uid.clone(),
            received_at: m.created_at,
            seconds: times.get(&m.uid).copied(),
        })
        .collect()
}

impl ThreadView {
    /// Assemble a view from a header and the thread's messages (any order).
    pub fn new(header: Option<ThreadHeader>, messages: Vec<Message>) -> Self {
        let responses = response_report(&messages);

        let mut messages = messages;
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let attachments = messages
            .iter()
            .filter_map(|m| {
                m.file_url.as_ref().map(|url| Attachment {
                    url: url.clone(),
                    filename: m.attachment_filename.clone(),
                })
            })
            .collect();

        Self {
            header,
            messages,
            attachments,
            responses,
        }
    }

    /// The most recent message, if the thread is non-empty.
    pub fn latest(&self) -> Option<&Message> {
        self.messages.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_messages_newest_first() {
        let view = ThreadView::new(
            None,
            vec![
                Message::received("m1", at(9, 0), "Ana", "+123"),
                Message::sent("m2", at(9, 5), "Ana", "+123"),
            ],
        );

        assert_eq!(view.messages[0].uid, "m2");
        assert_eq!(view.latest().unwrap().uid, "m2");
    }

    #[test]
    fn test_attachments_collected() {
        let view = ThreadView::new(
            None,
            vec![
                Message::received("m1", at(9, 0), "Ana", "+123")
                    .with_file_url("https://files/rg.jpg"),
                Message::received("m2", at(9, 10), "Ana", "+123"),
            ],
        );

        assert_eq!(view.attachments.len(), 1);
        assert_eq!(view.attachments[0].url, "https://files/rg.jpg");
    }

    #[test]
    fn test_response_report_answered_and_open() {
        let entries = response_report(&[
            Message::received("r0", at(9, 0), "Ana", "+123"),
            Message::sent("s0", at(9, 5), "Ana", "+123"),
            Message::received("r1", at(10, 0), "Ana", "+123"),
        ]);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].uid, "r0");
        assert_eq!(entries[0].seconds, Some(300));
        assert_eq!(entries[0].formatted(), "5 minutos");
        assert_eq!(entries[1].uid, "r1");
        assert_eq!(entries[1].seconds, None);
        assert_eq!(entries[1].formatted(), "Aguardando resposta");
    }

    #[test]
    fn test_response_report_overwritten_inbound_stays_open() {
        // r0 was never answered directly; s0 answered r1. r0 still shows up
        // in the report, but as awaiting response.
        let entries = response_report(&[
            Message::received("r0", at(9, 0), "Ana", "+123"),
            Message::received("r1", at(9, 10), "Ana", "+123"),
            Message::sent("s0", at(9, 15), "Ana", "+123"),
        ]);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].seconds, None);
        assert_eq!(entries[1].seconds, Some(300));
    }
}
