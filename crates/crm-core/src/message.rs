//! Message records and counterpart identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SchemaError;

/// Whether a message came from the client or from the agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Client-originated content.
    Received,
    /// Agency-originated content.
    Sent,
}

impl Direction {
    /// The wire/storage representation of this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Sent => "sent",
        }
    }
}

impl FromStr for Direction {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "received" => Ok(Self::Received),
            "sent" => Ok(Self::Sent),
            other => Err(SchemaError::UnknownDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated message record.
///
/// Only the identifier, timestamp, and direction are guaranteed present;
/// every other field is optional per the ingestion contract. Instances are
/// immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier.
    pub uid: String,
    /// When the message was created (UTC).
    pub created_at: DateTime<Utc>,
    /// Whether the message was received from or sent to the counterpart.
    pub direction: Direction,
    /// Counterpart display name.
    pub counterpart_name: Option<String>,
    /// Counterpart phone number, as stored (no normalization).
    pub counterpart_phone: Option<String>,
    /// Counterpart email address.
    pub counterpart_email: Option<String>,
    /// Account/origin label (which agency account handled the message).
    pub account_name: Option<String>,
    /// Free-text body.
    pub text: Option<String>,
    /// Attachment URL, if any.
    pub file_url: Option<String>,
    /// Attachment filename, if any.
    pub attachment_filename: Option<String>,
    /// OCR-extracted text from an image attachment.
    pub ocr_text: Option<String>,
    /// Transcription of an audio message.
    pub audio_transcription: Option<String>,
}

impl Message {
    /// Create a minimal received message. Mostly useful for tests.
    pub fn received(
        uid: impl Into<String>,
        created_at: DateTime<Utc>,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self::minimal(uid, created_at, Direction::Received, name, phone)
    }

    /// Create a minimal sent message. Mostly useful for tests.
    pub fn sent(
        uid: impl Into<String>,
        created_at: DateTime<Utc>,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self::minimal(uid, created_at, Direction::Sent, name, phone)
    }

    fn minimal(
        uid: impl Into<String>,
        created_at: DateTime<Utc>,
        direction: Direction,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            created_at,
            direction,
            counterpart_name: Some(name.into()),
            counterpart_phone: Some(phone.into()),
            counterpart_email: None,
            account_name: None,
            text: None,
            file_url: None,
            attachment_filename: None,
            ocr_text: None,
            audio_transcription: None,
        }
    }

    /// Set the message body.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the account label.
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account_name = Some(account.into());
        self
    }

    /// Set an attachment URL.
    pub fn with_file_url(mut self, url: impl Into<String>) -> Self {
        self.file_url = Some(url.into());
        self
    }

    /// Set OCR-extracted text.
    pub fn with_ocr(mut self, text: impl Into<String>) -> Self {
        self.ocr_text = Some(text.into());
        self
    }

    /// Set an audio transcription.
    pub fn with_audio_transcription(mut self, text: impl Into<String>) -> Self {
        self.audio_transcription = Some(text.into());
        self
    }
}

/// Stable grouping key for a conversation.
///
/// Matching is raw string equality with absent fields as empty strings.
/// Phone numbers are not normalized: "+55 11 99999-0000" and
/// "5511999990000" group as two counterparts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CounterpartKey {
    /// Counterpart name, or empty when absent.
    pub name: String,
    /// Counterpart phone, or empty when absent.
    pub phone: String,
}

impl CounterpartKey {
    /// Create a key from explicit parts.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Derive the grouping key for a message.
    pub fn for_message(message: &Message) -> Self {
        Self {
            name: message.counterpart_name.clone().unwrap_or_default(),
            phone: message
                .counterpart_phone
                .clone()
                .or_else(|| message.counterpart_email.clone())
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for CounterpartKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.phone)
    }
}

/// An unvalidated message record as produced by the ingestion layer.
///
/// Every field is optional; [`RawMessage::validate`] checks required-field
/// presence once, at the boundary, so the rest of the crate never has to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMessage {
    pub uid: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub direction: Option<String>,
    pub counterpart_name: Option<String>,
    pub counterpart_phone: Option<String>,
    pub counterpart_email: Option<String>,
    pub account_name: Option<String>,
    pub text: Option<String>,
    pub file_url: Option<String>,
    pub attachment_filename: Option<String>,
    pub ocr_text: Option<String>,
    pub audio_transcription: Option<String>,
}

impl RawMessage {
    /// Validate required fields and produce a typed [`Message`].
    ///
    /// Fails fast with a [`SchemaError`] naming every missing required
    /// field, never a partial record.
    pub fn validate(self) -> Result<Message, SchemaError> {
        let mut missing = Vec::new();
        if self.uid.is_none() {
            missing.push("uid");
        }
        if self.created_at.is_none() {
            missing.push("created_at");
        }
        if self.direction.is_none() {
            missing.push("direction");
        }
        if !missing.is_empty() {
            return Err(SchemaError::MissingFields { fields: missing });
        }

        let direction = self.direction.as_deref().unwrap_or_default().parse()?;

        Ok(Message {
            uid: self.uid.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_default(),
            direction,
            counterpart_name: self.counterpart_name,
            counterpart_phone: self.counterpart_phone,
            counterpart_email: self.counterpart_email,
            account_name: self.account_name,
            text: self.text,
            file_url: self.file_url,
            attachment_filename: self.attachment_filename,
            ocr_text: self.ocr_text,
            audio_transcription: self.audio_transcription,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_direction_round_trip() {
        assert_eq!("received".parse::<Direction>().unwrap(), Direction::Received);
        assert_eq!("sent".parse::<Direction>().unwrap(), Direction::Sent);
        assert_eq!(Direction::Received.as_str(), "received");
        assert_eq!(Direction::Sent.as_str(), "sent");
    }

    #[test]
    fn test_direction_unknown() {
        let err = "forwarded".parse::<Direction>().unwrap_err();
        assert!(matches!(err, SchemaError::UnknownDirection(ref d) if d == "forwarded"));
    }

    #[test]
    fn test_validate_ok() {
        let raw = RawMessage {
            uid: Some("m1".to_string()),
            created_at: Some(ts()),
            direction: Some("received".to_string()),
            counterpart_name: Some("Ana".to_string()),
            ..Default::default()
        };

        let message = raw.validate().unwrap();
        assert_eq!(message.uid, "m1");
        assert_eq!(message.direction, Direction::Received);
        assert_eq!(message.counterpart_name.as_deref(), Some("Ana"));
        assert!(message.counterpart_phone.is_none());
    }

    #[test]
    fn test_validate_names_all_missing_fields() {
        let raw = RawMessage {
            counterpart_name: Some("Ana".to_string()),
            ..Default::default()
        };

        match raw.validate() {
            Err(SchemaError::MissingFields { fields }) => {
                assert_eq!(fields, vec!["uid", "created_at", "direction"]);
            }
            other => panic!("expected MissingFields, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_unknown_direction() {
        let raw = RawMessage {
            uid: Some("m1".to_string()),
            created_at: Some(ts()),
            direction: Some("bounced".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            raw.validate(),
            Err(SchemaError::UnknownDirection(_))
        ));
    }

    #[test]
    fn test_counterpart_key_absent_fields_are_empty() {
        let mut message = Message::received("m1", ts(), "Ana", "+55119");
        message.counterpart_phone = None;

        let key = CounterpartKey::for_message(&message);
        assert_eq!(key.name, "Ana");
        assert_eq!(key.phone, "");
    }

    #[test]
    fn test_counterpart_key_falls_back_to_email() {
        let mut message = Message::received("m1", ts(), "Ana", "");
        message.counterpart_phone = None;
        message.counterpart_email = Some("ana@example.com".to_string());

        let key = CounterpartKey::for_message(&message);
        assert_eq!(key.phone, "ana@example.com");
    }

    #[test]
    fn test_counterpart_key_no_phone_normalization() {
        let a = Message::received("m1", ts(), "Ana", "+55 11 99999-0000");
        let b = Message::received("m2", ts(), "Ana", "5511999990000");

        assert_ne!(
            CounterpartKey::for_message(&a),
            CounterpartKey::for_message(&b)
        );
    }
}
