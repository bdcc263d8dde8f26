//! Stored row shapes and their conversion to the typed model.

use chrono::{DateTime, Utc};
use crm_core::{Message, RawMessage, SchemaError};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A raw message row as stored, mirroring the upstream export schema.
///
/// Sender fields describe the counterpart on received rows, recipient
/// fields describe it on sent rows; [`MessageRow::into_message`] folds the
/// two into the single counterpart identity the core model uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct MessageRow {
    pub message_uid: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub message_direction: Option<String>,
    pub sender_name: Option<String>,
    pub sender_phone: Option<String>,
    pub sender_email: Option<String>,
    pub recipient_name: Option<String>,
    pub recipient_phone: Option<String>,
    pub recipient_email: Option<String>,
    pub account_name: Option<String>,
    pub message_text: Option<String>,
    pub file_url: Option<String>,
    pub attachment_filename: Option<String>,
    pub ocr_scan: Option<String>,
    pub audio_transcription: Option<String>,
    pub chat_url: Option<String>,
    pub chat_full_name: Option<String>,
    pub responsible_name: Option<String>,
}

impl MessageRow {
    /// Create a minimal inbound row from a counterpart.
    pub fn inbound(
        uid: impl Into<String>,
        created_at: DateTime<Utc>,
        sender_name: impl Into<String>,
        sender_phone: impl Into<String>,
    ) -> Self {
        Self {
            message_uid: Some(uid.into()),
            created_at: Some(created_at),
            message_direction: Some("received".to_string()),
            sender_name: Some(sender_name.into()),
            sender_phone: Some(sender_phone.into()),
            ..Self::empty()
        }
    }

    /// Create a minimal outbound row addressed to a counterpart.
    pub fn outbound(
        uid: impl Into<String>,
        created_at: DateTime<Utc>,
        recipient_name: impl Into<String>,
        recipient_phone: impl Into<String>,
    ) -> Self {
        Self {
            message_uid: Some(uid.into()),
            created_at: Some(created_at),
            message_direction: Some("sent".to_string()),
            recipient_name: Some(recipient_name.into()),
            recipient_phone: Some(recipient_phone.into()),
            ..Self::empty()
        }
    }

    fn empty() -> Self {
        Self {
            message_uid: None,
            created_at: None,
            message_direction: None,
            sender_name: None,
            sender_phone: None,
            sender_email: None,
            recipient_name: None,
            recipient_phone: None,
            recipient_email: None,
            account_name: None,
            message_text: None,
            file_url: None,
            attachment_filename: None,
            ocr_scan: None,
            audio_transcription: None,
            chat_url: None,
            chat_full_name: None,
            responsible_name: None,
        }
    }

    /// Set the message body.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.message_text = Some(text.into());
        self
    }

    /// Set the account label.
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account_name = Some(account.into());
        self
    }

    /// Set an attachment URL and filename.
    pub fn with_attachment(
        mut self,
        url: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        self.file_url = Some(url.into());
        self.attachment_filename = Some(filename.into());
        self
    }

    /// Set OCR-extracted text.
    pub fn with_ocr(mut self, text: impl Into<String>) -> Self {
        self.ocr_scan = Some(text.into());
        self
    }

    /// Convert to a validated core message.
    ///
    /// The counterpart comes from the sender columns on received rows and
    /// the recipient columns on sent rows.
    pub fn into_message(self) -> Result<Message, SchemaError> {
        let inbound = self.message_direction.as_deref() == Some("received");
        let (name, phone, email) = if inbound {
            (self.sender_name, self.sender_phone, self.sender_email)
        } else {
            (self.recipient_name, self.recipient_phone, self.recipient_email)
        };

        RawMessage {
            uid: self.message_uid,
            created_at: self.created_at,
            direction: self.message_direction,
            counterpart_name: name,
            counterpart_phone: phone,
            counterpart_email: email,
            account_name: self.account_name,
            text: self.message_text,
            file_url: self.file_url,
            attachment_filename: self.attachment_filename,
            ocr_text: self.ocr_scan,
            audio_transcription: self.audio_transcription,
        }
        .validate()
    }
}

/// Header details for one counterpart's thread, taken from its latest row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ThreadHeader {
    /// Full contact name as the relay knows it.
    pub chat_full_name: Option<String>,
    /// Agent responsible for the thread.
    pub responsible_name: Option<String>,
    /// Account that handles the thread.
    pub account_name: Option<String>,
    /// Deep link to the chat in the relay.
    pub chat_url: Option<String>,
}
