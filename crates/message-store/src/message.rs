//! Message queries.

use chrono::{DateTime, Utc};
use crm_core::Message;
use sqlx::SqlitePool;

use crate::row::{MessageRow, ThreadHeader};
use crate::Result;

const ALL_COLUMNS: &str = "message_uid, created_at, message_direction, \
     sender_name, sender_phone, sender_email, \
     recipient_name, recipient_phone, recipient_email, \
     account_name, message_text, file_url, attachment_filename, \
     ocr_scan, audio_transcription, chat_url, chat_full_name, responsible_name";

/// Insert a message row.
pub async fn insert_message(pool: &SqlitePool, row: &MessageRow) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO messages (
            message_uid, created_at, message_direction,
            sender_name, sender_phone, sender_email,
            recipient_name, recipient_phone, recipient_email,
            account_name, message_text, file_url, attachment_filename,
            ocr_scan, audio_transcription, chat_url, chat_full_name, responsible_name
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&row.message_uid)
    .bind(row.created_at)
    .bind(&row.message_direction)
    .bind(&row.sender_name)
    .bind(&row.sender_phone)
    .bind(&row.sender_email)
    .bind(&row.recipient_name)
    .bind(&row.recipient_phone)
    .bind(&row.recipient_email)
    .bind(&row.account_name)
    .bind(&row.message_text)
    .bind(&row.file_url)
    .bind(&row.attachment_filename)
    .bind(&row.ocr_scan)
    .bind(&row.audio_transcription)
    .bind(&row.chat_url)
    .bind(&row.chat_full_name)
    .bind(&row.responsible_name)
    .execute(pool)
    .await?;

    Ok(())
}

/// Load every message, validated, time-ascending.
///
/// Fails fast on the first row that does not satisfy the schema contract.
pub async fn load_messages(pool: &SqlitePool) -> Result<Vec<Message>> {
    let rows = sqlx::query_as::<_, MessageRow>(&format!(
        "SELECT {ALL_COLUMNS} FROM messages ORDER BY created_at ASC"
    ))
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| row.into_message().map_err(Into::into))
        .collect()
}

/// Load one counterpart's thread in both directions, time-ascending.
///
/// A row belongs to the thread when the counterpart matches either its
/// sender identity (received) or its recipient identity (sent). Absent
/// name/phone columns compare as empty strings.
pub async fn load_thread(pool: &SqlitePool, name: &str, phone: &str) -> Result<Vec<Message>> {
    let rows = sqlx::query_as::<_, MessageRow>(&format!(
        r#"
        SELECT {ALL_COLUMNS} FROM messages
        WHERE (COALESCE(sender_name, '') = ? AND COALESCE(sender_phone, '') = ?)
           OR (COALESCE(recipient_name, '') = ? AND COALESCE(recipient_phone, '') = ?)
        ORDER BY created_at ASC
        "#
    ))
    .bind(name)
    .bind(phone)
    .bind(name)
    .bind(phone)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| row.into_message().map_err(Into::into))
        .collect()
}

/// Thread header details from the counterpart's most recent row.
pub async fn thread_header(
    pool: &SqlitePool,
    name: &str,
    phone: &str,
) -> Result<Option<ThreadHeader>> {
    let header = sqlx::query_as::<_, ThreadHeader>(
        r#"
        SELECT chat_full_name, responsible_name, account_name, chat_url
        FROM messages
        WHERE (COALESCE(sender_name, '') = ? AND COALESCE(sender_phone, '') = ?)
           OR (COALESCE(recipient_name, '') = ? AND COALESCE(recipient_phone, '') = ?)
        ORDER BY created_at DESC
        LIMIT 1
        "#,
    )
    .bind(name)
    .bind(phone)
    .bind(name)
    .bind(phone)
    .fetch_optional(pool)
    .await?;

    Ok(header)
}

/// Append a locally composed outbound message after a successful send.
///
/// The record is authoritative only until the next full reload from the
/// upstream export.
pub async fn record_outbound(
    pool: &SqlitePool,
    uid: &str,
    created_at: DateTime<Utc>,
    recipient_name: &str,
    recipient_phone: &str,
    body: &str,
) -> Result<()> {
    let row = MessageRow::outbound(uid, created_at, recipient_name, recipient_phone)
        .with_text(body);
    insert_message(pool, &row).await?;

    tracing::info!(uid, recipient_phone, "recorded outbound message");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Store;
    use chrono::TimeZone;
    use crm_core::Direction;

    async fn test_store() -> Store {
        let store = Store::connect("sqlite::memory:").await.unwrap();
        store.migrate().await.unwrap();
        store
    }

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, hour, minute, 0).unwrap()
    }

    #[tokio::test]
    async fn test_load_messages_is_time_ascending() {
        let store = test_store().await;

        insert_message(
            store.pool(),
            &MessageRow::inbound("m2", at(10, 0), "Bruno", "+456"),
        )
        .await
        .unwrap();
        insert_message(
            store.pool(),
            &MessageRow::inbound("m1", at(9, 0), "Ana", "+123"),
        )
        .await
        .unwrap();

        let messages = load_messages(store.pool()).await.unwrap();
        let uids: Vec<&str> = messages.iter().map(|m| m.uid.as_str()).collect();
        assert_eq!(uids, vec!["m1", "m2"]);
    }

    #[tokio::test]
    async fn test_load_thread_matches_both_directions() {
        let store = test_store().await;

        insert_message(
            store.pool(),
            &MessageRow::inbound("m1", at(9, 0), "Ana", "+123").with_text("oi"),
        )
        .await
        .unwrap();
        insert_message(
            store.pool(),
            &MessageRow::outbound("m2", at(9, 5), "Ana", "+123").with_text("olá"),
        )
        .await
        .unwrap();
        insert_message(
            store.pool(),
            &MessageRow::inbound("m3", at(10, 0), "Bruno", "+456"),
        )
        .await
        .unwrap();

        let thread = load_thread(store.pool(), "Ana", "+123").await.unwrap();
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[0].direction, Direction::Received);
        assert_eq!(thread[1].direction, Direction::Sent);
        assert_eq!(thread[1].counterpart_name.as_deref(), Some("Ana"));
    }

    #[tokio::test]
    async fn test_thread_header_from_latest_row() {
        let store = test_store().await;

        let mut older = MessageRow::inbound("m1", at(9, 0), "Ana", "+123");
        older.responsible_name = Some("Dra. Paula".to_string());
        insert_message(store.pool(), &older).await.unwrap();

        let mut newer = MessageRow::inbound("m2", at(11, 0), "Ana", "+123");
        newer.responsible_name = Some("Dr. Marcos".to_string());
        newer.chat_url = Some("https://relay/chat/123".to_string());
        insert_message(store.pool(), &newer).await.unwrap();

        let header = thread_header(store.pool(), "Ana", "+123")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(header.responsible_name.as_deref(), Some("Dr. Marcos"));
        assert_eq!(header.chat_url.as_deref(), Some("https://relay/chat/123"));
    }

    #[tokio::test]
    async fn test_thread_header_unknown_counterpart() {
        let store = test_store().await;
        let header = thread_header(store.pool(), "Ninguém", "+000").await.unwrap();
        assert!(header.is_none());
    }

    #[tokio::test]
    async fn test_record_outbound_appends_to_thread() {
        let store = test_store().await;

        insert_message(
            store.pool(),
            &MessageRow::inbound("m1", at(9, 0), "Ana", "+123"),
        )
        .await
        .unwrap();
        record_outbound(store.pool(), "m2", at(9, 5), "Ana", "+123", "olá, Ana")
            .await
            .unwrap();

        let thread = load_thread(store.pool(), "Ana", "+123").await.unwrap();
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[1].direction, Direction::Sent);
        assert_eq!(thread[1].text.as_deref(), Some("olá, Ana"));
    }
}
