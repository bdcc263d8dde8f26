//! The inbox service.

use chrono::Utc;
use crm_core::{aggregate, ConversationSummary};
use grok_assistant::GrokAssistant;
use message_store::{message, Store};
use monday_tracker::{MondayClient, Update};
use tracing::{debug, info};
use uuid::Uuid;
use zapy_relay::SendOutcome;

use crate::error::InboxError;
use crate::filter::{InboxFilter, SortBy};
use crate::sender::MessageSender;
use crate::thread::ThreadView;

/// Request-scoped facade over the message store and the external clients.
///
/// Holds no session state: every call reloads from the store, so two
/// operators looking at the same inbox see the same rows.
#[derive(Debug, Clone)]
pub struct InboxService {
    store: Store,
}

impl InboxService {
    /// Create a service over a connected store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Get the underlying store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// List conversations: aggregate, filter, sort.
    ///
    /// Callers paginate the result with [`crate::page`].
    pub async fn conversations(
        &self,
        filter: &InboxFilter,
        sort: SortBy,
    ) -> Result<Vec<ConversationSummary>, InboxError> {
        let messages = message::load_messages(self.store.pool()).await?;
        debug!(count = messages.len(), "loaded messages for aggregation");

        let mut summaries = filter.apply(aggregate(&messages));
        sort.sort(&mut summaries);
        Ok(summaries)
    }

    /// Load one counterpart's thread view.
    pub async fn thread(&self, name: &str, phone: &str) -> Result<ThreadView, InboxError> {
        let messages = message::load_thread(self.store.pool(), name, phone).await?;
        if messages.is_empty() {
            return Err(InboxError::UnknownCounterpart(format!("{} ({})", name, phone)));
        }

        let header = message::thread_header(self.store.pool(), name, phone).await?;
        Ok(ThreadView::new(header, messages))
    }

    /// Send a message to a counterpart and record it locally.
    ///
    /// The outbound row is only appended once the relay reports success, so
    /// the thread never shows a message the client did not get.
    pub async fn send_and_record(
        &self,
        sender: &dyn MessageSender,
        name: &str,
        phone: &str,
        body: &str,
    ) -> Result<SendOutcome, InboxError> {
        let outcome = sender.send_text(phone, body).await?;
        if !outcome.success {
            return Err(InboxError::SendRejected(outcome.status));
        }

        let uid = Uuid::new_v4().to_string();
        message::record_outbound(self.store.pool(), &uid, Utc::now(), name, phone, body).await?;

        info!(phone, uid, "message sent and recorded");
        Ok(outcome)
    }

    /// Answer a free-form question about a counterpart's conversation.
    pub async fn draft_answer(
        &self,
        assistant: &GrokAssistant,
        name: &str,
        phone: &str,
        question: &str,
    ) -> Result<String, InboxError> {
        let thread = self.thread(name, phone).await?;
        Ok(assistant.answer_question(&thread.messages, question).await?)
    }

    /// Suggest a reply to the counterpart's last message.
    pub async fn draft_reply(
        &self,
        assistant: &GrokAssistant,
        name: &str,
        phone: &str,
    ) -> Result<String, InboxError> {
        let thread = self.thread(name, phone).await?;
        Ok(assistant.suggest_reply(&thread.messages).await?)
    }

    /// Build a document checklist for the counterpart's case.
    pub async fn draft_documents_checklist(
        &self,
        assistant: &GrokAssistant,
        name: &str,
        phone: &str,
    ) -> Result<String, InboxError> {
        let thread = self.thread(name, phone).await?;
        Ok(assistant.documents_checklist(&thread.messages).await?)
    }

    /// Score the counterpart's case.
    pub async fn draft_case_analysis(
        &self,
        assistant: &GrokAssistant,
        name: &str,
        phone: &str,
    ) -> Result<String, InboxError> {
        let thread = self.thread(name, phone).await?;
        Ok(assistant.case_analysis(&thread.messages).await?)
    }

    /// Post a note about a thread on its linked Monday item.
    pub async fn push_thread_note(
        &self,
        tracker: &MondayClient,
        item_id: &str,
        note: &str,
    ) -> Result<Update, InboxError> {
        Ok(tracker.create_update(item_id, note).await?)
    }
}
