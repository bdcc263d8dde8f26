//! Conversation list controls: filtering, sorting, pagination.

use chrono::NaiveDate;
use crm_core::{report_date, ConversationSummary};

/// Operator-facing filters for the conversation list.
///
/// Text filters are case-insensitive substring matches; the date range is
/// inclusive on both ends and compares the conversation's last activity in
/// the fixed report offset.
#[derive(Debug, Clone, Default)]
pub struct InboxFilter {
    /// Substring to look for in the counterpart name.
    pub name_contains: Option<String>,
    /// Substring to look for in the counterpart phone.
    pub phone_contains: Option<String>,
    /// Earliest last-activity civil date to keep.
    pub from: Option<NaiveDate>,
    /// Latest last-activity civil date to keep.
    pub to: Option<NaiveDate>,
}

impl InboxFilter {
    /// Keep everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Does a summary pass this filter?
    pub fn matches(&self, summary: &ConversationSummary) -> bool {
        if let Some(needle) = &self.name_contains {
            let haystack = summary.counterpart.name.to_lowercase();
            if !haystack.contains(&needle.to_lowercase()) {
                return false;
            }
        }

        if let Some(needle) = &self.phone_contains {
            let haystack = summary.counterpart.phone.to_lowercase();
            if !haystack.contains(&needle.to_lowercase()) {
                return false;
            }
        }

        let date = report_date(summary.last_message_at);
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }

        true
    }

    /// Apply the filter, preserving order.
    pub fn apply(&self, summaries: Vec<ConversationSummary>) -> Vec<ConversationSummary> {
        summaries.into_iter().filter(|s| self.matches(s)).collect()
    }
}

/// Sort orders offered for the conversation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Most recent activity first (the inbox default).
    #[default]
    LastMessageDesc,
    /// Oldest activity first.
    LastMessageAsc,
    /// Busiest conversation first.
    ReceivedCountDesc,
    /// Quietest conversation first.
    ReceivedCountAsc,
}

impl SortBy {
    /// Sort summaries in place. All orders use a stable sort, so ties keep
    /// their existing relative order across repeated runs.
    pub fn sort(&self, summaries: &mut [ConversationSummary]) {
        match self {
            Self::LastMessageDesc => {
                summaries.sort_by(|a, b| b.last_message_at.cmp(&a.last_message_at))
            }
            Self::LastMessageAsc => {
                summaries.sort_by(|a, b| a.last_message_at.cmp(&b.last_message_at))
            }
            Self::ReceivedCountDesc => {
                summaries.sort_by(|a, b| b.received_count.cmp(&a.received_count))
            }
            Self::ReceivedCountAsc => {
                summaries.sort_by(|a, b| a.received_count.cmp(&b.received_count))
            }
        }
    }
}

/// "Load more" pagination: the first `display_count` summaries.
pub fn page(summaries: &[ConversationSummary], display_count: usize) -> &[ConversationSummary] {
    &summaries[..display_count.min(summaries.len())]
}
