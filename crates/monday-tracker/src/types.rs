//! Monday.com GraphQL response types.

use serde::Deserialize;

/// A Monday item (a lead/case) with its updates.
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    /// Item id.
    pub id: String,
    /// Item title.
    pub name: String,
    /// Updates attached to the item, newest first as Monday returns them.
    #[serde(default)]
    pub updates: Vec<Update>,
}

/// A text update on an item.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    /// Update id.
    pub id: String,
    /// Update body (Monday returns HTML).
    pub body: String,
    /// Creation timestamp as reported by Monday.
    pub created_at: String,
    /// Who wrote the update.
    pub creator: Option<Creator>,
}

/// The author of an update.
#[derive(Debug, Clone, Deserialize)]
pub struct Creator {
    /// User id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Option<String>,
}
