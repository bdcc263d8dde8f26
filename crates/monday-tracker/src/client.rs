//! Monday.com GraphQL client.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::config::MondayConfig;
use crate::error::TrackerError;
use crate::types::{Item, Update};

/// A GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

/// A GraphQL-level error.
#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ItemsData {
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct CreateUpdateData {
    create_update: Update,
}

#[derive(Debug, Deserialize)]
struct DeleteUpdateData {
    #[allow(dead_code)]
    delete_update: DeletedUpdate,
}

#[derive(Debug, Deserialize)]
struct DeletedUpdate {
    #[allow(dead_code)]
    id: String,
}

/// Client for the Monday.com GraphQL API.
#[derive(Clone)]
pub struct MondayClient {
    http: Client,
    config: MondayConfig,
}

impl MondayClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MondayConfig) -> Result<Self, TrackerError> {
        if config.api_key.is_empty() {
            return Err(TrackerError::Config("API key is empty".to_string()));
        }

        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(TrackerError::Http)?;

        Ok(Self { http, config })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Result<Self, TrackerError> {
        Self::new(MondayConfig::from_env()?)
    }

    /// Execute a GraphQL query with variables and unwrap the data section.
    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<T, TrackerError> {
        debug!("Monday GraphQL request");

        let response = self
            .http
            .post(&self.config.api_url)
            .header("Authorization", &self.config.api_key)
            .header("API-Version", &self.config.api_version)
            .header("Content-Type", "application/json")
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TrackerError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GraphQlResponse<T> = response.json().await?;

        if let Some(error) = envelope.errors.first() {
            return Err(TrackerError::GraphQl(error.message.clone()));
        }

        envelope.data.ok_or(TrackerError::MissingData)
    }

    /// Fetch updates for specific items, up to `limit` updates per item.
    pub async fn fetch_updates(
        &self,
        item_ids: &[String],
        limit: usize,
    ) -> Result<Vec<Item>, TrackerError> {
        let query = r#"
            query ($itemIds: [ID!], $limit: Int) {
                items(ids: $itemIds) {
                    id
                    name
                    updates(limit: $limit) {
                        id
                        body
                        created_at
                        creator {
                            id
                            name
                            email
                        }
                    }
                }
            }
        "#;

        let data: ItemsData = self
            .execute(query, json!({ "itemIds": item_ids, "limit": limit }))
            .await?;

        Ok(data.items)
    }

    /// Post a text update on an item.
    pub async fn create_update(
        &self,
        item_id: &str,
        body: &str,
    ) -> Result<Update, TrackerError> {
        let query = r#"
            mutation ($itemId: ID!, $body: String!) {
                create_update(item_id: $itemId, body: $body) {
                    id
                    body
                    created_at
                }
            }
        "#;

        let data: CreateUpdateData = self
            .execute(query, json!({ "itemId": item_id, "body": body }))
            .await?;

        info!(item_id, update_id = %data.create_update.id, "created Monday update");
        Ok(data.create_update)
    }

    /// Delete an update by id.
    pub async fn delete_update(&self, update_id: &str) -> Result<(), TrackerError> {
        let query = r#"
            mutation ($id: ID!) {
                delete_update(id: $id) {
                    id
                }
            }
        "#;

        let _: DeleteUpdateData = self.execute(query, json!({ "id": update_id })).await?;

        info!(update_id, "deleted Monday update");
        Ok(())
    }
}
