//! SQLite persistence layer for CRM message records.
//!
//! This crate is the "tabular data source" collaborator: it stores the raw
//! message export and hands validated [`crm_core::Message`] values to the
//! rest of the system. Validation happens once, here at the boundary.
//!
//! # Example
//!
//! ```no_run
//! use message_store::{message, Store};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let store = Store::connect("sqlite:crm.db?mode=rwc").await?;
//!     store.migrate().await?;
//!
//!     // Load every message, validated and time-ascending
//!     let messages = message::load_messages(store.pool()).await?;
//!     println!("{} messages", messages.len());
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod message;
pub mod row;

pub use error::{Result, StoreError};
pub use row::{MessageRow, ThreadHeader};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 20;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `sqlite::memory:` for tests.
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to message store: {} (pool size: {})", url, pool_size);

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// Call once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running message store migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crm_core::Direction;

    async fn test_store() -> Store {
        let store = Store::connect("sqlite::memory:").await.unwrap();
        store.migrate().await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_insert_and_load() {
        let store = test_store().await;
        let ts = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();

        let row = MessageRow::inbound("m1", ts, "Ana", "+5511999990000")
            .with_text("Bom dia, preciso de ajuda com um voo cancelado");
        message::insert_message(store.pool(), &row).await.unwrap();

        let messages = message::load_messages(store.pool()).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].uid, "m1");
        assert_eq!(messages[0].direction, Direction::Received);
        assert_eq!(messages[0].counterpart_name.as_deref(), Some("Ana"));
    }
}
