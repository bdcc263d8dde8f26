//! Message store error types.

use thiserror::Error;

/// Errors that can occur during message store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLx error (connection, query, etc.)
    #[error("store error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored row failed boundary validation.
    #[error("invalid message record: {0}")]
    Schema(#[from] crm_core::SchemaError),
}

/// Result type for message store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
