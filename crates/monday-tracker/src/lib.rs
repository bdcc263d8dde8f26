//! Monday.com GraphQL client for lead updates.
//!
//! Leads live as Monday items; case notes are item updates. This crate
//! wraps the three operations the CRM needs: fetch an item's updates,
//! post a new update, and delete one.

mod client;
mod config;
mod error;
mod types;

pub use client::MondayClient;
pub use config::MondayConfig;
pub use error::TrackerError;
pub use types::{Creator, Item, Update};
