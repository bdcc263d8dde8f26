//! HTTP client for the Zapy WhatsApp relay.
//!
//! The relay is the agency's outbound transport: it exposes a send endpoint
//! and a status endpoint per account. This crate wraps both behind
//! [`RelayClient`]; receiving happens upstream (the relay exports received
//! messages into the tabular store, not to us).

mod client;
mod config;
mod error;

pub use client::{RelayClient, SendOutcome};
pub use config::RelayConfig;
pub use error::RelayError;
