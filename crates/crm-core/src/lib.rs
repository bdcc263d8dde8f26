//! Core types and computations for the Rosenbaum CRM.
//!
//! This crate provides the shared message model and the two pure
//! computations the dashboard is built on:
//!
//! - [`Message`] / [`RawMessage`] - Validated and unvalidated message records
//! - [`aggregate`] - Group messages into per-counterpart conversation summaries
//! - [`response_times`] - Pair inbound messages with the outbound replies that
//!   closed them
//! - [`format_duration`] - Bucket a duration into a human-readable label
//!
//! Everything here is synchronous and side-effect free. I/O (loading records,
//! sending messages, calling the assistant) lives in the sibling crates.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use crm_core::{aggregate, response_times, Message};
//!
//! let t0 = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
//! let t1 = Utc.with_ymd_and_hms(2025, 3, 10, 9, 5, 0).unwrap();
//!
//! let messages = vec![
//!     Message::received("m1", t0, "Ana", "+5511999990000"),
//!     Message::sent("m2", t1, "Ana", "+5511999990000"),
//! ];
//!
//! let summaries = aggregate(&messages);
//! assert_eq!(summaries.len(), 1);
//! assert_eq!(summaries[0].received_count, 1);
//!
//! let times = response_times(&messages);
//! assert_eq!(times["m1"], 300);
//! ```

mod aggregate;
mod error;
mod format;
mod message;
mod response_time;

pub use aggregate::{aggregate, ConversationSummary};
pub use error::SchemaError;
pub use format::{format_duration, format_timestamp, report_date, REPORT_OFFSET_HOURS};
pub use message::{CounterpartKey, Direction, Message, RawMessage};
pub use response_time::response_times;
