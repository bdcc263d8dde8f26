//! Inbox service layer for the Rosenbaum CRM.
//!
//! Ties the other crates together the way the dashboard consumes them:
//!
//! - [`InboxService`] - conversation listing over the message store
//!   (filtering, sorting, load-more pagination), thread views, sending,
//!   drafting, and Monday notes
//! - [`InboxFilter`] / [`SortBy`] - operator-facing list controls
//! - [`ThreadView`] / [`ResponseEntry`] - one counterpart's history and its
//!   response-time report
//! - [`MessageSender`] - transport seam, implemented for
//!   [`zapy_relay::RelayClient`] and by [`NoOpSender`] for tests
//!
//! The service owns no business rules of its own: grouping and pairing live
//! in `crm-core`, persistence in `message-store`, and this crate only
//! arranges them per request.

mod error;
mod filter;
mod sender;
mod service;
mod thread;

pub use error::InboxError;
pub use filter::{page, InboxFilter, SortBy};
pub use sender::{MessageSender, NoOpSender};
pub use service::InboxService;
pub use thread::{response_report, Attachment, ResponseEntry, ThreadView};
