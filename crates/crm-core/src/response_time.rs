//! Response-time pairing.
//!
//! Pairs each inbound message with the next outbound message in the same
//! conversation and records the elapsed seconds. Used for SLA-style
//! reporting: how long did the agency take to answer?

use indexmap::IndexMap;
use tracing::warn;

use crate::message::{Direction, Message};

/// Compute response times for one conversation's messages.
///
/// Input order does not matter; messages are sorted time-ascending first.
/// A single forward scan carries one piece of state, the last still-open
/// inbound message:
///
/// - a `received` message opens (or replaces) the slot; an earlier inbound
///   message that was never answered is simply dropped from the result,
/// - a `sent` message closes the slot and records the elapsed seconds keyed
///   by the inbound message's uid,
/// - a `sent` message with no open slot (a proactive follow-up) records
///   nothing.
///
/// Inbound messages absent from the result are still awaiting a response.
/// Negative differences (clock skew, bad data) clamp to zero with a warning
/// so reports stay monotonic.
pub fn response_times(messages: &[Message]) -> IndexMap<String, i64> {
    let mut ordered: Vec<&Message> = messages.iter().collect();
    ordered.sort_by_key(|m| m.created_at);

    let mut times = IndexMap::new();
    let mut open: Option<&Message> = None;

    for message in ordered {
        match message.direction {
            Direction::Received => open = Some(message),
            Direction::Sent => {
                if let Some(inbound) = open.take() {
                    let mut seconds = (message.created_at - inbound.created_at).num_seconds();
                    if seconds < 0 {
                        warn!(
                            inbound_uid = %inbound.uid,
                            outbound_uid = %message.uid,
                            seconds,
                            "negative response time, clamping to zero"
                        );
                        seconds = 0;
                    }
                    times.insert(inbound.uid.clone(), seconds);
                }
            }
        }
    }

    times
}
