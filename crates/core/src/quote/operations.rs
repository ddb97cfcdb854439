//! Pure functions over quotes.
//!
//! Nothing in here touches storage; the service layer feeds these with
//! whatever the active backend returned.

use std::net::SocketAddr;

use chrono::{DateTime, SecondsFormat, Utc};

use super::Quote;

/// Returns the quote with the highest sequence number.
///
/// Quotes sharing the maximum sequence number are resolved in favour of the
/// one that comes last in `quotes`, i.e. last in backend scan order.
pub fn latest_quote(quotes: Vec<Quote>) -> Option<Quote> {
    quotes.into_iter().max_by_key(|quote| quote.sequence_number)
}

/// Sequence number for the next quote given the current stored count.
pub fn next_sequence_number(count: u64) -> i64 {
    i64::try_from(count).map_or(i64::MAX, |count| count.saturating_add(1))
}

/// Derives the submitting client's address.
///
/// Uses the first hop of `X-Forwarded-For` when the header is present and
/// non-empty, otherwise the peer address of the connection.
pub fn origin_address(forwarded_for: Option<&str>, peer: Option<SocketAddr>) -> String {
    let forwarded = forwarded_for
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty());

    match (forwarded, peer) {
        (Some(forwarded), _) => forwarded.to_string(),
        (None, Some(peer)) => peer.ip().to_string(),
        (None, None) => "unknown".to_string(),
    }
}

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2024-05-01T10:00:00.123Z`.
pub fn submission_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}
