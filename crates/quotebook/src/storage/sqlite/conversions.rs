//! SQLite row conversion functions.

use quotebook_core::quote::{Quote, QuoteId};
use quotebook_core::storage::RepositoryError;
use rusqlite::Row;

/// Convert a SQLite row to a Quote.
///
/// Expected columns: id, quote, timestamp, ip, quote_number
pub fn row_to_quote(row: &Row) -> rusqlite::Result<Quote> {
    let id: i64 = row.get(0)?;
    let text: String = row.get(1)?;
    let submitted_at: String = row.get(2)?;
    let origin_address: String = row.get(3)?;
    let sequence_number: i64 = row.get(4)?;

    Ok(Quote {
        id: QuoteId::Int(id),
        text,
        submitted_at,
        origin_address,
        sequence_number,
    })
}

/// Parse a path id into the integer primary key.
pub fn parse_quote_id(id: &str) -> Result<i64, RepositoryError> {
    id.trim()
        .parse::<i64>()
        .map_err(|_| RepositoryError::InvalidId(id.to_string()))
}

/// `COUNT(*)` comes back signed; clamp anything negative to zero.
pub fn count_from_sql(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}
