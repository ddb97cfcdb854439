//! Postgres row conversion functions.

use quotebook_core::quote::{Quote, QuoteId};
use quotebook_core::storage::RepositoryError;
use sqlx::postgres::PgRow;
use sqlx::Row;

/// Convert a Postgres row to a Quote.
///
/// Expected columns: id, quote, timestamp, ip, quote_number
pub fn row_to_quote(row: &PgRow) -> Result<Quote, RepositoryError> {
    let id: i64 = row.try_get("id").map_err(decode_error)?;
    let text: String = row.try_get("quote").map_err(decode_error)?;
    let submitted_at: String = row.try_get("timestamp").map_err(decode_error)?;
    let origin_address: String = row.try_get("ip").map_err(decode_error)?;
    let sequence_number: i64 = row.try_get("quote_number").map_err(decode_error)?;

    Ok(Quote {
        id: QuoteId::Int(id),
        text,
        submitted_at,
        origin_address,
        sequence_number,
    })
}

fn decode_error(err: sqlx::Error) -> RepositoryError {
    RepositoryError::Serialization(err.to_string())
}

/// Parse a path id into the `BIGSERIAL` primary key.
pub fn parse_quote_id(id: &str) -> Result<i64, RepositoryError> {
    id.trim()
        .parse::<i64>()
        .map_err(|_| RepositoryError::InvalidId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quote_id() {
        assert_eq!(parse_quote_id("12"), Ok(12));
        assert_eq!(
            parse_quote_id("12a"),
            Err(RepositoryError::InvalidId("12a".to_string()))
        );
    }
}
