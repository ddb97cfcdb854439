//! Postgres schema definitions and SQL query constants.

/// SQL statement to create the quotes table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS quotes (
    id BIGSERIAL PRIMARY KEY,
    quote TEXT NOT NULL,
    timestamp TEXT NOT NULL,
    ip TEXT NOT NULL,
    quote_number BIGINT NOT NULL
)
"#;

pub const INSERT_QUOTE: &str = r#"
INSERT INTO quotes (quote, timestamp, ip, quote_number)
VALUES ($1, $2, $3, $4)
RETURNING id
"#;

pub const SELECT_ALL_QUOTES: &str = r#"
SELECT id, quote, timestamp, ip, quote_number
FROM quotes
ORDER BY id ASC
"#;

pub const DELETE_QUOTE: &str = r#"
DELETE FROM quotes
WHERE id = $1
"#;

pub const COUNT_QUOTES: &str = "SELECT COUNT(*) FROM quotes";

pub const PING: &str = "SELECT 1";
