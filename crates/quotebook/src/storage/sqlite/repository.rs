//! SQLite repository implementation.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use quotebook_core::backend::BackendKind;
use quotebook_core::quote::{NewQuote, Quote};
use quotebook_core::storage::{QuoteRepository, RepositoryError, Result};

use super::conversions::{count_from_sql, parse_quote_id, row_to_quote};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based quote repository.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl QuoteRepository for SqliteRepository {
    fn kind(&self) -> BackendKind {
        BackendKind::Sqlite
    }

    async fn create(&self, quote: &NewQuote) -> Result<Quote> {
        let text = quote.text.clone();
        let submitted_at = quote.submitted_at.clone();
        let origin_address = quote.origin_address.clone();
        let sequence_number = quote.sequence_number;

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_QUOTE,
                    rusqlite::params![text, submitted_at, origin_address, sequence_number],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        Ok(quote.clone().into_quote(id))
    }

    async fn get_all(&self) -> Result<Vec<Quote>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_QUOTES).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_quote).map_err(wrap_err)?;

                let mut quotes = Vec::new();
                for row_result in rows {
                    quotes.push(row_result.map_err(wrap_err)?);
                }
                Ok(quotes)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let id = parse_quote_id(id)?;

        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_QUOTE, [id]).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn count(&self) -> Result<u64> {
        let count = self
            .conn
            .call(|conn| {
                conn.query_row(schema::COUNT_QUOTES, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        Ok(count_from_sql(count))
    }

    async fn is_available(&self) -> bool {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)
            })
            .await
            .is_ok()
    }
}
