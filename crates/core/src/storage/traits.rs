use async_trait::async_trait;

use crate::backend::BackendKind;
use crate::quote::{latest_quote, NewQuote, Quote};

use super::Result;

/// Uniform CRUD contract every storage backend implements.
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Which backend this repository talks to.
    fn kind(&self) -> BackendKind;

    /// Persists a stamped quote and returns it with the backend-assigned id.
    async fn create(&self, quote: &NewQuote) -> Result<Quote>;

    /// Returns every stored quote in backend-native order.
    async fn get_all(&self) -> Result<Vec<Quote>>;

    /// Returns the quote with the highest sequence number, if any.
    ///
    /// Sequence numbers are ordinary fields, so this scans everything and
    /// reduces. Ties go to the quote that comes last in `get_all` order.
    async fn get_latest(&self) -> Result<Option<Quote>> {
        let quotes = self.get_all().await?;
        Ok(latest_quote(quotes))
    }

    /// Deletes a quote by its textual id.
    ///
    /// Parsing of `id` is backend-specific. Deleting an id that is well formed
    /// but absent succeeds.
    async fn delete_by_id(&self, id: &str) -> Result<()>;

    /// Number of stored quotes.
    async fn count(&self) -> Result<u64>;

    /// Whether the backend is reachable right now. Never errors.
    async fn is_available(&self) -> bool;
}
