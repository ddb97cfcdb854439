//! In-memory repository implementation.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quotebook_core::backend::BackendKind;
use quotebook_core::quote::{NewQuote, Quote, QuoteId};
use quotebook_core::storage::{QuoteRepository, RepositoryError, Result};

/// In-memory storage backend for testing.
///
/// Behaves like a relational backend: integer ids handed out in insertion
/// order, scans return quotes in id order.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    kind: BackendKind,
    quotes: Arc<RwLock<Vec<Quote>>>,
    next_id: Arc<AtomicI64>,
    available: Arc<AtomicBool>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new(BackendKind::Sqlite)
    }
}

impl InMemoryRepository {
    /// Creates a new empty repository posing as `kind`.
    pub fn new(kind: BackendKind) -> Self {
        Self {
            kind,
            quotes: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Simulates the backend going away (or coming back).
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(RepositoryError::ConnectionFailed(format!(
                "{} is unreachable",
                self.kind.display_name()
            )))
        }
    }
}

#[async_trait]
impl QuoteRepository for InMemoryRepository {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    async fn create(&self, quote: &NewQuote) -> Result<Quote> {
        self.check_available()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = quote.clone().into_quote(id);
        self.quotes.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn get_all(&self) -> Result<Vec<Quote>> {
        self.check_available()?;
        Ok(self.quotes.read().await.clone())
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.check_available()?;
        let id: i64 = id
            .trim()
            .parse()
            .map_err(|_| RepositoryError::InvalidId(id.to_string()))?;
        let id = QuoteId::Int(id);
        self.quotes.write().await.retain(|quote| quote.id != id);
        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        self.check_available()?;
        Ok(self.quotes.read().await.len() as u64)
    }

    async fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_quote(text: &str, sequence_number: i64) -> NewQuote {
        NewQuote {
            text: text.to_string(),
            submitted_at: "2024-05-01T10:00:00.000Z".to_string(),
            origin_address: "127.0.0.1".to_string(),
            sequence_number,
        }
    }

    #[tokio::test]
    async fn test_create_and_delete() {
        let repo = InMemoryRepository::default();
        let quote = repo.create(&new_quote("a", 1)).await.unwrap();
        repo.create(&new_quote("b", 2)).await.unwrap();

        repo.delete_by_id(&quote.id.to_string()).await.unwrap();

        let remaining = repo.get_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].text, "b");
    }

    #[tokio::test]
    async fn test_unavailable_repository_fails_with_connection_failed() {
        let repo = InMemoryRepository::new(BackendKind::Postgres);
        repo.set_available(false);

        assert!(!repo.is_available().await);
        assert!(matches!(
            repo.count().await,
            Err(RepositoryError::ConnectionFailed(_))
        ));
    }
}
