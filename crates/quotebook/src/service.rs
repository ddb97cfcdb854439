//! Quote service.
//!
//! Resolves the active backend for every call, looks the adapter up in the
//! registry and delegates. Status reporting is the one operation that never
//! fails.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use quotebook_core::backend::{select_backend, BackendKind, UnknownBackend};
use quotebook_core::quote::{next_sequence_number, submission_timestamp, NewQuote, Quote};
use quotebook_core::storage::{
    repository_error_to_status_code, unknown_backend_status_code, QuoteRepository,
    RepositoryError,
};

use crate::state::BackendRegistry;

/// Errors surfaced by quote operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    UnknownBackend(#[from] UnknownBackend),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::UnknownBackend(err) => unknown_backend_status_code(err),
            ServiceError::Repository(err) => repository_error_to_status_code(err),
        }
    }
}

/// Connectivity report for the active backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DbStatus {
    #[serde(rename = "type")]
    pub backend_type: String,
    /// `"true"` or `"false"`; the frontend reads a string.
    pub connected: String,
    pub message: String,
}

impl DbStatus {
    fn new(backend_type: impl Into<String>, connected: bool, message: String) -> Self {
        Self {
            backend_type: backend_type.into(),
            connected: connected.to_string(),
            message,
        }
    }
}

pub struct QuoteService {
    db_type: Option<String>,
    registry: BackendRegistry,
    requested_backend: RwLock<Option<String>>,
}

impl QuoteService {
    pub fn new(db_type: Option<String>, registry: BackendRegistry) -> Self {
        Self {
            db_type,
            registry,
            requested_backend: RwLock::new(None),
        }
    }

    /// The backend the configured value selects.
    pub fn active_backend(&self) -> Result<BackendKind, UnknownBackend> {
        select_backend(self.db_type.as_deref())
    }

    fn repository(&self) -> Result<Arc<dyn QuoteRepository>, ServiceError> {
        let kind = self.active_backend()?;
        self.registry.get(kind).ok_or_else(|| {
            RepositoryError::ConnectionFailed(format!(
                "{} repository unavailable",
                kind.display_name()
            ))
            .into()
        })
    }

    /// Stamps and persists a new quote.
    ///
    /// The sequence number is read from the current count before the write.
    /// Two concurrent creates can observe the same count.
    pub async fn create(&self, text: String, origin_address: String) -> Result<Quote, ServiceError> {
        let repository = self.repository()?;
        let count = repository.count().await?;

        let new_quote = NewQuote {
            text,
            submitted_at: submission_timestamp(Utc::now()),
            origin_address,
            sequence_number: next_sequence_number(count),
        };

        let quote = repository.create(&new_quote).await?;
        tracing::info!(
            backend = %repository.kind(),
            quote_id = %quote.id,
            sequence_number = quote.sequence_number,
            "Created quote"
        );
        Ok(quote)
    }

    pub async fn list(&self) -> Result<Vec<Quote>, ServiceError> {
        Ok(self.repository()?.get_all().await?)
    }

    pub async fn latest(&self) -> Result<Option<Quote>, ServiceError> {
        Ok(self.repository()?.get_latest().await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let repository = self.repository()?;
        repository.delete_by_id(id).await?;
        tracing::info!(backend = %repository.kind(), quote_id = %id, "Deleted quote");
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.repository()?.count().await?)
    }

    /// Reports whether the active backend is reachable. Never fails.
    pub async fn status(&self) -> DbStatus {
        let kind = match self.active_backend() {
            Ok(kind) => kind,
            Err(err) => {
                return DbStatus::new(
                    "unknown",
                    false,
                    format!("Unknown DB_TYPE '{}'", err.0),
                )
            }
        };

        let Some(repository) = self.registry.get(kind) else {
            return DbStatus::new(
                kind.as_str(),
                false,
                format!("{} repository unavailable", kind.display_name()),
            );
        };

        if repository.is_available().await {
            DbStatus::new(
                kind.as_str(),
                true,
                format!("Connected to {}", kind.display_name()),
            )
        } else {
            DbStatus::new(
                kind.as_str(),
                false,
                format!("{} unreachable at configured address", kind.display_name()),
            )
        }
    }

    /// Records a requested backend. Has no effect on the bound adapters.
    pub fn request_backend(&self, value: &str) -> String {
        *self
            .requested_backend
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(value.to_string());
        tracing::info!(requested = %value, "Recorded requested backend");

        format!(
            "Requested DB type set to '{value}'. To apply, restart the service with DB_TYPE={value}."
        )
    }

    /// The most recently requested backend, if any.
    pub fn requested_backend(&self) -> Option<String> {
        self.requested_backend
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Logs the active backend and its current quote count.
    pub async fn log_startup(&self) {
        let kind = match self.active_backend() {
            Ok(kind) => kind,
            Err(err) => {
                tracing::warn!(error = %err, "Configured backend is not recognised");
                return;
            }
        };

        match self.count().await {
            Ok(count) => tracing::info!(backend = %kind, count, "Quote store ready"),
            Err(err) => tracing::warn!(backend = %kind, error = %err, "Quote store not ready"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryRepository;

    fn service(db_type: Option<&str>, repository: Option<InMemoryRepository>) -> QuoteService {
        let registry = match repository {
            Some(repository) => BackendRegistry::empty().with(Arc::new(repository)),
            None => BackendRegistry::empty(),
        };
        QuoteService::new(db_type.map(str::to_string), registry)
    }

    #[tokio::test]
    async fn test_create_assigns_sequence_from_count() {
        let service = service(None, Some(InMemoryRepository::default()));

        let hello = service
            .create("hello".to_string(), "10.0.0.1".to_string())
            .await
            .unwrap();
        let world = service
            .create("world".to_string(), "10.0.0.2".to_string())
            .await
            .unwrap();

        assert_eq!(hello.sequence_number, 1);
        assert_eq!(world.sequence_number, 2);
        assert_eq!(world.origin_address, "10.0.0.2");
        assert!(world.submitted_at.ends_with('Z'));

        let latest = service.latest().await.unwrap().unwrap();
        assert_eq!(latest.text, "world");
    }

    #[tokio::test]
    async fn test_count_after_creates_and_deletes() {
        let service = service(None, Some(InMemoryRepository::default()));

        let mut ids = Vec::new();
        for text in ["a", "b", "c"] {
            let quote = service
                .create(text.to_string(), "127.0.0.1".to_string())
                .await
                .unwrap();
            ids.push(quote.id.to_string());
        }
        service.delete(&ids[0]).await.unwrap();

        assert_eq!(service.count().await.unwrap(), 2);
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_sequence_reuses_count_after_delete() {
        let service = service(None, Some(InMemoryRepository::default()));

        let first = service
            .create("first".to_string(), "127.0.0.1".to_string())
            .await
            .unwrap();
        service
            .create("second".to_string(), "127.0.0.1".to_string())
            .await
            .unwrap();
        service.delete(&first.id.to_string()).await.unwrap();

        let third = service
            .create("third".to_string(), "127.0.0.1".to_string())
            .await
            .unwrap();

        assert_eq!(third.sequence_number, 2);
    }

    #[tokio::test]
    async fn test_unknown_backend_fails_every_operation() {
        let service = service(Some("cassandra"), Some(InMemoryRepository::default()));

        let err = service.list().await.unwrap_err();
        assert!(matches!(err, ServiceError::UnknownBackend(_)));
        assert_eq!(err.status_code(), 400);

        let err = service
            .create("x".to_string(), "127.0.0.1".to_string())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);

        assert_eq!(service.delete("1").await.unwrap_err().status_code(), 400);
        assert_eq!(service.latest().await.unwrap_err().status_code(), 400);
    }

    #[tokio::test]
    async fn test_unregistered_backend_is_unavailable() {
        let service = service(Some("mongo"), Some(InMemoryRepository::default()));

        let err = service.list().await.unwrap_err();

        assert_eq!(err.status_code(), 503);
        assert_eq!(
            err.to_string(),
            "Connection failed: MongoDB repository unavailable"
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_unavailable() {
        let repository = InMemoryRepository::new(BackendKind::Postgres);
        repository.set_available(false);
        let service = service(Some("postgres"), Some(repository));

        let err = service
            .create("hello".to_string(), "127.0.0.1".to_string())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 503);
    }

    #[tokio::test]
    async fn test_status_connected() {
        let service = service(Some("sqlite"), Some(InMemoryRepository::default()));

        let status = service.status().await;

        assert_eq!(
            status,
            DbStatus {
                backend_type: "sqlite".to_string(),
                connected: "true".to_string(),
                message: "Connected to SQLite".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_status_unknown_backend() {
        let service = service(Some("cassandra"), None);

        let status = service.status().await;

        assert_eq!(status.backend_type, "unknown");
        assert_eq!(status.connected, "false");
        assert!(status.message.contains("cassandra"));
    }

    #[tokio::test]
    async fn test_status_unregistered_backend() {
        let service = service(Some("postgres"), None);

        let status = service.status().await;

        assert_eq!(status.backend_type, "postgres");
        assert_eq!(status.connected, "false");
        assert_eq!(status.message, "Postgres repository unavailable");
    }

    #[tokio::test]
    async fn test_status_unreachable_backend() {
        let repository = InMemoryRepository::new(BackendKind::Mongo);
        repository.set_available(false);
        let service = service(Some("mongodb"), Some(repository));

        let status = service.status().await;

        assert_eq!(status.backend_type, "mongo");
        assert_eq!(status.connected, "false");
        assert_eq!(status.message, "MongoDB unreachable at configured address");
    }

    #[test]
    fn test_requested_backend_is_inert() {
        let service = service(None, Some(InMemoryRepository::default()));
        assert_eq!(service.requested_backend(), None);

        let message = service.request_backend("mongo");

        assert!(message.contains("DB_TYPE=mongo"));
        assert_eq!(service.requested_backend(), Some("mongo".to_string()));
        assert_eq!(service.active_backend(), Ok(BackendKind::Sqlite));
    }

    #[test]
    fn test_requested_backend_survives_poisoned_lock() {
        let service = service(None, Some(InMemoryRepository::default()));

        let poisoned = std::thread::scope(|scope| {
            scope
                .spawn(|| {
                    let _guard = service.requested_backend.write().unwrap();
                    panic!("writer panicked while holding the lock");
                })
                .join()
        });
        assert!(poisoned.is_err());
        assert!(service.requested_backend.is_poisoned());

        service.request_backend("postgres");

        assert_eq!(service.requested_backend(), Some("postgres".to_string()));
    }

    #[test]
    fn test_status_serializes_type_and_string_connected() {
        let status = DbStatus::new("sqlite", true, "Connected to SQLite".to_string());

        let json = serde_json::to_value(&status).unwrap();

        assert_eq!(json["type"], "sqlite");
        assert_eq!(json["connected"], "true");
    }
}
