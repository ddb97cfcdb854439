//! Application state and the backend registry.
//!
//! The registry holds at most one adapter per backend kind. Only the backend
//! selected at startup is constructed; every other slot stays `None`, which
//! the service reports as unavailable.

use std::sync::Arc;

use quotebook_core::backend::{select_backend, BackendKind};
use quotebook_core::storage::{QuoteRepository, RepositoryError};

use crate::config::Config;
use crate::service::QuoteService;

/// Constructed storage adapters, keyed by backend kind.
#[derive(Clone, Default)]
pub struct BackendRegistry {
    sqlite: Option<Arc<dyn QuoteRepository>>,
    postgres: Option<Arc<dyn QuoteRepository>>,
    mongo: Option<Arc<dyn QuoteRepository>>,
}

impl BackendRegistry {
    /// Creates a registry with no adapters bound.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Binds `repository` into the slot for its own kind.
    pub fn with(mut self, repository: Arc<dyn QuoteRepository>) -> Self {
        match repository.kind() {
            BackendKind::Sqlite => self.sqlite = Some(repository),
            BackendKind::Postgres => self.postgres = Some(repository),
            BackendKind::Mongo => self.mongo = Some(repository),
        }
        self
    }

    /// Looks up the adapter for `kind`. `None` means it was never bound.
    pub fn get(&self, kind: BackendKind) -> Option<Arc<dyn QuoteRepository>> {
        match kind {
            BackendKind::Sqlite => self.sqlite.clone(),
            BackendKind::Postgres => self.postgres.clone(),
            BackendKind::Mongo => self.mongo.clone(),
        }
    }

    /// Builds the adapter for the configured backend.
    ///
    /// Construction failures are logged and leave the registry empty; the
    /// process keeps serving and reports the backend as unavailable.
    pub async fn connect(config: &Config) -> Self {
        let kind = match select_backend(config.db_type.as_deref()) {
            Ok(kind) => kind,
            Err(err) => {
                tracing::warn!(error = %err, "No storage backend bound");
                return Self::empty();
            }
        };

        match connect_backend(kind, config).await {
            Ok(repository) => {
                tracing::info!(backend = %kind, "Storage backend bound");
                Self::empty().with(repository)
            }
            Err(err) => {
                tracing::warn!(backend = %kind, error = %err, "Failed to bind storage backend");
                Self::empty()
            }
        }
    }
}

async fn connect_backend(
    kind: BackendKind,
    config: &Config,
) -> Result<Arc<dyn QuoteRepository>, RepositoryError> {
    match kind {
        #[cfg(feature = "sqlite")]
        BackendKind::Sqlite => {
            let repository = crate::storage::SqliteRepository::new(&config.sqlite_path).await?;
            Ok(Arc::new(repository))
        }
        #[cfg(feature = "postgres")]
        BackendKind::Postgres => {
            let repository = crate::storage::PostgresRepository::connect_lazy(
                &config.postgres_url,
                config.connect_timeout(),
            )?;
            Ok(Arc::new(repository))
        }
        #[cfg(feature = "mongo")]
        BackendKind::Mongo => {
            let repository = crate::storage::MongoRepository::connect(
                &config.mongo_uri,
                &config.mongo_database,
                config.connect_timeout(),
            )
            .await?;
            Ok(Arc::new(repository))
        }
        #[allow(unreachable_patterns)]
        other => Err(RepositoryError::ConnectionFailed(format!(
            "{} support is not compiled into this build",
            other.display_name()
        ))),
    }
}

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub quotes: Arc<QuoteService>,
}

impl AppState {
    /// Creates AppState, binding the configured storage backend.
    pub async fn new(config: Config) -> Self {
        let registry = BackendRegistry::connect(&config).await;
        Self::build(config, registry)
    }

    /// Creates AppState over an already built registry.
    pub fn build(config: Config, registry: BackendRegistry) -> Self {
        let quotes = QuoteService::new(config.db_type.clone(), registry);
        Self {
            config: Arc::new(config),
            quotes: Arc::new(quotes),
        }
    }
}

// ============================================================================
// Test support
// ============================================================================
