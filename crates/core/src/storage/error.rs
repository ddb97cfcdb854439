use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// `ConnectionFailed` is the backend-unavailable signal: the store could not be
/// reached, or no adapter is bound for it. Every other variant is a
/// persistence failure on a reachable store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid quote id: {0}")]
    InvalidId(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    /// True when the error means the backend is unreachable or unbound.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, RepositoryError::ConnectionFailed(_))
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
