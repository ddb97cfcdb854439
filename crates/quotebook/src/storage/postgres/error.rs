//! Postgres error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError`. Anything that means the server
//! could not be reached becomes `ConnectionFailed`; everything else is a
//! failed query.

use quotebook_core::storage::RepositoryError;

/// Maps a sqlx error to a RepositoryError.
///
/// # Error Mapping
///
/// - `Io`, `Tls`, `PoolTimedOut`, `PoolClosed`, `WorkerCrashed` → `RepositoryError::ConnectionFailed`
/// - `RowNotFound`, `Database`, and all other errors → `RepositoryError::QueryFailed`
/// - `ColumnDecode`, `Decode` → `RepositoryError::Serialization`
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => RepositoryError::ConnectionFailed(err.to_string()),
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            RepositoryError::Serialization(err.to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
