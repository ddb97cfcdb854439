//! MongoDB error mapping.
//!
//! Maps `mongodb::error::Error` to `RepositoryError`.

use mongodb::error::{Error, ErrorKind};
use quotebook_core::storage::RepositoryError;

/// Maps a driver error to a RepositoryError.
///
/// # Error Mapping
///
/// - `ServerSelection`, `Io`, `DnsResolve`, `ConnectionPoolCleared` → `RepositoryError::ConnectionFailed`
/// - `BsonDeserialization`, `BsonSerialization` → `RepositoryError::Serialization`
/// - All other errors → `RepositoryError::QueryFailed`
pub fn map_mongo_error(err: Error) -> RepositoryError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::DnsResolve { .. }
        | ErrorKind::ConnectionPoolCleared { .. } => {
            RepositoryError::ConnectionFailed(err.to_string())
        }
        ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
            RepositoryError::Serialization(err.to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
