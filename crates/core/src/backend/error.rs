use thiserror::Error;

/// The configured backend identifier is not one we know how to serve.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown backend type: {0}")]
pub struct UnknownBackend(pub String);
