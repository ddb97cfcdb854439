use serde::{Deserialize, Serialize};

/// Request payload for recording a requested backend.
///
/// `db_type` is optional here so a missing field can be answered with a
/// JSON error body instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct SetDbType {
    #[serde(default, rename = "dbType")]
    pub db_type: Option<String>,
}

/// Response for the requested-backend echo.
#[derive(Debug, Serialize)]
pub struct RequestedBackend {
    /// Last value recorded via set-db-type.
    pub requested: Option<String>,
    /// Backend actually serving requests (`"unknown"` if unrecognised).
    pub active: String,
}
