//! Inert backend override.
//!
//! Records which backend an operator asked for. Switching backends still
//! requires a restart with a new `DB_TYPE`.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::error::error_response;
use crate::{
    models::{RequestedBackend, SetDbType},
    state::AppState,
};

/// POST /api/admin/set-db-type
pub async fn set_db_type(
    State(state): State<AppState>,
    payload: Result<Json<SetDbType>, JsonRejection>,
) -> Response {
    let db_type = payload
        .ok()
        .and_then(|Json(payload)| payload.db_type)
        .filter(|value| !value.trim().is_empty());

    let Some(db_type) = db_type else {
        return error_response(StatusCode::BAD_REQUEST, "dbType is required");
    };

    let message = state.quotes.request_backend(db_type.trim());
    Json(json!({ "message": message })).into_response()
}

/// GET /api/admin/requested-db-type
pub async fn requested_db_type(State(state): State<AppState>) -> Json<RequestedBackend> {
    let active = state
        .quotes
        .active_backend()
        .map(|kind| kind.as_str().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    Json(RequestedBackend {
        requested: state.quotes.requested_backend(),
        active,
    })
}
