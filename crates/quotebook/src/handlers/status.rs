use axum::{extract::State, Json};

use crate::{service::DbStatus, state::AppState};

/// Connectivity of the active backend (GET /api/dbstatus). Never fails.
pub async fn db_status(State(state): State<AppState>) -> Json<DbStatus> {
    Json(state.quotes.status().await)
}
