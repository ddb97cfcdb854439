//! Quote CRUD handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use quotebook_core::quote::Quote;

use super::error::error_response;
use crate::{context::RequestContext, handlers::AppError, models::CreateQuote, state::AppState};

/// Submit a quote (POST /api/quotes).
pub async fn create_quote(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: Result<Json<CreateQuote>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(
                request_id = %ctx.request_id,
                error = %rejection.body_text(),
                "Malformed quote payload"
            );
            return Ok(error_response(StatusCode::BAD_REQUEST, rejection.body_text()));
        }
    };

    let quote = state
        .quotes
        .create(payload.quote, ctx.origin_address)
        .await?;

    Ok(Json(quote).into_response())
}

/// List every quote (GET /api/quotes).
pub async fn list_quotes(State(state): State<AppState>) -> Result<Json<Vec<Quote>>, AppError> {
    let quotes = state.quotes.list().await?;
    tracing::debug!(count = quotes.len(), "Listed quotes");
    Ok(Json(quotes))
}

/// Quote with the highest sequence number, or `null` (GET /api/quotes/latest).
pub async fn latest_quote(
    State(state): State<AppState>,
) -> Result<Json<Option<Quote>>, AppError> {
    Ok(Json(state.quotes.latest().await?))
}

/// Delete a quote (DELETE /api/quotes/{id}).
pub async fn delete_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, AppError> {
    state.quotes.delete(&id).await?;
    Ok("Deleted")
}
