use axum::{
    http::{header, Method, StatusCode},
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        admin::{requested_db_type, set_db_type},
        health::{livez, readyz},
        quotes::{create_quote, delete_quote, latest_quote, list_quotes},
        status::db_status,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let request_timeout = state.config.request_timeout();

    // The web frontend may be served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/quotes", get(list_quotes).post(create_quote))
        .route("/quotes/latest", get(latest_quote))
        .route("/quotes/{id}", delete(delete_quote))
        .route("/dbstatus", get(db_status))
        .route("/admin/set-db-type", post(set_db_type))
        .route("/admin/requested-db-type", get(requested_db_type))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
