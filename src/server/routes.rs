// file: src/server/routes.rs
// description: router configuration with per-request tracing spans
// reference: https://docs.rs/tower-http

use super::AppState;
use super::handlers;
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::index_submit))
        .route("/api/summarize", post(handlers::api_summarize))
        .route("/api/languages", get(handlers::api_languages))
        .route("/health", get(handlers::health))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    id = %Uuid::new_v4(),
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}
