//! Bazaar storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused by the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod listing;
pub mod middleware;
pub mod routes;
pub mod source;
pub mod state;

use axum::{Router, middleware::from_fn, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

/// Build the storefront router with its middleware stack.
///
/// Sentry layers are added by the binary so tests can run without a client.
pub fn app(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(from_fn(middleware::security_headers_middleware))
        .layer(from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. The catalog is loaded before the
/// listener binds, so there is nothing else to check.
async fn health() -> &'static str {
    "ok"
}
