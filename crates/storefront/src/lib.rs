//! Hive Image Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused from the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod content;
pub mod delivery;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

/// Build the full application router with middleware attached.
///
/// The session store is in-memory, so the returned router carries all
/// visitor state for its lifetime.
///
/// The trace span declares an empty `request_id` field; the request-id
/// middleware runs inside that span and fills it in.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    let trace_layer = TraceLayer::new_for_http().make_span_with(
        |request: &axum::http::Request<axum::body::Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        },
    );

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new("crates/storefront/static"))
        .layer(session_layer)
        .layer(axum::middleware::from_fn(
            middleware::request_id_middleware,
        ))
        .layer(trace_layer)
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
