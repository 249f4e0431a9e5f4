//! Axum route handlers and router assembly.

pub mod meta;
pub mod poll;
pub mod webhook;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::SharedState;

/// Build the full application router with middleware attached.
pub fn router(state: SharedState) -> Router {
    // TradingView posts from browser-less infra, but the permissive CORS
    // layer keeps manual testing from a dashboard painless.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // ── Producer side ────────────────────────────────────────────────────
        .route("/webhook", post(webhook::webhook))
        // ── Consumer side ────────────────────────────────────────────────────
        .route("/latest", get(poll::latest))
        .route("/pull", get(poll::pull))
        // ── Metadata ─────────────────────────────────────────────────────────
        .route("/", get(meta::root))
        .route("/health", get(meta::health))
        // ── Middleware ───────────────────────────────────────────────────────
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
