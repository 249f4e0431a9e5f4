//! # routes::meta
//!
//! Unauthenticated service metadata: `GET /` and `GET /health`.
//! These never expose the secret itself — only whether one is configured.

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::state::SharedState;

/// Service banner with the configured trading window.
pub async fn root(State(state): State<SharedState>) -> impl IntoResponse {
    let window = state.config.window;
    Json(json!({
        "service":   "tv-mt4-bridge",
        "ok":        true,
        "endpoints": ["/health", "/webhook (POST)", "/pull", "/latest"],
        "trade_window": {
            "start":    window.start.format("%H:%M").to_string(),
            "end":      window.end.format("%H:%M").to_string(),
            "enforced": window.enforce,
        },
    }))
}

/// Liveness plus delivery-slot status for dashboards and uptime probes.
pub async fn health(State(state): State<SharedState>) -> impl IntoResponse {
    Json(json!({
        "ok":         true,
        "time":       state.config.now_local().to_rfc3339(),
        "has_secret": state.config.has_secret(),
        "pending":    state.has_pending(),
        "latest":     state.last_id(),
    }))
}
