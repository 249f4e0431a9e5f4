//! # routes::webhook
//!
//! `POST /webhook` — the TradingView entry point.
//!
//! Pipeline: decode → authenticate → trading-window gate → normalize →
//! store → (spawned) Telegram notification.  The handler takes the body as a
//! raw `String` on purpose: malformed and non-JSON bodies must reach the
//! decoder instead of being bounced by a typed extractor.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::{info, warn};

use crate::{
    auth::{body_secret, header_secret, secret_matches},
    decode::decode_body,
    error::AppError,
    normalize::build_signal,
    notify::notify_signal,
    state::SharedState,
};

pub async fn webhook(
    State(state): State<SharedState>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    // ── 1. Decode (never fails — worst case is an empty mapping) ────────────
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    let data = decode_body(content_type, &body);

    // ── 2. Authenticate: body, then header, then query ──────────────────────
    let authorized = secret_matches(
        &state.config.secret,
        &[
            body_secret(&data),
            header_secret(&headers),
            query.get("secret").map(String::as_str),
        ],
    );
    if !authorized {
        warn!("webhook rejected — bad or missing secret");
        return Err(AppError::Unauthorized);
    }

    // ── 3. Trading-window gate ──────────────────────────────────────────────
    let now = state.config.now_local();
    let window = state.config.window;
    if !window.admits(now.time()) {
        warn!(time = %now, "webhook rejected — outside trade window");
        return Err(AppError::OutsideWindow {
            time: now.to_rfc3339(),
            start: window.start.format("%H:%M").to_string(),
            end: window.end.format("%H:%M").to_string(),
        });
    }

    // ── 4. Normalize — no BUY/SELL action means nothing gets stored ─────────
    let signal = build_signal(data, now).ok_or(AppError::MissingAction)?;

    // ── 5. Store (last + pending, one atomic write) ─────────────────────────
    state.store(signal.clone());

    info!(
        id     = %signal.id,
        action = %signal.action,
        symbol = %signal.symbol,
        lots   = signal.lots,
        "📈 signal accepted"
    );

    // ── 6. Side effect, off the critical path ───────────────────────────────
    notify_signal(&state, &signal);

    Ok(Json(json!({
        "ok":     true,
        "stored": true,
        "id":     signal.id,
        "ts":     signal.ts,
    })))
}
