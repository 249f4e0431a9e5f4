//! # routes::poll
//!
//! The consumer side: the MT4 EA polls `/pull` for the pending signal and can
//! inspect `/latest` without consuming anything.  Read requests carry the
//! secret in the `X-Secret` header or the `secret` query parameter — there is
//! no body to look in.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::info;

use crate::{
    auth::{header_secret, secret_matches},
    error::AppError,
    format::{render_txt, NONE_BODY},
    state::SharedState,
};

fn authorize(
    state: &SharedState,
    headers: &axum::http::HeaderMap,
    query: &HashMap<String, String>,
) -> Result<(), AppError> {
    let ok = secret_matches(
        &state.config.secret,
        &[header_secret(headers), query.get("secret").map(String::as_str)],
    );
    if ok {
        Ok(())
    } else {
        Err(AppError::Unauthorized)
    }
}

// ─── GET /latest ──────────────────────────────────────────────────────────────

/// Most recently accepted signal, regardless of whether it was pulled.
pub async fn latest(
    State(state): State<SharedState>,
    Query(query): Query<HashMap<String, String>>,
    headers: axum::http::HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    authorize(&state, &headers, &query)?;
    Ok(Json(json!({ "ok": true, "last": state.peek_last() })))
}

// ─── GET /pull ────────────────────────────────────────────────────────────────

/// Hand out the pending signal exactly once, then clear it.
/// `?format=txt` returns the fixed pipe line (or `NONE`) for MT4's
/// string-split parsing; anything else returns JSON.
pub async fn pull(
    State(state): State<SharedState>,
    Query(query): Query<HashMap<String, String>>,
    headers: axum::http::HeaderMap,
) -> Result<axum::response::Response, AppError> {
    authorize(&state, &headers, &query)?;

    let fmt = query
        .get("format")
        .map(|f| f.to_lowercase())
        .unwrap_or_else(|| "json".to_string());

    let taken = state.take_pending();
    if let Some(sig) = &taken {
        info!(id = %sig.id, action = %sig.action, "📤 signal delivered to poller");
    }

    let resp = match (fmt.as_str(), taken) {
        ("txt", Some(sig)) => {
            ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], render_txt(&sig))
                .into_response()
        }
        ("txt", None) => {
            ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], NONE_BODY).into_response()
        }
        (_, pending) => Json(json!({ "ok": true, "pending": pending })).into_response(),
    };
    Ok(resp)
}
