//! # auth
//!
//! Shared-secret authentication for every protected endpoint.
//!
//! A request may carry the secret in up to three places, checked in priority
//! order: the decoded body (`secret` / `key` / `token` keys — webhook only),
//! the `X-Secret` header, and the `secret` query parameter.  The first
//! non-empty candidate is trimmed and compared for exact equality.
//!
//! An **unset or empty configured secret rejects everything**.  This is a
//! deliberate guard clause: `"" == ""` must never open the bridge.

use axum::http::HeaderMap;
use serde_json::{Map, Value};

/// Header the MT4 EA and TradingView can put the secret in.
pub const SECRET_HEADER: &str = "X-Secret";

// ─── Core check ───────────────────────────────────────────────────────────────

/// Compare candidate secrets against the configured one, fail closed.
///
/// `candidates` are consulted in order; the first non-empty one (after
/// trimming) is the only one compared.
pub fn secret_matches(configured: &str, candidates: &[Option<&str>]) -> bool {
    if configured.is_empty() {
        return false;
    }

    let candidate = candidates
        .iter()
        .flatten()
        .map(|c| c.trim())
        .find(|c| !c.is_empty())
        .unwrap_or("");

    candidate == configured
}

// ─── Extraction helpers ───────────────────────────────────────────────────────

/// Pull a secret candidate out of a decoded webhook body.
/// Keys are tried in order; only string values count.
pub fn body_secret(data: &Map<String, Value>) -> Option<&str> {
    ["secret", "key", "token"]
        .iter()
        .find_map(|k| data.get(*k).and_then(Value::as_str))
}

/// Pull the `X-Secret` header value, if present and valid UTF-8.
pub fn header_secret(headers: &HeaderMap) -> Option<&str> {
    headers.get(SECRET_HEADER).and_then(|v| v.to_str().ok())
}

// ─── Tests ────────────────────────────────────────────────────────────────────
