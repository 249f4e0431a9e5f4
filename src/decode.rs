//! # decode
//!
//! The **request decoder** — turns an arbitrary webhook body into a flat
//! string-keyed mapping, tolerating the three dialects TradingView alerts
//! show up in:
//!
//! 1. a JSON object (preferred; a `application/json` content-type commits to
//!    this dialect — parse failure yields an empty mapping, no fallback),
//! 2. a pipe line, `BUY|XAUUSD|0.01|1900|1950`,
//! 3. `key=value` lines.
//!
//! The decoder never fails: anything unrecognizable degrades to an empty
//! mapping, which the normalizer then rejects for lack of an action.  Each
//! dialect is a pure parse attempt returning `Option<Map>`, tried in fixed
//! priority order.

use serde_json::{Map, Value};

// ─── Entry point ──────────────────────────────────────────────────────────────

/// Decode a raw request body into a flat mapping.
pub fn decode_body(content_type: Option<&str>, body: &str) -> Map<String, Value> {
    // A JSON content-type commits to the JSON dialect outright.
    if content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json")) {
        return parse_json_object(body.trim()).unwrap_or_default();
    }

    let body = body.trim();
    if body.is_empty() {
        return Map::new();
    }

    if body.starts_with('{') && body.ends_with('}') {
        if let Some(map) = parse_json_object(body) {
            return map;
        }
        // Looked like JSON but wasn't — fall through to the text dialects.
    }

    if let Some(map) = parse_pipe_line(body) {
        return map;
    }

    parse_kv_lines(body)
}

// ─── Dialect parsers ──────────────────────────────────────────────────────────

/// Dialect 1: a JSON object.  Non-object JSON (arrays, scalars) is no match.
fn parse_json_object(body: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Dialect 2: `action|symbol|lots|sl|tp` — only recognized when the body
/// contains a pipe and mentions BUY or SELL somewhere.
fn parse_pipe_line(body: &str) -> Option<Map<String, Value>> {
    let upper = body.to_uppercase();
    if !body.contains('|') || !(upper.contains("BUY") || upper.contains("SELL")) {
        return None;
    }

    let keys = ["action", "symbol", "lots", "sl", "tp"];
    let mut map = Map::new();
    for (key, part) in keys.iter().zip(body.split('|')) {
        map.insert(key.to_string(), Value::String(part.trim().to_string()));
    }
    Some(map)
}

/// Dialect 3: newline-separated `key=value` pairs.  Splits on the first `=`
/// only; later duplicate keys overwrite earlier ones.  Lines without `=` are
/// skipped, so an unrecognized body degrades to an empty mapping here.
fn parse_kv_lines(body: &str) -> Map<String, Value> {
    let mut map = Map::new();
    for line in body.lines() {
        if let Some((k, v)) = line.split_once('=') {
            map.insert(
                k.trim().to_string(),
                Value::String(v.trim().to_string()),
            );
        }
    }
    map
}

// ─── Tests ────────────────────────────────────────────────────────────────────
