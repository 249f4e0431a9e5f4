//! # normalize
//!
//! Maps a decoded request mapping into the canonical [`Signal`], applying
//! defaults and type coercion.  Every field is resolved independently; for
//! each one the first source key carrying a usable value wins.
//!
//! The only hard requirement is the action: a mapping whose action cannot be
//! normalized to BUY/SELL yields no Signal at all, and the webhook handler
//! turns that into a 400.  Everything else has a default.

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::models::{Action, Signal};

// ─── Entry point ──────────────────────────────────────────────────────────────

/// Build a Signal from a decoded mapping, or `None` when the action field is
/// missing or invalid.
pub fn build_signal(raw: Map<String, Value>, now: DateTime<FixedOffset>) -> Option<Signal> {
    let action = normalize_action(&first_str(&raw, &["action", "side", "signal"])?)?;

    let symbol = first_str(&raw, &["symbol", "ticker"])
        .unwrap_or_else(|| "XAUUSD".to_string());

    // Zero and unparseable lot sizes both fall back to the minimum.
    let lots = first_value(&raw, &["lots", "lot", "qty"])
        .and_then(coerce_number)
        .filter(|v| *v != 0.0)
        .unwrap_or(0.01);

    let sl = raw.get("sl").and_then(coerce_number);
    let tp = raw.get("tp").and_then(coerce_number);

    let comment = first_str(&raw, &["comment", "cmt"])
        .unwrap_or_else(|| "TV".to_string());

    let magic = raw
        .get("magic")
        .and_then(coerce_number)
        .map(|v| v as i64)
        .unwrap_or(2026);

    let id = first_str(&raw, &["id", "signal_id"])
        .unwrap_or_else(|| Uuid::new_v4().to_string()[..8].to_string());

    Some(Signal {
        id,
        ts: now.to_rfc3339(),
        action,
        symbol,
        lots,
        sl,
        tp,
        comment,
        magic,
        raw,
    })
}

// ─── Field resolution ─────────────────────────────────────────────────────────

/// Map a raw action spelling onto a direction.
/// BUY/LONG → Buy, SELL/SHORT → Sell, anything else → invalid.
pub fn normalize_action(a: &str) -> Option<Action> {
    match a.trim().to_uppercase().as_str() {
        "BUY" | "LONG" => Some(Action::Buy),
        "SELL" | "SHORT" => Some(Action::Sell),
        _ => None,
    }
}

/// First key holding a non-empty trimmed string.  An empty value falls
/// through to the next candidate key.
fn first_str(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| map.get(*k).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// First key holding any value other than null or an empty string.
fn first_value<'m>(map: &'m Map<String, Value>, keys: &[&str]) -> Option<&'m Value> {
    keys.iter().filter_map(|k| map.get(*k)).find(|v| match v {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    })
}

/// The one numeric-coercion rule for lots / sl / tp / magic.
///
/// Native JSON numbers pass through; text is trimmed and parsed as a decimal,
/// with the empty string and case-insensitive `"na"` treated as absent.  Any
/// parse failure is absent too — this never errors.
pub fn coerce_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() || s.eq_ignore_ascii_case("na") {
                return None;
            }
            s.parse().ok()
        }
        _ => None,
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
