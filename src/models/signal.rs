//! # models::signal
//!
//! Defines [`Signal`], the canonical trade instruction produced from an
//! inbound TradingView alert, and [`Action`], its direction.
//!
//! A `Signal` is built exactly once by the normalizer and never mutated
//! afterwards.  The MT4 Expert Advisor parses either the JSON form or the
//! fixed 10-field pipe line (see `format`), so the serde field names here are
//! wire contract, not style.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─── Action ───────────────────────────────────────────────────────────────────

/// Trade direction.  An alert whose action cannot be resolved to one of these
/// is rejected before anything is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Buy,
    Sell,
}

impl Action {
    /// Wire spelling, also used in the txt pipe line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Buy => "BUY",
            Action::Sell => "SELL",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Signal ───────────────────────────────────────────────────────────────────

/// The complete normalized trade instruction held in the delivery slots.
///
/// `raw` retains the decoded request mapping verbatim for audit/debugging —
/// it is never re-derived from the normalized fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Short opaque identifier — caller-supplied, or an 8-char random one.
    pub id: String,

    /// Creation instant in the reference timezone, ISO-8601 text.
    pub ts: String,

    /// Trade direction.
    pub action: Action,

    /// Instrument, e.g. `"XAUUSD"`.
    pub symbol: String,

    /// Position size in lots.
    pub lots: f64,

    /// Stop-loss price; `None` when the alert omitted it (or sent `"na"`).
    pub sl: Option<f64>,

    /// Take-profit price; same absence rules as `sl`.
    pub tp: Option<f64>,

    /// Free-text comment attached to the order.
    pub comment: String,

    /// MT4 "magic number" tag identifying orders placed through this bridge.
    pub magic: i64,

    /// The decoded request body exactly as the decoder produced it.
    pub raw: Map<String, Value>,
}
