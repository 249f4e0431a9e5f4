//! # format
//!
//! Plain-text encoding of a [`Signal`] for the MT4 poller.
//!
//! MT4's `WebRequest` + `StringSplit` parsing wants a fixed field count, so
//! the line is always exactly 10 pipe-delimited fields:
//!
//! ```text
//! OK|{id}|{action}|{symbol}|{lots}|{sl}|{tp}|{ts}|{magic}|{comment}
//! ```
//!
//! Absent `sl`/`tp` render as empty fields, and any pipe inside the comment
//! is replaced with a space so the field count never drifts.  The structured
//! (JSON) encoding is just the Signal's `Serialize` impl — nothing extra to
//! do here.

use crate::models::Signal;

/// Literal body returned when no signal is pending.
pub const NONE_BODY: &str = "NONE";

/// Render the fixed 10-field pipe line.
pub fn render_txt(sig: &Signal) -> String {
    let sl = sig.sl.map(|v| v.to_string()).unwrap_or_default();
    let tp = sig.tp.map(|v| v.to_string()).unwrap_or_default();
    let comment = sig.comment.replace('|', " ");
    format!(
        "OK|{}|{}|{}|{}|{}|{}|{}|{}|{}",
        sig.id, sig.action, sig.symbol, sig.lots, sl, tp, sig.ts, sig.magic, comment
    )
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Action, Signal};
    use serde_json::Map;

    fn make_signal() -> Signal {
        Signal {
            id: "ab12cd34".into(),
            ts: "2026-01-15T10:30:00-04:00".into(),
            action: Action::Sell,
            symbol: "XAUUSD".into(),
            lots: 0.02,
            sl: Some(1900.0),
            tp: Some(1950.0),
            comment: "TV".into(),
            magic: 2026,
            raw: Map::new(),
        }
    }

    #[test]
    fn line_has_exactly_ten_fields_and_round_trips() {
        let sig = make_signal();
        let line = render_txt(&sig);
        let fields: Vec<&str> = line.split('|').collect();
        assert_eq!(fields.len(), 10);
        assert_eq!(fields[0], "OK");
        assert_eq!(fields[1], sig.id);
        assert_eq!(fields[2], "SELL");
        assert_eq!(fields[3], sig.symbol);
        assert_eq!(fields[4].parse::<f64>().unwrap(), sig.lots);
        assert_eq!(fields[5].parse::<f64>().unwrap(), 1900.0);
        assert_eq!(fields[6].parse::<f64>().unwrap(), 1950.0);
        assert_eq!(fields[7], sig.ts);
        assert_eq!(fields[8].parse::<i64>().unwrap(), sig.magic);
        assert_eq!(fields[9], sig.comment);
    }

    #[test]
    fn absent_stop_levels_render_empty() {
        let mut sig = make_signal();
        sig.sl = None;
        sig.tp = None;
        let line = render_txt(&sig);
        let fields: Vec<&str> = line.split('|').collect();
        assert_eq!(fields.len(), 10);
        assert_eq!(fields[4], "0.02");
        assert_eq!(fields[5], "");
        assert_eq!(fields[6], "");
    }

    #[test]
    fn pipes_in_comment_cannot_break_the_field_count() {
        let mut sig = make_signal();
        sig.comment = "breakout|retest".into();
        let line = render_txt(&sig);
        assert_eq!(line.split('|').count(), 10);
        assert!(line.ends_with("breakout retest"));
    }
}
