//! # window
//!
//! The **trading-hours gate** — admits or rejects inbound signals based on the
//! local time-of-day in the deployment's reference timezone.
//!
//! Both bounds are inclusive: a window of `05:00`–`16:00` admits `05:00:00`
//! and `16:00:59` alike (sub-minute precision comes from the clock, the
//! configured bounds are whole minutes).  The gate assumes `start <= end`
//! within a single day; config loading rejects overnight windows outright.

use chrono::NaiveTime;

// ─── TradeWindow ──────────────────────────────────────────────────────────────

/// Configured trading window.  `enforce == false` turns the gate off entirely.
#[derive(Debug, Clone, Copy)]
pub struct TradeWindow {
    pub enforce: bool,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TradeWindow {
    /// Should a signal arriving at local time-of-day `t` be admitted?
    pub fn admits(&self, t: NaiveTime) -> bool {
        if !self.enforce {
            return true;
        }
        self.start <= t && t <= self.end
    }
}

/// Parse a `"HH:MM"` string into a time-of-day.
pub fn parse_hhmm(s: &str) -> Option<NaiveTime> {
    let (hh, mm) = s.split_once(':')?;
    let hh: u32 = hh.trim().parse().ok()?;
    let mm: u32 = mm.trim().parse().ok()?;
    NaiveTime::from_hms_opt(hh, mm, 0)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
