//! # state
//!
//! Shared application state: the **one-shot delivery store** plus the
//! configuration and the outbound HTTP client.
//!
//! ## Design Decisions
//!
//! * `Arc<AppState>` is cloned cheaply into every Axum handler via
//!   `axum::extract::State` — no ambient globals.
//! * Both delivery slots live behind a **single** `std::sync::Mutex` so a
//!   webhook write updates `last` and `pending` as one atomic step, and
//!   `take_pending` is a linearizable consume: under concurrent pollers each
//!   stored signal is handed to exactly one caller.
//! * A `std` mutex (not `tokio::sync`) is deliberate: every critical section
//!   is a couple of pointer moves with no `.await` and no I/O inside, so the
//!   guard never crosses a suspension point.

use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::models::Signal;

// ─── Delivery slots ───────────────────────────────────────────────────────────

/// The two process-wide signal slots.  `pending` is either `None` or the
/// signal most recently written; it diverges from `last` only once a poller
/// consumes it.
#[derive(Debug, Default)]
struct DeliverySlots {
    /// Most recently accepted signal; overwritten, never cleared by a pull.
    last: Option<Signal>,
    /// Next signal to hand out — cleared exactly once on delivery.
    pending: Option<Signal>,
}

// ─── AppState ─────────────────────────────────────────────────────────────────

/// Top-level shared state injected into every Axum handler.
pub struct AppState {
    slots: Mutex<DeliverySlots>,

    /// Immutable runtime configuration, parsed once at startup.
    pub config: Config,

    /// Shared outbound client for the Telegram notification.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            slots: Mutex::new(DeliverySlots::default()),
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Accept a new signal: sets both `last` and `pending`.  A signal still
    /// sitting unconsumed in `pending` is silently overwritten — last-write-
    /// wins is the single-slot backpressure model, not a bug.
    pub fn store(&self, signal: Signal) {
        let mut slots = self.slots.lock().expect("delivery lock poisoned");
        slots.last = Some(signal.clone());
        slots.pending = Some(signal);
    }

    /// Read `last` without touching `pending`.
    pub fn peek_last(&self) -> Option<Signal> {
        self.slots.lock().expect("delivery lock poisoned").last.clone()
    }

    /// Atomically take the pending signal, leaving `None` behind.  The second
    /// of two racing pollers observes `None`.
    pub fn take_pending(&self) -> Option<Signal> {
        self.slots.lock().expect("delivery lock poisoned").pending.take()
    }

    /// Is a signal currently awaiting delivery?
    pub fn has_pending(&self) -> bool {
        self.slots.lock().expect("delivery lock poisoned").pending.is_some()
    }

    /// Id of the most recently accepted signal, for the health endpoint.
    pub fn last_id(&self) -> Option<String> {
        self.slots
            .lock()
            .expect("delivery lock poisoned")
            .last
            .as_ref()
            .map(|s| s.id.clone())
    }
}

/// Convenience alias — handlers take `State<SharedState>`.
pub type SharedState = Arc<AppState>;

/// Construct the shared application state ready for injection into the router.
pub fn build_state(config: Config) -> SharedState {
    Arc::new(AppState::new(config))
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Action, Signal};
    use crate::window::{parse_hhmm, TradeWindow};
    use serde_json::Map;

    fn test_config() -> Config {
        Config {
            secret: "abc123".into(),
            tg_token: String::new(),
            tg_chat_id: String::new(),
            window: TradeWindow {
                enforce: false,
                start: parse_hhmm("05:00").unwrap(),
                end: parse_hhmm("16:00").unwrap(),
            },
            tz: chrono::FixedOffset::east_opt(-4 * 3600).unwrap(),
            bind_addr: "127.0.0.1:0".into(),
        }
    }

    fn make_signal(id: &str) -> Signal {
        Signal {
            id: id.into(),
            ts: "2026-01-15T10:30:00-04:00".into(),
            action: Action::Buy,
            symbol: "XAUUSD".into(),
            lots: 0.01,
            sl: None,
            tp: None,
            comment: "TV".into(),
            magic: 2026,
            raw: Map::new(),
        }
    }

    #[test]
    fn store_sets_both_slots() {
        let state = AppState::new(test_config());
        state.store(make_signal("a"));
        assert!(state.has_pending());
        assert_eq!(state.last_id().as_deref(), Some("a"));
    }

    #[test]
    fn take_pending_is_one_shot() {
        let state = AppState::new(test_config());
        state.store(make_signal("a"));
        assert_eq!(state.take_pending().map(|s| s.id).as_deref(), Some("a"));
        assert!(state.take_pending().is_none());
        // `last` survives the pull.
        assert_eq!(state.last_id().as_deref(), Some("a"));
    }

    #[test]
    fn newer_signal_overwrites_unconsumed_pending() {
        let state = AppState::new(test_config());
        state.store(make_signal("first"));
        state.store(make_signal("second"));
        assert_eq!(state.take_pending().map(|s| s.id).as_deref(), Some("second"));
        assert!(state.take_pending().is_none());
    }

    #[test]
    fn concurrent_pollers_deliver_at_most_once() {
        let state = Arc::new(AppState::new(test_config()));
        state.store(make_signal("once"));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let state = Arc::clone(&state);
                std::thread::spawn(move || state.take_pending().is_some())
            })
            .collect();

        let hits = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&hit| hit)
            .count();
        assert_eq!(hits, 1);
    }
}
