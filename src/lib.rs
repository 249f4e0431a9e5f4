//! # tvbridge — TradingView → MT4 signal bridge
//!
//! Accepts trade alerts over HTTP, authenticates and validates them, gates
//! them against a trading-hours window, normalizes them into a canonical
//! [`models::Signal`], and exposes them to a polling MT4 Expert Advisor
//! through a one-shot delivery slot.
//!
//! ```text
//!  ┌──────────────┐   POST /webhook              ┌──────────────────────┐
//!  │ TradingView  │ ────────────────────────────▶│  decode → auth →     │
//!  │  (alerts)    │   JSON / pipe / key=value    │  window → normalize  │
//!  └──────────────┘                              │        │             │
//!                                                │  Mutex<last,pending> │
//!  ┌──────────────┐   GET /pull?format=txt       │        │             │
//!  │  MT4 EA      │ ◀────────────────────────────│  one-shot consume    │
//!  │  (polling)   │   OK|…pipe line…  or NONE    └──────────────────────┘
//!  └──────────────┘
//! ```
//!
//! The library surface exists so integration tests can drive the router
//! in-process; the binary in `main.rs` is a thin bootstrap around it.

pub mod auth;
pub mod config;
pub mod decode;
pub mod error;
pub mod format;
pub mod models;
pub mod normalize;
pub mod notify;
pub mod routes;
pub mod state;
pub mod window;
