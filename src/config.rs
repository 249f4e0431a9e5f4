//! # config
//!
//! All environment configuration, read once at startup into [`Config`].
//!
//! | Variable          | Default        | Description                          |
//! |-------------------|----------------|--------------------------------------|
//! | `SECRET`          | *(empty)*      | Shared webhook secret. Empty = reject all |
//! | `TG_TOKEN`        | *(empty)*      | Telegram bot token (optional)        |
//! | `TG_CHAT_ID`      | *(empty)*      | Telegram chat id (optional)          |
//! | `ENFORCE_HOURS`   | `1`            | `1` = enforce trading window         |
//! | `TRADE_START`     | `05:00`        | Window start, inclusive, HH:MM       |
//! | `TRADE_END`       | `16:00`        | Window end, inclusive, HH:MM         |
//! | `TZ_OFFSET_HOURS` | `-4`           | Reference timezone UTC offset        |
//! | `BIND_ADDR`       | `0.0.0.0:8000` | Address Axum listens on              |
//!
//! The reference timezone is a fixed civil offset for the whole deployment
//! (America/Puerto_Rico, UTC−4, no DST).  Bad values fail startup rather than
//! degrading to a surprising default.

use anyhow::{bail, Context};
use chrono::{DateTime, FixedOffset, Utc};

use crate::window::{parse_hhmm, TradeWindow};

// ─── Config ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret required on `/webhook`, `/latest` and `/pull`.
    /// An empty secret means every request is rejected (fail closed).
    pub secret: String,

    /// Telegram bot token; empty disables the outbound notification.
    pub tg_token: String,

    /// Telegram destination chat; empty disables the outbound notification.
    pub tg_chat_id: String,

    /// The trading-hours gate applied to `/webhook`.
    pub window: TradeWindow,

    /// Fixed civil timezone all timestamps are rendered in.
    pub tz: FixedOffset,

    /// Address the HTTP listener binds to.
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let secret = std::env::var("SECRET").unwrap_or_default().trim().to_string();

        let enforce = std::env::var("ENFORCE_HOURS")
            .unwrap_or_else(|_| "1".to_string());
        let start_hhmm = std::env::var("TRADE_START")
            .unwrap_or_else(|_| "05:00".to_string());
        let end_hhmm = std::env::var("TRADE_END")
            .unwrap_or_else(|_| "16:00".to_string());

        let start = parse_hhmm(start_hhmm.trim())
            .with_context(|| format!("TRADE_START '{start_hhmm}' is not HH:MM"))?;
        let end = parse_hhmm(end_hhmm.trim())
            .with_context(|| format!("TRADE_END '{end_hhmm}' is not HH:MM"))?;

        // Overnight windows (end before start) are not supported; refuse to
        // start rather than silently mis-gate every request.
        if end < start {
            bail!("TRADE_END {end_hhmm} precedes TRADE_START {start_hhmm}; overnight windows are not supported");
        }

        let window = TradeWindow {
            enforce: enforce.trim() == "1",
            start,
            end,
        };

        let offset_hours: i32 = std::env::var("TZ_OFFSET_HOURS")
            .unwrap_or_else(|_| "-4".to_string())
            .trim()
            .parse()
            .context("TZ_OFFSET_HOURS must be an integer")?;
        let tz = FixedOffset::east_opt(offset_hours * 3600)
            .context("TZ_OFFSET_HOURS out of range")?;

        Ok(Self {
            secret,
            tg_token: std::env::var("TG_TOKEN").unwrap_or_default().trim().to_string(),
            tg_chat_id: std::env::var("TG_CHAT_ID").unwrap_or_default().trim().to_string(),
            window,
            tz,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
        })
    }

    /// Current instant in the reference timezone.
    pub fn now_local(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.tz)
    }

    /// Whether a usable shared secret is configured.
    pub fn has_secret(&self) -> bool {
        !self.secret.is_empty()
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
