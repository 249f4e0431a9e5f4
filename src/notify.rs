//! # notify
//!
//! Fire-and-forget Telegram notification on signal receipt.
//!
//! This runs **after** the store write and outside any lock, on its own
//! spawned task with a bounded timeout.  Its outcome must never leak into the
//! HTTP response already being built: failures are logged at `warn!` and
//! dropped — no retries, no surfacing.

use std::time::Duration;

use serde_json::json;
use tracing::{debug, warn};

use crate::models::Signal;
use crate::state::SharedState;

/// Upper bound on the outbound call; a slow Telegram must not pile up tasks.
const SEND_TIMEOUT: Duration = Duration::from_secs(8);

/// Spawn the notification for an accepted signal.  Returns immediately.
pub fn notify_signal(state: &SharedState, signal: &Signal) {
    if state.config.tg_token.is_empty() || state.config.tg_chat_id.is_empty() {
        debug!("Telegram not configured — skipping notification");
        return;
    }

    let level = |v: Option<f64>| v.map_or_else(|| "na".to_string(), |x| x.to_string());
    let text = format!(
        "✅ TV Signal received: {} {} lots={} sl={} tp={} id={}",
        signal.action,
        signal.symbol,
        signal.lots,
        level(signal.sl),
        level(signal.tp),
        signal.id
    );
    let state = state.clone();

    tokio::spawn(async move {
        if let Err(e) = send_message(&state, &text).await {
            warn!(error = %e, "Telegram notification failed (ignored)");
        }
    });
}

async fn send_message(state: &SharedState, text: &str) -> reqwest::Result<()> {
    let url = format!(
        "https://api.telegram.org/bot{}/sendMessage",
        state.config.tg_token
    );

    state
        .http
        .post(&url)
        .json(&json!({ "chat_id": state.config.tg_chat_id, "text": text }))
        .timeout(SEND_TIMEOUT)
        .send()
        .await?
        .error_for_status()?;

    debug!("Telegram notification delivered");
    Ok(())
}
