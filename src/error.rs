//! # error
//!
//! Centralised application error type.
//!
//! Every fallible handler returns `Result<_, AppError>`.  Axum's
//! `IntoResponse` impl converts these into structured JSON error bodies so
//! TradingView and the MT4 poller always get a machine-readable response —
//! no error here is ever fatal to the process.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or wrong shared secret — deliberately generic, the body never
    /// says which of the three candidate locations failed.
    #[error("unauthorized")]
    Unauthorized,

    /// Request arrived outside the enforced trading window.  The evaluated
    /// time and the configured bounds are non-sensitive and safe to disclose.
    #[error("outside trade window at {time}")]
    OutsideWindow {
        time: String,
        start: String,
        end: String,
    },

    /// The decoded body had no action normalizable to BUY/SELL.
    #[error("missing action")]
    MissingAction,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "ok": false, "error": "unauthorized" })),
            )
                .into_response(),

            AppError::OutsideWindow { time, start, end } => (
                StatusCode::FORBIDDEN,
                Json(json!({
                    "ok":     false,
                    "error":  "outside_trade_window",
                    "time":   time,
                    "window": { "start": start, "end": end },
                })),
            )
                .into_response(),

            AppError::MissingAction => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "ok": false, "error": "missing_action_BUY_or_SELL" })),
            )
                .into_response(),
        }
    }
}
