//! Process bootstrap: env loading, structured logging, router, listener.
//!
//! | Variable     | Default         | Description                 |
//! |--------------|-----------------|-----------------------------|
//! | `BIND_ADDR`  | `0.0.0.0:8000`  | Address Axum listens on     |
//! | `RUST_LOG`   | `tvbridge=debug`| Tracing filter              |
//!
//! The full configuration surface is documented in [`tvbridge::config`].

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tvbridge::{config::Config, routes, state::build_state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Load .env (optional — prod can use real env vars) ─────────────────
    dotenvy::dotenv().ok();

    // ── 2. Initialise structured logging ─────────────────────────────────────
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("tvbridge=debug".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    // ── 3. Parse config; bad window/timezone values refuse to start ─────────
    let config = Config::from_env()?;
    info!(
        has_secret = config.has_secret(),
        enforce_hours = config.window.enforce,
        window_start = %config.window.start.format("%H:%M"),
        window_end = %config.window.end.format("%H:%M"),
        "🌉 tv-mt4-bridge starting"
    );

    // ── 4. Build shared state + router ───────────────────────────────────────
    let addr: SocketAddr = config.bind_addr.parse()?;
    let state = build_state(config);
    let app = routes::router(state);

    // ── 5. Serve ─────────────────────────────────────────────────────────────
    info!(?addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
