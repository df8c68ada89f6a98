//! `gateway` — SPA gateway binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise structured logging.
//! 3. Build the Axum router: CORS, static assets, page gate, user API mount.
//! 4. Bind the listener and serve until the process is stopped.

mod api;
mod config;
mod server;
mod telemetry;

use anyhow::{Context, Result};
use tracing::info;

// `self::` disambiguates the local module from the `config` crate.
use self::config::Config;
use server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        port = cfg.port,
        front_url = %cfg.front_url,
        "gateway starting"
    );

    // -----------------------------------------------------------------------
    // 3. Router
    // -----------------------------------------------------------------------
    let cors = server::middleware::cors(&cfg.front_url)?;
    let state = AppState::new(cfg.static_dir.clone(), cfg.auth_cookie_name.clone());
    let router = server::router::build(state, api::placeholder(), cors);

    // -----------------------------------------------------------------------
    // 4. HTTP server
    // -----------------------------------------------------------------------
    let addr: std::net::SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %addr, "listening");
    axum::serve(listener, router).await?;

    Ok(())
}
