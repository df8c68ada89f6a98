//! Logging setup.
//!
//! The gateway emits structured JSON lines on stdout and nothing else; there
//! is no exporter pipeline behind this, the deploy target scrapes container
//! output.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// The filter starts from the configured log level; a `RUST_LOG` value in the
/// environment wins over it when both are set. Fails if a subscriber is
/// already installed.
pub fn init(log_level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
