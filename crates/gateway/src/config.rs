//! Configuration loading and validation for the gateway.
//!
//! All values are read from environment variables at startup and carried in an
//! explicit struct from then on — nothing reads the environment after boot.
//! The process exits with a clear error message if any required variable is
//! missing or invalid.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated gateway configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Sole origin allowed by the CORS policy (the deployed frontend URL).
    /// **Required.**
    pub front_url: String,

    /// Directory holding the pre-built frontend bundle.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Name of the cookie whose presence satisfies the `/browse` page gate.
    #[serde(default = "default_auth_cookie_name")]
    pub auth_cookie_name: String,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_port() -> u16 {
    8080
}
fn default_static_dir() -> String {
    "./build".into()
}
fn default_auth_cookie_name() -> String {
    "token".into()
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required variable is absent or cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        ensure_non_empty(&self.front_url, "FRONT_URL")?;
        ensure_non_empty(&self.static_dir, "STATIC_DIR")?;
        ensure_non_empty(&self.auth_cookie_name, "AUTH_COOKIE_NAME")?;
        Ok(())
    }
}

fn ensure_non_empty(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{name} is required and must not be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert_eq!(default_port(), 8080);
        assert_eq!(default_static_dir(), "./build");
        assert_eq!(default_auth_cookie_name(), "token");
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_rejects_empty_front_url() {
        let cfg = Config {
            port: default_port(),
            front_url: "  ".into(),
            static_dir: default_static_dir(),
            auth_cookie_name: default_auth_cookie_name(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_cookie_name() {
        let cfg = Config {
            port: default_port(),
            front_url: "http://localhost:3000".into(),
            static_dir: default_static_dir(),
            auth_cookie_name: "".into(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_accepts_valid_config() {
        let cfg = Config {
            port: 8080,
            front_url: "http://localhost:3000".into(),
            static_dir: "./build".into(),
            auth_cookie_name: "token".into(),
            log_level: "info".into(),
        };
        assert!(cfg.validate().is_ok());
    }
}
