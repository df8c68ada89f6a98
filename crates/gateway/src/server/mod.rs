//! Axum HTTP server, routing, and middleware.
//!
//! # Responsibilities
//! - Define the Axum router: explicit routes first, static assets and the SPA
//!   fallback last (ordering is a correctness requirement, not a detail).
//! - Build the CORS layer from the configured frontend origin.
//! - Inject shared application state (`AppState`) into handlers.

pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
