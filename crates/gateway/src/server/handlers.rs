//! Axum request handlers for the gateway's own routes.
//!
//! Static assets and the SPA fallback are served by `tower-http` services
//! wired in the router; only the liveness probe and the gated page live here.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use tracing::{debug, error};

use super::state::AppState;

/// `GET /test` — liveness probe.
///
/// Returns a constant plaintext acknowledgment; no payload semantics.
pub async fn liveness() -> &'static str {
    "Serving..."
}

/// `GET /browse` — cookie-gated page.
///
/// Presence of the configured auth cookie is sufficient — the value is never
/// inspected here; real token validation belongs to the user API layer.
/// Authenticated requests get the SPA root document, everything else is
/// redirected to the site root.
pub async fn browse(State(state): State<AppState>, jar: CookieJar) -> Response {
    if jar.get(state.auth_cookie.as_str()).is_some() {
        spa_document(&state).await
    } else {
        debug!(cookie = %state.auth_cookie, "auth cookie absent, redirecting");
        Redirect::to("/").into_response()
    }
}

/// Serve the frontend's root HTML document.
async fn spa_document(state: &AppState) -> Response {
    match tokio::fs::read(state.index_file.as_ref()).await {
        Ok(bytes) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            bytes,
        )
            .into_response(),
        Err(e) => {
            error!(path = %state.index_file.display(), error = %e, "frontend bundle unreadable");
            (StatusCode::INTERNAL_SERVER_ERROR, "frontend bundle unavailable").into_response()
        }
    }
}
