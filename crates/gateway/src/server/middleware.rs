//! Axum middleware layers applied to the router.
//!
//! Includes request tracing, timeout enforcement, response compression, and
//! the CORS policy built from the configured frontend origin.

use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// Default per-request timeout applied to all routes.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the CORS layer: the configured frontend origin only, GET and POST
/// only, credentialed (cookie-bearing) cross-origin requests permitted.
///
/// Disallowed origins get the layer's standard failure behavior — no
/// allow-origin header on the response, no custom error body.
///
/// # Errors
///
/// Returns an error if `front_url` is not a valid `Origin` header value.
pub fn cors(front_url: &str) -> Result<CorsLayer> {
    let origin: HeaderValue = front_url
        .parse()
        .with_context(|| format!("FRONT_URL is not a valid origin: {front_url}"))?;

    // A single-entry list mirrors the origin only when it matches; an exact
    // origin would stamp the allow-origin header on every response.
    Ok(CorsLayer::new()
        .allow_origin([origin])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_accepts_valid_origin() {
        assert!(cors("http://localhost:3000").is_ok());
    }

    #[test]
    fn cors_rejects_unparseable_origin() {
        assert!(cors("http://bad\norigin").is_err());
    }

    #[tokio::test]
    async fn allow_origin_is_mirrored_only_for_the_configured_origin() {
        use axum::{body::Body, http::Request, routing::get, Router};
        use tower::ServiceExt;

        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(cors("http://localhost:3000").unwrap());

        let allowed = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );

        let foreign = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, "http://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(foreign
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
