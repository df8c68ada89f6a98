//! Mount contract for the user API route group.
//!
//! The business logic for `/api/v1/user/*` lives in a separate service; this
//! module only fixes the contract the gateway expects of it: a plain
//! [`Router`] nested under [`USER_API_PREFIX`], receiving requests with the
//! prefix stripped and bodies, headers, and cookies intact. The gateway
//! applies no validation of its own before delegating.

use axum::{http::StatusCode, Router};

/// Prefix under which the user API router is nested.
pub const USER_API_PREFIX: &str = "/api/v1/user";

/// Stand-in router mounted while no user service is linked in.
///
/// Answers every request with 501 so misdirected API traffic stays visible
/// instead of being swallowed by the SPA fallback.
pub fn placeholder() -> Router {
    Router::new().fallback(|| async { (StatusCode::NOT_IMPLEMENTED, "user API not mounted") })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    #[tokio::test]
    async fn placeholder_answers_501_everywhere() {
        let resp = placeholder()
            .oneshot(Request::builder().uri("/login").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
    }
}
