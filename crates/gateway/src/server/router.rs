//! Axum router construction.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::api;
use super::{handlers, middleware, state::AppState};

/// Build the application [`Router`] with all routes and middleware attached.
///
/// Explicit routes are registered before the asset/fallback service; the SPA
/// fallback must stay the final default case so it only catches paths nothing
/// else matched.
pub fn build(state: AppState, user_api: Router, cors: CorsLayer) -> Router {
    // Static assets with the SPA root document as the not-found fallback.
    let assets = ServeDir::new(state.static_dir.as_ref().clone())
        .fallback(ServeFile::new(state.index_file.as_ref().clone()));

    Router::new()
        .route("/test", get(handlers::liveness))
        .route("/browse", get(handlers::browse))
        .nest_service(api::USER_API_PREFIX, user_api)
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(middleware::REQUEST_TIMEOUT))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
