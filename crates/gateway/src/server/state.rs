//! Shared application state injected into every Axum handler.

use std::path::PathBuf;
use std::sync::Arc;

/// Application state shared across all request handlers.
///
/// All fields are cheaply cloneable (`Arc`-wrapped) so that Axum can clone the
/// state for each request without copying paths or strings.
#[derive(Clone)]
pub struct AppState {
    /// Directory holding the pre-built frontend bundle.
    pub static_dir: Arc<PathBuf>,
    /// The SPA root document, served for `/browse` and unmatched paths.
    pub index_file: Arc<PathBuf>,
    /// Name of the cookie whose presence satisfies the page gate.
    pub auth_cookie: Arc<String>,
}

impl AppState {
    /// Create a new [`AppState`] rooted at `static_dir`.
    pub fn new(static_dir: impl Into<PathBuf>, auth_cookie: String) -> Self {
        let static_dir: PathBuf = static_dir.into();
        let index_file = static_dir.join("index.html");
        Self {
            static_dir: Arc::new(static_dir),
            index_file: Arc::new(index_file),
            auth_cookie: Arc::new(auth_cookie),
        }
    }
}

impl Default for AppState {
    /// Creates a default [`AppState`] with stock paths, suitable for tests.
    fn default() -> Self {
        Self::new("./build", "token".into())
    }
}
