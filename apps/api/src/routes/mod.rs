pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// Room for multipart boundaries and the text fields sent next to the file.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/", get(handlers::handle_root))
        .route("/api/analyze", post(handlers::handle_analyze_upload))
        .route("/api/analyze/text", post(handlers::handle_analyze_text))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
