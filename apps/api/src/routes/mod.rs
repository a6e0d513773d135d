pub mod health;
pub mod themes;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ingest::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/ingest", post(handlers::handle_ingest))
        .route("/api/v1/extract", post(handlers::handle_extract))
        .route("/api/v1/themes", get(themes::handle_list_themes))
        .route("/api/v1/themes/:id", get(themes::handle_get_theme))
        .layer(body_limit)
        .with_state(state)
}
