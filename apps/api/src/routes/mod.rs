pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Role registry
        .route("/api/v1/roles", get(handlers::handle_list_roles))
        .route("/api/v1/roles/resolve", post(handlers::handle_resolve_role))
        // Analysis
        .route("/api/v1/analysis/score", post(handlers::handle_score))
        .route("/api/v1/analysis/report", post(handlers::handle_report))
        .route("/api/v1/analysis/rewrite", post(handlers::handle_guided_rewrite))
        .route("/api/v1/analysis/upload", post(handlers::handle_upload))
        .layer(body_limit)
        .with_state(state)
}
