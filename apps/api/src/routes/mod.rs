pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog_handlers;
use crate::resumes::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Field checklists
        .route("/api/v1/fields", get(catalog_handlers::handle_list_fields))
        .route("/api/v1/fields/:name", get(catalog_handlers::handle_get_field))
        // Resume parsing
        .route("/api/v1/resumes/parse", post(resume_handlers::handle_parse))
        .route("/api/v1/resumes/analyze", post(resume_handlers::handle_analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
