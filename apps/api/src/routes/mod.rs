pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::resume::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless validation
        .route("/api/v1/validate", post(handlers::handle_validate))
        .route("/api/v1/options/dates", get(handlers::handle_date_options))
        // Drafts
        .route("/api/v1/drafts", post(handlers::handle_create_draft))
        .route(
            "/api/v1/drafts/:id",
            get(handlers::handle_get_draft)
                .put(handlers::handle_replace_draft)
                .delete(handlers::handle_delete_draft),
        )
        .route("/api/v1/drafts/:id/edits", post(handlers::handle_apply_edit))
        .route(
            "/api/v1/drafts/:id/validate",
            post(handlers::handle_validate_draft),
        )
        .route(
            "/api/v1/drafts/:id/export",
            post(handlers::handle_export_draft),
        )
        .with_state(state)
}
