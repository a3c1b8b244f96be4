pub mod health;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Store + preview (read-only)
        .route("/api/v1/resume", get(handlers::handle_get_resume))
        .route("/api/v1/preview", get(handlers::handle_get_preview))
        // Section navigation
        .route(
            "/api/v1/navigation",
            get(handlers::handle_get_navigation).put(handlers::handle_select_section),
        )
        // Section forms
        .route("/api/v1/forms/:section", get(handlers::handle_get_form))
        .route(
            "/api/v1/forms/:section/fields",
            patch(handlers::handle_set_field),
        )
        .route(
            "/api/v1/forms/:section/rows/:list",
            post(handlers::handle_append_row),
        )
        .route(
            "/api/v1/forms/:section/rows/:list/:index",
            delete(handlers::handle_remove_row),
        )
        .route(
            "/api/v1/forms/:section/submit",
            post(handlers::handle_submit),
        )
        .route("/api/v1/forms/:section/reset", post(handlers::handle_reset))
        .with_state(state)
}
