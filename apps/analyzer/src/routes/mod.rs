pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Session API
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_end_session),
        )
        .route("/api/v1/sessions/:id/submit", post(handlers::handle_submit))
        .route(
            "/api/v1/sessions/:id/analysis",
            post(handlers::handle_analyze),
        )
        .route(
            "/api/v1/sessions/:id/report",
            get(handlers::handle_report_html),
        )
        .route(
            "/api/v1/sessions/:id/report/download",
            get(handlers::handle_report_download),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
