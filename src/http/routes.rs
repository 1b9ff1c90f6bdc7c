use super::handlers;
use super::state::AppState;
use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Call management
        .route("/calls/", get(handlers::list_calls))
        .route("/calls/:call_leg_id", delete(handlers::end_call))
        // Diagnostic log
        .route("/logs/", get(handlers::get_logs))
        .route("/logs/:filter", get(handlers::get_logs_filtered))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
