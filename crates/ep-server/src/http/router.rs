//! Router configuration for the HTTP API.
//!
//! This module sets up all routes and middleware (CORS, body limit, tracing)
//! and creates the axum router ready for serving.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState, max_body_bytes: usize) -> Router {
    // Permissive CORS: the web client is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let schedule_api = Router::new()
        .route("/events", post(handlers::generate_schedule))
        .route("/suggest", post(handlers::suggest_paths));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/schedule", schedule_api)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ep_core::SuggestionLimits;

    #[test]
    fn test_router_creation() {
        let state = AppState::new(SuggestionLimits::default());
        let _router = create_router(state, 1024);
    }
}
