//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to `ep_core`.
//! Engine calls are CPU-bound, so they run under `spawn_blocking`.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use super::dto::{HealthResponse, Schedule, ScheduleRequest, SuggestionPath, SuggestionRequest};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /api/schedule/events
///
/// Assign every event to a room. Responds 400 when `rooms` or `events` is
/// absent and 422 when there are events but no rooms.
pub async fn generate_schedule(
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> HandlerResult<Schedule> {
    let Json(request) = payload?;
    let (rooms, events) = request.into_parts()?;
    tracing::info!(
        rooms = rooms.len(),
        events = events.len(),
        "schedule requested"
    );

    let schedule =
        tokio::task::spawn_blocking(move || ep_core::schedule(&rooms, &events)).await??;
    Ok(Json(schedule))
}

/// POST /api/schedule/suggest
///
/// Enumerate suggestion paths for every user, flattened in user order.
/// Responds 400 when `events` or `users` is absent and 413 when the request
/// exceeds the configured suggestion limits.
pub async fn suggest_paths(
    State(state): State<AppState>,
    payload: Result<Json<SuggestionRequest>, JsonRejection>,
) -> HandlerResult<Vec<SuggestionPath>> {
    let Json(request) = payload?;
    let (events, users) = request.into_parts()?;
    tracing::info!(
        events = events.len(),
        users = users.len(),
        "suggestions requested"
    );

    let limits = state.limits;
    let paths =
        tokio::task::spawn_blocking(move || ep_core::suggest(&events, &users, &limits)).await??;
    tracing::debug!(paths = paths.len(), "suggestions generated");
    Ok(Json(paths))
}
