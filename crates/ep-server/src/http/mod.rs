//! HTTP server module.
//!
//! Exposes both engines as a JSON API with axum:
//!
//! - `GET  /health`
//! - `POST /api/schedule/events`
//! - `POST /api/schedule/suggest`
//!
//! Handlers validate presence of the input collections, then run the engine
//! on the blocking thread pool and return its result as the response body.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
