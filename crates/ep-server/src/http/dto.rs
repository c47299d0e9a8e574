//! Data Transfer Objects for the HTTP API.
//!
//! Request bodies and result types come from `ep_core`, which already derive
//! `Serialize`/`Deserialize`. Only HTTP-specific shapes live here.

use serde::{Deserialize, Serialize};

pub use ep_core::{Schedule, ScheduleRequest, SuggestionPath, SuggestionRequest};

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" when the server answers
    pub status: String,
    /// Crate version of the running server
    pub version: String,
}
