//! HTTP error handling and response types.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ep_core::{SchedulingError, SuggestionError, ValidationError};
use serde::{Deserialize, Serialize};

/// API error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// A required collection was absent
    BadRequest(String),
    /// Input present but unusable (duplicate identities)
    InvalidArgument(String),
    /// Body could not be read or parsed as the expected JSON
    InvalidBody(JsonRejection),
    /// No assignment covers every event
    Infeasible(String),
    /// Input too large to compute within the configured limits
    ResourceExhausted(String),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg)),
            Self::InvalidArgument(msg) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_ARGUMENT", msg),
            ),
            Self::InvalidBody(rejection) => (
                rejection.status(),
                ApiError::new("INVALID_BODY", "request body is not a valid request")
                    .with_details(rejection.body_text()),
            ),
            Self::Infeasible(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("INFEASIBLE", msg),
            ),
            Self::ResourceExhausted(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ApiError::new("RESOURCE_EXHAUSTED", msg),
            ),
            Self::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };

        if status.is_server_error() {
            tracing::error!(code = %error.code, message = %error.message, "request failed");
        } else {
            tracing::warn!(code = %error.code, message = %error.message, "request rejected");
        }

        (status, Json(error)).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingInput { .. } => Self::BadRequest(err.to_string()),
            ValidationError::NegativeId { .. } | ValidationError::DuplicateId { .. } => {
                Self::InvalidArgument(err.to_string())
            }
        }
    }
}

impl From<SchedulingError> for AppError {
    fn from(err: SchedulingError) -> Self {
        match err {
            SchedulingError::Invalid(inner) => inner.into(),
            SchedulingError::NoRooms { .. } | SchedulingError::Infeasible { .. } => {
                Self::Infeasible(err.to_string())
            }
        }
    }
}

impl From<SuggestionError> for AppError {
    fn from(err: SuggestionError) -> Self {
        match err {
            SuggestionError::Invalid(inner) => inner.into(),
            SuggestionError::TooManyCandidates { .. }
            | SuggestionError::PathLimitExceeded { .. }
            | SuggestionError::OutputLimitExceeded { .. } => {
                Self::ResourceExhausted(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(format!("computation aborted: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use ep_core::{EventId, UserId};

    use super::*;

    #[test]
    fn missing_input_maps_to_bad_request() {
        let response =
            AppError::from(ValidationError::MissingInput { field: "rooms" }).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn duplicate_id_maps_to_invalid_argument() {
        let err = AppError::from(SchedulingError::Invalid(ValidationError::DuplicateId {
            field: "event ID",
            value: 3,
        }));
        assert!(matches!(err, AppError::InvalidArgument(ref m) if m == "duplicate event ID: 3"));
    }

    #[test]
    fn infeasible_maps_to_unprocessable() {
        let err = AppError::from(SchedulingError::Infeasible {
            event: EventId::new(1).unwrap(),
            placed: 0,
        });
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn limits_map_to_payload_too_large() {
        let err = AppError::from(SuggestionError::TooManyCandidates {
            user: UserId::new(1).unwrap(),
            candidates: 20,
            limit: 8,
        });
        assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);

        let err = AppError::from(SuggestionError::OutputLimitExceeded {
            bytes: 2048,
            limit: 1024,
        });
        assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
