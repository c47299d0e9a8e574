//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for request inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required collection was absent from the request.
    #[error("{field} must be provided")]
    MissingInput { field: &'static str },

    /// Identifiers are non-negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeId { field: &'static str, value: i64 },

    /// Two entities in the same collection share an identifier.
    #[error("duplicate {field}: {value}")]
    DuplicateId { field: &'static str, value: i64 },
}

/// Generates a validated integer ID newtype with common trait implementations.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident, $field_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name(i64);

        impl $name {
            /// Field name used in validation messages.
            pub const FIELD: &'static str = $field_name;

            /// Creates a new ID after validation.
            pub const fn new(id: i64) -> Result<Self, ValidationError> {
                if id < 0 {
                    return Err(ValidationError::NegativeId {
                        field: $field_name,
                        value: id,
                    });
                }
                Ok(Self(id))
            }

            /// Returns the raw identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl TryFrom<i64> for $name {
            type Error = ValidationError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// A validated event identifier.
    ///
    /// Event IDs are assigned by the event store. Within a single request they
    /// must be unique; see [`crate::validation`].
    EventId, "event ID"
);

define_id!(
    /// A validated room identifier.
    RoomId, "room ID"
);

define_id!(
    /// A validated user identifier.
    UserId, "user ID"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_id_rejects_negative() {
        assert!(EventId::new(-1).is_err());
        assert!(EventId::new(0).is_ok());
        assert!(EventId::new(42).is_ok());
    }

    #[test]
    fn negative_id_error_names_field() {
        let err = RoomId::new(-7).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NegativeId {
                field: "room ID",
                value: -7
            }
        );
        assert_eq!(err.to_string(), "room ID must be non-negative, got -7");
    }

    #[test]
    fn event_id_serializes_as_number() {
        let id = EventId::new(12).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "12");
        let parsed: EventId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn event_id_serde_rejects_negative() {
        let result: Result<EventId, _> = serde_json::from_str("-3");
        assert!(result.is_err());
    }

    #[test]
    fn user_id_display() {
        let id = UserId::new(901).unwrap();
        assert_eq!(id.to_string(), "901");
        assert_eq!(i64::from(id), 901);
    }

    #[test]
    fn missing_input_message() {
        let err = ValidationError::MissingInput { field: "rooms" };
        assert_eq!(err.to_string(), "rooms must be provided");
    }
}
