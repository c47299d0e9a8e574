//! Request bodies accepted by the engines.
//!
//! Both collections are optional on the wire so that an absent list can be
//! told apart from an empty one and rejected before any engine runs.

use serde::{Deserialize, Serialize};

use crate::model::{Event, Room, User};
use crate::types::ValidationError;

/// Rooms and events to schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default)]
    pub rooms: Option<Vec<Room>>,
    #[serde(default)]
    pub events: Option<Vec<Event>>,
}

impl ScheduleRequest {
    /// Builds a request with both collections present.
    pub const fn new(rooms: Vec<Room>, events: Vec<Event>) -> Self {
        Self {
            rooms: Some(rooms),
            events: Some(events),
        }
    }

    /// Splits the request into rooms and events, failing if either is absent.
    pub fn into_parts(self) -> Result<(Vec<Room>, Vec<Event>), ValidationError> {
        let rooms = self
            .rooms
            .ok_or(ValidationError::MissingInput { field: "rooms" })?;
        let events = self
            .events
            .ok_or(ValidationError::MissingInput { field: "events" })?;
        Ok((rooms, events))
    }
}

/// Events and users to generate suggestion paths for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    #[serde(default)]
    pub events: Option<Vec<Event>>,
    #[serde(default)]
    pub users: Option<Vec<User>>,
}

impl SuggestionRequest {
    /// Builds a request with both collections present.
    pub const fn new(events: Vec<Event>, users: Vec<User>) -> Self {
        Self {
            events: Some(events),
            users: Some(users),
        }
    }

    /// Splits the request into events and users, failing if either is absent.
    pub fn into_parts(self) -> Result<(Vec<Event>, Vec<User>), ValidationError> {
        let events = self
            .events
            .ok_or(ValidationError::MissingInput { field: "events" })?;
        let users = self
            .users
            .ok_or(ValidationError::MissingInput { field: "users" })?;
        Ok((events, users))
    }
}
