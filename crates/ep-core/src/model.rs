//! Entities supplied by the event store.
//!
//! These records are read-only inputs to the engines. Field names follow the
//! camelCase convention used by the web clients.

use serde::{Deserialize, Serialize};

use crate::types::{EventId, RoomId, UserId};

/// An event that can be placed in a room or suggested to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier for this event.
    pub id: EventId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    /// Start of the schedule window, as supplied by the store.
    ///
    /// Opaque to the engines; no ordering or overlap is derived from it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End of the schedule window. Opaque, like `start_date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Passed through as given. Negative or sentinel values are accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_students: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_events: Option<i64>,
}

impl Event {
    /// Creates an event with only an identifier and a name.
    pub fn new(id: EventId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            venue: None,
            department: None,
            college_name: None,
            target_audience: None,
            start_date: None,
            end_date: None,
            max_students: None,
            max_events: None,
        }
    }
}

/// A room events can be assigned to.
///
/// Capacity is carried for display only; the scheduling engine does not
/// enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
}

impl Room {
    /// Creates a room with only an identifier and a name.
    pub fn new(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            building: None,
            capacity: None,
        }
    }
}

/// Reference to an event a user has registered for.
///
/// Only the identifier is read. Clients may send full event records; the
/// remaining fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredEvent {
    pub id: EventId,
}

impl From<EventId> for RegisteredEvent {
    fn from(id: EventId) -> Self {
        Self { id }
    }
}

/// A user and the events they are already registered for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Registered events. `None` means the store supplied no registration
    /// data, which is different from an empty registration list.
    #[serde(default)]
    pub registered_events: Option<Vec<RegisteredEvent>>,
}

impl User {
    /// Creates a user registered for the given events.
    pub fn new(id: UserId, registered: impl IntoIterator<Item = EventId>) -> Self {
        Self {
            id,
            name: None,
            registered_events: Some(registered.into_iter().map(RegisteredEvent::from).collect()),
        }
    }

    /// Creates a user with no registration data at all.
    pub const fn without_registrations(id: UserId) -> Self {
        Self {
            id,
            name: None,
            registered_events: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_accepts_camel_case_fields() {
        let json = r#"{
            "id": 3,
            "name": "Robotics Workshop",
            "collegeName": "Engineering",
            "maxStudents": 40,
            "startDate": "2025-02-01",
            "rules": "ignored by the engines"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.id, EventId::new(3).unwrap());
        assert_eq!(event.college_name.as_deref(), Some("Engineering"));
        assert_eq!(event.max_students, Some(40));
        assert_eq!(event.start_date.as_deref(), Some("2025-02-01"));
        assert_eq!(event.venue, None);
    }

    #[test]
    fn event_keeps_negative_and_sentinel_limits() {
        let json = r#"{"id": 1, "maxStudents": -1, "maxEvents": 0}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.max_students, Some(-1));
        assert_eq!(event.max_events, Some(0));

        let room: Room = serde_json::from_str(r#"{"id": 2, "capacity": -1}"#).unwrap();
        assert_eq!(room.capacity, Some(-1));
    }

    #[test]
    fn event_rejects_negative_id() {
        let result: Result<Event, _> = serde_json::from_str(r#"{"id": -1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn event_serialization_skips_absent_fields() {
        let event = Event::new(EventId::new(1).unwrap(), "Hackathon");
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Hackathon"}"#);
    }

    #[test]
    fn user_distinguishes_missing_and_empty_registrations() {
        let missing: User = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(missing.registered_events, None);

        let null: User = serde_json::from_str(r#"{"id": 1, "registeredEvents": null}"#).unwrap();
        assert_eq!(null.registered_events, None);

        let empty: User = serde_json::from_str(r#"{"id": 1, "registeredEvents": []}"#).unwrap();
        assert_eq!(empty.registered_events, Some(vec![]));
    }

    #[test]
    fn registered_events_accept_full_event_records() {
        let json = r#"{
            "id": 9,
            "registeredEvents": [{"id": 4, "name": "Quiz", "venue": "Hall B"}]
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(
            user.registered_events,
            Some(vec![RegisteredEvent {
                id: EventId::new(4).unwrap()
            }])
        );
    }
}
