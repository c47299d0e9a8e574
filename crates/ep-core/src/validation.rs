//! Input validation shared by both engines.
//!
//! Detects duplicate identifiers within a collection. Event identity is what
//! "every event exactly once" and "no repeat within a path" are defined over,
//! so duplicates are rejected before any search starts.

use std::collections::HashSet;

use crate::model::{Event, Room};
use crate::types::{EventId, RoomId, ValidationError};

/// Fails on the first event ID that appears twice.
pub fn ensure_unique_events(events: &[Event]) -> Result<(), ValidationError> {
    first_duplicate(events.iter().map(|e| e.id)).map_or(Ok(()), |id| {
        Err(ValidationError::DuplicateId {
            field: EventId::FIELD,
            value: id.get(),
        })
    })
}

/// Fails on the first room ID that appears twice.
pub fn ensure_unique_rooms(rooms: &[Room]) -> Result<(), ValidationError> {
    first_duplicate(rooms.iter().map(|r| r.id)).map_or(Ok(()), |id| {
        Err(ValidationError::DuplicateId {
            field: RoomId::FIELD,
            value: id.get(),
        })
    })
}

fn first_duplicate<T, I>(ids: I) -> Option<T>
where
    T: Eq + std::hash::Hash + Copy,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}
