//! Room assignment by backtracking search.
//!
//! # Algorithm Summary
//!
//! 1. Take events in input order, one depth level per event
//! 2. At each level, try rooms in input order and tentatively append the event
//! 3. Descend to the next event; on failure, undo the placement and try the next room
//! 4. Succeed once every event is placed; fail once the first event runs out of rooms
//!
//! The search keeps an explicit stack of room cursors instead of recursing,
//! so depth is bounded only by the event count.
//!
//! [`schedule`] accepts every placement, which makes the search a single
//! pass that puts all events in the first room. [`schedule_with`] takes a
//! placement predicate that can reject branches and exercise the undo path.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Event, Room};
use crate::types::{EventId, RoomId, ValidationError};
use crate::validation::{ensure_unique_events, ensure_unique_rooms};

/// Scheduling errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    /// The input failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// There were events to place but no rooms to place them in.
    #[error("cannot schedule {events} event(s) without any rooms")]
    NoRooms { events: usize },

    /// Every branch of the search was rejected.
    #[error("no room accepts event {event} after placing {placed} event(s)")]
    Infeasible { event: EventId, placed: usize },
}

/// The events assigned to one room, in placement order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSchedule {
    pub room: Room,
    pub events: Vec<Event>,
}

/// Assignment of events to rooms.
///
/// Entries follow the room input order and every input room has an entry,
/// even when no event was placed in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    entries: Vec<RoomSchedule>,
}

impl Schedule {
    fn with_rooms(rooms: &[Room]) -> Self {
        Self {
            entries: rooms
                .iter()
                .map(|room| RoomSchedule {
                    room: room.clone(),
                    events: Vec::new(),
                })
                .collect(),
        }
    }

    fn place(&mut self, room_index: usize, event: &Event) {
        self.entries[room_index].events.push(event.clone());
    }

    /// Removes the event placed last in the given room.
    fn unplace(&mut self, room_index: usize) {
        self.entries[room_index].events.pop();
    }

    /// Per-room assignments in room input order.
    pub fn entries(&self) -> &[RoomSchedule] {
        &self.entries
    }

    /// Events assigned to a room, or `None` if the room is not part of this schedule.
    pub fn events_in(&self, room: RoomId) -> Option<&[Event]> {
        self.entries
            .iter()
            .find(|entry| entry.room.id == room)
            .map(|entry| entry.events.as_slice())
    }

    /// The room an event was assigned to.
    pub fn room_of(&self, event: EventId) -> Option<&Room> {
        self.entries
            .iter()
            .find(|entry| entry.events.iter().any(|e| e.id == event))
            .map(|entry| &entry.room)
    }

    /// Total number of placed events across all rooms.
    pub fn event_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.events.len()).sum()
    }

    /// Returns `true` if the schedule has no rooms.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Assigns every event to a room with no placement constraints.
pub fn schedule(rooms: &[Room], events: &[Event]) -> Result<Schedule, SchedulingError> {
    schedule_with(rooms, events, |_, _, _| true)
}

/// Assigns every event to a room, consulting `accept` before each placement.
///
/// `accept` sees the partial schedule, the candidate room and the event. A
/// rejected placement is skipped; when no room at some depth leads to a full
/// assignment, earlier placements are undone and their next rooms tried.
pub fn schedule_with<F>(
    rooms: &[Room],
    events: &[Event],
    mut accept: F,
) -> Result<Schedule, SchedulingError>
where
    F: FnMut(&Schedule, &Room, &Event) -> bool,
{
    ensure_unique_rooms(rooms)?;
    ensure_unique_events(events)?;

    if rooms.is_empty() && !events.is_empty() {
        return Err(SchedulingError::NoRooms {
            events: events.len(),
        });
    }

    let mut schedule = Schedule::with_rooms(rooms);
    // placed[i] is the room index currently holding events[i].
    let mut placed: Vec<usize> = Vec::with_capacity(events.len());
    let mut next_room = 0;
    let mut deepest_failure = 0;
    let mut backtracks = 0_u64;

    while placed.len() < events.len() {
        let depth = placed.len();
        let event = &events[depth];
        let candidate =
            (next_room..rooms.len()).find(|&r| accept(&schedule, &rooms[r], event));

        if let Some(room_index) = candidate {
            schedule.place(room_index, event);
            placed.push(room_index);
            next_room = 0;
            continue;
        }

        deepest_failure = deepest_failure.max(depth);
        let Some(room_index) = placed.pop() else {
            tracing::debug!(backtracks, "scheduling search exhausted");
            return Err(SchedulingError::Infeasible {
                event: events[deepest_failure].id,
                placed: deepest_failure,
            });
        };
        schedule.unplace(room_index);
        next_room = room_index + 1;
        backtracks += 1;
    }

    tracing::debug!(
        rooms = rooms.len(),
        events = events.len(),
        backtracks,
        "schedule complete"
    );
    Ok(schedule)
}
