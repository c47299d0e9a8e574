//! Core scheduling logic for the event planner.
//!
//! This crate contains the fundamental types and logic for:
//! - Scheduling: assigning events to rooms by backtracking search
//! - Suggestion: enumerating event itineraries a user has not registered for
//! - Validation: rejecting absent collections and duplicate identities

pub mod model;
pub mod request;
mod schedule;
mod suggest;
pub mod types;
pub mod validation;

pub use model::{Event, RegisteredEvent, Room, User};
pub use request::{ScheduleRequest, SuggestionRequest};
pub use schedule::{RoomSchedule, Schedule, SchedulingError, schedule, schedule_with};
pub use suggest::{
    SuggestionError, SuggestionLimits, SuggestionPath, UserSuggestions, count_path_slots, count_paths,
    suggest, suggest_by_user, suggest_for_user,
};
pub use types::{EventId, RoomId, UserId, ValidationError};
