//! Schedule command: assign events to rooms from a request file.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use ep_core::ScheduleRequest;

use super::util::read_request;

/// Runs the schedule command, writing the schedule as JSON.
pub fn run<W: Write>(writer: &mut W, input: &Path) -> Result<()> {
    let request: ScheduleRequest = read_request(input)?;
    let (rooms, events) = request.into_parts()?;

    let schedule = ep_core::schedule(&rooms, &events).context("scheduling failed")?;
    tracing::debug!(
        rooms = rooms.len(),
        events = schedule.event_count(),
        "schedule built"
    );

    serde_json::to_writer_pretty(&mut *writer, &schedule)?;
    writeln!(writer)?;
    Ok(())
}
