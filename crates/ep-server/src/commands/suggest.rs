//! Suggest command: enumerate itineraries from a request file.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use ep_core::{SuggestionLimits, SuggestionRequest};

use super::util::read_request;

/// Runs the suggest command, writing the paths as JSON.
///
/// With `by_user`, paths are grouped per user; otherwise they are printed as
/// one flat list in user order.
pub fn run<W: Write>(
    writer: &mut W,
    input: &Path,
    by_user: bool,
    limits: &SuggestionLimits,
) -> Result<()> {
    let request: SuggestionRequest = read_request(input)?;
    let (events, users) = request.into_parts()?;

    if by_user {
        let grouped = ep_core::suggest_by_user(&events, &users, limits)
            .context("failed to generate suggestions")?;
        serde_json::to_writer_pretty(&mut *writer, &grouped)?;
    } else {
        let paths = ep_core::suggest(&events, &users, limits)
            .context("failed to generate suggestions")?;
        tracing::debug!(paths = paths.len(), "suggestions generated");
        serde_json::to_writer_pretty(&mut *writer, &paths)?;
    }
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    const TWO_EVENTS_ONE_REGISTERED: &str = r#"{
        "events": [{"id": 1, "name": "Quiz"}, {"id": 2, "name": "Debate"}],
        "users": [
            {"id": 5, "registeredEvents": [{"id": 1}]},
            {"id": 6}
        ]
    }"#;

    fn request_file(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn run_to_string(body: &str, by_user: bool, limits: &SuggestionLimits) -> Result<String> {
        let file = request_file(body);
        let mut output = Vec::new();
        run(&mut output, file.path(), by_user, limits)?;
        let value: serde_json::Value = serde_json::from_slice(&output)?;
        Ok(value.to_string())
    }

    #[test]
    fn suggest_command_prints_flat_paths() {
        let output =
            run_to_string(TWO_EVENTS_ONE_REGISTERED, false, &SuggestionLimits::default()).unwrap();
        assert_snapshot!(output, @r#"[[{"id":2,"name":"Debate"}]]"#);
    }

    #[test]
    fn suggest_command_groups_by_user() {
        let output =
            run_to_string(TWO_EVENTS_ONE_REGISTERED, true, &SuggestionLimits::default()).unwrap();
        assert_snapshot!(output, @r#"[{"paths":[[{"id":2,"name":"Debate"}]],"userId":5}]"#);
    }

    #[test]
    fn suggest_command_enforces_limits() {
        let limits = SuggestionLimits {
            max_candidates: 1,
            ..SuggestionLimits::default()
        };
        let body = r#"{"events": [{"id": 1}, {"id": 2}], "users": [{"id": 3, "registeredEvents": []}]}"#;
        let err = run_to_string(body, false, &limits).unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            "user 3 has 2 unregistered events, limit is 1"
        );
    }

    #[test]
    fn suggest_command_rejects_missing_users() {
        let err = run_to_string(r#"{"events": []}"#, false, &SuggestionLimits::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "users must be provided");
    }
}
