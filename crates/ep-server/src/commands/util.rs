//! Shared utilities for CLI commands.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Reads a JSON request from a file, or from stdin when `path` is `-`.
pub fn read_request<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if path == Path::new("-") {
        return parse_request(io::stdin().lock(), "stdin");
    }

    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    parse_request(BufReader::new(file), &path.display().to_string())
}

fn parse_request<T: DeserializeOwned, R: Read>(reader: R, source: &str) -> Result<T> {
    serde_json::from_reader(reader).with_context(|| format!("invalid JSON request in {source}"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use ep_core::ScheduleRequest;

    use super::*;

    #[test]
    fn reads_request_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"rooms": [{{"id": 1}}], "events": []}}"#).unwrap();
        file.flush().unwrap();

        let request: ScheduleRequest = read_request(file.path()).unwrap();
        assert_eq!(request.rooms.map(|r| r.len()), Some(1));
        assert_eq!(request.events, Some(vec![]));
    }

    #[test]
    fn missing_file_error_names_path() {
        let err = read_request::<ScheduleRequest>(Path::new("/nonexistent/request.json"))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/request.json"));
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = parse_request::<ScheduleRequest, _>("{not json".as_bytes(), "test").unwrap_err();
        assert_eq!(err.to_string(), "invalid JSON request in test");
    }
}
