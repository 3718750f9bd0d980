//! One-shot fixture file I/O.
//!
//! Writes are scoped: create the parent directory, write the whole file,
//! done. A failure aborts the run; there is no partial-write recovery.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::FixtureError;

/// Serialize a record to compact JSON and write it.
pub fn write_json<T: Serialize>(path: impl AsRef<Path>, record: &T) -> Result<(), FixtureError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string(record)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "wrote fixture");
    Ok(())
}

/// Read a JSON record back.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, FixtureError> {
    let json = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        value: u64,
    }

    #[test]
    fn write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("record.json");

        let record = Record {
            name: "fixture".to_string(),
            value: 42,
        };
        write_json(&path, &record).unwrap();

        let back: Record = read_json(&path).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn read_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<Record, _> = read_json(dir.path().join("absent.json"));
        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[test]
    fn read_garbage_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.json");
        fs::write(&path, "not json").unwrap();

        let result: Result<Record, _> = read_json(&path);
        assert!(matches!(result, Err(FixtureError::Json(_))));
    }
}
