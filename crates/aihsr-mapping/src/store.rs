//! Whole-file JSON load and save
//!
//! Files are read completely before any mutation and written back as
//! 2-space indented JSON. With atomic writes enabled the new content goes to
//! a temporary file beside the target which is then renamed over it, so a
//! failed write leaves the previous file intact.

use crate::error::StoreError;
use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// How a document is written back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Temp file in the same directory, then rename
    #[default]
    Atomic,
    /// Truncate and write the target in place
    InPlace,
}

/// Read and parse a JSON file
///
/// # Errors
/// [`StoreError::Read`] if the file cannot be read, [`StoreError::Parse`] if
/// it is not valid JSON.
pub fn load_json(path: &Path) -> Result<Value, StoreError> {
    let text = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&text).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded document");
    Ok(value)
}

/// Encode `value` the way it is stored on disk
///
/// # Errors
/// [`StoreError::Encode`] if serialization fails.
pub fn encode_pretty(path: &Path, value: &Value) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec_pretty(value).map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize and write a JSON file
///
/// # Errors
/// [`StoreError::Write`] or [`StoreError::Persist`] on I/O failure.
pub fn save_json(path: &Path, value: &Value, mode: WriteMode) -> Result<(), StoreError> {
    let bytes = encode_pretty(path, value)?;
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    match mode {
        WriteMode::InPlace => std::fs::write(path, &bytes).map_err(write_err)?,
        WriteMode::Atomic => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
            tmp.write_all(&bytes).map_err(write_err)?;
            tmp.as_file().sync_all().map_err(write_err)?;
            tmp.persist(path).map_err(|e| StoreError::Persist {
                path: path.to_path_buf(),
                source: e.error,
            })?;
        }
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), ?mode, "wrote document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trip_with_two_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        let value = json!({ "b": [1], "a": { "c": [] } });

        save_json(&path, &value, WriteMode::Atomic).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n  \"b\": [\n    1\n  ],\n  \"a\": {\n    \"c\": []\n  }\n}");
        assert_eq!(load_json(&path).unwrap(), value);
    }

    #[test]
    fn in_place_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, "{\"old\": true, \"padding\": \"xxxxxxxxxxxxxxxx\"}").unwrap();

        save_json(&path, &json!({ "new": 1 }), WriteMode::InPlace).unwrap();

        assert_eq!(load_json(&path).unwrap(), json!({ "new": 1 }));
    }

    #[test]
    fn atomic_write_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        save_json(&path, &json!([]), WriteMode::Atomic).unwrap();
        save_json(&path, &json!([1]), WriteMode::Atomic).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{\"controls\": [").unwrap();

        let err = load_json(&path).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("doc.json");
        for mode in [WriteMode::Atomic, WriteMode::InPlace] {
            let err = save_json(&path, &json!({}), mode).unwrap_err();
            assert!(matches!(err, StoreError::Write { .. }));
        }
    }
}
