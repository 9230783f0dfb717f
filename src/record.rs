//! JSON array-backed record log
//!
//! Stores records as a single JSON array on disk, in append order. Each
//! append is a full read-modify-write cycle: the existing array is read and
//! parsed, the new record is pushed, and the whole array is written back.
//! The file therefore always holds a complete, well-formed JSON array.
//!
//! There is no locking. Two concurrent appenders to the same path race and
//! the second write wins, silently dropping the first record; callers that
//! need concurrent use must serialize writes to the path themselves.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::{FilesystemError, RecordError};
use crate::filesystem;

/// Append a record to the JSON array log at `path`
///
/// Missing parent directories and the file itself are created on first use.
/// The record may be any serializable value except JSON `null` or the empty
/// string, which fail with [`RecordError::InvalidRecord`] before any I/O.
///
/// Existing content that is not a JSON array fails with
/// [`RecordError::Parse`] and leaves the file untouched.
pub fn append_record<T: Serialize>(path: &Path, record: &T) -> Result<(), RecordError> {
    let value = serde_json::to_value(record).map_err(|e| RecordError::Serialize {
        error: e.to_string(),
    })?;

    if value.is_null() || value.as_str().is_some_and(str::is_empty) {
        return Err(RecordError::InvalidRecord);
    }

    let mut records = match filesystem::read_file_data(path) {
        Ok(content) => parse_log(path, &content)?,
        Err(FilesystemError::NotFound { .. }) => {
            // Materialize an empty file (and its parents) so the path exists
            // for subsequent operations even if the write below fails.
            tracing::debug!("Log does not exist yet, creating: {}", path.display());
            filesystem::write_file_data(path, "", true)?;
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };

    records.push(value);

    let serialized =
        serde_json::to_string(&Value::Array(records)).map_err(|e| RecordError::Serialize {
            error: e.to_string(),
        })?;
    filesystem::write_file_data(path, serialized, true)?;

    tracing::debug!("Appended record to {}", path.display());
    Ok(())
}

/// Read all records from the log at `path`
///
/// A missing file reads as the empty log. Content that is not a JSON array
/// fails with [`RecordError::Parse`].
pub fn read_records(path: &Path) -> Result<Vec<Value>, RecordError> {
    match filesystem::read_file_data(path) {
        Ok(content) => parse_log(path, &content),
        Err(FilesystemError::NotFound { .. }) => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

/// Parse log file content as a JSON array; empty content is the empty log
fn parse_log(path: &Path, content: &str) -> Result<Vec<Value>, RecordError> {
    if content.is_empty() {
        return Ok(Vec::new());
    }

    let parsed: Value = serde_json::from_str(content).map_err(|e| RecordError::Parse {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    match parsed {
        Value::Array(records) => Ok(records),
        other => Err(RecordError::Parse {
            path: path.to_path_buf(),
            error: format!("expected an array, found {}", json_type_name(&other)),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
