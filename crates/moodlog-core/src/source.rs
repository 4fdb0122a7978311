//! Entry sources.
//!
//! An entry source hands the engine one complete snapshot of a user's raw
//! entries. How the entries are stored is the source's business.
//!
//! JSON payloads come in two shapes:
//! - a bare array of entries;
//! - the backend user envelope, where the journal is stored as a
//!   JSON-encoded string under `data` (possibly nested one level:
//!   `{"data": {"data": "[...]"}}`). An empty or absent string means the
//!   user has no entries yet.
//!
//! Array elements are decoded one by one; an element that is not a valid
//! entry object is counted in [`Decoded::rejected`] instead of failing the
//! whole payload.

use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::entry::RawMoodEntry;
use crate::error::SourceError;

/// A decoded snapshot of raw entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decoded {
    pub entries: Vec<RawMoodEntry>,
    /// Elements that could not be decoded as entries.
    pub rejected: usize,
}

impl From<Vec<RawMoodEntry>> for Decoded {
    fn from(entries: Vec<RawMoodEntry>) -> Self {
        Self {
            entries,
            rejected: 0,
        }
    }
}

/// Trait for anything that can supply a user's mood entries.
pub trait EntrySource {
    /// Error type for fetch operations.
    type Error: fmt::Display;

    /// Fetch the full, consistent set of raw entries.
    fn fetch_entries(&self) -> Result<Decoded, Self::Error>;
}

/// Entries held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: Vec<RawMoodEntry>,
}

impl MemorySource {
    pub fn new(entries: Vec<RawMoodEntry>) -> Self {
        Self { entries }
    }
}

impl EntrySource for MemorySource {
    type Error = Infallible;

    fn fetch_entries(&self) -> Result<Decoded, Self::Error> {
        Ok(Decoded::from(self.entries.clone()))
    }
}

/// Entries read from a JSON export on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntrySource for JsonFileSource {
    type Error = SourceError;

    fn fetch_entries(&self) -> Result<Decoded, Self::Error> {
        let payload =
            std::fs::read_to_string(&self.path).map_err(|source| SourceError::ReadFailed {
                path: self.path.clone(),
                source,
            })?;
        let decoded = decode_payload(&payload)?;
        tracing::debug!(
            path = %self.path.display(),
            entries = decoded.entries.len(),
            rejected = decoded.rejected,
            "Loaded entries"
        );
        Ok(decoded)
    }
}

/// Decode a JSON payload in either supported shape.
pub fn decode_payload(payload: &str) -> Result<Decoded, SourceError> {
    let value: Value = serde_json::from_str(payload)?;
    decode_value(value)
}

fn decode_value(value: Value) -> Result<Decoded, SourceError> {
    match value {
        Value::Array(items) => Ok(decode_items(items)),
        Value::Object(mut envelope) => match envelope.remove("data") {
            None | Some(Value::Null) => Ok(Decoded::default()),
            Some(Value::String(encoded)) if encoded.trim().is_empty() => Ok(Decoded::default()),
            Some(Value::String(encoded)) => decode_value(serde_json::from_str(&encoded)?),
            Some(inner @ (Value::Object(_) | Value::Array(_))) => decode_value(inner),
            Some(other) => Err(SourceError::UnexpectedShape {
                expected: "entry array or JSON string under `data`",
                found: kind(&other),
            }),
        },
        Value::Null => Ok(Decoded::default()),
        other => Err(SourceError::UnexpectedShape {
            expected: "entry array or user envelope",
            found: kind(&other),
        }),
    }
}

fn decode_items(items: Vec<Value>) -> Decoded {
    let mut decoded = Decoded::default();
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<RawMoodEntry>(item) {
            Ok(entry) => decoded.entries.push(entry),
            Err(e) => {
                decoded.rejected += 1;
                tracing::warn!(index, error = %e, "Rejecting undecodable entry");
            }
        }
    }
    decoded
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_ENTRIES: &str = r#"[
        {"id": "1", "mood": 8, "energy": 7, "created_at": "2024-04-10T08:00:00Z"},
        {"id": "2", "mood": 6, "energy": 5, "created_at": "2024-04-09T08:00:00Z"}
    ]"#;

    #[test]
    fn test_decode_bare_array() {
        let decoded = decode_payload(TWO_ENTRIES).unwrap();
        assert_eq!(decoded.entries.len(), 2);
        assert_eq!(decoded.rejected, 0);
        assert_eq!(decoded.entries[0].mood, Some(8));
    }

    #[test]
    fn test_decode_nested_envelope() {
        let envelope = serde_json::json!({
            "data": {
                "_id": "67f02e433c85f911cd975c99",
                "username": "a",
                "data": TWO_ENTRIES,
            }
        });
        let decoded = decode_payload(&envelope.to_string()).unwrap();
        assert_eq!(decoded.entries.len(), 2);
        assert_eq!(decoded.entries[1].id, "2");
    }

    #[test]
    fn test_decode_empty_envelope() {
        let decoded = decode_payload(r#"{"data": {"username": "a", "data": ""}}"#).unwrap();
        assert_eq!(decoded, Decoded::default());
        assert_eq!(decode_payload("null").unwrap(), Decoded::default());
        assert_eq!(decode_payload("{}").unwrap(), Decoded::default());
    }

    #[test]
    fn test_bad_elements_are_counted() {
        let decoded = decode_payload(
            r#"[
                {"id": "ok", "mood": 5, "energy": 5},
                {"id": "float", "mood": 5.5, "energy": 5},
                "not an entry",
                {"id": "no-mood", "energy": 5}
            ]"#,
        )
        .unwrap();
        assert_eq!(decoded.rejected, 2);
        // Missing mood decodes fine here; normalization excludes it later.
        assert_eq!(decoded.entries.len(), 2);
    }

    #[test]
    fn test_unexpected_shape() {
        let err = decode_payload("42").unwrap_err();
        assert!(matches!(
            err,
            SourceError::UnexpectedShape { found: "number", .. }
        ));
        let err = decode_payload(r#"{"data": true}"#).unwrap_err();
        assert!(matches!(
            err,
            SourceError::UnexpectedShape { found: "boolean", .. }
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            decode_payload("[{"),
            Err(SourceError::Malformed(_))
        ));
        assert!(matches!(
            decode_payload(r#"{"data": "[oops"}"#),
            Err(SourceError::Malformed(_))
        ));
    }

    #[test]
    fn test_json_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_ENTRIES.as_bytes()).unwrap();

        let source = JsonFileSource::new(file.path());
        let decoded = source.fetch_entries().unwrap();
        assert_eq!(decoded.entries.len(), 2);
    }

    #[test]
    fn test_json_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("missing.json"));
        let err = source.fetch_entries().unwrap_err();
        assert!(matches!(err, SourceError::ReadFailed { .. }));
    }

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new(vec![RawMoodEntry {
            id: "m".into(),
            mood: Some(3),
            energy: Some(4),
            ..Default::default()
        }]);
        let decoded = source.fetch_entries().unwrap();
        assert_eq!(decoded.entries.len(), 1);
        assert_eq!(decoded.rejected, 0);
    }
}
