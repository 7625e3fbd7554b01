//! Snapshot codec: the whole collection as one JSON text payload.
//!
//! The payload is a JSON array of objects with string-valued `name`,
//! `studentId`, `email` and `contact` keys.

use serde_json::Value;
use student_registry_core::Record;

use crate::error::{Result, SnapshotError, StoreError};

/// Encode the collection as a snapshot payload.
pub fn encode(records: &[Record]) -> Result<String> {
    serde_json::to_string(records).map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Decode a snapshot payload.
///
/// The payload must be a JSON array. Elements that are not well-formed
/// records are skipped with a warning; the rest load in order.
pub fn decode(payload: &str) -> std::result::Result<Vec<Record>, SnapshotError> {
    let Value::Array(elements) = serde_json::from_str::<Value>(payload)? else {
        return Err(SnapshotError::NotASequence);
    };

    let records = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value::<Record>(element) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping unreadable record in snapshot");
                None
            }
        })
        .collect();

    Ok(records)
}

/// Decode an optional payload, degrading anything unreadable to an empty
/// collection.
pub fn decode_or_empty(payload: Option<&str>) -> Vec<Record> {
    let Some(payload) = payload else {
        return Vec::new();
    };

    match decode(payload) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(error = %e, "discarding unreadable snapshot");
            Vec::new()
        }
    }
}
