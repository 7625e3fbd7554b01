//! Snapshot vectors: persisted payloads and what loading them must yield.
//!
//! Any host that reads or writes the registry slot must agree on these.
//! Unreadable payloads all load as an empty roster; inside a readable
//! sequence only the unreadable elements are dropped.

use student_registry_core::Record;
use student_registry_store::snapshot;

/// A single snapshot vector.
#[derive(Debug, Clone)]
pub struct SnapshotVector {
    pub name: &'static str,
    pub description: &'static str,
    /// Raw slot contents, `None` for a missing slot.
    pub payload: Option<&'static str>,
    /// Records the payload must load as.
    pub expected: Vec<Record>,
}

/// All snapshot vectors.
pub fn all_vectors() -> Vec<SnapshotVector> {
    vec![
        SnapshotVector {
            name: "missing_slot",
            description: "No payload stored yet",
            payload: None,
            expected: vec![],
        },
        SnapshotVector {
            name: "empty_array",
            description: "Payload written after clearing all records",
            payload: Some("[]"),
            expected: vec![],
        },
        SnapshotVector {
            name: "single_record",
            description: "One record with camelCase keys",
            payload: Some(
                r#"[{"name":"Ann Lee","studentId":"101","email":"a@b.co","contact":"9876543210"}]"#,
            ),
            expected: vec![Record::new("Ann Lee", "101", "a@b.co", "9876543210")],
        },
        SnapshotVector {
            name: "leading_zero_ids",
            description: "Student IDs stay strings; 007 and 7 are distinct",
            payload: Some(concat!(
                r#"[{"name":"Jay","studentId":"007","email":"j@b.co","contact":"1111111111"},"#,
                r#"{"name":"Kay","studentId":"7","email":"k@b.co","contact":"2222222222"}]"#
            )),
            expected: vec![
                Record::new("Jay", "007", "j@b.co", "1111111111"),
                Record::new("Kay", "7", "k@b.co", "2222222222"),
            ],
        },
        SnapshotVector {
            name: "extra_keys_ignored",
            description: "Unknown keys on a record are dropped on load",
            payload: Some(concat!(
                r#"[{"name":"Ann","studentId":"1","email":"a@b.co","#,
                r#""contact":"9876543210","grade":"A"}]"#
            )),
            expected: vec![Record::new("Ann", "1", "a@b.co", "9876543210")],
        },
        SnapshotVector {
            name: "corrupted_text",
            description: "Truncated JSON",
            payload: Some("{not json"),
            expected: vec![],
        },
        SnapshotVector {
            name: "empty_text",
            description: "Zero-length payload",
            payload: Some(""),
            expected: vec![],
        },
        SnapshotVector {
            name: "object_not_array",
            description: "Valid JSON that is not a sequence",
            payload: Some(r#"{"students":[]}"#),
            expected: vec![],
        },
        SnapshotVector {
            name: "array_of_numbers",
            description: "A sequence with no record elements loads nothing",
            payload: Some("[1,2,3]"),
            expected: vec![],
        },
        SnapshotVector {
            name: "missing_field",
            description: "A record without a contact key is skipped; its neighbours load",
            payload: Some(concat!(
                r#"[{"name":"Ann","studentId":"1","email":"a@b.co","contact":"9876543210"},"#,
                r#"{"name":"Cy","studentId":"3","email":"c@b.co"},"#,
                r#"{"name":"Bob","studentId":"2","email":"b@b.co","contact":"1234567890"}]"#
            )),
            expected: vec![
                Record::new("Ann", "1", "a@b.co", "9876543210"),
                Record::new("Bob", "2", "b@b.co", "1234567890"),
            ],
        },
        SnapshotVector {
            name: "wrongly_typed_field",
            description: "A numeric studentId is not a record; other elements load",
            payload: Some(concat!(
                r#"[{"name":"Ann","studentId":1,"email":"a@b.co","contact":"9876543210"},"#,
                r#"{"name":"Bob","studentId":"2","email":"b@b.co","contact":"1234567890"},null]"#
            )),
            expected: vec![Record::new("Bob", "2", "b@b.co", "1234567890")],
        },
    ]
}

/// Check every vector against the snapshot decoder.
///
/// Returns the names of vectors that did not load as expected.
pub fn verify_all_vectors() -> Result<(), Vec<&'static str>> {
    let failures: Vec<&'static str> = all_vectors()
        .into_iter()
        .filter(|v| snapshot::decode_or_empty(v.payload) != v.expected)
        .map(|v| v.name)
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures)
    }
}
