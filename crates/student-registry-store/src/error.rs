//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during slot storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Snapshot serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A lock guarding the backend was poisoned by a panicking writer.
    #[error("storage lock poisoned: {0}")]
    Poisoned(String),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a persisted snapshot could not be read back.
///
/// Never surfaced by [`crate::RecordStore::load`]; an unreadable snapshot
/// degrades to an empty collection.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The payload is not valid JSON, or its elements are not records.
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The payload is valid JSON but not an array.
    #[error("snapshot is not a sequence")]
    NotASequence,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
