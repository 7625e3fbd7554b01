//! # Student Registry Store
//!
//! Storage for the student registry. The whole collection is persisted as
//! one JSON snapshot in a named slot of a durable key-value store.
//!
//! ## Overview
//!
//! Slot persistence is abstracted behind the [`SlotStore`] trait, keeping
//! the record collection storage-agnostic. The durable implementation is
//! [`SqliteSlots`], with [`MemorySlots`] for testing. [`RecordStore`] owns
//! the ordered collection and writes a snapshot after every mutation.
//!
//! ## Key Types
//!
//! - [`SlotStore`] - The trait for named text slots
//! - [`SqliteSlots`] - SQLite-based persistent slots
//! - [`MemorySlots`] - In-memory slots for tests
//! - [`RecordStore`] - The record collection with add/update/remove/clear
//!
//! ## Usage
//!
//! ```rust,no_run
//! use student_registry_store::{RecordStore, SqliteSlots};
//! use student_registry_core::Record;
//!
//! let slots = SqliteSlots::open("registry.db").unwrap();
//! let mut store = RecordStore::open(slots, "srs_students_v1");
//!
//! store.add(Record::new("Ann Lee", "101", "a@b.co", "9876543210"));
//! assert_eq!(store.len(), 1);
//! ```
//!
//! ## Design Notes
//!
//! - **Soft load**: a missing or unreadable snapshot loads as an empty collection;
//!   unreadable elements of a readable sequence are skipped one by one
//! - **Write-through**: every mutator persists; a failed write is logged, not returned
//! - **No validation**: uniqueness is the caller's job, checked before mutating

pub mod error;
pub mod memory;
pub mod migration;
pub mod records;
pub mod snapshot;
pub mod sqlite;
pub mod traits;

pub use error::{Result, SnapshotError, StoreError};
pub use memory::MemorySlots;
pub use records::RecordStore;
pub use sqlite::SqliteSlots;
pub use traits::SlotStore;
