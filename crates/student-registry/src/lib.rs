//! # Student Registry
//!
//! The unified API for the student registry: a small, persisted roster of
//! student records with validation, deduplication, editing and search.
//!
//! ## Overview
//!
//! The registry is an embedded engine for a host UI shell. It provides:
//!
//! - **Validation**: per-field shape rules plus student ID uniqueness, with
//!   every failure reported at once
//! - **Store**: an ordered collection persisted as one snapshot in a
//!   durable key-value slot
//! - **Session**: whether the next submit appends or replaces
//! - **Search**: a filtered, renumbered view of the collection
//!
//! ## Key Concepts
//!
//! - **Record**: Replaced as a whole, never patched field by field.
//! - **Student ID**: Unique across the collection, except against the record being edited.
//! - **Snapshot**: An unreadable snapshot loads as an empty roster.
//!
//! ## Usage
//!
//! ```rust
//! use student_registry::{Record, Registry, RegistryConfig, SubmitOutcome};
//! use student_registry::store::MemorySlots;
//!
//! let mut registry = Registry::open(MemorySlots::new(), RegistryConfig::default()).unwrap();
//!
//! let outcome = registry
//!     .submit(Record::new("Ann Lee", "101", "a@b.co", "9876543210"))
//!     .unwrap();
//! assert_eq!(outcome, SubmitOutcome::Added { position: 0 });
//!
//! let rows = registry.visible_rows("ann");
//! assert_eq!(rows.visible_count(), 1);
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `student_registry::core` - Records, validation, session, search view
//! - `student_registry::store` - Slot storage, SQLite, record collection

pub mod config;
pub mod error;
pub mod registry;

// Re-export component crates
pub use student_registry_core as core;
pub use student_registry_store as store;

// Re-export main types for convenience
pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use registry::{Registry, SubmitOutcome};

// Re-export commonly used core types
pub use student_registry_core::{
    Field, FieldErrors, Record, Session, ValidationError, ValidationResult, VisibleRow,
    VisibleRows,
};
