//! # Student Registry Testkit
//!
//! Testing utilities for the student registry.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Snapshot vectors**: Persisted payloads with the roster each must load as
//! - **Generators**: Proptest strategies for valid and invalid field values
//! - **Fixtures**: Memory-backed stores and reproducible sample rosters
//!
//! ## Snapshot Vectors
//!
//! ```rust
//! use student_registry_testkit::vectors::{all_vectors, verify_all_vectors};
//!
//! assert!(verify_all_vectors().is_ok());
//! for vector in all_vectors() {
//!     println!("{}: {} record(s)", vector.name, vector.expected.len());
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use student_registry_core::validate;
//! use student_registry_testkit::generators::valid_record;
//!
//! proptest! {
//!     #[test]
//!     fn valid_records_pass(record in valid_record()) {
//!         prop_assert!(validate(&record, &[], None).is_ok());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use student_registry_testkit::fixtures::{ann_bob_carl, TestFixture};
//!
//! let fixture = TestFixture::with_records(&ann_bob_carl());
//! assert_eq!(fixture.store.len(), 3);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{ann_bob_carl, ann_lee, random_roster, TestFixture, FIXTURE_KEY};
pub use generators::{roster, valid_record};
pub use vectors::{all_vectors, verify_all_vectors, SnapshotVector};
