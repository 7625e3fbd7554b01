//! # Student Registry Core
//!
//! Pure primitives for the student registry: records, validation, the edit
//! session, and the search view.
//!
//! This crate contains no I/O and no storage. Persistence lives in
//! `student-registry-store`; the workflow that sequences validate → mutate
//! → reset lives in `student-registry`.
//!
//! ## Key Types
//!
//! - [`Record`] - One student entry (name, student ID, email, contact)
//! - [`Field`] - Field discriminator, in validation order
//! - [`FieldErrors`] - Every failing field with its [`ValidationError`]
//! - [`Session`] - Composing vs. editing a position
//! - [`VisibleRows`] - Filtered, renumbered rows for a search term
//!
//! ## Validation
//!
//! ```rust
//! use student_registry_core::{validate, Field, Record, ValidationError};
//!
//! let existing = vec![Record::new("Ann Lee", "101", "a@b.co", "9876543210")];
//! let candidate = Record::new("Bob Ray", "101", "bob@c.org", "1234567890");
//!
//! let errors = validate(&candidate, &existing, None).unwrap_err();
//! assert_eq!(errors.get(Field::StudentId), Some(&ValidationError::DuplicateKey));
//! ```

pub mod error;
pub mod sanitize;
pub mod session;
pub mod types;
pub mod validation;
pub mod view;

pub use error::{FieldErrors, ValidationError, ValidationResult};
pub use sanitize::sanitize;
pub use session::Session;
pub use types::{Field, Record};
pub use validation::{find_duplicate, validate, validate_field};
pub use view::{visible_rows, VisibleRow, VisibleRows};
