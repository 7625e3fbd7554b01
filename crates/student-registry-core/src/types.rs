//! Record and field definitions for the student registry.
//!
//! A [`Record`] is only ever inserted or replaced as a whole, so every
//! field is owned and public: callers build a complete candidate, validate
//! it, then hand it to the store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One student entry.
///
/// Serialized with camelCase keys (`name`, `studentId`, `email`, `contact`),
/// all string-valued, which is the persisted snapshot format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Letters and spaces only, 2–60 characters.
    pub name: String,
    /// One or more digits, unique within a store.
    pub student_id: String,
    /// Minimal `local@domain.tld` shape.
    pub email: String,
    /// Digits only, at least 10 of them.
    pub contact: String,
}

impl Record {
    /// Create a new record from its four fields.
    pub fn new(
        name: impl Into<String>,
        student_id: impl Into<String>,
        email: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            student_id: student_id.into(),
            email: email.into(),
            contact: contact.into(),
        }
    }

    /// Get the raw value of a single field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::StudentId => &self.student_id,
            Field::Email => &self.email,
            Field::Contact => &self.contact,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.student_id)
    }
}

/// The fields of a [`Record`], in validation order.
///
/// The derived `Ord` follows declaration order, so ordered maps keyed by
/// `Field` report errors as name, studentId, email, contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    StudentId,
    Email,
    Contact,
}

impl Field {
    /// All fields, in validation order.
    pub const ALL: [Field; 4] = [Field::Name, Field::StudentId, Field::Email, Field::Contact];

    /// The key used for this field in the persisted snapshot.
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::StudentId => "studentId",
            Field::Email => "email",
            Field::Contact => "contact",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
