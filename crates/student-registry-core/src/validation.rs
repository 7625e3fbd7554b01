//! Record validation: per-field shape rules and student ID uniqueness.
//!
//! Every field is checked independently and all failures are reported
//! together. The validator is pure: it never trims or rewrites its input.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FieldErrors, ValidationError, ValidationResult};
use crate::types::{Field, Record};

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z ]{2,60}$").expect("Invalid name regex"));

static STUDENT_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid student ID regex"));

// Shape check only. Anything with a non-space local part, an `@`, and a
// dotted domain whose last segment has two or more characters is accepted.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("Invalid email regex")
});

static CONTACT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,}$").expect("Invalid contact regex"));

/// Validate a candidate record against the field rules and the collection.
///
/// `edit_position` is the position of the record being replaced, if any.
/// That record is excluded from the uniqueness check, so saving an edit
/// without changing the student ID is always allowed.
pub fn validate(
    candidate: &Record,
    collection: &[Record],
    edit_position: Option<usize>,
) -> ValidationResult {
    let mut errors = FieldErrors::new();

    for field in Field::ALL {
        let outcome = match field {
            Field::StudentId => {
                validate_student_id(&candidate.student_id, collection, edit_position)
            }
            _ => validate_field(field, candidate.field(field)),
        };
        if let Err(error) = outcome {
            errors.insert(field, error);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check one field's shape rule in isolation.
///
/// For [`Field::StudentId`] this checks the digit rule only; uniqueness
/// needs the collection and is checked by [`validate`].
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::InvalidFormat(required_message(field)));
    }

    let (regex, message) = match field {
        Field::Name => (&NAME_REGEX, "Use only letters and spaces (2–60 chars)."),
        Field::StudentId => (&STUDENT_ID_REGEX, "Student ID must contain digits only."),
        Field::Email => (&EMAIL_REGEX, "Enter a valid email address."),
        Field::Contact => (&CONTACT_REGEX, "Contact must be at least 10 digits."),
    };

    if regex.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat(message))
    }
}

/// Find the position of another record already using `student_id`.
///
/// Comparison is plain string equality: `"007"` and `"7"` are distinct.
pub fn find_duplicate(
    student_id: &str,
    collection: &[Record],
    edit_position: Option<usize>,
) -> Option<usize> {
    collection
        .iter()
        .enumerate()
        .find(|(position, record)| {
            record.student_id == student_id && Some(*position) != edit_position
        })
        .map(|(position, _)| position)
}

fn validate_student_id(
    student_id: &str,
    collection: &[Record],
    edit_position: Option<usize>,
) -> Result<(), ValidationError> {
    validate_field(Field::StudentId, student_id)?;

    match find_duplicate(student_id, collection, edit_position) {
        Some(_) => Err(ValidationError::DuplicateKey),
        None => Ok(()),
    }
}

fn required_message(field: Field) -> &'static str {
    match field {
        Field::Name => "Name is required.",
        Field::StudentId => "Student ID is required.",
        Field::Email => "Email is required.",
        Field::Contact => "Contact number is required.",
    }
}
