//! Error types for the student registry core.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::types::Field;

/// A single field's validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The raw value is empty or does not match the field's shape rule.
    #[error("{0}")]
    InvalidFormat(&'static str),

    /// The student ID collides with another record in the collection.
    #[error("Student ID must be unique.")]
    DuplicateKey,
}

impl ValidationError {
    /// Whether this is a shape-rule failure.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ValidationError::InvalidFormat(_))
    }

    /// Whether this is a uniqueness failure.
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, ValidationError::DuplicateKey)
    }
}

/// Every field that failed validation, keyed by field.
///
/// Iteration follows field order (name, studentId, email, contact).
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct FieldErrors {
    errors: BTreeMap<Field, ValidationError>,
}

impl FieldErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.errors.insert(field, error);
    }

    /// Get the failure for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Whether `field` failed.
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate failures in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// Field → message pairs, for display next to each input.
    pub fn messages(&self) -> Vec<(Field, String)> {
        self.iter()
            .map(|(field, error)| (field, error.to_string()))
            .collect()
    }
}

/// Result of validating a candidate record.
pub type ValidationResult = Result<(), FieldErrors>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_iterate_in_field_order() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Contact, ValidationError::InvalidFormat("c"));
        errors.insert(Field::Name, ValidationError::InvalidFormat("n"));
        errors.insert(Field::StudentId, ValidationError::DuplicateKey);

        let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Name, Field::StudentId, Field::Contact]);
        assert_eq!(errors.len(), 3);
        assert!(!errors.contains(Field::Email));
    }

    #[test]
    fn test_messages() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::StudentId, ValidationError::DuplicateKey);

        assert_eq!(
            errors.messages(),
            vec![(Field::StudentId, "Student ID must be unique.".to_string())]
        );
        assert_eq!(errors.to_string(), "1 field(s) failed validation");
    }
}
