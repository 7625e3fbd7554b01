//! Input cleanup applied before validation.
//!
//! Form inputs for digit-only and letter-only fields silently drop
//! characters that can never be valid, then every field is trimmed. This
//! runs in the input layer; [`crate::validate`] never calls it.

use crate::types::Record;

/// Keep only ASCII digits.
pub fn only_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Keep only ASCII letters and whitespace.
pub fn only_letters_and_spaces(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect()
}

/// Clean a raw candidate the way the registration form does on submit.
pub fn sanitize(raw: &Record) -> Record {
    Record {
        name: only_letters_and_spaces(&raw.name).trim().to_string(),
        student_id: only_digits(&raw.student_id),
        email: raw.email.trim().to_string(),
        contact: only_digits(&raw.contact),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_digits() {
        assert_eq!(only_digits(" 98-76 54x3210 "), "9876543210");
        assert_eq!(only_digits("abc"), "");
    }

    #[test]
    fn test_only_letters_and_spaces() {
        assert_eq!(only_letters_and_spaces("John123 O'Neil"), "John ONeil");
    }

    #[test]
    fn test_sanitize() {
        let raw = Record::new("  Ann 2 Lee ", " 10a1 ", "  a@b.co ", "(987) 654-3210");
        let clean = sanitize(&raw);

        assert_eq!(clean, Record::new("Ann  Lee", "101", "a@b.co", "9876543210"));
    }
}
