//! Proptest generators for property-based testing.

use std::collections::HashSet;

use proptest::prelude::*;

use student_registry_core::Record;

/// Generate a valid name: letters and spaces, 2–60 characters.
pub fn name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{1,59}".prop_map(String::from)
}

/// Generate a valid student ID: one or more digits.
pub fn student_id() -> impl Strategy<Value = String> {
    "[0-9]{1,12}".prop_map(String::from)
}

/// Generate an email that passes the shape check.
pub fn email() -> impl Strategy<Value = String> {
    ("[a-z0-9._+]{1,16}", "[a-z0-9-]{1,16}", "[a-z]{2,6}")
        .prop_map(|(local, domain, tld)| format!("{}@{}.{}", local, domain, tld))
}

/// Generate a valid contact number: ten or more digits.
pub fn contact() -> impl Strategy<Value = String> {
    "[0-9]{10,15}".prop_map(String::from)
}

/// Generate a record that passes every field rule.
pub fn valid_record() -> impl Strategy<Value = Record> {
    (name(), student_id(), email(), contact())
        .prop_map(|(name, id, email, contact)| Record::new(name, id, email, contact))
}

/// Generate a collection of valid records with distinct student IDs.
pub fn roster(max_len: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(valid_record(), 0..=max_len).prop_map(|records| {
        let mut seen = HashSet::new();
        records
            .into_iter()
            .filter(|r| seen.insert(r.student_id.clone()))
            .collect()
    })
}

/// Generate a name that breaks the name rule.
pub fn invalid_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[A-Za-z]".prop_map(String::from),
        "[A-Za-z]{61,80}".prop_map(String::from),
        "[A-Za-z]{1,10}[0-9_.-][A-Za-z]{0,10}".prop_map(String::from),
    ]
}

/// Generate a contact number that breaks the contact rule.
pub fn invalid_contact() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{0,9}".prop_map(String::from),
        "[0-9]{5}[a-z -][0-9]{5}".prop_map(String::from),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use student_registry_core::{validate, validate_field, Field};

    proptest! {
        #[test]
        fn test_valid_record_passes(record in valid_record()) {
            prop_assert!(validate(&record, &[], None).is_ok());
        }

        #[test]
        fn test_roster_ids_are_unique(records in roster(20)) {
            let ids: HashSet<_> = records.iter().map(|r| &r.student_id).collect();
            prop_assert_eq!(ids.len(), records.len());
        }

        #[test]
        fn test_invalid_name_fails(name in invalid_name()) {
            prop_assert!(validate_field(Field::Name, &name).is_err());
        }

        #[test]
        fn test_invalid_contact_fails(contact in invalid_contact()) {
            prop_assert!(validate_field(Field::Contact, &contact).is_err());
        }
    }
}
