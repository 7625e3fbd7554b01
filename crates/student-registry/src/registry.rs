//! The Registry: unified API for the student registry.
//!
//! The Registry sequences the workflow a registration form runs: clean the
//! raw input, validate it against the collection and the edit target,
//! mutate the store, then reset the session.

use student_registry_core::{
    sanitize, validate, visible_rows, Record, Session, ValidationResult, VisibleRows,
};
use student_registry_store::{RecordStore, SlotStore};

use crate::config::RegistryConfig;
use crate::error::Result;

/// What a successful submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new record was appended at `position`.
    Added { position: usize },
    /// The record at `position` was replaced.
    Updated { position: usize },
}

impl SubmitOutcome {
    /// Storage position of the record that was written.
    pub fn position(&self) -> usize {
        match self {
            SubmitOutcome::Added { position } | SubmitOutcome::Updated { position } => *position,
        }
    }
}

/// The main Registry struct.
///
/// Owns the record store and the edit session. There is no shared global
/// state: a host creates one Registry and routes every UI action through it.
pub struct Registry<S: SlotStore> {
    /// The record collection and its persistence.
    store: RecordStore<S>,
    /// Composing vs. editing.
    session: Session,
    /// Configuration.
    config: RegistryConfig,
}

impl<S: SlotStore> Registry<S> {
    /// Open a registry over `backend`, loading any persisted snapshot.
    pub fn open(backend: S, config: RegistryConfig) -> Result<Self> {
        config.check()?;
        let store = RecordStore::open(backend, config.storage_key.clone());
        tracing::debug!(count = store.len(), key = %config.storage_key, "opened registry");

        Ok(Self {
            store,
            session: Session::new(),
            config,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Get the store reference.
    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    /// The collection, in storage order.
    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    /// The current edit session.
    pub fn session(&self) -> Session {
        self.session
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Form Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Validate `candidate` as-is against the collection and edit target.
    pub fn validate(&self, candidate: &Record) -> ValidationResult {
        validate(candidate, self.store.records(), self.session.edit_position())
    }

    /// Submit the form.
    ///
    /// Appends when composing, replaces the edited record when editing, and
    /// returns to composing on success. On validation failure nothing
    /// changes and the session keeps its target.
    pub fn submit(&mut self, raw: Record) -> Result<SubmitOutcome> {
        let candidate = if self.config.sanitize_input {
            sanitize(&raw)
        } else {
            raw
        };

        if let Err(errors) = self.validate(&candidate) {
            tracing::debug!(failed = errors.len(), "submit rejected");
            return Err(errors.into());
        }

        let outcome = match self.session.edit_position() {
            None => {
                tracing::info!(name = %candidate.name, "added {}", candidate);
                self.store.add(candidate);
                SubmitOutcome::Added {
                    position: self.store.len() - 1,
                }
            }
            Some(position) => {
                tracing::info!(position, "updated {}", candidate);
                self.store.update_at(position, candidate);
                SubmitOutcome::Updated { position }
            }
        };

        self.session.reset();
        Ok(outcome)
    }

    /// Start editing the record at `position`.
    ///
    /// Returns the record's fields for the input layer to fill its form with.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    pub fn begin_edit(&mut self, position: usize) -> Record {
        let draft = self.session.begin_edit(position, self.store.records());
        tracing::debug!(position, "editing {}", draft);
        draft
    }

    /// Abandon any edit and return to composing.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Collection Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Delete the record at `position`.
    ///
    /// Confirmation is the host's business; by the time this is called the
    /// user has agreed. If the deleted record was being edited, the session
    /// returns to composing.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    pub fn remove_at(&mut self, position: usize) -> Record {
        let removed = self.store.remove_at(position);
        self.session.record_removed(position);
        tracing::info!(position, "deleted {}", removed);
        removed
    }

    /// Delete every record and return to composing.
    pub fn clear_all(&mut self) {
        let count = self.store.len();
        self.store.clear_all();
        self.session.reset();
        tracing::info!(count, "cleared all records");
    }

    /// Re-read the persisted snapshot, discarding the in-memory collection.
    ///
    /// Positions may no longer line up, so the session returns to composing.
    pub fn reload(&mut self) -> &[Record] {
        self.session.reset();
        self.store.load()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Rows matching `search_term`, renumbered from 1.
    pub fn visible_rows(&self, search_term: &str) -> VisibleRows<'_> {
        visible_rows(self.store.records(), search_term)
    }

    /// Whether the rows for `search_term` exceed the configured scroll
    /// threshold.
    pub fn is_scrollable(&self, search_term: &str) -> bool {
        self.visible_rows(search_term).exceeds(self.config.scroll_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use student_registry_core::{Field, ValidationError};
    use student_registry_store::MemorySlots;

    fn registry() -> Registry<MemorySlots> {
        Registry::open(MemorySlots::new(), RegistryConfig::default()).unwrap()
    }

    fn ann() -> Record {
        Record::new("Ann Lee", "101", "a@b.co", "9876543210")
    }

    fn bob() -> Record {
        Record::new("Bob Ray", "102", "bob@x.org", "1234567890")
    }

    #[test]
    fn test_submit_adds_when_composing() {
        let mut registry = registry();

        assert_eq!(registry.submit(ann()).unwrap(), SubmitOutcome::Added { position: 0 });
        assert_eq!(registry.submit(bob()).unwrap(), SubmitOutcome::Added { position: 1 });
        assert_eq!(registry.records(), &[ann(), bob()]);
        assert_eq!(registry.session(), Session::Composing);
    }

    #[test]
    fn test_submit_updates_when_editing() {
        let mut registry = registry();
        registry.submit(ann()).unwrap();
        registry.submit(bob()).unwrap();

        let mut draft = registry.begin_edit(0);
        assert_eq!(draft, ann());
        draft.email = "ann@lee.dev".into();

        let outcome = registry.submit(draft.clone()).unwrap();
        assert_eq!(outcome, SubmitOutcome::Updated { position: 0 });
        assert_eq!(outcome.position(), 0);
        assert_eq!(registry.records(), &[draft, bob()]);
        assert_eq!(registry.session(), Session::Composing);
    }

    #[test]
    fn test_rejected_submit_keeps_state() {
        let mut registry = registry();
        registry.submit(ann()).unwrap();
        registry.submit(bob()).unwrap();
        registry.begin_edit(1);

        let mut stolen = bob();
        stolen.student_id = "101".into();
        let err = registry.submit(stolen).unwrap_err();

        assert_eq!(
            err.field_errors().and_then(|e| e.get(Field::StudentId)),
            Some(&ValidationError::DuplicateKey)
        );
        assert_eq!(registry.session(), Session::Editing(1));
        assert_eq!(registry.records(), &[ann(), bob()]);
    }

    #[test]
    fn test_submit_sanitizes_when_configured() {
        let mut registry = registry();
        let raw = Record::new(" Ann Lee ", "10-1", " a@b.co ", "98765 43210");

        registry.submit(raw).unwrap();
        assert_eq!(registry.records(), &[ann()]);
    }

    #[test]
    fn test_submit_raw_when_sanitizing_disabled() {
        let config = RegistryConfig {
            sanitize_input: false,
            ..RegistryConfig::default()
        };
        let mut registry = Registry::open(MemorySlots::new(), config).unwrap();

        let err = registry
            .submit(Record::new("John123", "101", "a@b.co", "9876543210"))
            .unwrap_err();
        assert!(err
            .field_errors()
            .and_then(|e| e.get(Field::Name))
            .is_some_and(ValidationError::is_invalid_format));
    }

    #[test]
    fn test_remove_edited_record_resets_session() {
        let mut registry = registry();
        registry.submit(ann()).unwrap();
        registry.submit(bob()).unwrap();
        registry.begin_edit(1);

        assert_eq!(registry.remove_at(1), bob());
        assert_eq!(registry.session(), Session::Composing);
    }

    #[test]
    fn test_remove_below_edit_target_follows_record() {
        let mut registry = registry();
        registry.submit(ann()).unwrap();
        registry.submit(bob()).unwrap();
        registry.begin_edit(1);

        registry.remove_at(0);
        assert_eq!(registry.session(), Session::Editing(0));

        let mut draft = bob();
        draft.name = "Robert Ray".into();
        assert_eq!(
            registry.submit(draft.clone()).unwrap(),
            SubmitOutcome::Updated { position: 0 }
        );
        assert_eq!(registry.records(), &[draft]);
    }

    #[test]
    fn test_clear_all_resets_session() {
        let mut registry = registry();
        registry.submit(ann()).unwrap();
        registry.begin_edit(0);

        registry.clear_all();
        assert!(registry.records().is_empty());
        assert_eq!(registry.session(), Session::Composing);

        registry.clear_all();
        assert!(registry.records().is_empty());
    }

    #[test]
    fn test_reload() {
        let mut registry = registry();
        registry.submit(ann()).unwrap();
        registry.begin_edit(0);

        assert_eq!(registry.reload(), &[ann()]);
        assert_eq!(registry.session(), Session::Composing);
    }

    #[test]
    fn test_open_rejects_empty_key() {
        let config = RegistryConfig {
            storage_key: String::new(),
            ..RegistryConfig::default()
        };
        assert!(matches!(
            Registry::open(MemorySlots::new(), config),
            Err(RegistryError::Config(_))
        ));
    }

    #[test]
    fn test_is_scrollable() {
        let config = RegistryConfig {
            scroll_threshold: 1,
            ..RegistryConfig::default()
        };
        let mut registry = Registry::open(MemorySlots::new(), config).unwrap();
        registry.submit(ann()).unwrap();
        assert!(!registry.is_scrollable(""));

        registry.submit(bob()).unwrap();
        assert!(registry.is_scrollable(""));
        assert!(!registry.is_scrollable("bob"));
    }
}
