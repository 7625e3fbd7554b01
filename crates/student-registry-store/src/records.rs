//! RecordStore: the ordered record collection and its persistence round-trip.
//!
//! The store is a plain container. It never validates; callers run
//! [`student_registry_core::validate`] first and only then mutate. Every
//! mutator persists the full collection before returning.

use student_registry_core::Record;

use crate::error::Result;
use crate::snapshot;
use crate::traits::SlotStore;

/// Owner of the in-memory collection and its durable snapshot.
///
/// Order is insertion order; [`RecordStore::update_at`] keeps a record's
/// slot. The collection is never sorted implicitly.
pub struct RecordStore<S: SlotStore> {
    backend: S,
    key: String,
    records: Vec<Record>,
}

impl<S: SlotStore> RecordStore<S> {
    /// Open the store and load whatever snapshot sits under `key`.
    pub fn open(backend: S, key: impl Into<String>) -> Self {
        let mut store = Self {
            backend,
            key: key.into(),
            records: Vec::new(),
        };
        store.load();
        store
    }

    /// Replace the in-memory collection with the persisted snapshot.
    ///
    /// A missing, unparsable, or non-sequence payload, or a backend read
    /// error, yields an empty collection. Inside a sequence, elements that
    /// are not well-formed records are skipped and the rest are kept.
    pub fn load(&mut self) -> &[Record] {
        let payload = match self.backend.read(&self.key) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "snapshot read failed");
                None
            }
        };

        self.records = snapshot::decode_or_empty(payload.as_deref());
        tracing::debug!(key = %self.key, count = self.records.len(), "loaded records");
        &self.records
    }

    /// Write the current collection as a snapshot.
    pub fn persist(&self) -> Result<()> {
        let payload = snapshot::encode(&self.records)?;
        self.backend.write(&self.key, &payload)?;
        tracing::debug!(key = %self.key, count = self.records.len(), "persisted records");
        Ok(())
    }

    /// Append a record.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
        self.persist_quietly();
    }

    /// Replace the record at `position`, keeping its slot.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    pub fn update_at(&mut self, position: usize, record: Record) {
        let len = self.records.len();
        let Some(slot) = self.records.get_mut(position) else {
            panic!("update_at position {position} out of range for collection of {len}");
        };
        *slot = record;
        self.persist_quietly();
    }

    /// Remove the record at `position`, shifting later records down.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    pub fn remove_at(&mut self, position: usize) -> Record {
        let len = self.records.len();
        assert!(
            position < len,
            "remove_at position {position} out of range for collection of {len}"
        );
        let removed = self.records.remove(position);
        self.persist_quietly();
        removed
    }

    /// Remove every record. Succeeds on an already-empty collection.
    pub fn clear_all(&mut self) {
        self.records.clear();
        self.persist_quietly();
    }

    /// The collection, in storage order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The slot key this store persists under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The slot backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    // The in-memory mutation stands even when the durable write fails;
    // hosts that need to surface the failure call `persist` themselves.
    fn persist_quietly(&self) {
        if let Err(e) = self.persist() {
            tracing::warn!(key = %self.key, error = %e, "durable write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::memory::MemorySlots;

    const KEY: &str = "srs_students_v1";

    fn ann() -> Record {
        Record::new("Ann Lee", "101", "a@b.co", "9876543210")
    }

    fn bob() -> Record {
        Record::new("Bob", "102", "bob@x.org", "1234567890")
    }

    fn carl() -> Record {
        Record::new("Carl", "103", "carl@x.org", "1234567891")
    }

    fn persisted(store: &RecordStore<MemorySlots>) -> Vec<Record> {
        let payload = store.backend().read(KEY).unwrap();
        snapshot::decode_or_empty(payload.as_deref())
    }

    /// A backend whose reads and writes always fail.
    struct BrokenSlots;

    impl SlotStore for BrokenSlots {
        fn read(&self, _key: &str) -> Result<Option<String>> {
            Err(StoreError::Poisoned("broken".into()))
        }

        fn write(&self, _key: &str, _value: &str) -> Result<()> {
            Err(StoreError::Io(std::io::Error::other("quota exceeded")))
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_add_appends_and_persists() {
        let mut store = RecordStore::open(MemorySlots::new(), KEY);
        assert!(store.is_empty());

        store.add(ann());
        store.add(bob());

        assert_eq!(store.records(), &[ann(), bob()]);
        assert_eq!(persisted(&store), vec![ann(), bob()]);
    }

    #[test]
    fn test_update_at_keeps_position() {
        let mut store = RecordStore::open(MemorySlots::new(), KEY);
        store.add(ann());
        store.add(bob());
        store.add(carl());

        let renamed = Record::new("Robert", "102", "bob@x.org", "1234567890");
        store.update_at(1, renamed.clone());

        assert_eq!(store.records(), &[ann(), renamed.clone(), carl()]);
        assert_eq!(persisted(&store)[1], renamed);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_update_at_out_of_range() {
        let mut store = RecordStore::open(MemorySlots::new(), KEY);
        store.update_at(0, ann());
    }

    #[test]
    fn test_remove_at_shifts_down() {
        let mut store = RecordStore::open(MemorySlots::new(), KEY);
        store.add(ann());
        store.add(bob());
        store.add(carl());

        let removed = store.remove_at(0);

        assert_eq!(removed, ann());
        assert_eq!(store.get(0), Some(&bob()));
        assert_eq!(store.get(1), Some(&carl()));
        assert_eq!(persisted(&store), vec![bob(), carl()]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_remove_at_out_of_range() {
        let mut store = RecordStore::open(MemorySlots::new(), KEY);
        store.add(ann());
        store.remove_at(1);
    }

    #[test]
    fn test_clear_all_idempotent() {
        let mut store = RecordStore::open(MemorySlots::new(), KEY);
        store.add(ann());

        store.clear_all();
        assert!(store.is_empty());
        store.clear_all();
        assert!(store.is_empty());
        assert_eq!(store.backend().read(KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_open_loads_existing_snapshot() {
        let payload = snapshot::encode(&[ann(), bob()]).unwrap();
        let store = RecordStore::open(MemorySlots::with_slot(KEY, payload), KEY);
        assert_eq!(store.records(), &[ann(), bob()]);
    }

    #[test]
    fn test_load_corrupted_snapshot_is_empty() {
        let store = RecordStore::open(MemorySlots::with_slot(KEY, "{not json"), KEY);
        assert!(store.is_empty());
    }

    #[test]
    fn test_partial_record_does_not_erase_good_ones() {
        let good = snapshot::encode(&[ann(), bob()]).unwrap();
        let payload = format!(
            r#"{},{{"name":"Cy","studentId":"3","email":"c@b.co"}}]"#,
            good.trim_end_matches(']')
        );
        let mut store = RecordStore::open(MemorySlots::with_slot(KEY, payload), KEY);
        assert_eq!(store.records(), &[ann(), bob()]);

        store.add(carl());

        assert_eq!(persisted(&store), vec![ann(), bob(), carl()]);
    }

    #[test]
    fn test_load_rereads_backend() {
        let mut store = RecordStore::open(MemorySlots::new(), KEY);
        store.add(ann());
        store.backend().write(KEY, "[]").unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut store = RecordStore::open(BrokenSlots, KEY);
        assert!(store.is_empty());

        store.add(ann());
        store.add(bob());
        store.remove_at(0);

        assert_eq!(store.records(), &[bob()]);
        assert!(matches!(store.persist(), Err(StoreError::Io(_))));
    }
}
