//! Test fixtures and helpers.
//!
//! Common setup code for integration tests and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use student_registry_core::Record;
use student_registry_store::{snapshot, MemorySlots, RecordStore};

/// Slot key used by fixtures.
pub const FIXTURE_KEY: &str = "srs_students_v1";

/// The record from the add-then-list scenario.
pub fn ann_lee() -> Record {
    Record::new("Ann Lee", "101", "a@b.co", "9876543210")
}

/// Three records named "Ann", "Bob" and "Carl", in that order.
pub fn ann_bob_carl() -> Vec<Record> {
    vec![
        Record::new("Ann", "101", "ann@school.edu", "9000000001"),
        Record::new("Bob", "102", "bob@school.edu", "9000000002"),
        Record::new("Carl", "103", "carl@school.edu", "9000000003"),
    ]
}

/// A memory-backed record store.
pub struct TestFixture {
    pub store: RecordStore<MemorySlots>,
}

impl TestFixture {
    /// Create a fixture with an empty store.
    pub fn new() -> Self {
        Self {
            store: RecordStore::open(MemorySlots::new(), FIXTURE_KEY),
        }
    }

    /// Create a fixture whose slot already holds `records`.
    pub fn with_records(records: &[Record]) -> Self {
        Self::with_payload(&snapshot::encode(records).unwrap_or_default())
    }

    /// Create a fixture whose slot holds a raw payload.
    pub fn with_payload(payload: &str) -> Self {
        Self {
            store: RecordStore::open(MemorySlots::with_slot(FIXTURE_KEY, payload), FIXTURE_KEY),
        }
    }

    /// Create a fixture with `count` generated records, reproducible per seed.
    pub fn with_random_records(count: usize, seed: u64) -> Self {
        Self::with_records(&random_roster(count, seed))
    }

    /// Read the raw persisted payload.
    pub fn payload(&self) -> Option<String> {
        use student_registry_store::SlotStore;
        self.store.backend().read(FIXTURE_KEY).ok().flatten()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate `count` valid records with distinct student IDs.
///
/// IDs are sequential from 1000; names, emails and contacts are random.
pub fn random_roster(count: usize, seed: u64) -> Vec<Record> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let first = random_word(&mut rng, 3..9);
            let last = random_word(&mut rng, 3..11);
            let contact: String = (0..10)
                .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
                .collect();

            Record::new(
                format!("{} {}", capitalize(&first), capitalize(&last)),
                (1000 + i).to_string(),
                format!("{}.{}@school.edu", first, last),
                contact,
            )
        })
        .collect()
}

fn random_word(rng: &mut StdRng, len: std::ops::Range<usize>) -> String {
    let len = rng.gen_range(len);
    (0..len)
        .map(|_| char::from(b'a' + rng.gen_range(0..26u8)))
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
