//! In-memory implementation of the SlotStore trait.
//!
//! This is primarily for testing. It has the same semantics as SQLite
//! but keeps everything in memory with no persistence.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Result, StoreError};
use crate::traits::SlotStore;

/// In-memory slot store.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
#[derive(Debug, Default)]
pub struct MemorySlots {
    slots: RwLock<HashMap<String, String>>,
}

impl MemorySlots {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one slot already filled.
    ///
    /// Handy for seeding a payload before loading it.
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), value.into());
        Self {
            slots: RwLock::new(slots),
        }
    }

    /// Number of filled slots.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read_guard()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, HashMap<String, String>>> {
        self.slots
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, String>>> {
        self.slots
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }
}

impl SlotStore for MemorySlots {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_guard()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.write_guard()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.write_guard()?.remove(key);
        Ok(())
    }
}
