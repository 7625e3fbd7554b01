//! SlotStore trait: the abstract durable key-value interface.
//!
//! The registry persists its whole collection as one text payload under a
//! fixed key. Backends only need to read, write and remove named slots.
//! Implementations include SQLite (durable) and in-memory (for tests).

use crate::error::Result;

/// A durable store of named text slots.
///
/// Calls are synchronous and run to completion. A write replaces the whole
/// value of the slot.
pub trait SlotStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: SlotStore + ?Sized> SlotStore for &S {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<S: SlotStore + ?Sized> SlotStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
