//! SQLite implementation of the SlotStore trait.
//!
//! This is the durable storage backend for the registry. It uses rusqlite
//! with bundled SQLite; the connection sits behind a mutex so the store is
//! `Send + Sync`.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Result, StoreError};
use crate::migration::{self, now_millis};
use crate::traits::SlotStore;

/// SQLite-based slot store.
pub struct SqliteSlots {
    conn: Mutex<Connection>,
}

impl SqliteSlots {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Poisoned(format!("mutex poisoned: {}", e)))
    }
}

impl SlotStore for SqliteSlots {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn()?;
        let value = conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
            params![key, value, now_millis()],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM slots WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_slots_basic() {
        let slots = SqliteSlots::open_memory().unwrap();
        assert_eq!(slots.read("srs").unwrap(), None);

        slots.write("srs", "[]").unwrap();
        assert_eq!(slots.read("srs").unwrap().as_deref(), Some("[]"));

        slots.write("srs", "[1]").unwrap();
        assert_eq!(slots.read("srs").unwrap().as_deref(), Some("[1]"));

        slots.remove("srs").unwrap();
        slots.remove("srs").unwrap();
        assert_eq!(slots.read("srs").unwrap(), None);
    }

    #[test]
    fn test_sqlite_slots_are_independent() {
        let slots = SqliteSlots::open_memory().unwrap();
        slots.write("a", "1").unwrap();
        slots.write("b", "2").unwrap();
        slots.remove("a").unwrap();

        assert_eq!(slots.read("a").unwrap(), None);
        assert_eq!(slots.read("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_sqlite_slots_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.db");

        {
            let slots = SqliteSlots::open(&path).unwrap();
            slots.write("srs", r#"[{"name":"Ann"}]"#).unwrap();
        }

        let reopened = SqliteSlots::open(&path).unwrap();
        assert_eq!(
            reopened.read("srs").unwrap().as_deref(),
            Some(r#"[{"name":"Ann"}]"#)
        );
    }
}
