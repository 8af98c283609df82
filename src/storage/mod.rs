mod slots;

pub use slots::{load_slot, save_slot};

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

/// Synchronous string-keyed persistence. This is the only capability the
/// console requires from its host environment.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// SQLite-backed slot store: a single `slots` table, upsert on write.
pub struct SqliteStore {
    db: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(db: Connection) -> Result<Self, StoreError> {
        db.execute(
            "CREATE TABLE IF NOT EXISTS slots (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { db: Mutex::new(db) })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StoreError> {
        self.db
            .lock()
            .map_err(|_| StoreError::Backend("slot store lock poisoned".to_string()))
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let db = self.lock()?;
        let mut stmt = db.prepare("SELECT value FROM slots WHERE key = ?1")?;
        let mut rows = stmt.query([key])?;

        if let Some(row) = rows.next()? {
            Ok(Some(row.get(0)?))
        } else {
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let db = self.lock()?;
        db.execute(
            "INSERT INTO slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            (key, value),
        )?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| StoreError::Backend("slot map lock poisoned".to_string()))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| StoreError::Backend("slot map lock poisoned".to_string()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_set_and_get() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set("stages", "[]").unwrap();
        assert_eq!(store.get("stages").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn sqlite_get_missing_key_returns_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get("ghost").unwrap(), None);
    }

    #[test]
    fn sqlite_set_overwrites_existing() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set("slot", "old").unwrap();
        store.set("slot", "new").unwrap();
        assert_eq!(store.get("slot").unwrap(), Some("new".to_string()));
    }

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        store.set("automations", r#"[{"id":"a"}]"#).unwrap();
        assert_eq!(
            store.get("automations").unwrap(),
            Some(r#"[{"id":"a"}]"#.to_string())
        );
        assert_eq!(store.get("stages").unwrap(), None);
    }

    #[test]
    fn stores_handle_unicode_payloads() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set("slot", "{\"title\":\"日本語 🎬\"}").unwrap();
        assert_eq!(
            store.get("slot").unwrap(),
            Some("{\"title\":\"日本語 🎬\"}".to_string())
        );
    }
}
