//! Persisted view preferences keyed by storage key.
//!
//! The admin surfaces remember things like the last rendering granularity.
//! Instead of ambient global state, preferences go through this explicit
//! repository: read once when a view initializes, written whenever the user
//! changes a setting. Values are stored as JSON so callers keep their types.

use crate::db::db::Db;
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

const SCHEMA_PREFS: &str = "CREATE TABLE IF NOT EXISTS prefs (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);";
const UPSERT_PREF: &str = "INSERT INTO prefs (key, value) VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value";
const SELECT_PREF: &str = "SELECT value FROM prefs WHERE key = ?1";

pub struct Prefs {
    pub conn: Connection,
}

impl Prefs {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_PREFS, [])?;
        Ok(Prefs { conn: db.conn })
    }

    /// Reads a preference; `None` when the key has never been written or the
    /// stored value no longer deserializes into the requested type.
    pub fn get<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>> {
        let raw = self
            .conn
            .query_row(SELECT_PREF, [key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(raw.and_then(|s| serde_json::from_str(&s).ok()))
    }

    /// Writes a preference, replacing any previous value.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.conn.execute(UPSERT_PREF, [key, raw.as_str()])?;
        Ok(())
    }
}
