//! SQLite-backed store for accepted entries.
//!
//! The table carries a uniqueness constraint on the normalized key, so
//! duplicate rejection holds even against writers outside this process.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;
use tracing::debug;

use crate::domain::Entry;

/// Wire format of the `created_at` column (UTC, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Failure modes of [`Store::insert`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The unique constraint on the normalized key was violated. This is a
    /// normal duplicate outcome, not a fault: another writer may have
    /// inserted the same key between an `exists` check and the insert.
    #[error("an entry with the same normalized value already exists")]
    Conflict,

    /// Any other SQLite failure.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

/// Entry store backed by a single SQLite connection.
///
/// Constructed once at startup and passed by reference to every operation.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open or create the database at a specific path.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;

        debug!(path = %path.display(), "opened entry database");
        Self::from_connection(conn)
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Ok(Self { conn })
    }

    /// Create the entry table if absent; with `reset`, drop it first.
    ///
    /// Safe to call repeatedly.
    pub fn initialize(&self, reset: bool) -> Result<()> {
        if reset {
            self.conn.execute("DROP TABLE IF EXISTS data", [])?;
        }

        self.conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS data (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                value TEXT NOT NULL,
                value_norm TEXT NOT NULL UNIQUE,
                created_at TEXT DEFAULT (datetime('now'))
            )
            "#,
            [],
        )?;

        debug!(reset, "entry table ready");
        Ok(())
    }

    /// Point lookup by normalized key.
    pub fn exists(&self, normalized: &str) -> Result<bool> {
        let hit: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM data WHERE value_norm = ?1 LIMIT 1",
                params![normalized],
                |row| row.get(0),
            )
            .optional()?;

        Ok(hit.is_some())
    }

    /// Persist a new entry with the current timestamp.
    ///
    /// Returns [`StoreError::Conflict`] if the normalized key is already
    /// stored; callers branch on the variant rather than treating it as a
    /// fault.
    pub fn insert(&self, value: &str, normalized: &str) -> Result<Entry, StoreError> {
        let created_at = Utc::now();
        let stamp = created_at.format(TIMESTAMP_FORMAT).to_string();

        let result = self.conn.execute(
            "INSERT INTO data (value, value_norm, created_at) VALUES (?1, ?2, ?3)",
            params![value, normalized, stamp],
        );

        match result {
            Ok(_) => {
                let id = self.conn.last_insert_rowid();
                debug!(id, value, "inserted entry");
                Ok(Entry {
                    id,
                    value: value.to_string(),
                    normalized: normalized.to_string(),
                    // Round-trip through the wire format so the returned
                    // timestamp matches what list_all will read back.
                    created_at: parse_timestamp(&stamp).unwrap_or(created_at),
                })
            }
            Err(e) if is_unique_violation(&e) => {
                debug!(value, "unique constraint hit at insert time");
                Err(StoreError::Conflict)
            }
            Err(e) => Err(StoreError::Sqlite(e)),
        }
    }

    /// All entries ordered by ascending id.
    pub fn list_all(&self) -> Result<Vec<Entry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, value, value_norm, created_at FROM data ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            let raw: String = row.get(3)?;
            let created_at = parse_timestamp(&raw).ok_or_else(|| {
                rusqlite::Error::FromSqlConversionFailure(
                    3,
                    rusqlite::types::Type::Text,
                    format!("invalid timestamp: {raw}").into(),
                )
            })?;

            Ok(Entry {
                id: row.get(0)?,
                value: row.get(1)?,
                normalized: row.get(2)?,
                created_at,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }

        Ok(entries)
    }

    /// Number of stored entries.
    pub fn count(&self) -> Result<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM data", [], |row| row.get(0))?;
        Ok(n)
    }
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .ok()
        .map(|dt| dt.and_utc())
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
