//! Keyed-blob repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Read and write named text blobs (`tasks`, `theme`).
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `put` is an upsert; a key holds at most one value.
//! - Blob contents are opaque here; decoding is the caller's concern.

use crate::db::{DbError, DbResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Repository interface over named text blobs.
pub trait KvRepository {
    fn get(&self, key: &str) -> DbResult<Option<String>>;
    fn put(&self, key: &str, value: &str) -> DbResult<()>;
}

/// SQLite-backed keyed-blob repository.
#[derive(Clone, Copy)]
pub struct SqliteKvRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KvRepository for SqliteKvRepository<'_> {
    fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv_entries WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(DbError::Sqlite)?;
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}
