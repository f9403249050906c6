// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Durable on-device key/value storage.
//!
//! This module handles all interactions with the SQLite database backing
//! local persistence. The application treats it as an opaque string store:
//! one `kv` table, values written through [`LocalStore::set`] are readable on
//! the next run via [`LocalStore::get`]. Callers own the serialization of
//! their values (JSON throughout this codebase).
//!
//! # Performance
//!
//! All statements go through [`rusqlite::Connection::prepare_cached`] to
//! reduce SQL parsing overhead; every write is committed immediately.

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};

pub(crate) struct LocalStore {
    conn: Connection,
}

impl LocalStore {
    /// Opens the store at the given path and configures the connection.
    ///
    /// Enables WAL mode and creates the `kv` table if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database file cannot be opened, the PRAGMA
    /// configuration fails, or the schema cannot be created.
    pub(crate) fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;

        let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;
        if journal_mode != "wal" {
            anyhow::bail!(
                "Failed to switch to WAL mode. Current mode: {}",
                journal_mode
            );
        }

        conn.execute_batch("PRAGMA synchronous = NORMAL;")?;

        Self::create_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Opens a throwaway in-memory store.
    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::create_schema(&conn)?;
        Ok(Self { conn })
    }

    fn create_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )
        .context("Failed to create schema")
    }

    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying query fails; a missing key is
    /// `Ok(None)`, not an error.
    pub(crate) fn get(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare_cached("SELECT value FROM kv WHERE key = ?")?;
        let value = stmt.query_row([key], |row| row.get(0)).optional()?;

        Ok(value)
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub(crate) fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO kv (key, value)
             VALUES (?1, ?2)
             ON CONFLICT (key)
             DO UPDATE SET value = ?2",
        )?;
        stmt.execute(params![key, value])?;

        Ok(())
    }

    /// Removes the entry stored under `key`, if present.
    pub(crate) fn remove(&self, key: &str) -> Result<()> {
        let mut stmt = self.conn.prepare_cached("DELETE FROM kv WHERE key = ?")?;
        stmt.execute([key])?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none() {
        let store = LocalStore::open_in_memory().unwrap();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = LocalStore::open_in_memory().unwrap();
        store.set("greeting", "hello").unwrap();
        assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello"));
    }

    #[test]
    fn set_replaces_existing_value() {
        let store = LocalStore::open_in_memory().unwrap();
        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn remove_deletes_entry() {
        let store = LocalStore::open_in_memory().unwrap();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);

        // Removing an absent key is not an error.
        store.remove("k").unwrap();
    }
}
