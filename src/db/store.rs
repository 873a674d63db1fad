//! Key-value persistence on top of SQLite.
//!
//! Each entry is a JSON document stored under a string key in the `store`
//! table. The application uses two keys: the task collection and the focus
//! mode flag. Writes replace the whole value, which keeps every update atomic
//! without a relational schema for tasks.
//!
//! ## Usage
//!
//! ```rust
//! use taskflow::db::{db::Db, store::Store};
//!
//! let mut store = Store::new(Db::in_memory()?);
//! store.set("greeting", &"hello")?;
//! let value: Option<String> = store.get("greeting")?;
//! assert_eq!(value.as_deref(), Some("hello"));
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::db::Db;
use crate::libs::messages::Message;
use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};
use serde::de::DeserializeOwned;
use serde::Serialize;

const SELECT_VALUE: &str = "SELECT value FROM store WHERE key = ?1";
const UPSERT_VALUE: &str = "INSERT INTO store (key, value, updated_at) VALUES (?1, ?2, CURRENT_TIMESTAMP)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP";
const DELETE_VALUE: &str = "DELETE FROM store WHERE key = ?1";

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn new(db: Db) -> Self {
        Store { conn: db.conn }
    }

    /// Raw JSON text stored under `key`.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        read_raw(&self.conn, key)
    }

    /// Reads and deserializes the value under `key`.
    ///
    /// # Errors
    ///
    /// Fails when the stored text is not valid JSON for `T`. A missing key is
    /// `Ok(None)`, not an error.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        read(&self.conn, key)
    }

    /// Serializes `value` and stores it under `key`, replacing any previous value.
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        write(&self.conn, key, value)
    }

    /// Stores JSON text as-is. Callers are responsible for its validity.
    pub fn set_raw(&mut self, key: &str, raw: &str) -> Result<()> {
        write_raw(&self.conn, key, raw)
    }

    /// Removes `key`. Returns whether anything was deleted.
    pub fn remove(&mut self, key: &str) -> Result<bool> {
        let deleted = self.conn.execute(DELETE_VALUE, params![key])?;
        Ok(deleted > 0)
    }

    /// Runs `f` inside an immediate transaction and commits when it succeeds.
    ///
    /// Any error, from `f` or from the commit itself, rolls the transaction
    /// back when it is dropped, so the connection is always usable afterwards.
    pub fn transaction<R>(&mut self, f: impl FnOnce(&StoreTransaction) -> Result<R>) -> Result<R> {
        let tx = StoreTransaction {
            tx: self.conn.transaction_with_behavior(TransactionBehavior::Immediate)?,
        };
        let result = f(&tx)?;
        tx.tx.commit()?;
        Ok(result)
    }
}

/// Reads and writes that belong to one [`Store::transaction`].
pub struct StoreTransaction<'conn> {
    tx: Transaction<'conn>,
}

impl StoreTransaction<'_> {
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        read(&self.tx, key)
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        write(&self.tx, key, value)
    }
}

fn read_raw(conn: &Connection, key: &str) -> Result<Option<String>> {
    let value = conn.query_row(SELECT_VALUE, params![key], |row| row.get::<_, String>(0)).optional()?;
    Ok(value)
}

fn read<T: DeserializeOwned>(conn: &Connection, key: &str) -> Result<Option<T>> {
    match read_raw(conn, key)? {
        Some(raw) => {
            let value = serde_json::from_str(&raw).with_context(|| Message::StoreValueCorrupted(key.to_string()))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

fn write<T: Serialize + ?Sized>(conn: &Connection, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    write_raw(conn, key, &raw)
}

fn write_raw(conn: &Connection, key: &str, raw: &str) -> Result<()> {
    conn.execute(UPSERT_VALUE, params![key, raw])?;
    Ok(())
}
