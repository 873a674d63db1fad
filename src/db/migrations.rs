//! Versioned schema changes.
//!
//! Every connection opened through [`Db`](crate::db::db::Db) is brought up to
//! the latest schema before it is handed out. Applied versions are recorded in
//! a `migrations` table together with their name and application time.
//!
//! Migrations are forward-only SQL scripts. Never edit a registered one: append
//! a new version to [`MIGRATIONS`] instead.
//!
//! ## Usage
//!
//! ```rust
//! use taskflow::db::migrations::{get_db_version, init_with_migrations, MigrationManager};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! assert_eq!(get_db_version(&conn)?, MigrationManager::new().latest_version());
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

const CREATE_MIGRATIONS_TABLE: &str = "CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// One schema change.
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub version: u32,
    pub name: &'static str,
    sql: &'static str,
}

/// Every migration, in version order.
pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "create_store",
    sql: "CREATE TABLE IF NOT EXISTS store (
        key TEXT NOT NULL PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )",
}];

/// Applies [`MIGRATIONS`] and answers questions about what has been applied.
pub struct MigrationManager {
    migrations: &'static [Migration],
}

impl MigrationManager {
    pub fn new() -> Self {
        Self { migrations: MIGRATIONS }
    }

    /// Version of the newest registered migration.
    pub fn latest_version(&self) -> u32 {
        self.migrations.iter().map(|m| m.version).max().unwrap_or(0)
    }

    /// Applies every migration newer than the recorded version.
    ///
    /// All pending migrations share one transaction, so a failure leaves the
    /// schema exactly as it was.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(CREATE_MIGRATIONS_TABLE, [])?;

        let current = self.current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current).collect();
        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }
        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            if let Err(e) = tx.execute_batch(migration.sql) {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(e).with_context(|| format!("migration {} ({})", migration.version, migration.name));
            }
            tx.execute("INSERT INTO migrations (version, name) VALUES (?1, ?2)", params![migration.version, migration.name])?;
            msg_debug!(Message::MigrationCompleted(migration.version));
        }
        tx.commit()?;

        Ok(())
    }

    /// Highest applied version. A database that never saw a migration is at 0.
    pub fn current_version(&self, conn: &Connection) -> Result<u32> {
        let tracked = conn
            .query_row("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'migrations'", [], |_| Ok(()))
            .optional()?
            .is_some();
        if !tracked {
            return Ok(0);
        }

        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        let applied = conn
            .query_row("SELECT 1 FROM migrations WHERE version = ?1", params![version], |_| Ok(()))
            .optional()?;
        Ok(applied.is_some())
    }

    /// `(version, name, applied_at)` of every applied migration, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;

        let mut history = Vec::new();
        for row in rows {
            history.push(row?);
        }
        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Brings `conn` up to the latest schema.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().current_version(conn)
}

/// Whether `conn` is behind the newest registered migration.
pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.current_version(conn)? < manager.latest_version())
}
