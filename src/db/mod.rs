//! Database layer for the taskflow application.
//!
//! Persistence is a small key-value store on SQLite. The task collection and
//! the focus mode flag are JSON documents under fixed keys; nothing else in the
//! application talks to SQLite directly.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskflow::db::{settings::Settings, tasks::Tasks};
//! use taskflow::libs::task::TaskDraft;
//!
//! let mut tasks = Tasks::new()?;
//! tasks.add(TaskDraft::new("Review pull request"))?;
//!
//! let mut settings = Settings::new()?;
//! settings.toggle_focus_mode()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Core database connection and initialization module.
///
/// Opens SQLite connections in the application data directory (or at an
/// explicit path) and applies migrations before handing them out.
pub mod db;

/// Database schema migration system.
///
/// Handles versioned schema changes and tracks migration history.
pub mod migrations;

/// Focus mode flag and other persisted settings.
pub mod settings;

/// JSON documents stored under string keys.
pub mod store;

/// Task collection CRUD: the persistence side of the task list.
pub mod tasks;
