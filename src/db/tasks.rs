//! Task persistence.
//!
//! The whole task collection lives as one JSON array under the `tasks` key of
//! the key-value [`Store`]. Every mutation loads the collection, changes it and
//! writes it back inside a single transaction.
//!
//! ## Identity
//!
//! `add` assigns a random UUID and the creation time. `update` never trusts
//! the caller with either: the stored `id` and `created_at` are kept.
//!
//! ## Usage
//!
//! ```rust
//! use taskflow::db::{db::Db, tasks::Tasks};
//! use taskflow::libs::task::{Priority, TaskDraft};
//!
//! let mut tasks = Tasks::from_db(Db::in_memory()?);
//! let task = tasks.add(TaskDraft::new("Pay rent").with_priority(Priority::High))?;
//! tasks.set_completed(&task.id, true)?;
//! assert!(tasks.get_all()?[0].completed);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::db::Db;
use crate::db::store::Store;
use crate::libs::task::{Task, TaskDraft, TaskError, TaskId};
use anyhow::Result;
use chrono::Utc;
use std::path::Path;
use uuid::Uuid;

/// Key of the task collection in the store.
pub const TASKS_KEY: &str = "tasks";

pub struct Tasks {
    store: Store,
}

impl Tasks {
    /// Opens the task collection in the default database.
    pub fn new() -> Result<Tasks> {
        Ok(Self::from_db(Db::new()?))
    }

    /// Opens the task collection in the database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Tasks> {
        Ok(Self::from_db(Db::open(path)?))
    }

    pub fn from_db(db: Db) -> Tasks {
        Tasks { store: Store::new(db) }
    }

    /// Every stored task, in insertion order. Empty if nothing was ever saved.
    pub fn get_all(&self) -> Result<Vec<Task>> {
        Ok(self.store.get::<Vec<Task>>(TASKS_KEY)?.unwrap_or_default())
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<Task>> {
        Ok(self.get_all()?.into_iter().find(|task| task.id == id))
    }

    /// Resolves a full id or a unique id prefix.
    ///
    /// # Errors
    ///
    /// [`TaskError::NotFound`] when nothing matches, [`TaskError::AmbiguousId`]
    /// when the prefix matches several tasks.
    pub fn find(&self, id_or_prefix: &str) -> Result<Task> {
        let needle = id_or_prefix.trim();
        let tasks = self.get_all()?;

        if let Some(task) = tasks.iter().find(|task| task.id == needle) {
            return Ok(task.clone());
        }

        let mut matches = tasks.into_iter().filter(|task| !needle.is_empty() && task.id.starts_with(needle));
        match (matches.next(), matches.next()) {
            (Some(task), None) => Ok(task),
            (Some(_), Some(_)) => Err(TaskError::AmbiguousId(needle.to_string()).into()),
            _ => Err(TaskError::NotFound(needle.to_string()).into()),
        }
    }

    /// Validates `draft`, assigns id and creation time, and appends the task.
    pub fn add(&mut self, draft: TaskDraft) -> Result<Task> {
        let draft = draft.normalize()?;
        let task = Task::from_draft(Uuid::new_v4().to_string(), draft, Utc::now());

        self.modify(|tasks| {
            tasks.push(task.clone());
            Ok(())
        })?;

        tracing::debug!(id = %task.id, title = %task.title, "task added");
        Ok(task)
    }

    /// Replaces the stored task with the same id.
    ///
    /// The stored `id` and `created_at` win over whatever `task` carries.
    pub fn update(&mut self, mut task: Task) -> Result<Task> {
        task.normalize()?;

        let updated = self.modify(|tasks| {
            let stored = tasks
                .iter_mut()
                .find(|stored| stored.id == task.id)
                .ok_or_else(|| TaskError::NotFound(task.id.clone()))?;
            task.created_at = stored.created_at;
            *stored = task;
            Ok(stored.clone())
        })?;

        tracing::debug!(id = %updated.id, completed = updated.completed, "task updated");
        Ok(updated)
    }

    /// Sets the completion flag of one task.
    pub fn set_completed(&mut self, id: &str, completed: bool) -> Result<Task> {
        let mut task = self.get_by_id(id)?.ok_or_else(|| TaskError::NotFound(id.to_string()))?;
        task.completed = completed;
        self.update(task)
    }

    /// Removes the task and returns its id.
    pub fn delete(&mut self, id: &str) -> Result<TaskId> {
        let deleted = self.modify(|tasks| {
            let position = tasks.iter().position(|task| task.id == id).ok_or_else(|| TaskError::NotFound(id.to_string()))?;
            Ok(tasks.remove(position).id)
        })?;

        tracing::debug!(id = %deleted, "task deleted");
        Ok(deleted)
    }

    /// Loads the collection, applies `f` and saves the result atomically.
    fn modify<R>(&mut self, f: impl FnOnce(&mut Vec<Task>) -> Result<R>) -> Result<R> {
        self.store.transaction(|tx| {
            let mut tasks = tx.get::<Vec<Task>>(TASKS_KEY)?.unwrap_or_default();
            let result = f(&mut tasks)?;
            tx.set(TASKS_KEY, &tasks)?;
            Ok(result)
        })
    }
}
