//! Task domain model.
//!
//! Defines the single entity the application manages, the draft used to create
//! it, and the views tasks are grouped into.
//!
//! ## Persisted Shape
//!
//! Tasks are stored as a JSON array of camelCase records:
//!
//! ```json
//! {
//!   "id": "5f0c2a4e-0d0b-4d6f-9d7a-3c1f2b8e9a10",
//!   "title": "Pay rent",
//!   "description": "Transfer before noon",
//!   "dueDate": "2024-06-10T00:00:00",
//!   "priority": "high",
//!   "completed": false,
//!   "createdAt": "2024-06-01T09:30:00Z"
//! }
//! ```
//!
//! ## Sanitising
//!
//! Records written by older versions may carry due dates in a different shape,
//! or values that are not dates at all. Loading never fails because of a single
//! bad field: an unreadable `dueDate` becomes "no due date", an unknown
//! `priority` becomes [`Priority::Medium`], a non-boolean `completed` becomes
//! `false` and a missing `createdAt` becomes the Unix epoch. The classifier
//! can therefore assume every date it sees is valid.

use crate::libs::formatter::parse_stored_date;
use chrono::{DateTime, NaiveDateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

/// Opaque, immutable task identifier.
pub type TaskId = String;

/// Errors raised by task validation and lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task title cannot be empty")]
    EmptyTitle,
    #[error("Task not found: {0}")]
    NotFound(String),
    #[error("Task id '{0}' matches more than one task")]
    AmbiguousId(String),
}

/// Task priority. Sorting puts `High` first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Display rank, lower sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Parses a stored priority name, ignoring case.
    pub fn parse(value: &str) -> Option<Priority> {
        match value.trim().to_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        write!(f, "{}", label)
    }
}

/// Named subset of tasks shown together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TaskView {
    /// Tasks with no due date, due today, or overdue.
    #[default]
    Today,
    /// Tasks due a month or more from now.
    Upcoming,
    /// Every task.
    All,
}

impl fmt::Display for TaskView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskView::Today => "Today",
            TaskView::Upcoming => "Upcoming",
            TaskView::All => "All",
        };
        write!(f, "{}", label)
    }
}

/// A to-do item.
///
/// `id` and `created_at` are assigned by the store when the task is added and
/// never change afterwards. Every other field may be replaced on edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Local wall-clock due time. `None` means the task is always due.
    #[serde(default, with = "due_date_serde")]
    pub due_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Priority,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub completed: bool,
    /// Records saved without a readable creation time load with the Unix epoch.
    #[serde(default = "unknown_created_at", deserialize_with = "lenient_created_at")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Builds a stored task from a validated draft.
    pub fn from_draft(id: TaskId, draft: TaskDraft, created_at: DateTime<Utc>) -> Self {
        Task {
            id,
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            priority: draft.priority,
            completed: draft.completed,
            created_at,
        }
    }

    /// First characters of the id, enough to address a task from the CLI.
    pub fn short_id(&self) -> &str {
        let end = self.id.char_indices().nth(8).map(|(i, _)| i).unwrap_or(self.id.len());
        &self.id[..end]
    }

    /// Trims the title and drops an empty description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyTitle`] when nothing is left of the title.
    pub fn normalize(&mut self) -> Result<(), TaskError> {
        self.title = normalize_title(&self.title)?;
        self.description = normalize_description(self.description.take());
        Ok(())
    }
}

/// Input for creating a task. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub priority: Priority,
    pub completed: bool,
}

impl TaskDraft {
    pub fn new(title: &str) -> Self {
        TaskDraft {
            title: title.to_string(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDateTime) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Trims the title and drops an empty description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyTitle`] when nothing is left of the title.
    pub fn normalize(mut self) -> Result<Self, TaskError> {
        self.title = normalize_title(&self.title)?;
        self.description = normalize_description(self.description);
        Ok(self)
    }
}

fn normalize_title(title: &str) -> Result<String, TaskError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    Ok(title.to_string())
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description.map(|d| d.trim().to_string()).filter(|d| !d.is_empty())
}

fn lenient_priority<'de, D>(deserializer: D) -> Result<Priority, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|v| v.as_str()).and_then(Priority::parse).unwrap_or_default())
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|v| v.as_bool()).unwrap_or(false))
}

fn unknown_created_at() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

fn lenient_created_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let parsed = raw
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(|v| DateTime::parse_from_rfc3339(v.trim()).ok())
        .map(|created_at| created_at.with_timezone(&Utc));
    Ok(parsed.unwrap_or_else(unknown_created_at))
}

/// Due dates are written as `YYYY-MM-DDTHH:MM:SS` and read leniently.
mod due_date_serde {
    use super::parse_stored_date;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(raw.as_ref().and_then(|v| v.as_str()).and_then(parse_stored_date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn draft_rejects_blank_title() {
        assert_eq!(TaskDraft::new("   ").normalize(), Err(TaskError::EmptyTitle));
    }

    #[test]
    fn draft_trims_title_and_drops_empty_description() {
        let draft = TaskDraft::new("  Buy milk ").with_description("  ").normalize().unwrap();
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.description, None);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let json = r#"{"id":"1","title":"Walk","createdAt":"2024-06-01T09:30:00Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.completed);
        assert_eq!(task.due_date, None);
        assert_eq!(task.description, None);
    }

    #[test]
    fn null_completed_and_missing_created_at_take_defaults() {
        let json = r#"{"id":"1","title":"Walk","completed":null}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(!task.completed);
        assert_eq!(task.created_at, DateTime::<Utc>::UNIX_EPOCH);

        let json = r#"{"id":"1","title":"Walk","completed":true,"createdAt":"yesterday"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.completed);
        assert_eq!(task.created_at, DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn malformed_due_date_loads_as_absent() {
        for due in [r#""not a date""#, "42", r#""""#, "null", r#""2024-13-45""#] {
            let json = format!(r#"{{"id":"1","title":"Walk","dueDate":{},"createdAt":"2024-06-01T09:30:00Z"}}"#, due);
            let task: Task = serde_json::from_str(&json).unwrap();
            assert_eq!(task.due_date, None, "dueDate {}", due);
        }
    }

    #[test]
    fn date_only_due_date_is_local_midnight() {
        let json = r#"{"id":"1","title":"Walk","dueDate":"2024-06-10","createdAt":"2024-06-01T09:30:00Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(task.due_date, Some(expected));
    }

    #[test]
    fn unknown_priority_falls_back_to_medium() {
        let json = r#"{"id":"1","title":"Walk","priority":"urgent","createdAt":"2024-06-01T09:30:00Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, Priority::Medium);

        let json = r#"{"id":"1","title":"Walk","priority":"HIGH","createdAt":"2024-06-01T09:30:00Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn short_id_takes_eight_characters() {
        let task = Task::from_draft("abcdef0123456789".to_string(), TaskDraft::new("x"), Utc::now());
        assert_eq!(task.short_id(), "abcdef01");

        let task = Task::from_draft("abc".to_string(), TaskDraft::new("x"), Utc::now());
        assert_eq!(task.short_id(), "abc");
    }
}
