//! Display implementation for taskflow application messages.
//!
//! All user-facing text lives here, in one match over [`Message`]. Commands
//! never build sentences themselves; they pick a variant and hand it to one of
//! the message macros, which decide between console output and `tracing`.
//!
//! ## Text Formatting Standards
//!
//! - **Sentence Case**: Natural capitalization for readability
//! - **Specific Details**: Task titles and ids are quoted where they help
//! - **Short Hints**: Focus mode hints are one line each
//!
//! ## Usage Integration
//!
//! ```rust
//! use taskflow::msg_success;
//! use taskflow::libs::messages::Message;
//!
//! msg_success!(Message::TaskCreated("Pay rent".to_string()));
//! ```

use super::types::Message;
use crate::libs::task::TaskView;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TaskCompleted(title) => format!("Task '{}' completed", title),
            Message::TaskReopened(title) => format!("Task '{}' marked as not done", title),
            Message::TaskNotFound(id) => format!("Task '{}' not found", id),
            Message::TaskIdAmbiguous(prefix) => format!("Task id '{}' matches more than one task, type more characters", prefix),
            Message::TaskTitleEmpty => "Task title cannot be empty".to_string(),
            Message::TaskAlreadyCompleted(title) => format!("Task '{}' is already completed", title),
            Message::TaskAlreadyOpen(title) => format!("Task '{}' is not completed", title),
            Message::ConfirmDeleteTask(title) => format!("Are you sure you want to delete '{}'?", title),
            Message::DeleteCancelled => "Deletion cancelled.".to_string(),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::InvalidDueDate(input) => format!("Could not read due date '{}'. Use today, tomorrow, YYYY-MM-DD or YYYY-MM-DD HH:MM", input),
            Message::EditingTask(title) => format!("Editing task: {}", title),

            // === VIEW MESSAGES ===
            Message::ViewHeader(view, count) => format!("📋 {} ({})", view, count),
            Message::EmptyView(view) => match view {
                TaskView::Today => "No tasks for today. Add your first task to get started!".to_string(),
                TaskView::Upcoming => "Nothing planned a month or more ahead.".to_string(),
                TaskView::All => "No tasks yet. Add your first task to get started!".to_string(),
            },
            Message::PreviewHeader(count) => format!("📅 Coming up in a month or later ({})", count),
            Message::PreviewMore(count) => format!("...and {} more. Run with --view upcoming to see all.", count),
            Message::OverdueSummary(count) => format!("{} task(s) overdue", count),

            // === FOCUS MODE MESSAGES ===
            Message::FocusModeActivated => "Focus Mode Activated".to_string(),
            Message::FocusModeActivatedHint => "Distractions minimized. Stay focused!".to_string(),
            Message::FocusModeDeactivated => "Focus Mode Deactivated".to_string(),
            Message::FocusModeDeactivatedHint => "You can now return to normal mode.".to_string(),
            Message::FocusModeStatus(enabled) => format!("Focus mode is {}", if *enabled { "on" } else { "off" }),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults restored".to_string(),
            Message::ConfigNothingToDelete => "No saved configuration, defaults are already in use".to_string(),
            Message::ConfigModuleDisplay => "Display settings".to_string(),
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptDefaultView => "Default view".to_string(),
            Message::PromptShowPreview => "Show the upcoming preview under other views?".to_string(),
            Message::PromptPreviewLimit => "How many upcoming tasks to preview".to_string(),

            // === TASK PROMPTS ===
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description (optional)".to_string(),
            Message::PromptTaskDueDate => "Due date (optional: today, tomorrow, YYYY-MM-DD [HH:MM])".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),

            // === DATABASE MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::StoreValueCorrupted(key) => format!("Stored value '{}' is corrupted and could not be read", key),
        };
        write!(f, "{}", text)
    }
}
