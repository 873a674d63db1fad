use super::classifier::is_overdue;
use super::formatter::format_due_date;
use super::task::Task;
use anyhow::Result;
use chrono::NaiveDateTime;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints the task table for a view.
    pub fn tasks(tasks: &[&Task], now: NaiveDateTime) -> Result<()> {
        Self::task_table(tasks, now).printstd();

        Ok(())
    }

    /// Prints the compact month-ahead preview: title, due date and priority only.
    pub fn preview(tasks: &[&Task], now: NaiveDateTime) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DUE", "PRIORITY"]);
        for task in tasks {
            table.add_row(row![task.short_id(), task.title, due_label(task, now), task.priority]);
        }
        table.printstd();

        Ok(())
    }

    pub fn task_table(tasks: &[&Task], now: NaiveDateTime) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "DUE", "PRIORITY", "DONE"]);
        for task in tasks {
            let done = if task.completed { "✓" } else { "" };
            table.add_row(row![
                task.short_id(),
                task.title,
                task.description.as_deref().unwrap_or(""),
                due_label(task, now),
                task.priority,
                done
            ]);
        }

        table
    }
}

/// Due label with a warning marker on overdue tasks. Empty when undated.
fn due_label(task: &Task, now: NaiveDateTime) -> String {
    match task.due_date {
        Some(due) if is_overdue(task, now) => format!("⚠ {}", format_due_date(due, now)),
        Some(due) => format_due_date(due, now),
        None => String::new(),
    }
}
