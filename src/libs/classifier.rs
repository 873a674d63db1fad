//! Task filtering, ordering and view classification.
//!
//! Everything here is a pure function of a task collection and a reference
//! instant `now`. Nothing reads the system clock and nothing mutates the
//! input: views are returned as vectors of references into the caller's
//! collection.
//!
//! ## Buckets
//!
//! All comparisons happen on calendar days. Both the due date and `now` are
//! truncated to midnight before comparing.
//!
//! - **Today**: no due date, or due on or before today. Overdue tasks stay here
//!   until they are completed or deleted.
//! - **Upcoming**: due on or after the same calendar day next month. Tasks due
//!   between tomorrow and one month from now are only listed under **All**.
//! - **All**: the whole collection.
//!
//! ## Display Order
//!
//! 1. Incomplete before completed
//! 2. `High`, then `Medium`, then `Low`
//! 3. Earlier due date first, when both tasks have one
//!
//! A task without a due date neither precedes nor follows a dated task of the
//! same rank. Undated tasks therefore keep their positions inside their rank
//! group and only the dated tasks around them are reordered.
//!
//! ## Usage
//!
//! ```rust
//! use taskflow::libs::classifier::{classify, sort_for_display};
//! use taskflow::libs::task::TaskView;
//! # use taskflow::libs::task::Task;
//! # let tasks: Vec<Task> = Vec::new();
//! # let now = chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(9, 0, 0).unwrap();
//!
//! let today = sort_for_display(classify(&tasks, TaskView::Today, now));
//! ```

use crate::libs::task::{Task, TaskView};
use chrono::{Months, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

fn due_day(task: &Task) -> Option<NaiveDate> {
    task.due_date.map(|due| due.date())
}

/// First calendar day that counts as month-ahead for `now`.
///
/// Adding a month clamps the day of month, so January 31st maps to the last
/// day of February.
pub fn month_ahead_threshold(now: NaiveDateTime) -> NaiveDate {
    let today = now.date();
    today.checked_add_months(Months::new(1)).unwrap_or(NaiveDate::MAX)
}

/// Whether the task is due on or after the same calendar day next month.
pub fn is_month_ahead(task: &Task, now: NaiveDateTime) -> bool {
    let threshold = month_ahead_threshold(now);
    due_day(task).is_some_and(|day| day >= threshold)
}

/// Whether the task belongs to the today view.
pub fn matches_today(task: &Task, now: NaiveDateTime) -> bool {
    due_day(task).map_or(true, |day| day <= now.date())
}

/// Whether the task belongs to the upcoming view. Same set as [`is_month_ahead`].
pub fn matches_upcoming(task: &Task, now: NaiveDateTime) -> bool {
    is_month_ahead(task, now)
}

/// Whether an incomplete task is past its due day.
pub fn is_overdue(task: &Task, now: NaiveDateTime) -> bool {
    !task.completed && due_day(task).is_some_and(|day| day < now.date())
}

/// Selects the tasks shown in `view`, in collection order.
pub fn classify(tasks: &[Task], view: TaskView, now: NaiveDateTime) -> Vec<&Task> {
    match view {
        TaskView::Today => tasks.iter().filter(|task| matches_today(task, now)).collect(),
        TaskView::Upcoming => tasks.iter().filter(|task| matches_upcoming(task, now)).collect(),
        TaskView::All => tasks.iter().collect(),
    }
}

/// Tasks for the month-ahead preview panel, in collection order.
pub fn month_ahead_tasks(tasks: &[Task], now: NaiveDateTime) -> Vec<&Task> {
    tasks.iter().filter(|task| is_month_ahead(task, now)).collect()
}

/// Completion and priority levels of the display order.
fn compare_rank(a: &Task, b: &Task) -> Ordering {
    a.completed.cmp(&b.completed).then_with(|| a.priority.rank().cmp(&b.priority.rank()))
}

/// Full three-level display comparator.
///
/// A comparison where either side lacks a due date stops at the rank levels.
/// This relation is not transitive across dated and undated tasks, so it must
/// not be handed to `sort_by` directly; [`sort_for_display`] applies it safely.
pub fn compare_for_display(a: &Task, b: &Task) -> Ordering {
    compare_rank(a, b).then_with(|| match (a.due_date, b.due_date) {
        (Some(a_due), Some(b_due)) => a_due.cmp(&b_due),
        _ => Ordering::Equal,
    })
}

/// Orders tasks for display. Stable and idempotent.
pub fn sort_for_display<'a, I>(tasks: I) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut sorted: Vec<&'a Task> = tasks.into_iter().collect();
    sorted.sort_by(|a, b| compare_rank(a, b));

    for group in sorted.chunk_by_mut(|a, b| compare_rank(a, b) == Ordering::Equal) {
        order_dated_in_place(group);
    }

    sorted
}

/// Sorts the dated tasks of one rank group into the slots they already hold.
fn order_dated_in_place(group: &mut [&Task]) {
    let slots: Vec<usize> = group
        .iter()
        .enumerate()
        .filter(|(_, task)| task.due_date.is_some())
        .map(|(slot, _)| slot)
        .collect();
    if slots.len() < 2 {
        return;
    }

    let mut dated: Vec<&Task> = slots.iter().map(|&slot| group[slot]).collect();
    dated.sort_by_key(|task| task.due_date);

    for (slot, task) in slots.into_iter().zip(dated) {
        group[slot] = task;
    }
}
