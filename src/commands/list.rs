//! Task list display.
//!
//! Prints one view of the task collection as a table, followed by the
//! month-ahead preview panel when it applies. Focus mode hides the panel so
//! only the current view stays on screen.

use crate::{
    db::{settings::Settings, tasks::Tasks},
    libs::{
        classifier::{classify, is_overdue, month_ahead_tasks, sort_for_display},
        clock::{Clock, SystemClock},
        config::{Config, DisplayConfig},
        messages::Message,
        task::{Task, TaskView},
        view::View,
    },
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// View to show. Defaults to the configured view
    #[arg(short, long, value_enum)]
    view: Option<TaskView>,
}

/// Everything the list command prints, computed without touching the terminal.
#[derive(Debug)]
pub struct Listing<'a> {
    pub view: TaskView,
    pub tasks: Vec<&'a Task>,
    pub overdue: usize,
    pub preview: Option<Preview<'a>>,
}

/// The month-ahead panel shown under the today and all views.
#[derive(Debug)]
pub struct Preview<'a> {
    /// Sorted tasks that fit within the configured limit.
    pub tasks: Vec<&'a Task>,
    /// Month-ahead tasks left out by the limit.
    pub hidden: usize,
}

impl<'a> Listing<'a> {
    pub fn build(all: &'a [Task], view: TaskView, now: NaiveDateTime, focus_mode: bool, display: &DisplayConfig) -> Self {
        let tasks = sort_for_display(classify(all, view, now));
        let overdue = tasks.iter().filter(|task| is_overdue(task, now)).count();

        let preview = if focus_mode || !display.show_preview || view == TaskView::Upcoming {
            None
        } else {
            let mut ahead = sort_for_display(month_ahead_tasks(all, now).into_iter().filter(|task| !task.completed));
            let hidden = ahead.len().saturating_sub(display.preview_limit);
            ahead.truncate(display.preview_limit);
            Some(Preview { tasks: ahead, hidden }).filter(|preview| !preview.tasks.is_empty())
        };

        Listing {
            view,
            tasks,
            overdue,
            preview,
        }
    }
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let display = Config::read()?.display();
    let view = args.view.unwrap_or(display.default_view);
    let focus_mode = Settings::new()?.focus_mode()?;
    let tasks = Tasks::new()?.get_all()?;
    let now = SystemClock.now();

    let listing = Listing::build(&tasks, view, now, focus_mode, &display);
    print_listing(&listing, now)
}

fn print_listing(listing: &Listing, now: NaiveDateTime) -> Result<()> {
    msg_print!(Message::ViewHeader(listing.view, listing.tasks.len()), true);

    if listing.tasks.is_empty() {
        msg_info!(Message::EmptyView(listing.view));
    } else {
        View::tasks(&listing.tasks, now)?;
    }

    if listing.overdue > 0 {
        msg_warning!(Message::OverdueSummary(listing.overdue));
    }

    if let Some(preview) = &listing.preview {
        msg_print!(Message::PreviewHeader(preview.tasks.len()), true);
        View::preview(&preview.tasks, now)?;
        if preview.hidden > 0 {
            msg_print!(Message::PreviewMore(preview.hidden));
        }
    }

    Ok(())
}
