use super::add::{parse_due, prompt_due, prompt_priority};
use crate::{
    db::tasks::Tasks,
    libs::{
        clock::{Clock, SystemClock},
        formatter::format_due_input,
        messages::Message,
        task::{Priority, Task},
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id or a unique prefix of it
    id: String,
    /// New title
    #[arg(long)]
    title: Option<String>,
    /// New description. An empty string removes it
    #[arg(short, long)]
    description: Option<String>,
    /// New due date: today, tomorrow, YYYY-MM-DD or YYYY-MM-DD HH:MM
    #[arg(long, conflicts_with = "clear_due")]
    due: Option<String>,
    /// Remove the due date
    #[arg(long)]
    clear_due: bool,
    /// New priority
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,
}

impl EditArgs {
    fn has_changes(&self) -> bool {
        self.title.is_some() || self.description.is_some() || self.due.is_some() || self.clear_due || self.priority.is_some()
    }
}

pub async fn cmd(args: EditArgs) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let task = tasks_db.find(&args.id)?;
    let now = SystemClock.now();

    let edited = if args.has_changes() {
        apply_args(task.clone(), args, now)?
    } else {
        prompt_edit(task.clone(), now)?
    };

    if edited == task {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let updated = tasks_db.update(edited)?;
    msg_success!(Message::TaskUpdated(updated.title));

    Ok(())
}

fn apply_args(mut task: Task, args: EditArgs, now: NaiveDateTime) -> Result<Task> {
    if let Some(title) = args.title {
        task.title = title;
    }
    if let Some(description) = args.description {
        task.description = Some(description);
    }
    if let Some(due) = args.due {
        task.due_date = Some(parse_due(&due, now)?);
    }
    if args.clear_due {
        task.due_date = None;
    }
    if let Some(priority) = args.priority {
        task.priority = priority;
    }

    // Mirrors what the store does on update, so the no-change check compares like with like.
    task.normalize()?;
    Ok(task)
}

fn prompt_edit(mut task: Task, now: NaiveDateTime) -> Result<Task> {
    msg_print!(Message::EditingTask(task.title.clone()), true);

    task.title = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(task.title.clone())
        .validate_with(|input: &String| if input.trim().is_empty() { Err(Message::TaskTitleEmpty.to_string()) } else { Ok(()) })
        .interact_text()?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(task.description.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    task.description = Some(description);

    task.due_date = prompt_due(task.due_date.map(format_due_input), now)?;
    task.priority = prompt_priority(task.priority)?;

    task.normalize()?;
    Ok(task)
}
