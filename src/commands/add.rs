use crate::{
    db::tasks::Tasks,
    libs::{
        clock::{Clock, SystemClock},
        formatter::parse_due_input,
        messages::Message,
        task::{Priority, TaskDraft},
    },
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title. Prompts for every field when omitted
    title: Option<String>,
    /// Optional longer description
    #[arg(short, long)]
    description: Option<String>,
    /// Due date: today, tomorrow, YYYY-MM-DD or YYYY-MM-DD HH:MM
    #[arg(long)]
    due: Option<String>,
    /// Task priority
    #[arg(short, long, value_enum, default_value_t = Priority::Medium)]
    priority: Priority,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let now = SystemClock.now();
    let draft = match args.title {
        Some(title) => draft_from_args(title, args.description, args.due, args.priority, now)?,
        None => prompt_draft(now)?,
    };

    let task = Tasks::new()?.add(draft)?;
    msg_success!(Message::TaskCreated(task.title));

    Ok(())
}

fn draft_from_args(title: String, description: Option<String>, due: Option<String>, priority: Priority, now: NaiveDateTime) -> Result<TaskDraft> {
    Ok(TaskDraft {
        title,
        description,
        due_date: due.as_deref().map(|input| parse_due(input, now)).transpose()?,
        priority,
        completed: false,
    })
}

fn prompt_draft(now: NaiveDateTime) -> Result<TaskDraft> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .validate_with(|input: &String| if input.trim().is_empty() { Err(Message::TaskTitleEmpty.to_string()) } else { Ok(()) })
        .interact_text()?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;

    let due = prompt_due(None, now)?;
    let priority = prompt_priority(Priority::Medium)?;

    Ok(TaskDraft {
        title,
        description: Some(description),
        due_date: due,
        priority,
        completed: false,
    })
}

/// Parses a `--due` value, failing with a message that lists the accepted layouts.
pub(crate) fn parse_due(input: &str, now: NaiveDateTime) -> Result<NaiveDateTime> {
    match parse_due_input(input, now) {
        Some(due) => Ok(due),
        None => msg_bail_anyhow!(Message::InvalidDueDate(input.to_string())),
    }
}

/// Asks for a due date until the answer parses. An empty answer means no due date.
pub(crate) fn prompt_due(current: Option<String>, now: NaiveDateTime) -> Result<Option<NaiveDateTime>> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .default(current.unwrap_or_default())
        .allow_empty(true)
        .validate_with(|input: &String| {
            if input.trim().is_empty() || parse_due_input(input, now).is_some() {
                Ok(())
            } else {
                Err(Message::InvalidDueDate(input.clone()).to_string())
            }
        })
        .interact_text()?;

    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_due(&input, now).map(Some)
}

pub(crate) fn prompt_priority(current: Priority) -> Result<Priority> {
    let priorities = [Priority::High, Priority::Medium, Priority::Low];
    let default_index = priorities.iter().position(|priority| *priority == current).unwrap_or(1);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&priorities)
        .default(default_index)
        .interact()?;

    Ok(priorities[selection])
}
