pub mod add;
pub mod delete;
pub mod done;
pub mod edit;
pub mod focus;
pub mod init;
pub mod list;

use crate::{
    libs::{messages::Message, task::TaskError},
    msg_error_anyhow,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Show tasks for a view")]
    List(list::ListArgs),
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "Edit a task", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Mark a task as done", arg_required_else_help = true)]
    Done(done::DoneArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Switch focus mode")]
    Focus(focus::FocusArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let result = match cli.command {
            Commands::List(args) => list::cmd(args).await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Done(args) => done::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::Focus(args) => focus::cmd(args).await,
            Commands::Init(args) => init::cmd(args),
        };

        result.map_err(user_facing)
    }
}

/// Replaces domain errors with their user-facing message text.
pub fn user_facing(error: anyhow::Error) -> anyhow::Error {
    match error.downcast_ref::<TaskError>() {
        Some(TaskError::EmptyTitle) => msg_error_anyhow!(Message::TaskTitleEmpty),
        Some(TaskError::NotFound(id)) => msg_error_anyhow!(Message::TaskNotFound(id.clone())),
        Some(TaskError::AmbiguousId(prefix)) => msg_error_anyhow!(Message::TaskIdAmbiguous(prefix.clone())),
        None => error,
    }
}
