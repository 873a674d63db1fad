use crate::{db::tasks::Tasks, libs::messages::Message, msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task id or a unique prefix of it
    id: String,
    /// Mark the task as not done instead
    #[arg(short, long)]
    undo: bool,
}

pub async fn cmd(args: DoneArgs) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let task = tasks_db.find(&args.id)?;
    let completed = !args.undo;

    if task.completed == completed {
        if completed {
            msg_info!(Message::TaskAlreadyCompleted(task.title));
        } else {
            msg_info!(Message::TaskAlreadyOpen(task.title));
        }
        return Ok(());
    }

    let task = tasks_db.set_completed(&task.id, completed)?;
    if completed {
        msg_success!(Message::TaskCompleted(task.title));
    } else {
        msg_success!(Message::TaskReopened(task.title));
    }

    Ok(())
}
