use crate::{db::tasks::Tasks, libs::messages::Message, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id or a unique prefix of it
    id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let task = tasks_db.find(&args.id)?;

    let confirmed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::DeleteCancelled);
        return Ok(());
    }

    tasks_db.delete(&task.id)?;
    msg_success!(Message::TaskDeleted(task.title));

    Ok(())
}
