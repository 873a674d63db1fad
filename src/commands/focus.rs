//! Focus mode switch.
//!
//! The flag is persisted, so it survives between invocations. While it is on,
//! `list` leaves out the month-ahead preview panel.

use crate::{db::settings::Settings, libs::messages::Message, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct FocusArgs {
    #[command(subcommand)]
    command: Option<FocusCommand>,
}

#[derive(Debug, Subcommand)]
enum FocusCommand {
    /// Turn focus mode on
    On,
    /// Turn focus mode off
    Off,
    /// Flip focus mode
    Toggle,
    /// Show whether focus mode is on
    Status,
}

pub async fn cmd(args: FocusArgs) -> Result<()> {
    let mut settings = Settings::new()?;

    let enabled = match args.command.unwrap_or(FocusCommand::Toggle) {
        FocusCommand::On => settings.set_focus_mode(true)?,
        FocusCommand::Off => settings.set_focus_mode(false)?,
        FocusCommand::Toggle => settings.toggle_focus_mode()?,
        FocusCommand::Status => {
            msg_info!(Message::FocusModeStatus(settings.focus_mode()?));
            return Ok(());
        }
    };

    announce(enabled);
    Ok(())
}

fn announce(enabled: bool) {
    if enabled {
        msg_success!(Message::FocusModeActivated);
        msg_print!(Message::FocusModeActivatedHint);
    } else {
        msg_success!(Message::FocusModeDeactivated);
        msg_print!(Message::FocusModeDeactivatedHint);
    }
}
