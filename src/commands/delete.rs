use crate::{db::tasks::SaveMode, libs::messages::Message, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::PathBuf;

use super::{into_anyhow, open_session};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task file
    path: PathBuf,
    /// Task ID
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut session = open_session(&args.path)?;
    // Fail on a missing id before asking anything.
    session.store().get(args.id).map_err(into_anyhow)?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteNode(args.id).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_warning!(Message::DeletionCancelled);
            return Ok(());
        }
    }

    session.store_mut().delete(args.id).map_err(into_anyhow)?;
    // A merge save would leave the deleted row in the file.
    session.save_with(SaveMode::Prune).map_err(into_anyhow)?;

    msg_success!(Message::NodeDeleted(args.id));
    Ok(())
}
