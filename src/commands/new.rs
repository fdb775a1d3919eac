use crate::{
    db::{task_file_path, tasks::SaveMode},
    libs::{config::Config, messages::Message, session::Session},
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::into_anyhow;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Task file to create; `.task` is added when there is no extension
    path: PathBuf,
    /// Overwrite the file if it already exists
    #[arg(long)]
    force: bool,
}

pub fn cmd(args: NewArgs) -> Result<()> {
    let path = task_file_path(args.path);
    if path.exists() && !args.force {
        msg_bail_anyhow!(Message::DocumentExists(path.display().to_string()));
    }

    let mut session = Session::with_save_mode(Config::read()?.save_mode());
    if args.force {
        // The new document replaces whatever rows the old file held.
        session.set_save_mode(SaveMode::Prune);
    }
    session.save_as(&path).map_err(into_anyhow)?;

    msg_success!(Message::DocumentCreated(path.display().to_string()));
    Ok(())
}
