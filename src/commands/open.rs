use crate::{
    libs::{config::Config, editor::EditorCommand, messages::Message},
    msg_bail_anyhow, msg_error_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::{into_anyhow, open_session};

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Task file
    path: PathBuf,
    /// Task ID
    id: i64,
}

pub fn cmd(args: OpenArgs) -> Result<()> {
    let editor = Config::read()?.editor();
    let session = open_session(&args.path)?;
    let node = session.store().get(args.id).map_err(into_anyhow)?;

    let Some(command) = EditorCommand::for_node(&editor, node) else {
        msg_bail_anyhow!(Message::NoFileAttached(args.id));
    };
    command
        .launch()
        .map_err(|error| msg_error_anyhow!(Message::EditorLaunchFailed(error.to_string())))?;

    msg_success!(Message::EditorLaunched(format!("{} {}", command.program, command.args.join(" "))));
    Ok(())
}
