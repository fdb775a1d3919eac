use crate::{libs::messages::Message, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::{into_anyhow, open_session};

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task file
    path: PathBuf,
    /// Task ID
    id: i64,
}

pub fn cmd(args: ToggleArgs) -> Result<()> {
    let mut session = open_session(&args.path)?;
    let active = session.store_mut().toggle_status(args.id).map_err(into_anyhow)?;
    session.save().map_err(into_anyhow)?;

    if active {
        msg_success!(Message::NodeActivated(args.id));
    } else {
        msg_success!(Message::NodeDeactivated(args.id));
    }
    Ok(())
}
