use crate::{libs::messages::Message, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::{into_anyhow, open_session, NodeFieldArgs};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task file
    path: PathBuf,
    /// Task ID
    id: i64,
    #[command(flatten)]
    fields: NodeFieldArgs,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let update = args.fields.to_update();
    if update.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let mut session = open_session(&args.path)?;
    session.store_mut().update(args.id, &update).map_err(into_anyhow)?;
    session.save().map_err(into_anyhow)?;

    msg_success!(Message::NodeUpdated(args.id));
    Ok(())
}
