use crate::{libs::messages::Message, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::{into_anyhow, open_session, NodeFieldArgs};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task file
    path: PathBuf,
    #[command(flatten)]
    fields: NodeFieldArgs,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let mut session = open_session(&args.path)?;

    let node = session.store_mut().create().map_err(into_anyhow)?;
    session.store_mut().update(node.id, &args.fields.to_update()).map_err(into_anyhow)?;
    session.save().map_err(into_anyhow)?;

    msg_success!(Message::NodeAdded(node.id));
    Ok(())
}
