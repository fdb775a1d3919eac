use crate::{libs::messages::Message, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::{self, PathBuf};

use super::{into_anyhow, open_session};

#[derive(Debug, Args)]
pub struct AttachArgs {
    /// Task file
    path: PathBuf,
    /// Task ID
    id: i64,
    /// File to attach, stored as an absolute path
    file: PathBuf,
}

pub fn cmd(args: AttachArgs) -> Result<()> {
    let file = path::absolute(&args.file)?.display().to_string();

    let mut session = open_session(&args.path)?;
    session.store_mut().attach_file(args.id, file.clone()).map_err(into_anyhow)?;
    session.save().map_err(into_anyhow)?;

    msg_success!(Message::FileAttached(args.id, file));
    Ok(())
}
