use crate::libs::view::View;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::{into_anyhow, open_session};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task file
    path: PathBuf,
    /// Task ID
    id: i64,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let session = open_session(&args.path)?;
    let node = session.store().get(args.id).map_err(into_anyhow)?;

    View::node(node);
    Ok(())
}
