use crate::{
    libs::{field::Field, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::{into_anyhow, open_session};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Task file
    path: PathBuf,
    /// Field to search and sort by (id, note, file, priority, status, info)
    #[arg(short, long, default_value = "id")]
    by: String,
    /// Only show tasks whose field contains this text
    #[arg(short, long, default_value = "")]
    query: String,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let field = Field::parse(&args.by).map_err(into_anyhow)?;
    let session = open_session(&args.path)?;
    let nodes = session.view(field, &args.query);

    if nodes.is_empty() {
        if args.query.is_empty() {
            msg_info!(Message::NoNodesFound);
        } else {
            msg_info!(Message::NoNodesMatching(field.to_string(), args.query));
        }
        return Ok(());
    }

    if args.query.is_empty() {
        msg_print!(Message::NodesHeader(args.path.display().to_string()), true);
    } else {
        msg_print!(Message::NodesMatching(field.to_string(), args.query), true);
    }
    View::nodes(&nodes);
    Ok(())
}
