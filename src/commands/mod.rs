pub mod add;
pub mod attach;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod new;
pub mod open;
pub mod show;
pub mod toggle;

use crate::libs::config::Config;
use crate::libs::error::NodeError;
use crate::libs::messages::Message;
use crate::libs::node::NodeUpdate;
use crate::libs::session::Session;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::Path;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the external editor and save behavior")]
    Init(init::InitArgs),
    #[command(about = "Create a new task file with one blank task")]
    New(new::NewArgs),
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks, optionally filtered and sorted by a field")]
    List(list::ListArgs),
    #[command(about = "Show every field of a task")]
    Show(show::ShowArgs),
    #[command(about = "Change fields of a task")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Switch a task between active and inactive")]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Attach a file to a task")]
    Attach(attach::AttachArgs),
    #[command(about = "Open a task's attached file in the external editor")]
    Open(open::OpenArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    /// Runs the parsed subcommand.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init(args) => init::cmd(args),
            Commands::New(args) => new::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Show(args) => show::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Toggle(args) => toggle::cmd(args),
            Commands::Attach(args) => attach::cmd(args),
            Commands::Open(args) => open::cmd(args),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Active,
    Inactive,
}

/// Field values shared by `add` and `edit`.
#[derive(Debug, Default, Args)]
pub struct NodeFieldArgs {
    /// Task note
    #[arg(short, long)]
    note: Option<String>,
    /// Path of the file attached to the task
    #[arg(short, long)]
    file: Option<String>,
    /// Task priority
    #[arg(short, long, allow_negative_numbers = true)]
    priority: Option<i64>,
    /// Task status
    #[arg(short, long, value_enum)]
    status: Option<StatusArg>,
    /// Short info line; a trailing number is used as the editor line
    #[arg(short, long)]
    info: Option<String>,
}

impl NodeFieldArgs {
    pub fn to_update(&self) -> NodeUpdate {
        NodeUpdate {
            note: self.note.clone(),
            file: self.file.clone(),
            priority: self.priority,
            status: self.status.map(|status| status == StatusArg::Active),
            info: self.info.clone(),
        }
    }
}

/// Opens the task file at `path` with the configured save mode.
pub(crate) fn open_session(path: &Path) -> Result<Session> {
    let config = Config::read()?;
    Session::open_path(path, config.save_mode()).map_err(into_anyhow)
}

/// Converts engine errors into messages the user can act on.
pub(crate) fn into_anyhow(error: NodeError) -> anyhow::Error {
    match error {
        NodeError::NotFound(id) => msg_error_anyhow!(Message::NodeNotFound(id)),
        NodeError::Configuration(name) => msg_error_anyhow!(Message::InvalidField(name)),
        NodeError::Unbound => msg_error_anyhow!(Message::DocumentNotBound),
        other => anyhow::Error::new(other),
    }
}
