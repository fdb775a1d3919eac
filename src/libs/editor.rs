//! External editor launch for a node's attached file.
//!
//! The engine only builds the command. Spawning it is left to the caller
//! (the `open` CLI command). The editor is started as
//! `<editor> +<line> <file>`, where the line number is the last word of the
//! node's info text when that word is numeric, and 0 otherwise.

use super::node::Node;
use std::io;
use std::process::{Child, Command};
use tracing::debug;

/// Editor used when neither `EDITOR` nor the config names one.
pub const DEFAULT_EDITOR: &str = "gedit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl EditorCommand {
    /// Builds the command for `node`, or `None` when no file is attached.
    pub fn for_node(editor: &str, node: &Node) -> Option<Self> {
        if node.file.is_empty() {
            return None;
        }
        Some(EditorCommand {
            program: editor.to_string(),
            args: vec![format!("+{}", line_hint(&node.info)), node.file.clone()],
        })
    }

    /// Starts the editor without waiting for it to exit.
    pub fn launch(&self) -> io::Result<Child> {
        debug!(program = %self.program, args = ?self.args, "launching editor");
        Command::new(&self.program).args(&self.args).spawn()
    }
}

/// Picks the editor: `EDITOR` when set and non-empty, then the configured
/// one, then [`DEFAULT_EDITOR`].
pub fn resolve_editor(env_editor: Option<String>, configured: Option<&str>) -> String {
    env_editor
        .filter(|editor| !editor.trim().is_empty())
        .or_else(|| configured.filter(|editor| !editor.trim().is_empty()).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

/// Line number encoded as the last space-separated word of `info`.
fn line_hint(info: &str) -> &str {
    let last = info.split(' ').last().unwrap_or("");
    if !last.is_empty() && last.chars().all(|c| c.is_ascii_digit()) {
        last
    } else {
        "0"
    }
}
