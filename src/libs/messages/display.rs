//! Display text for [`Message`].
//!
//! All user-facing text is defined here, so commands only ever refer to
//! message variants.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === DOCUMENT MESSAGES ===
            Message::DocumentCreated(path) => format!("New task file created: {}", path),
            Message::DocumentExists(path) => format!("{} already exists, use --force to overwrite it.", path),
            Message::DocumentNotBound => "No task file is open. Use save as to choose one.".to_string(),
            Message::NodesHeader(path) => format!("Tasks in {}:", path),
            Message::NodesMatching(field, query) => format!("Tasks with {} containing '{}':", field, query),
            Message::NoNodesFound => "No tasks found.".to_string(),
            Message::NoNodesMatching(field, query) => format!("No tasks with {} containing '{}'.", field, query),

            // === NODE MESSAGES ===
            Message::NodeAdded(id) => format!("Task {} added.", id),
            Message::NodeUpdated(id) => format!("Task {} updated.", id),
            Message::NodeDeleted(id) => format!("Task {} deleted.", id),
            Message::NodeNotFound(id) => format!("Task with ID {} not found.", id),
            Message::NodeActivated(id) => format!("Task {} is now active.", id),
            Message::NodeDeactivated(id) => format!("Task {} is now inactive.", id),
            Message::FileAttached(id, path) => format!("Attached {} to task {}.", path, id),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::ConfirmDeleteNode(id) => format!("Are you sure you want to delete task {}?", id),
            Message::DeletionCancelled => "Deletion cancelled.".to_string(),
            Message::InvalidField(name) => {
                format!("Unknown field '{}'. Use one of: id, note, file, priority, status, info.", name)
            }

            // === EDITOR MESSAGES ===
            Message::NoFileAttached(id) => format!("Task {} has no file attached.", id),
            Message::EditorLaunched(command) => format!("Started {}", command),
            Message::EditorLaunchFailed(error) => format!("Failed to start editor: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleEditor => "Editor settings".to_string(),
            Message::PromptEditor => "External editor command (empty to use $EDITOR or gedit)".to_string(),
            Message::PromptPruneOnSave => "Remove tasks from the file when they are deleted here?".to_string(),
        };
        write!(f, "{}", text)
    }
}
