//! Persistence layer for taskedit.
//!
//! Task documents are single-table SQLite files, conventionally named with
//! the `.task` extension. The whole file is read on open and written on save;
//! there is no incremental loading and no schema migration.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskedit::db::tasks::{SaveMode, Tasks};
//! use taskedit::libs::node::Node;
//! use std::path::Path;
//!
//! let path = Path::new("todo.task");
//! Tasks::save(path, &[Node::with_id(0)], SaveMode::Merge)?;
//! let nodes = Tasks::load(path)?;
//! # Ok::<(), taskedit::libs::error::NodeError>(())
//! ```

/// SQLite connection handling for one task file.
pub mod db;

/// Reading and writing the `tasks` table.
pub mod tasks;

use std::path::PathBuf;

/// File extension used for task documents.
pub const TASK_FILE_EXTENSION: &str = "task";

/// Adds the `.task` extension to a path that has none.
pub fn task_file_path(path: impl Into<PathBuf>) -> PathBuf {
    let mut path = path.into();
    if path.extension().is_none() {
        path.set_extension(TASK_FILE_EXTENSION);
    }
    path
}
