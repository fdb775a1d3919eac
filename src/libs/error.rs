//! Error type shared by the node engine.
//!
//! Every store, filter, codec and session operation returns [`NodeResult`].
//! All variants are recoverable: a failed call leaves the in-memory state
//! exactly as it was before the call.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the engine.
pub type NodeResult<T> = Result<T, NodeError>;

#[derive(Debug, Error)]
pub enum NodeError {
    /// An operation referenced an id that is not in the store.
    #[error("node {0} not found")]
    NotFound(i64),

    /// A bulk replace was given two records with the same id.
    #[error("duplicate node id {0}")]
    DuplicateId(i64),

    /// A bulk replace was given a record with an id below zero.
    #[error("negative node id {0}")]
    NegativeId(i64),

    /// Every id up to `i64::MAX` has been handed out.
    #[error("no node ids left")]
    IdsExhausted,

    /// The file exists but does not hold a readable tasks table.
    #[error("invalid task file: {0}")]
    FileFormat(String),

    /// A field selector outside the fixed field table.
    #[error("unsupported field '{0}'")]
    Configuration(String),

    /// `save` was called on a session that has no file bound yet.
    #[error("no file is bound to this session, use save as")]
    Unbound,

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
