//! Document session: one store bound to (at most) one task file.
//!
//! The session is the surface a presentation layer drives. It starts
//! `Unbound` with a single blank node, becomes `Bound` after the first
//! successful open or save-as, and stays bound (possibly to a different
//! path) after that. Starting a new document returns it to `Unbound`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskedit::libs::node::NodeUpdate;
//! use taskedit::libs::session::Session;
//!
//! let mut session = Session::new();
//! let node = session.store().nodes()[0].clone();
//! session.store_mut().update(node.id, &NodeUpdate::new().note("Call the plumber"))?;
//! session.save_as("home.task")?;
//! # Ok::<(), taskedit::libs::error::NodeError>(())
//! ```

use super::error::{NodeError, NodeResult};
use super::field::Field;
use super::filter;
use super::node::Node;
use super::store::Store;
use crate::db::tasks::{SaveMode, Tasks};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState<'a> {
    Unbound,
    Bound(&'a Path),
}

#[derive(Debug)]
pub struct Session {
    store: Store,
    path: Option<PathBuf>,
    save_mode: SaveMode,
}

impl Session {
    /// New unbound session holding one blank node.
    pub fn new() -> Self {
        Self::with_save_mode(SaveMode::default())
    }

    pub fn with_save_mode(save_mode: SaveMode) -> Self {
        let mut session = Session {
            store: Store::new(),
            path: None,
            save_mode,
        };
        session.new_document();
        session
    }

    /// Opens `path` in a fresh session.
    pub fn open_path(path: impl AsRef<Path>, save_mode: SaveMode) -> NodeResult<Self> {
        let mut session = Session {
            store: Store::new(),
            path: None,
            save_mode,
        };
        session.open(path)?;
        Ok(session)
    }

    /// Discards every node and unbinds the file, leaving one blank node.
    pub fn new_document(&mut self) -> Node {
        self.path = None;
        debug!("new document");
        self.store.reset()
    }

    /// Replaces the store with the contents of `path` and binds to it.
    ///
    /// On failure the session keeps its previous nodes and binding.
    pub fn open(&mut self, path: impl AsRef<Path>) -> NodeResult<()> {
        let path = path.as_ref();
        let nodes = Tasks::load(path)?;
        let mut store = Store::new();
        store.replace_all(nodes)?;

        self.store = store;
        self.path = Some(path.to_path_buf());
        debug!(path = %path.display(), count = self.store.len(), "document opened");
        Ok(())
    }

    /// Saves to the bound file using the session's save mode.
    pub fn save(&self) -> NodeResult<()> {
        self.save_with(self.save_mode)
    }

    /// Saves to the bound file with an explicit save mode.
    pub fn save_with(&self, mode: SaveMode) -> NodeResult<()> {
        let path = self.path.as_deref().ok_or(NodeError::Unbound)?;
        Tasks::save(path, self.store.nodes(), mode)
    }

    /// Saves to `path` and, on success, binds the session to it.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> NodeResult<()> {
        let path = path.as_ref();
        Tasks::save(path, self.store.nodes(), self.save_mode)?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    pub fn state(&self) -> SessionState<'_> {
        match &self.path {
            Some(path) => SessionState::Bound(path),
            None => SessionState::Unbound,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn save_mode(&self) -> SaveMode {
        self.save_mode
    }

    pub fn set_save_mode(&mut self, save_mode: SaveMode) {
        self.save_mode = save_mode;
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    /// Nodes matching `query` on `field`, sorted by that field.
    pub fn view(&self, field: Field, query: &str) -> Vec<Node> {
        filter::view(self.store.nodes(), field, query)
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
