//! In-memory node store for one open document.
//!
//! The store is the only authority for node ids. Ids come from a monotonic
//! counter: on a fresh store they run 0, 1, 2, ... and a deleted id is never
//! handed out again for the life of the store. Ids are never negative. Once
//! `i64::MAX` has been handed out the counter is exhausted and
//! [`Store::create`] fails instead of wrapping. Nodes are kept in insertion
//! order; callers that need another order sort the result of [`Store::list`].
//!
//! ## Usage
//!
//! ```rust
//! use taskedit::libs::node::NodeUpdate;
//! use taskedit::libs::store::Store;
//!
//! let mut store = Store::new();
//! let first = store.create()?;
//! store.update(first.id, &NodeUpdate::new().note("Write report").priority(2))?;
//! assert_eq!(store.get(first.id)?.priority, 2);
//! # Ok::<(), taskedit::libs::error::NodeError>(())
//! ```

use super::error::{NodeError, NodeResult};
use super::node::{Node, NodeUpdate};
use std::collections::{HashMap, HashSet};
use tracing::debug;

#[derive(Debug)]
pub struct Store {
    nodes: Vec<Node>,
    /// id -> position in `nodes`
    index: HashMap<i64, usize>,
    /// `None` once the id space is used up.
    next_id: Option<i64>,
}

impl Default for Store {
    fn default() -> Self {
        Store {
            nodes: Vec::new(),
            index: HashMap::new(),
            next_id: Some(0),
        }
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a blank node under the next id and returns a copy of it.
    ///
    /// Fails with [`NodeError::IdsExhausted`] after `i64::MAX` has been used.
    pub fn create(&mut self) -> NodeResult<Node> {
        let id = self.next_id.ok_or(NodeError::IdsExhausted)?;
        Ok(self.insert_blank(id))
    }

    fn insert_blank(&mut self, id: i64) -> Node {
        let node = Node::with_id(id);
        self.next_id = id.checked_add(1);
        self.index.insert(node.id, self.nodes.len());
        self.nodes.push(node.clone());
        debug!(id = node.id, count = self.nodes.len(), "node created");
        node
    }

    /// Overwrites the fields set in `update` on node `id`.
    pub fn update(&mut self, id: i64, update: &NodeUpdate) -> NodeResult<()> {
        let node = self.get_mut(id)?;
        node.apply(update);
        debug!(id, "node updated");
        Ok(())
    }

    /// Removes node `id`. Remaining ids are not renumbered.
    pub fn delete(&mut self, id: i64) -> NodeResult<()> {
        let position = self.index.remove(&id).ok_or(NodeError::NotFound(id))?;
        self.nodes.remove(position);
        self.rebuild_index();
        debug!(id, count = self.nodes.len(), "node deleted");
        Ok(())
    }

    pub fn get(&self, id: i64) -> NodeResult<&Node> {
        self.index.get(&id).map(|&position| &self.nodes[position]).ok_or(NodeError::NotFound(id))
    }

    fn get_mut(&mut self, id: i64) -> NodeResult<&mut Node> {
        match self.index.get(&id) {
            Some(&position) => Ok(&mut self.nodes[position]),
            None => Err(NodeError::NotFound(id)),
        }
    }

    /// Snapshot of all nodes in insertion order.
    pub fn list(&self) -> Vec<Node> {
        self.nodes.clone()
    }

    /// Borrowing view of all nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Replaces the whole record set, keeping each node's own id.
    ///
    /// Fails with [`NodeError::DuplicateId`] when two nodes share an id and
    /// with [`NodeError::NegativeId`] when an id is below zero. On failure the
    /// store is left untouched. Later calls to [`Store::create`] continue
    /// after the largest loaded id.
    pub fn replace_all(&mut self, nodes: Vec<Node>) -> NodeResult<()> {
        let mut seen = HashSet::with_capacity(nodes.len());
        for node in &nodes {
            if node.id < 0 {
                return Err(NodeError::NegativeId(node.id));
            }
            if !seen.insert(node.id) {
                return Err(NodeError::DuplicateId(node.id));
            }
        }

        self.next_id = match nodes.iter().map(|node| node.id).max() {
            Some(largest) => largest.checked_add(1),
            None => Some(0),
        };
        self.nodes = nodes;
        self.rebuild_index();
        debug!(count = self.nodes.len(), next_id = ?self.next_id, "store replaced");
        Ok(())
    }

    /// Drops every node and leaves a single blank node with id 0.
    pub fn reset(&mut self) -> Node {
        *self = Store::new();
        self.insert_blank(0)
    }

    /// Flips a node between active and inactive, returning the new status.
    pub fn toggle_status(&mut self, id: i64) -> NodeResult<bool> {
        let node = self.get_mut(id)?;
        node.status = !node.status;
        Ok(node.status)
    }

    /// Attaches a file path to a node. The path is not checked.
    pub fn attach_file(&mut self, id: i64, file: impl Into<String>) -> NodeResult<()> {
        self.update(id, &NodeUpdate::new().file(file))
    }

    pub fn contains(&self, id: i64) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Id the next [`Store::create`] call will assign, `None` once exhausted.
    pub fn next_id(&self) -> Option<i64> {
        self.next_id
    }

    fn rebuild_index(&mut self) {
        self.index = self.nodes.iter().enumerate().map(|(position, node)| (node.id, position)).collect();
    }
}
