//! Task node record.
//!
//! A [`Node`] is one task card: a note, an attached file path, a priority,
//! an active/inactive status and a short info line. Identity is assigned by
//! the [`Store`](crate::libs::store::Store); until then a node carries the
//! [`UNASSIGNED_ID`] sentinel.

/// Id carried by a node that has not been inserted into a store.
pub const UNASSIGNED_ID: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: i64,
    pub note: String,
    pub file: String,
    pub priority: i64,
    /// `true` is active. Persisted as `1`/`0`.
    pub status: bool,
    pub info: String,
}

impl Node {
    /// Returns a node with every field at its blank default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use taskedit::libs::node::{Node, UNASSIGNED_ID};
    ///
    /// let node = Node::blank();
    /// assert_eq!(node.id, UNASSIGNED_ID);
    /// assert!(node.status);
    /// ```
    pub fn blank() -> Self {
        Node {
            id: UNASSIGNED_ID,
            note: String::new(),
            file: String::new(),
            priority: 0,
            status: true,
            info: String::new(),
        }
    }

    /// Blank node carrying a given id.
    pub fn with_id(id: i64) -> Self {
        Node { id, ..Node::blank() }
    }

    /// Overwrites the fields present in `update`, leaving the rest unchanged.
    pub fn apply(&mut self, update: &NodeUpdate) {
        if let Some(note) = &update.note {
            self.note = note.clone();
        }
        if let Some(file) = &update.file {
            self.file = file.clone();
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(info) = &update.info {
            self.info = info.clone();
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::blank()
    }
}

/// A partial set of field values for [`Store::update`](crate::libs::store::Store::update).
///
/// Unset fields are left untouched. The id is never part of an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeUpdate {
    pub note: Option<String>,
    pub file: Option<String>,
    pub priority: Option<i64>,
    pub status: Option<bool>,
    pub info: Option<String>,
}

impl NodeUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn status(mut self, status: bool) -> Self {
        self.status = Some(status);
        self
    }

    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self == &NodeUpdate::default()
    }
}
