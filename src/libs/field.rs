//! Fixed field table used to filter and sort nodes.
//!
//! Callers select a field by name (a token such as `priority` or a display
//! label such as `Priority`). The table maps each name to a [`Field`], and
//! each field to its comparison kind and accessor. Names outside the table
//! are rejected with [`NodeError::Configuration`].

use super::error::{NodeError, NodeResult};
use super::node::Node;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Field {
    #[default]
    Id,
    Note,
    File,
    Priority,
    Status,
    Info,
}

/// How values of a field compare against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Text,
    Boolean,
}

/// A borrowed field value taken from a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Integer(i64),
    Text(&'a str),
    Boolean(bool),
}

/// (token, display label, field, kind)
static FIELD_TABLE: [(&str, &str, Field, FieldKind); 6] = [
    ("id", "Id", Field::Id, FieldKind::Integer),
    ("note", "Note", Field::Note, FieldKind::Text),
    ("file", "File", Field::File, FieldKind::Text),
    ("priority", "Priority", Field::Priority, FieldKind::Integer),
    ("status", "State", Field::Status, FieldKind::Boolean),
    ("info", "Info", Field::Info, FieldKind::Text),
];

impl Field {
    pub const ALL: [Field; 6] = [Field::Id, Field::Note, Field::File, Field::Priority, Field::Status, Field::Info];

    fn entry(self) -> &'static (&'static str, &'static str, Field, FieldKind) {
        // FIELD_TABLE is declared in the same order as `Field`.
        &FIELD_TABLE[self as usize]
    }

    /// Lowercase selector token, e.g. `priority`.
    pub fn token(self) -> &'static str {
        self.entry().0
    }

    /// Label shown by a presentation layer, e.g. `State`.
    pub fn label(self) -> &'static str {
        self.entry().1
    }

    pub fn kind(self) -> FieldKind {
        self.entry().3
    }

    /// Reads this field from a node.
    pub fn value_of(self, node: &Node) -> FieldValue<'_> {
        match self {
            Field::Id => FieldValue::Integer(node.id),
            Field::Note => FieldValue::Text(&node.note),
            Field::File => FieldValue::Text(&node.file),
            Field::Priority => FieldValue::Integer(node.priority),
            Field::Status => FieldValue::Boolean(node.status),
            Field::Info => FieldValue::Text(&node.info),
        }
    }

    /// Natural ordering of two nodes on this field.
    pub fn compare(self, a: &Node, b: &Node) -> Ordering {
        self.value_of(a).cmp(&self.value_of(b))
    }

    /// Parses a selector, returning [`NodeError::Configuration`] for unknown names.
    pub fn parse(name: &str) -> NodeResult<Field> {
        if name == "node_id" {
            return Ok(Field::Id);
        }
        FIELD_TABLE
            .iter()
            .find(|(token, label, _, _)| *token == name || *label == name)
            .map(|(_, _, field, _)| *field)
            .ok_or_else(|| NodeError::Configuration(name.to_string()))
    }
}

impl FromStr for Field {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::parse(s)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FieldValue<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Integer(_) => FieldKind::Integer,
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Boolean(_) => FieldKind::Boolean,
        }
    }
}

impl PartialOrd for FieldValue<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FieldValue<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => a.cmp(b),
            // Values of one field always share a kind; order mixed kinds by kind.
            (a, b) => (a.kind() as u8).cmp(&(b.kind() as u8)),
        }
    }
}

/// String form used by substring filtering. Status renders as `1`/`0`.
impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::Text(value) => f.write_str(value),
            FieldValue::Boolean(value) => f.write_str(if *value { "1" } else { "0" }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tokens_and_labels() {
        assert_eq!(Field::parse("priority").unwrap(), Field::Priority);
        assert_eq!(Field::parse("State").unwrap(), Field::Status);
        assert_eq!(Field::parse("node_id").unwrap(), Field::Id);
        assert_eq!("info".parse::<Field>().unwrap(), Field::Info);
    }

    #[test]
    fn rejects_unknown_selector() {
        match Field::parse("deadline") {
            Err(NodeError::Configuration(name)) => assert_eq!(name, "deadline"),
            other => panic!("unexpected result: {:?}", other),
        }
        // Selectors are case-sensitive.
        assert!(Field::parse("PRIORITY").is_err());
    }

    #[test]
    fn table_order_matches_enum() {
        for field in Field::ALL {
            assert_eq!(Field::parse(field.token()).unwrap(), field);
            assert_eq!(Field::parse(field.label()).unwrap(), field);
        }
    }

    #[test]
    fn status_string_form_is_numeric() {
        let mut node = Node::blank();
        assert_eq!(Field::Status.value_of(&node).to_string(), "1");
        node.status = false;
        assert_eq!(Field::Status.value_of(&node).to_string(), "0");
        assert!(FieldValue::Boolean(false) < FieldValue::Boolean(true));
    }
}
