//! Filtering and sorting over a snapshot of nodes.
//!
//! These functions never touch the store: they take a slice (usually from
//! [`Store::list`](crate::libs::store::Store::list)) and return new vectors.

use super::field::Field;
use super::node::Node;

/// Keeps nodes whose `field`, in string form, contains `query`.
///
/// Matching is a case-sensitive substring test. An empty query means no
/// filtering and returns every node.
pub fn filter(nodes: &[Node], field: Field, query: &str) -> Vec<Node> {
    if query.is_empty() {
        return nodes.to_vec();
    }
    nodes
        .iter()
        .filter(|node| field.value_of(node).to_string().contains(query))
        .cloned()
        .collect()
}

/// Stable sort by the natural ordering of `field`.
pub fn sort(nodes: &[Node], field: Field) -> Vec<Node> {
    let mut sorted = nodes.to_vec();
    sorted.sort_by(|a, b| field.compare(a, b));
    sorted
}

/// Filters by `query`, then sorts by the same field.
pub fn view(nodes: &[Node], field: Field, query: &str) -> Vec<Node> {
    sort(&filter(nodes, field, query), field)
}
