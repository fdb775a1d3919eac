use super::field::Field;
use super::node::Node;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn nodes(nodes: &[Node]) {
        let mut table = Table::new();

        table.add_row(row![
            Field::Id.label(),
            Field::Priority.label(),
            Field::Status.label(),
            Field::Note.label(),
            Field::File.label(),
            Field::Info.label()
        ]);
        for node in nodes {
            let status = status_label(node.status);
            table.add_row(row![
                node.id,
                node.priority,
                status,
                node.note,
                node.file,
                node.info
            ]);
        }
        table.printstd();
    }

    /// Full field listing for a single node.
    pub fn node(node: &Node) {
        let mut table = Table::new();
        let status = status_label(node.status);

        table.add_row(row![Field::Id.label(), node.id]);
        table.add_row(row![Field::Note.label(), node.note]);
        table.add_row(row![Field::File.label(), node.file]);
        table.add_row(row![Field::Priority.label(), node.priority]);
        table.add_row(row![Field::Status.label(), status]);
        table.add_row(row![Field::Info.label(), node.info]);
        table.printstd();
    }
}

fn status_label(status: bool) -> &'static str {
    if status {
        "active"
    } else {
        "inactive"
    }
}
