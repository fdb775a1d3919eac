//! `.task` file codec.
//!
//! A task file is a SQLite database holding one table:
//!
//! ```text
//! tasks(node_id INTEGER PRIMARY KEY, note TEXT, file TEXT,
//!       priority INTEGER, status INTEGER, info TEXT)
//! ```
//!
//! The primary key column is named `node_id` on disk and maps to
//! [`Node::id`]. Values are always bound as statement parameters, so quotes
//! and any other characters in text fields round-trip unchanged.
//!
//! Saving never writes the target in place: any existing file is copied to a
//! temporary file next to it, the rows are written there in one transaction,
//! and the copy is renamed over the target. If anything fails the original
//! file stays as it was.

use super::db::Db;
use crate::libs::error::{NodeError, NodeResult};
use crate::libs::node::Node;
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, Row};
use std::fs;
use std::path::Path;
use tracing::debug;

pub const TASKS_TABLE: &str = "tasks";

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    node_id INTEGER PRIMARY KEY,
    note TEXT,
    file TEXT,
    priority INTEGER,
    status INTEGER,
    info TEXT
)";
const INSERT_OR_REPLACE_TASK: &str =
    "INSERT OR REPLACE INTO tasks (node_id, note, file, priority, status, info) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const DELETE_ALL_TASKS: &str = "DELETE FROM tasks";
const SELECT_TASKS: &str = "SELECT node_id, note, file, priority, status, info FROM tasks ORDER BY node_id";
const SELECT_TABLE_EXISTS: &str = "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1";

/// How a save treats rows already present in the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveMode {
    /// Insert or replace every node; rows for ids not in memory are kept.
    #[default]
    Merge,
    /// Make the file hold exactly the nodes in memory.
    Prune,
}

pub struct Tasks;

impl Tasks {
    /// Writes `nodes` to the task file at `path`.
    pub fn save(path: &Path, nodes: &[Node], mode: SaveMode) -> NodeResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let staging = tempfile::Builder::new().prefix(".taskedit-").suffix(".tmp").tempfile_in(dir)?;
        if path.exists() {
            // Copies the target's permissions along with its rows.
            fs::copy(path, staging.path())?;
        } else {
            set_new_file_permissions(staging.as_file())?;
        }

        let mut db = Db::open(staging.path())?;
        Self::write(&mut db.conn, nodes, mode)?;
        db.close()?;

        staging.persist(path).map_err(|error| NodeError::Io(error.error))?;
        debug!(path = %path.display(), count = nodes.len(), ?mode, "task file saved");

        Ok(())
    }

    /// Reads every row of the task file at `path`.
    pub fn load(path: &Path) -> NodeResult<Vec<Node>> {
        let db = Db::open_existing(path)?;

        let table_count: i64 = db
            .conn
            .query_row(SELECT_TABLE_EXISTS, params![TASKS_TABLE], |row| row.get(0))
            .map_err(|error| NodeError::FileFormat(format!("{}: {}", path.display(), error)))?;
        if table_count == 0 {
            return Err(NodeError::FileFormat(format!("{}: no '{}' table", path.display(), TASKS_TABLE)));
        }

        let mut stmt = db
            .conn
            .prepare(SELECT_TASKS)
            .map_err(|error| NodeError::FileFormat(format!("{}: {}", path.display(), error)))?;
        let node_iter = stmt.query_map([], Self::read_row)?;

        let mut nodes = Vec::new();
        for node in node_iter {
            nodes.push(node?);
        }
        debug!(path = %path.display(), count = nodes.len(), "task file loaded");

        Ok(nodes)
    }

    fn write(conn: &mut Connection, nodes: &[Node], mode: SaveMode) -> NodeResult<()> {
        let tx = conn.transaction()?;
        tx.execute(SCHEMA_TASKS, [])?;
        if mode == SaveMode::Prune {
            tx.execute(DELETE_ALL_TASKS, [])?;
        }
        {
            let mut stmt = tx.prepare(INSERT_OR_REPLACE_TASK)?;
            for node in nodes {
                stmt.execute(params![node.id, node.note, node.file, node.priority, node.status as i64, node.info])?;
            }
        }
        tx.commit()?;

        Ok(())
    }

    fn read_row(row: &Row<'_>) -> rusqlite::Result<Node> {
        Ok(Node {
            id: row.get(0)?,
            note: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            file: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            priority: integer_column(row, 3)?.unwrap_or(0),
            status: integer_column(row, 4)?.map_or(true, |status| status != 0),
            info: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        })
    }
}

/// Staging files are created owner-only; a brand new task file gets the
/// usual `rw-r--r--` instead.
#[cfg(unix)]
fn set_new_file_permissions(file: &fs::File) -> NodeResult<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_new_file_permissions(_file: &fs::File) -> NodeResult<()> {
    Ok(())
}

/// Reads an INTEGER column leniently: SQLite columns are loosely typed and
/// files written by other tools may hold numbers as REAL or TEXT. A REAL
/// is accepted only when it is a whole number that fits in an `i64`.
fn integer_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<i64>> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(None),
        ValueRef::Integer(value) => Ok(Some(value)),
        ValueRef::Real(value) if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 => {
            Ok(Some(value as i64))
        }
        ValueRef::Real(_) => Err(rusqlite::Error::InvalidColumnType(idx, "integer".to_string(), rusqlite::types::Type::Real)),
        ValueRef::Text(text) => std::str::from_utf8(text)
            .ok()
            .and_then(|text| text.trim().parse::<i64>().ok())
            .map(Some)
            .ok_or(rusqlite::Error::InvalidColumnType(idx, "integer".to_string(), rusqlite::types::Type::Text)),
        ValueRef::Blob(_) => Err(rusqlite::Error::InvalidColumnType(idx, "integer".to_string(), rusqlite::types::Type::Blob)),
    }
}
