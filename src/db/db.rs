use crate::libs::error::{NodeError, NodeResult};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// SQLite connection to a single `.task` file.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens `path` for writing, creating the file when it does not exist.
    pub fn open(path: &Path) -> NodeResult<Db> {
        let conn = Connection::open(path)?;

        Ok(Db { conn })
    }

    /// Opens an existing file read-only. Never creates anything on disk.
    pub fn open_existing(path: &Path) -> NodeResult<Db> {
        if !path.exists() {
            return Err(NodeError::FileNotFound(path.to_path_buf()));
        }
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX)?;

        Ok(Db { conn })
    }

    /// Closes the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> NodeResult<()> {
        self.conn.close().map_err(|(_, error)| NodeError::Sqlite(error))
    }
}
