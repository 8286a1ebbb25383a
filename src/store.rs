//! Read-only adapter over the bookmark store, a SQLite database owned by the
//! host bookmarking application.

use std::path::{Path, PathBuf};

use rusqlite::types::ToSqlOutput;
use rusqlite::{Connection, OpenFlags, ToSql};
use serde::Serialize;
use thiserror::Error;

use crate::compile::{CompiledQuery, Param};

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing database file does not exist. Surfaced to the user as
    /// "host application is not installed", distinct from a query failure.
    #[error("bookmark store not found at {0}")]
    NotFound(PathBuf),

    /// Statement execution failed. Given the fixed schema this implies a
    /// compiler defect or a schema change in the host application, so it is
    /// non-retryable; the detail is logged, never shown to the user.
    #[error("store query failed: {0}")]
    Query(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Query(err.to_string())
    }
}

/// A bookmark row as returned by the store. Immutable; only ever built from
/// query results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
    pub identifier: String,
    pub date: i64,
}

impl ToSql for Param {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Param::Text(s) => Ok(ToSqlOutput::from(s.as_str())),
            Param::Bool(b) => Ok(ToSqlOutput::from(*b)),
        }
    }
}

/// Scoped handle on the store: opened once per invocation, dropped on every
/// exit path.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the store at `path`, read-only.
    ///
    /// Existence is probed explicitly first: SQLite happily creates an empty
    /// database on open, which would mask "not installed" as zero results.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        log::debug!("opened bookmark store at {}", path.display());
        Ok(Self { conn })
    }

    /// Execute a compiled query and map the rows to bookmarks, in the order
    /// the statement produced them (creation time, newest first).
    pub fn search(&self, query: &CompiledQuery) -> Result<Vec<Bookmark>, StoreError> {
        let mut stmt = self.conn.prepare(&query.sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(query.params.iter()), |row| {
            Ok(Bookmark {
                title: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
                url: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                identifier: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                date: row.get::<_, Option<i64>>(3)?.unwrap_or_default(),
            })
        })?;

        let mut bookmarks = Vec::new();
        for bookmark in rows {
            bookmarks.push(bookmark?);
        }
        log::debug!("query matched {} bookmarks", bookmarks.len());
        Ok(bookmarks)
    }
}
