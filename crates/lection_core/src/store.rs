//! Owned connection handle exposing every lection operation.
//!
//! # Responsibility
//! - Hold exactly one SQLite connection for a caller.
//! - Replace that connection when the caller switches database files.
//! - Forward lection operations to `SqliteLectionRepository`.
//!
//! # Invariants
//! - A failed switch leaves the previous connection in place.
//! - The connection is released on `close` or when the store is dropped.

use crate::db::{open_db, open_db_in_memory, DbError, DbResult};
use crate::model::entry::{Entry, EntryId, LectionNumber, NewEntry};
use crate::repo::lection_repo::{LectionRepository, RepoResult, SqliteLectionRepository};
use log::{info, warn};
use rusqlite::Connection;
use std::path::Path;

/// Single-user access point to one lection database.
pub struct LectionStore {
    conn: Connection,
}

impl LectionStore {
    /// Opens the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Wraps an already configured connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Points this store at another database file.
    ///
    /// The new file is opened before the current connection is closed, so an
    /// error here leaves the store usable against the old database.
    pub fn switch_database(&mut self, path: impl AsRef<Path>) -> DbResult<()> {
        let previous = std::mem::replace(&mut self.conn, open_db(path)?);
        if let Err((_, err)) = previous.close() {
            warn!(
                "event=db_close module=store status=error error_code=db_close_failed error={}",
                err
            );
        }
        Ok(())
    }

    /// Closes the connection and reports any close failure.
    pub fn close(self) -> DbResult<()> {
        self.conn.close().map_err(|(_, err)| DbError::Sqlite(err))?;
        info!("event=db_close module=store status=ok");
        Ok(())
    }

    /// Underlying connection, for callers that manage lection tables themselves.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn repo(&self) -> SqliteLectionRepository<'_> {
        SqliteLectionRepository::new(&self.conn)
    }

    /// Lection numbers found in the catalog, in catalog order.
    pub fn list_lections(&self) -> RepoResult<Vec<LectionNumber>> {
        self.repo().list_lections()
    }

    pub fn get_entries(&self, lection: LectionNumber) -> RepoResult<Vec<Entry>> {
        self.repo().get_entries(lection)
    }

    /// Inserts an entry under the lowest free id and returns that id.
    pub fn add_entry(
        &self,
        lection: LectionNumber,
        latin: impl Into<String>,
        steam: impl Into<String>,
        german: impl Into<String>,
    ) -> RepoResult<EntryId> {
        self.repo()
            .add_entry(lection, &NewEntry::new(latin, steam, german))
    }

    pub fn delete_entry(&self, lection: LectionNumber, id: EntryId) -> RepoResult<()> {
        self.repo().delete_entry(lection, id)
    }
}
