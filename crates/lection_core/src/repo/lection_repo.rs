//! Lection repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Enumerate lection tables from the SQLite catalog.
//! - Read, insert and delete entries of one lection table.
//!
//! # Invariants
//! - Inserts take the id from `alloc::next_entry_id` inside the same
//!   transaction that writes the row.
//! - Deleting an id that does not exist is not an error.
//! - Storage errors (for example `no such table`) pass through unchanged.
//! - A NULL id or text cell in a lection row is reported as `InvalidData`.

use crate::alloc::next_entry_id;
use crate::db::DbError;
use crate::model::entry::{Entry, EntryId, LectionNumber, NewEntry};
use crate::naming::{extract_lection_numbers, lection_table_name, NamingError};
use log::{error, info};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const CATALOG_TABLES_SQL: &str = "SELECT name FROM sqlite_master WHERE type = 'table';";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for lection listing and entry operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Naming(NamingError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Naming(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted entry data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Naming(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<NamingError> for RepoError {
    fn from(value: NamingError) -> Self {
        Self::Naming(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for lection enumeration and entry CRUD.
pub trait LectionRepository {
    fn list_lections(&self) -> RepoResult<Vec<LectionNumber>>;
    fn get_entries(&self, lection: LectionNumber) -> RepoResult<Vec<Entry>>;
    fn add_entry(&self, lection: LectionNumber, entry: &NewEntry) -> RepoResult<EntryId>;
    fn delete_entry(&self, lection: LectionNumber, id: EntryId) -> RepoResult<()>;
}

/// SQLite-backed lection repository.
pub struct SqliteLectionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLectionRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl LectionRepository for SqliteLectionRepository<'_> {
    fn list_lections(&self) -> RepoResult<Vec<LectionNumber>> {
        let mut stmt = self.conn.prepare(CATALOG_TABLES_SQL)?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        match extract_lection_numbers(&names) {
            Ok(numbers) => {
                info!(
                    "event=lection_list module=repo status=ok count={}",
                    numbers.len()
                );
                Ok(numbers)
            }
            Err(err) => {
                error!(
                    "event=lection_list module=repo status=error error_code=bad_table_name error={}",
                    err
                );
                Err(err.into())
            }
        }
    }

    fn get_entries(&self, lection: LectionNumber) -> RepoResult<Vec<Entry>> {
        let table = lection_table_name(lection);
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, latin, steam, german FROM {table} ORDER BY id ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row, &table)?);
        }

        Ok(entries)
    }

    fn add_entry(&self, lection: LectionNumber, entry: &NewEntry) -> RepoResult<EntryId> {
        let started_at = Instant::now();
        let table = lection_table_name(lection);

        let tx = self.conn.unchecked_transaction()?;
        let id = {
            let mut stmt = tx.prepare(&format!(
                "SELECT id FROM {table} WHERE id IS NOT NULL ORDER BY id ASC;"
            ))?;
            let ids = stmt
                .query_map([], |row| row.get::<_, EntryId>(0))?
                .collect::<Result<Vec<_>, _>>()?;
            next_entry_id(ids)
        };

        tx.execute(
            &format!("INSERT INTO {table} (id, latin, steam, german) VALUES (?1, ?2, ?3, ?4);"),
            params![id, entry.latin, entry.steam, entry.german],
        )?;
        tx.commit()?;

        info!(
            "event=entry_add module=repo status=ok lection={} id={} duration_ms={}",
            lection,
            id,
            started_at.elapsed().as_millis()
        );
        Ok(id)
    }

    fn delete_entry(&self, lection: LectionNumber, id: EntryId) -> RepoResult<()> {
        let table = lection_table_name(lection);
        let changed = self
            .conn
            .execute(&format!("DELETE FROM {table} WHERE id = ?1;"), [id])?;

        info!(
            "event=entry_delete module=repo status=ok lection={} id={} changed={}",
            lection, id, changed
        );
        Ok(())
    }
}

fn parse_entry_row(row: &Row<'_>, table: &str) -> RepoResult<Entry> {
    let id = row
        .get::<_, Option<EntryId>>("id")?
        .ok_or_else(|| RepoError::InvalidData(format!("null id in {table}.id")))?;

    Ok(Entry {
        id,
        latin: required_text(row, "latin", table)?,
        steam: required_text(row, "steam", table)?,
        german: required_text(row, "german", table)?,
    })
}

fn required_text(row: &Row<'_>, column: &str, table: &str) -> RepoResult<String> {
    row.get::<_, Option<String>>(column)?
        .ok_or_else(|| RepoError::InvalidData(format!("null value in {table}.{column}")))
}
