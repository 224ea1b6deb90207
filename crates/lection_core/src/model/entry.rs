//! Vocabulary entry model.
//!
//! # Invariants
//! - `id` is a positive integer assigned by the gap allocator on insert.
//! - Text fields are stored as given; no trimming or case folding.

use serde::{Deserialize, Serialize};

/// Number of a lection; the `N` in table name `lection_<N>`.
pub type LectionNumber = u32;

/// Identifier of an entry inside its lection table.
pub type EntryId = i64;

/// One persisted vocabulary row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    /// Source word.
    pub latin: String,
    /// Word stem.
    pub steam: String,
    /// Translation.
    pub german: String,
}

/// Entry fields supplied by callers before an id has been allocated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    pub latin: String,
    pub steam: String,
    pub german: String,
}

impl NewEntry {
    pub fn new(
        latin: impl Into<String>,
        steam: impl Into<String>,
        german: impl Into<String>,
    ) -> Self {
        Self {
            latin: latin.into(),
            steam: steam.into(),
            german: german.into(),
        }
    }

    /// Attaches an allocated id, producing the persisted shape.
    pub fn with_id(self, id: EntryId) -> Entry {
        Entry {
            id,
            latin: self.latin,
            steam: self.steam,
            german: self.german,
        }
    }
}
