//! Domain model for lections and their vocabulary entries.
//!
//! # Responsibility
//! - Define the record shapes read from and written to lection tables.
//!
//! # Invariants
//! - An `EntryId` is unique within one lection only, never globally.
//! - Entries are created and deleted, never updated in place.

pub mod entry;
