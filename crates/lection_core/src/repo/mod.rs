//! Repository layer over per-lection SQLite tables.
//!
//! # Responsibility
//! - Define the lection data access contract.
//! - Keep SQL and table naming details out of callers.
//!
//! # Invariants
//! - Table names are only ever built from typed lection numbers.
//! - Row values are always bound as parameters.

pub mod lection_repo;
