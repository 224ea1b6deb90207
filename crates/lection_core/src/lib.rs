//! Data access for lections: numbered vocabulary lists stored one SQLite
//! table per lection.

pub mod alloc;
pub mod db;
pub mod logging;
pub mod model;
pub mod naming;
pub mod repo;
pub mod store;

pub use alloc::next_entry_id;
pub use db::{DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{Entry, EntryId, LectionNumber, NewEntry};
pub use naming::{extract_lection_numbers, lection_table_name, NamingError, NamingResult};
pub use repo::lection_repo::{
    LectionRepository, RepoError, RepoResult, SqliteLectionRepository,
};
pub use store::LectionStore;

/// Minimal health-check API for linkage probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
