//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `lection_core` linkage against a real database file.
//! - Print each discovered lection with its entry count.
//!
//! Database path: first argument, else `LECTIONS_DB_PATH`, else
//! `data/demo.db`. File logging starts only when `LECTIONS_LOG_DIR` is set.

use lection_core::{default_log_level, init_logging, LectionStore, RepoError};
use log::error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const DEFAULT_DB_PATH: &str = "data/demo.db";

fn main() -> ExitCode {
    if let Err(message) = init_logging_from_env() {
        eprintln!("logging disabled: {message}");
    }

    println!("lection_core version={}", lection_core::core_version());

    let db_path = resolve_db_path(std::env::args().nth(1), non_empty_env("LECTIONS_DB_PATH"));
    match probe(&db_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_probe module=cli status=error error={err}");
            eprintln!("{}: {err}", db_path.display());
            ExitCode::FAILURE
        }
    }
}

fn probe(db_path: &Path) -> Result<(), RepoError> {
    let store = LectionStore::open(db_path)?;
    for lection in store.list_lections()? {
        let entries = store.get_entries(lection)?;
        println!("lection {lection}: {} entries", entries.len());
    }
    store.close()?;
    Ok(())
}

fn resolve_db_path(arg: Option<String>, env_path: Option<String>) -> PathBuf {
    arg.or(env_path)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH))
}

fn init_logging_from_env() -> Result<(), String> {
    let Some(log_dir) = non_empty_env("LECTIONS_LOG_DIR") else {
        return Ok(());
    };
    let level = non_empty_env("LECTIONS_LOG_LEVEL").unwrap_or_else(|| default_log_level().into());
    init_logging(&level, &log_dir)
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}
