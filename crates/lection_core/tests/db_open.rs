use lection_core::db::{open_db, DbError};
use lection_core::LectionStore;
use std::path::Path;

#[test]
fn entries_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.db");

    let store = LectionStore::open(&path).unwrap();
    create_lection(&store, 1);
    let id = store.add_entry(1, "rosa", "ros", "Rose").unwrap();
    store.close().unwrap();

    let reopened = LectionStore::open(&path).unwrap();
    let entries = reopened.get_entries(1).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, id);
    assert_eq!(entries[0].german, "Rose");
}

#[test]
fn opening_inside_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("demo.db");

    assert!(matches!(open_db(&path), Err(DbError::Sqlite(_))));
    assert!(LectionStore::open(&path).is_err());
}

#[test]
fn switching_database_replaces_connection() {
    let dir = tempfile::tempdir().unwrap();
    let first_path = dir.path().join("first.db");
    let second_path = dir.path().join("second.db");
    seed(&first_path, 1);
    seed(&second_path, 2);

    let mut store = LectionStore::open(&first_path).unwrap();
    assert_eq!(store.list_lections().unwrap(), vec![1]);

    store.switch_database(&second_path).unwrap();
    assert_eq!(store.list_lections().unwrap(), vec![2]);
}

#[test]
fn failed_switch_keeps_previous_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("first.db");
    seed(&path, 3);

    let mut store = LectionStore::open(&path).unwrap();
    let err = store
        .switch_database(dir.path().join("missing").join("other.db"))
        .unwrap_err();
    assert!(matches!(err, DbError::Sqlite(_)));

    assert_eq!(store.list_lections().unwrap(), vec![3]);
}

fn seed(path: &Path, lection: u32) {
    let store = LectionStore::open(path).unwrap();
    create_lection(&store, lection);
    store.close().unwrap();
}

fn create_lection(store: &LectionStore, lection: u32) {
    store
        .connection()
        .execute_batch(&format!(
            "CREATE TABLE lection_{lection} (
                id INTEGER PRIMARY KEY,
                latin TEXT NOT NULL,
                steam TEXT NOT NULL,
                german TEXT NOT NULL
            );"
        ))
        .unwrap();
}
