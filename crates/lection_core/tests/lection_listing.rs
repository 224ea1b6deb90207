use lection_core::{LectionStore, NamingError, RepoError};

#[test]
fn lists_every_lection_table() {
    let store = LectionStore::open_in_memory().unwrap();
    create_tables(&store, &["lection_1", "lection_7", "lection_12"]);

    let mut lections = store.list_lections().unwrap();
    lections.sort_unstable();

    assert_eq!(lections, vec![1, 7, 12]);
}

#[test]
fn lections_keep_catalog_order() {
    let store = LectionStore::open_in_memory().unwrap();
    create_tables(&store, &["lection_12", "lection_1", "lection_7"]);

    assert_eq!(store.list_lections().unwrap(), vec![12, 1, 7]);
}

#[test]
fn empty_database_has_no_lections() {
    let store = LectionStore::open_in_memory().unwrap();

    assert!(store.list_lections().unwrap().is_empty());
}

#[test]
fn views_and_indexes_are_not_lections() {
    let store = LectionStore::open_in_memory().unwrap();
    create_tables(&store, &["lection_2"]);
    store
        .connection()
        .execute_batch(
            "CREATE INDEX lection_2_latin ON lection_2 (latin);
             CREATE VIEW all_words AS SELECT latin FROM lection_2;",
        )
        .unwrap();

    assert_eq!(store.list_lections().unwrap(), vec![2]);
}

#[test]
fn table_without_number_fails_whole_listing() {
    let store = LectionStore::open_in_memory().unwrap();
    create_tables(&store, &["lection_1", "settings", "lection_2"]);

    let err = store.list_lections().unwrap_err();

    match err {
        RepoError::Naming(NamingError::MissingNumber(name)) => assert_eq!(name, "settings"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn listed_lections_are_readable() {
    let store = LectionStore::open_in_memory().unwrap();
    create_tables(&store, &["lection_4", "lection_9"]);
    store.add_entry(9, "bellum", "bell", "Krieg").unwrap();

    for lection in store.list_lections().unwrap() {
        let entries = store.get_entries(lection).unwrap();
        assert_eq!(entries.len(), usize::from(lection == 9));
    }
}

fn create_tables(store: &LectionStore, names: &[&str]) {
    for name in names {
        store
            .connection()
            .execute_batch(&format!(
                "CREATE TABLE {name} (
                    id INTEGER PRIMARY KEY,
                    latin TEXT NOT NULL,
                    steam TEXT NOT NULL,
                    german TEXT NOT NULL
                );"
            ))
            .unwrap();
    }
}
