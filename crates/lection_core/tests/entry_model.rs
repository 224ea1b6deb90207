use lection_core::{Entry, NewEntry};
use serde_json::json;

#[test]
fn entry_serializes_with_column_names() {
    let entry = NewEntry::new("rosa", "ros", "Rose").with_id(1);

    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(
        value,
        json!({ "id": 1, "latin": "rosa", "steam": "ros", "german": "Rose" })
    );
}

#[test]
fn entry_deserializes_from_column_names() {
    let entry: Entry = serde_json::from_str(
        r#"{ "id": 4, "latin": "puella", "steam": "puell", "german": "Mädchen" }"#,
    )
    .unwrap();

    assert_eq!(entry.id, 4);
    assert_eq!(entry.german, "Mädchen");
}

#[test]
fn new_entry_rejects_missing_field() {
    let result = serde_json::from_str::<NewEntry>(r#"{ "latin": "via", "steam": "vi" }"#);

    assert!(result.is_err());
}
