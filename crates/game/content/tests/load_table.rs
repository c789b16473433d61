//! File-level loading of reference tables.

use std::io::Write;

use monster_content::{BUNDLED_TABLE, TablesLoader};
use monster_core::TableError;

#[test]
fn loads_a_table_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(BUNDLED_TABLE.as_bytes()).expect("write table");

    let table = TablesLoader::load(file.path()).expect("table should load");
    assert_eq!(table.tier_names(), "Novice, Veteran, Heroic, Legendary");
}

#[test]
fn missing_file_reports_the_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("stats.json");

    let err = TablesLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("stats.json"), "{err}");
}

#[test]
fn malformed_file_keeps_the_table_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(br#"[{"tier": "Novice"}]"#).expect("write table");

    let err = TablesLoader::load(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Failed to load reference table"));
    assert!(matches!(
        err.downcast_ref::<TableError>(),
        Some(TableError::Malformed { .. })
    ));
}
