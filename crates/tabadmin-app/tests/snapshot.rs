//! Schema snapshot loading tests.

use std::fs;

use tabadmin_app::{AppError, SchemaSnapshot};

#[test]
fn loads_snapshot_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("schema.yaml");
    fs::write(
        &path,
        "tables:\n  - name: orders\n    columns:\n      - name: id\n        column_type: integer\n",
    )
    .expect("write snapshot");

    let snapshot = SchemaSnapshot::load(&path).expect("load");
    assert_eq!(snapshot.tables.len(), 1);
    assert_eq!(snapshot.tables[0].name, "orders");
}

#[test]
fn missing_snapshot_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let error = SchemaSnapshot::load(&dir.path().join("nope.yaml")).expect_err("missing");
    assert!(matches!(error, AppError::Snapshot(_)));
}
