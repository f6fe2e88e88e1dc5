use std::fs;

use serde::{Deserialize, Serialize};
use tempfile::TempDir;
use translate_engine::{ensure_dir, load_ron, save_ron, AtomicFileWriter, PersistError};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Sample {
    name: String,
    count: u32,
}

#[test]
fn creates_missing_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("a").join("b");
    assert!(!new_dir.exists());
    ensure_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path());

    let first = writer.write("settings.ron", "hello").unwrap();
    assert_eq!(fs::read_to_string(&first).unwrap(), "hello");

    let second = writer.write("settings.ron", "world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "world");
}

#[test]
fn writing_into_a_file_path_fails_cleanly() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    assert!(matches!(writer.write("doc.ron", "data"), Err(PersistError::Dir(_))));
    assert!(!file_path.with_file_name("doc.ron").exists());
}

#[test]
fn ron_values_round_trip_and_missing_is_none() {
    let temp = TempDir::new().unwrap();
    let missing: Option<Sample> = load_ron(temp.path(), "sample.ron").unwrap();
    assert!(missing.is_none());

    let sample = Sample {
        name: "translate".to_string(),
        count: 2,
    };
    save_ron(temp.path(), "sample.ron", &sample).unwrap();
    let loaded: Option<Sample> = load_ron(temp.path(), "sample.ron").unwrap();
    assert_eq!(loaded, Some(sample));
}

#[test]
fn unparsable_ron_is_a_parse_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("sample.ron"), "(name: 3").unwrap();
    let result: Result<Option<Sample>, _> = load_ron(temp.path(), "sample.ron");
    assert!(matches!(result, Err(PersistError::Parse { .. })));
}
