use std::fs;

use iconforge_engine::{ensure_output_dir, write_atomic};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing_content() {
    let temp = TempDir::new().unwrap();

    let first = write_atomic(temp.path(), "icon-pack.ts", "hello").unwrap();
    assert_eq!(first.file_name().unwrap(), "icon-pack.ts");
    assert_eq!(fs::read_to_string(&first).unwrap(), "hello");

    let second = write_atomic(temp.path(), "icon-pack.ts", "world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "world");
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let result = write_atomic(&file_path, "icon-pack.ts", "data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("icon-pack.ts").exists());
}
