use std::fs;

use tempfile::TempDir;

use super::*;

fn store_in(dir: &TempDir) -> SessionFileStorage {
    SessionFileStorage::open(dir.path().join("sessions").join("42.json"))
}

#[test]
fn test_session_path_is_under_cache_dir() {
    let Some(path) = session_path("1234") else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(path_str.contains("kwsuggest"));
    assert!(path_str.ends_with("1234.json"));
}

#[test]
fn test_sanitize_session_id_replaces_separators() {
    assert_eq!(sanitize_session_id("../etc/passwd"), "___etc_passwd");
    assert_eq!(sanitize_session_id("tty-3_a"), "tty-3_a");
    assert_eq!(sanitize_session_id(""), "default");
}

#[test]
fn test_open_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let storage = store_in(&dir);
    assert_eq!(storage.get_item("anything"), None);
}

#[test]
fn test_set_item_creates_parent_dirs_and_persists() {
    let dir = TempDir::new().unwrap();
    let mut storage = store_in(&dir);
    storage.set_item("recent", "[]").unwrap();

    assert!(storage.path().exists());

    let reopened = store_in(&dir);
    assert_eq!(reopened.get_item("recent").as_deref(), Some("[]"));
}

#[test]
fn test_set_item_keeps_other_keys() {
    let dir = TempDir::new().unwrap();
    let mut storage = store_in(&dir);
    storage.set_item("a", "1").unwrap();
    storage.set_item("b", "2").unwrap();

    let reopened = store_in(&dir);
    assert_eq!(reopened.get_item("a").as_deref(), Some("1"));
    assert_eq!(reopened.get_item("b").as_deref(), Some("2"));
}

#[test]
fn test_corrupt_file_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{not json").unwrap();

    let mut storage = SessionFileStorage::open(path.clone());
    assert_eq!(storage.get_item("recent"), None);

    // The next write heals the file.
    storage.set_item("recent", "[]").unwrap();
    let reopened = SessionFileStorage::open(path);
    assert_eq!(reopened.get_item("recent").as_deref(), Some("[]"));
}

#[test]
fn test_clear_removes_file() {
    let dir = TempDir::new().unwrap();
    let mut storage = store_in(&dir);
    storage.set_item("recent", "[]").unwrap();

    storage.clear().unwrap();
    assert!(!storage.path().exists());
    assert_eq!(storage.get_item("recent"), None);

    // Clearing twice is fine.
    storage.clear().unwrap();
}
