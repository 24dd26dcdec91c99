use forkify::{FileStorage, ForkifyError, KeyValueStorage, LikedRecipesStore, LIKES_STORAGE_KEY};
use std::fs;

#[test]
fn test_missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("storage.json"));

    assert_eq!(storage.get(LIKES_STORAGE_KEY).unwrap(), None);
}

#[test]
fn test_set_then_get() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("storage.json"));

    storage.set("likes", "[]").unwrap();
    storage.set("other", "value").unwrap();

    assert_eq!(storage.get("likes").unwrap().as_deref(), Some("[]"));
    assert_eq!(storage.get("other").unwrap().as_deref(), Some("value"));
    // no temporary file is left behind
    let names: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(names.len(), 1);
}

#[test]
fn test_corrupt_file_is_reported_then_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    fs::write(&path, "{ not json").unwrap();
    let storage = FileStorage::new(&path);

    assert!(matches!(
        storage.get(LIKES_STORAGE_KEY),
        Err(ForkifyError::StorageCorrupt(_))
    ));

    storage.set(LIKES_STORAGE_KEY, "[]").unwrap();
    assert_eq!(storage.get(LIKES_STORAGE_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_likes_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut store = LikedRecipesStore::new(Box::new(FileStorage::new(&path)));
    store.read_storage();
    store.add_like("r1", "Pie", "A", "img.png").unwrap();
    store.add_like("r2", "Soup", "B", "soup.png").unwrap();
    store.delete_like("r1").unwrap();

    let mut restarted = LikedRecipesStore::new(Box::new(FileStorage::new(&path)));
    restarted.read_storage();

    assert_eq!(restarted.likes(), store.likes());
    assert!(restarted.is_liked("r2"));
    assert!(!restarted.is_liked("r1"));
}

#[test]
fn test_corrupt_file_restores_no_likes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    fs::write(&path, "garbage").unwrap();

    let mut store = LikedRecipesStore::new(Box::new(FileStorage::new(&path)));
    store.read_storage();

    assert_eq!(store.num_likes(), 0);
}
