// tests/preferences.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use coursegate::fs::mock::MockFileSystem;
use coursegate::fs::{FileSystem, RealFileSystem};
use coursegate::prefs::{
    load_failed_selection, open_store, save_failed_selection, FilePreferenceStore,
    MemoryPreferenceStore, PreferenceStore, FAILED_SELECTION_KEY, PREFERENCES_FILE_PATH,
};
use coursegate::resolve::FailedSet;
use coursegate::types::PreferenceStorageMode;

fn selection(ids: &[&str]) -> FailedSet {
    ids.iter().copied().collect()
}

#[test]
fn memory_store_roundtrips_selection() {
    let mut store = MemoryPreferenceStore::new();
    assert_eq!(load_failed_selection(&store).unwrap(), None);

    let failed = selection(&["Analysis 2", "Analysis 1"]);
    save_failed_selection(&mut store, &failed).unwrap();

    let restored = load_failed_selection(&store).unwrap().unwrap();
    assert_eq!(restored, failed);
    assert_eq!(restored.as_slice(), ["Analysis 2", "Analysis 1"]);
}

#[test]
fn empty_selection_removes_the_key() {
    let mut store = MemoryPreferenceStore::new();
    save_failed_selection(&mut store, &selection(&["A"])).unwrap();
    save_failed_selection(&mut store, &FailedSet::new()).unwrap();

    assert_eq!(store.get(FAILED_SELECTION_KEY).unwrap(), None);
}

#[test]
fn file_store_writes_under_state_root() {
    let fs = MockFileSystem::new();
    let root = PathBuf::from("/project");
    let mut store = FilePreferenceStore::new(root.clone(), Arc::new(fs.clone()));

    store.set("theme", "dark").unwrap();
    save_failed_selection(&mut store, &selection(&["Übung"])).unwrap();

    let path = root.join(PREFERENCES_FILE_PATH);
    assert_eq!(store.path(), path);
    let contents = fs.read_to_string(&path).unwrap();
    assert!(contents.contains("theme dark"));
    assert!(contents.contains(r#"failed ["Übung"]"#));

    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(
        load_failed_selection(&store).unwrap(),
        Some(selection(&["Übung"]))
    );
}

#[test]
fn file_store_rejects_keys_with_whitespace() {
    let fs = MockFileSystem::new();
    let mut store = FilePreferenceStore::new(PathBuf::from("/p"), Arc::new(fs));

    assert!(store.set("two words", "x").is_err());
    assert!(store.set("key", "line\nbreak").is_err());
}

#[test]
fn file_store_survives_reopen_on_disk() {
    let dir = TempDir::new().unwrap();
    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);

    {
        let mut store = open_store(PreferenceStorageMode::File, dir.path(), Arc::clone(&fs));
        save_failed_selection(store.as_mut(), &selection(&["Analysis 1", "Lineare Algebra"]))
            .unwrap();
    }

    assert!(dir.path().join(PREFERENCES_FILE_PATH).exists());

    let store = open_store(PreferenceStorageMode::File, dir.path(), fs);
    let restored = load_failed_selection(store.as_ref()).unwrap();
    assert_eq!(restored, Some(selection(&["Analysis 1", "Lineare Algebra"])));
}

#[test]
fn memory_mode_does_not_touch_disk() {
    let dir = TempDir::new().unwrap();
    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);

    let mut store = open_store(PreferenceStorageMode::Memory, dir.path(), fs);
    save_failed_selection(store.as_mut(), &selection(&["A"])).unwrap();

    assert!(!dir.path().join(PREFERENCES_FILE_PATH).exists());
}

#[test]
fn corrupt_stored_selection_is_an_error() {
    let fs = MockFileSystem::new();
    fs.add_file(
        Path::new("/p").join(PREFERENCES_FILE_PATH),
        "failed not-json\n",
    );
    let store = FilePreferenceStore::new(PathBuf::from("/p"), Arc::new(fs));

    assert!(load_failed_selection(&store).is_err());
}

#[test]
fn stored_duplicates_collapse() {
    let mut store = MemoryPreferenceStore::new();
    store.set(FAILED_SELECTION_KEY, r#"["A","B","A"]"#).unwrap();

    let restored = load_failed_selection(&store).unwrap().unwrap();
    assert_eq!(restored.as_slice(), ["A", "B"]);
}
