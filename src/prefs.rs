// src/prefs.rs

//! Simple key -> string preference storage.
//!
//! Used to remember the failed selection between invocations. Values are
//! opaque strings; the failed selection is stored as a JSON array under
//! [`FAILED_SELECTION_KEY`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::fs::FileSystem;
use crate::resolve::FailedSet;
use crate::types::PreferenceStorageMode;

/// Relative path (from the config root) to the preferences file.
///
/// The effective path on disk is `<root>/.coursegate/preferences`.
pub const PREFERENCES_FILE_PATH: &str = ".coursegate/preferences";

/// Key under which the failed selection is stored.
pub const FAILED_SELECTION_KEY: &str = "failed";

/// Abstract key -> string store.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Open the store selected by `mode`.
pub fn open_store(
    mode: PreferenceStorageMode,
    root: &Path,
    fs: Arc<dyn FileSystem>,
) -> Box<dyn PreferenceStore> {
    match mode {
        PreferenceStorageMode::File => Box::new(FilePreferenceStore::new(root.to_path_buf(), fs)),
        PreferenceStorageMode::Memory => Box::new(MemoryPreferenceStore::new()),
    }
}

/// Read the stored failed selection, `None` if nothing is stored.
pub fn load_failed_selection(store: &dyn PreferenceStore) -> Result<Option<FailedSet>> {
    match store.get(FAILED_SELECTION_KEY)? {
        Some(raw) => {
            let failed: FailedSet = serde_json::from_str(&raw)
                .with_context(|| format!("decoding stored selection {raw:?}"))?;
            Ok(Some(failed))
        }
        None => Ok(None),
    }
}

/// Store the failed selection; an empty selection removes the key.
pub fn save_failed_selection(store: &mut dyn PreferenceStore, failed: &FailedSet) -> Result<()> {
    if failed.is_empty() {
        return store.remove(FAILED_SELECTION_KEY);
    }
    let raw = serde_json::to_string(failed).context("encoding failed selection")?;
    store.set(FAILED_SELECTION_KEY, &raw)
}

/// Stores preferences in a file (`.coursegate/preferences`), one
/// `key value` pair per line.
pub struct FilePreferenceStore {
    root: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl FilePreferenceStore {
    pub fn new(root: PathBuf, fs: Arc<dyn FileSystem>) -> Self {
        Self { root, fs }
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(PREFERENCES_FILE_PATH)
    }

    fn load_all(&self) -> Result<BTreeMap<String, String>> {
        let path = self.path();
        if !self.fs.exists(&path) {
            return Ok(BTreeMap::new());
        }

        let contents = self.fs.read_to_string(&path)?;
        let mut map = BTreeMap::new();
        for line in contents.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match trimmed.split_once(char::is_whitespace) {
                Some((key, value)) => {
                    map.insert(key.to_string(), value.trim().to_string());
                }
                None => {
                    map.insert(trimmed.to_string(), String::new());
                }
            }
        }
        Ok(map)
    }

    fn save_all(&self, map: &BTreeMap<String, String>) -> Result<()> {
        let mut out = String::new();
        for (key, value) in map {
            out.push_str(key);
            out.push(' ');
            out.push_str(value);
            out.push('\n');
        }
        self.fs.write(&self.path(), out.as_bytes())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_all()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        anyhow::ensure!(
            !key.is_empty() && !key.contains(char::is_whitespace),
            "preference key {key:?} must be a single non-empty word"
        );
        anyhow::ensure!(
            !value.contains('\n'),
            "preference value for {key:?} must be a single line"
        );
        let mut map = self.load_all()?;
        map.insert(key.to_string(), value.to_string());
        self.save_all(&map)?;
        info!(key = %key, "stored preference (file)");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut map = self.load_all()?;
        if map.remove(key).is_some() {
            self.save_all(&map)?;
            debug!(key = %key, "removed preference (file)");
        }
        Ok(())
    }
}

/// Keeps preferences in memory only.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    map: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.map.insert(key.to_string(), value.to_string());
        debug!(key = %key, "stored preference (memory)");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.map.remove(key);
        Ok(())
    }
}
