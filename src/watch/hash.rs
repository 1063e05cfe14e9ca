// src/watch/hash.rs

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use blake3::Hasher;
use tracing::debug;

use crate::fs::FileSystem;

/// Compute the blake3 hash of a file's contents.
pub fn compute_file_hash(fs: &dyn FileSystem, path: &Path) -> Result<String> {
    let bytes = fs.read(path)?;
    let mut hasher = Hasher::new();
    hasher.update(&bytes);
    Ok(hasher.finalize().to_hex().to_string())
}

/// Last seen content hash per watched file.
///
/// Editors often emit several events for one save (truncate, write, rename);
/// this lets the watcher ignore events that did not change the content.
#[derive(Debug)]
pub struct ContentHashes {
    fs: Arc<dyn FileSystem>,
    hashes: HashMap<PathBuf, String>,
}

impl ContentHashes {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            fs,
            hashes: HashMap::new(),
        }
    }

    /// Record the current content of `path` without reporting a change.
    pub fn prime(&mut self, path: &Path) -> Result<()> {
        let hash = compute_file_hash(self.fs.as_ref(), path)?;
        self.hashes.insert(path.to_path_buf(), hash);
        Ok(())
    }

    /// Re-hash `path` and report whether its content differs from the last
    /// recorded hash. A file never seen before counts as changed.
    pub fn changed(&mut self, path: &Path) -> Result<bool> {
        let hash = compute_file_hash(self.fs.as_ref(), path)?;
        let changed = self.hashes.get(path) != Some(&hash);
        if changed {
            debug!(?path, hash = %hash, "content changed");
            self.hashes.insert(path.to_path_buf(), hash);
        }
        Ok(changed)
    }

    /// Forget the hash for `path` (e.g. the file was removed).
    pub fn invalidate(&mut self, path: &Path) {
        if self.hashes.remove(path).is_some() {
            debug!(?path, "invalidated content hash");
        }
    }
}
