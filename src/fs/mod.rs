// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub mod mock;

/// Abstract filesystem interface.
///
/// Catalog loading, preference storage and content hashing all go through
/// this trait so tests can run against [`mock::MockFileSystem`].
pub trait FileSystem: Send + Sync + Debug {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn read(&self, path: &Path) -> Result<Vec<u8>>;
    /// Write a file, creating parent directories as needed.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("reading file {:?}", path))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).with_context(|| format!("reading file {:?}", path))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating dir {:?}", parent))?;
            }
        }
        fs::write(path, contents).with_context(|| format!("writing to file {:?}", path))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
