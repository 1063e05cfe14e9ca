// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Load the config the user asked for.
///
/// - `Some(path)`: the file must exist.
/// - `None`: use [`default_config_path`] if it exists, otherwise defaults.
///
/// Returns the config together with the path it came from (if any).
pub fn load_or_default(explicit: Option<&Path>) -> Result<(ConfigFile, Option<PathBuf>)> {
    match explicit {
        Some(path) => Ok((load_and_validate(path)?, Some(path.to_path_buf()))),
        None => {
            let path = default_config_path();
            if path.exists() {
                Ok((load_and_validate(&path)?, Some(path)))
            } else {
                debug!("no {:?} found; using built-in defaults", path);
                Ok((ConfigFile::default(), None))
            }
        }
    }
}

/// Helper to resolve a default config path.
///
/// Currently this is `Coursegate.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Coursegate.toml")
}

/// Directory that relative paths in the config resolve against.
///
/// - If the config path has a non-empty parent (e.g. "configs/Coursegate.toml"),
///   we use that directory.
/// - Otherwise (bare filename, or no config file at all) we fall back to the
///   current working directory.
pub fn config_root_dir(config_path: Option<&Path>) -> PathBuf {
    match config_path.and_then(Path::parent) {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
