// src/config/settings.rs

use std::path::{Path, PathBuf};

use crate::cli::{CliArgs, OutputFormat};
use crate::config::model::ConfigFile;
use crate::resolve::FailedSet;
use crate::types::{PreferenceStorageMode, TraversalStart};
use crate::view::ViewQuery;

/// Effective settings for one invocation: the config file with CLI flags
/// applied on top.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Absolute or config-root-relative catalog path.
    pub catalog_path: PathBuf,
    pub traversal: TraversalStart,
    pub query: ViewQuery,
    pub format: OutputFormat,
    pub explain: bool,
    pub preferences: PreferenceStorageMode,
    /// Root directory for `.coursegate/` state.
    pub state_root: PathBuf,
    /// Selection to start from when no stored selection exists.
    pub initial_failed: FailedSet,
}

impl Settings {
    /// Merge `cfg` and `args`. CLI flags win; list flags replace the config
    /// list only when given.
    pub fn resolve(cfg: &ConfigFile, args: &CliArgs, config_root: &Path) -> Self {
        let catalog_path = match &args.catalog {
            Some(p) => PathBuf::from(p),
            None => config_root.join(&cfg.catalog.path),
        };

        let semesters = if args.semesters.is_empty() {
            cfg.view.semesters.iter().copied().collect()
        } else {
            args.semesters.iter().copied().collect()
        };

        let query = ViewQuery {
            search: args.search.clone().unwrap_or_else(|| cfg.view.search.clone()),
            semesters,
            group_by_semester: args.group_by_semester || cfg.view.group_by_semester,
        };

        Self {
            catalog_path,
            traversal: args.traversal.unwrap_or(cfg.resolver.traversal_start),
            query,
            format: args.format,
            explain: args.explain,
            preferences: cfg.preferences.storage,
            state_root: config_root.to_path_buf(),
            initial_failed: cfg.selection.failed.iter().cloned().collect(),
        }
    }
}
