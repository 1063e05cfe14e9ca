// src/config/model.rs

use serde::Deserialize;

use crate::types::{PreferenceStorageMode, TraversalStart};

/// Default catalog location, relative to the config root.
pub const DEFAULT_CATALOG_PATH: &str = "modules.json";

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [catalog]
/// path = "public/data/modules.json"
///
/// [resolver]
/// traversal_start = "dependents"   # or "own_module"
///
/// [view]
/// search = ""
/// semesters = [1, 2]
/// group_by_semester = true
///
/// [selection]
/// failed = ["Analysis 1"]
///
/// [preferences]
/// storage = "file"                 # or "memory"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub catalog: CatalogSection,

    #[serde(default)]
    pub resolver: ResolverSection,

    #[serde(default)]
    pub view: ViewSection,

    #[serde(default)]
    pub selection: SelectionSection,

    #[serde(default)]
    pub preferences: PreferencesSection,
}

/// Validated configuration. Build it with `ConfigFile::try_from(raw)`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub catalog: CatalogSection,
    pub resolver: ResolverSection,
    pub view: ViewSection,
    pub selection: SelectionSection,
    pub preferences: PreferencesSection,
}

impl ConfigFile {
    /// Assemble a config without validating it; `validate` uses this after
    /// its checks pass.
    pub(crate) fn new_unchecked(raw: RawConfigFile) -> Self {
        Self {
            catalog: raw.catalog,
            resolver: raw.resolver,
            view: raw.view,
            selection: raw.selection,
            preferences: raw.preferences,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(RawConfigFile::default())
    }
}

/// `[catalog]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSection {
    /// Path to the catalog JSON; relative paths resolve against the
    /// directory of the config file.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    DEFAULT_CATALOG_PATH.to_string()
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// `[resolver]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResolverSection {
    #[serde(default)]
    pub traversal_start: TraversalStart,
}

/// `[view]` section: initial view parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewSection {
    #[serde(default)]
    pub search: String,

    #[serde(default)]
    pub semesters: Vec<u32>,

    #[serde(default)]
    pub group_by_semester: bool,
}

/// `[selection]` section: failed courses used when nothing is stored yet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionSection {
    #[serde(default)]
    pub failed: Vec<String>,
}

/// `[preferences]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreferencesSection {
    #[serde(default)]
    pub storage: PreferenceStorageMode,
}
