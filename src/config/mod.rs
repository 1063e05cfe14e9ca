// src/config/mod.rs

//! Configuration loading and validation for coursegate.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate basic invariants (`validate.rs`).
//! - Merge config and CLI flags into effective [`Settings`] (`settings.rs`).

pub mod loader;
pub mod model;
pub mod settings;
pub mod validate;

pub use loader::{config_root_dir, load_and_validate, load_from_path, load_or_default};
pub use model::{
    CatalogSection, ConfigFile, PreferencesSection, RawConfigFile, ResolverSection,
    SelectionSection, ViewSection,
};
pub use settings::Settings;
