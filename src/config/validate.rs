// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{CoursegateError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = CoursegateError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw))
    }
}

/// Semantic checks that serde cannot express.
///
/// `traversal_start` and `storage` are enums and already validated during
/// deserialization.
fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_catalog(cfg)?;
    validate_view(cfg)?;
    validate_selection(cfg)?;
    Ok(())
}

fn validate_catalog(cfg: &RawConfigFile) -> Result<()> {
    if cfg.catalog.path.trim().is_empty() {
        return Err(CoursegateError::ConfigError(
            "[catalog].path must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_view(cfg: &RawConfigFile) -> Result<()> {
    if cfg.view.semesters.contains(&0) {
        return Err(CoursegateError::ConfigError(
            "[view].semesters entries must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_selection(cfg: &RawConfigFile) -> Result<()> {
    let mut seen = HashSet::new();
    for id in &cfg.selection.failed {
        if !seen.insert(id.as_str()) {
            return Err(CoursegateError::ConfigError(format!(
                "course '{}' is listed more than once in [selection].failed",
                id
            )));
        }
    }
    Ok(())
}
