// src/catalog/loader.rs

use std::path::Path;

use tracing::{info, warn};

use crate::catalog::normalize::normalize;
use crate::catalog::raw::RawCatalog;
use crate::catalog::Catalog;
use crate::errors::{CoursegateError, Result};
use crate::fs::FileSystem;
use crate::graph::find_cycles;

/// Parse and normalize a catalog from a JSON string.
///
/// Invalid JSON is a [`CoursegateError::Fetch`]; valid JSON of the wrong shape
/// is a [`CoursegateError::DataShape`].
pub fn parse_catalog(contents: &str) -> Result<Catalog> {
    let value: serde_json::Value = serde_json::from_str(contents)
        .map_err(|e| CoursegateError::Fetch(format!("parsing catalog JSON: {e}")))?;
    let raw = RawCatalog::from_value(value)?;
    normalize(raw)
}

/// Read, parse and normalize the catalog at `path`.
pub fn load_catalog(fs: &dyn FileSystem, path: &Path) -> Result<Catalog> {
    let contents = fs
        .read_to_string(path)
        .map_err(|e| CoursegateError::Fetch(format!("{e:#}")))?;

    let catalog = parse_catalog(&contents)?;

    for cycle in find_cycles(&catalog.deps) {
        warn!(modules = ?cycle, "dependency cycle in catalog");
    }

    info!(
        path = ?path,
        courses = catalog.entries.len(),
        modules = catalog.deps.len(),
        "catalog loaded"
    );
    Ok(catalog)
}
