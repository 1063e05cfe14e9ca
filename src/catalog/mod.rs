// src/catalog/mod.rs

//! Course catalog: raw input shapes, normalization and loading.
//!
//! - [`raw`] models the two accepted JSON shapes as a tagged union.
//! - [`normalize`] turns a [`raw::RawCatalog`] into canonical [`CourseEntry`]s
//!   plus a [`DependencyIndex`].
//! - [`loader`] reads a catalog file through the [`crate::fs::FileSystem`]
//!   abstraction.

pub mod loader;
pub mod normalize;
pub mod raw;

use serde::Serialize;

use crate::graph::DependencyIndex;

pub use loader::{load_catalog, parse_catalog};
pub use normalize::normalize;
pub use raw::RawCatalog;

/// Canonical module identifier.
pub type ModuleId = String;

/// Canonical course identifier (the course name, unique within a catalog).
pub type CourseId = String;

/// One course offering, resolved against its owning module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseEntry {
    pub id: CourseId,
    pub module_id: ModuleId,
    /// Dependent modules as declared by the owning module record.
    pub dependent_module_ids: Vec<ModuleId>,
    pub semester: Option<u32>,
}

impl CourseEntry {
    pub fn new(
        id: impl Into<CourseId>,
        module_id: impl Into<ModuleId>,
        dependent_module_ids: Vec<ModuleId>,
        semester: Option<u32>,
    ) -> Self {
        Self {
            id: id.into(),
            module_id: module_id.into(),
            dependent_module_ids,
            semester,
        }
    }
}

/// A normalized catalog: entries in input order plus the module index.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub entries: Vec<CourseEntry>,
    pub deps: DependencyIndex,
}

impl Catalog {
    pub fn entry(&self, id: &str) -> Option<&CourseEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether a catalog has been loaded.
///
/// `Unavailable` is an explicit state, distinct from a loaded catalog that
/// happens to contain no courses.
#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    #[default]
    Unavailable,
    Loaded(Catalog),
}

impl CatalogState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, CatalogState::Loaded(_))
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            CatalogState::Loaded(c) => Some(c),
            CatalogState::Unavailable => None,
        }
    }

    /// Entries of the loaded catalog, or an empty slice.
    pub fn entries(&self) -> &[CourseEntry] {
        self.catalog().map(|c| c.entries.as_slice()).unwrap_or(&[])
    }
}
