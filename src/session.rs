// src/session.rs

//! Reactive boundary around the pure resolver and view functions.
//!
//! A [`Session`] owns the inputs that change over time (catalog, failed
//! selection, traversal policy) and the blocked set derived from them. Every
//! change recomputes the blocked set from scratch; nothing is patched
//! incrementally.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::catalog::{Catalog, CatalogState, CourseEntry, CourseId};
use crate::errors::Result;
use crate::graph::DependencyIndex;
use crate::resolve::{explain, resolve, BlockReason, BlockedSet, FailedSet, Toggle};
use crate::types::TraversalStart;
use crate::view::{project, ProjectedView, ViewQuery};

#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: CatalogState,
    failed: FailedSet,
    traversal: TraversalStart,
    blocked: BlockedSet,
}

impl Session {
    /// A session with no catalog loaded yet.
    pub fn new(traversal: TraversalStart) -> Self {
        Self {
            traversal,
            ..Self::default()
        }
    }

    /// Replace the failed selection (e.g. restored from preferences).
    pub fn with_failed(mut self, failed: FailedSet) -> Self {
        self.failed = failed;
        self.recompute();
        self
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn entries(&self) -> &[CourseEntry] {
        self.catalog.entries()
    }

    pub fn failed(&self) -> &FailedSet {
        &self.failed
    }

    pub fn blocked(&self) -> &BlockedSet {
        &self.blocked
    }

    pub fn traversal(&self) -> TraversalStart {
        self.traversal
    }

    /// Install a freshly loaded catalog.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = CatalogState::Loaded(catalog);
        self.recompute();
    }

    /// Apply the outcome of a catalog load.
    ///
    /// On error the previous state (possibly `Unavailable`) is kept and the
    /// error is handed back to the caller.
    pub fn apply_catalog_load(&mut self, result: Result<Catalog>) -> Result<()> {
        match result {
            Ok(catalog) => {
                self.replace_catalog(catalog);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "catalog load failed; keeping previous state");
                Err(err)
            }
        }
    }

    pub fn set_traversal(&mut self, traversal: TraversalStart) {
        if self.traversal != traversal {
            self.traversal = traversal;
            self.recompute();
        }
    }

    /// Flip membership of `id` in the failed selection.
    pub fn toggle_failed(&mut self, id: &str) -> Toggle {
        if self.catalog.is_loaded() && self.catalog_entry(id).is_none() {
            warn!(course = %id, "toggling a course that is not in the catalog");
        }
        let toggle = self.failed.toggle(id);
        info!(course = %id, ?toggle, "failed selection changed");
        self.recompute();
        toggle
    }

    pub fn clear_failed(&mut self) {
        self.failed.clear();
        self.recompute();
    }

    /// Catalog entry for a course id, if a catalog is loaded and knows it.
    pub fn catalog_entry(&self, id: &str) -> Option<&CourseEntry> {
        self.catalog.catalog().and_then(|c| c.entry(id))
    }

    /// Dependency index of the loaded catalog, if any.
    pub fn deps(&self) -> Option<&DependencyIndex> {
        self.catalog.catalog().map(|c| &c.deps)
    }

    /// Project the current state for display.
    pub fn view(&self, query: &ViewQuery) -> ProjectedView<'_> {
        project(self.entries(), &self.blocked, &self.failed, query)
    }

    /// Reasons for every blocked course.
    pub fn explain(&self) -> BTreeMap<CourseId, Vec<BlockReason>> {
        match &self.catalog {
            CatalogState::Loaded(c) => explain(&c.entries, &c.deps, &self.failed, self.traversal),
            CatalogState::Unavailable => BTreeMap::new(),
        }
    }

    fn recompute(&mut self) {
        self.blocked = match &self.catalog {
            CatalogState::Loaded(c) => resolve(&c.entries, &c.deps, &self.failed, self.traversal),
            CatalogState::Unavailable => BlockedSet::new(),
        };
        debug!(
            failed = self.failed.len(),
            blocked = self.blocked.len(),
            "recomputed blocked set"
        );
    }
}
