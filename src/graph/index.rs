// src/graph/index.rs

use std::collections::HashMap;

use crate::catalog::ModuleId;

/// Module -> declared dependent modules.
///
/// Keys keep the order in which modules were first seen. A module that is not
/// a key simply has no declared dependents; dangling references in the
/// dependent lists are kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyIndex {
    order: Vec<ModuleId>,
    dependents: HashMap<ModuleId, Vec<ModuleId>>,
}

impl DependencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the dependents of `module` unless it is already known.
    ///
    /// Returns `true` if the module was inserted. Later records for the same
    /// module are ignored, not merged.
    pub fn insert_first(&mut self, module: impl Into<ModuleId>, dependents: Vec<ModuleId>) -> bool {
        let module = module.into();
        if self.dependents.contains_key(&module) {
            return false;
        }
        self.order.push(module.clone());
        self.dependents.insert(module, dependents);
        true
    }

    /// Declared dependents of a module (empty if unknown).
    pub fn dependents_of(&self, module: &str) -> &[ModuleId] {
        self.dependents
            .get(module)
            .map(|d| d.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, module: &str) -> bool {
        self.dependents.contains_key(module)
    }

    /// Modules with an entry, in first-seen order.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// `(module, dependents)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ModuleId])> {
        self.order
            .iter()
            .map(|m| (m.as_str(), self.dependents_of(m)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<M, D> FromIterator<(M, D)> for DependencyIndex
where
    M: Into<ModuleId>,
    D: IntoIterator,
    D::Item: Into<ModuleId>,
{
    fn from_iter<I: IntoIterator<Item = (M, D)>>(iter: I) -> Self {
        let mut index = DependencyIndex::new();
        for (module, deps) in iter {
            index.insert_first(module, deps.into_iter().map(Into::into).collect());
        }
        index
    }
}
