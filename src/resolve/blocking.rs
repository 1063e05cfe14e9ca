// src/resolve/blocking.rs

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use serde::Serialize;
use tracing::{debug, trace};

use crate::catalog::{CourseEntry, CourseId, ModuleId};
use crate::graph::DependencyIndex;
use crate::types::TraversalStart;

/// Courses that became unavailable because of the failed set.
///
/// Membership only; iteration order is unspecified. Serializes as a sorted
/// list so output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedSet {
    ids: HashSet<CourseId>,
}

impl BlockedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(|s| s.as_str())
    }

    pub fn is_subset(&self, other: &BlockedSet) -> bool {
        self.ids.is_subset(&other.ids)
    }

    pub fn to_sorted_vec(&self) -> Vec<CourseId> {
        let mut ids: Vec<CourseId> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }
}

impl<S: Into<CourseId>> FromIterator<S> for BlockedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Serialize for BlockedSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_sorted_vec().serialize(serializer)
    }
}

/// Why a single course is blocked.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum BlockReason {
    /// Same module as a failed course, offered in a different semester.
    SiblingSemester { failed: CourseId, failed_semester: u32 },
    /// The course's module was reached over dependency edges.
    ///
    /// `via` is the module the traversal came from; `None` for a start module
    /// under [`TraversalStart::OwnModule`].
    ModuleReached {
        module: ModuleId,
        via: Option<ModuleId>,
    },
}

/// Compute the set of courses blocked by `failed`.
///
/// Two rules are unioned:
/// 1. Sibling rule: courses in the same module as a failed course but with a
///    different (defined) semester.
/// 2. Module rule: every course of every module reached by a breadth-first
///    walk over `deps`, starting according to `traversal`.
///
/// Failed ids that match no entry are ignored. The result does not depend on
/// the order of `failed`.
pub fn resolve<I, S>(
    entries: &[CourseEntry],
    deps: &DependencyIndex,
    failed: I,
    traversal: TraversalStart,
) -> BlockedSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let failed = failed_entries(entries, failed);
    if failed.is_empty() {
        return BlockedSet::new();
    }

    let mut blocked = HashSet::new();

    for f in &failed {
        for e in sibling_candidates(entries, f) {
            blocked.insert(e.id.clone());
        }
    }

    let reached = reachable_modules(deps, &failed, traversal);
    for e in entries {
        if reached.contains_key(e.module_id.as_str()) {
            blocked.insert(e.id.clone());
        }
    }

    debug!(
        failed = failed.len(),
        modules_reached = reached.len(),
        blocked = blocked.len(),
        %traversal,
        "resolved blocked courses"
    );

    BlockedSet { ids: blocked }
}

/// Like [`resolve`], but keeps every reason each course is blocked.
///
/// The key set equals the set returned by [`resolve`]. Reasons per course are
/// sorted and deduplicated.
pub fn explain<I, S>(
    entries: &[CourseEntry],
    deps: &DependencyIndex,
    failed: I,
    traversal: TraversalStart,
) -> BTreeMap<CourseId, Vec<BlockReason>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let failed = failed_entries(entries, failed);
    let mut reasons: BTreeMap<CourseId, Vec<BlockReason>> = BTreeMap::new();
    if failed.is_empty() {
        return reasons;
    }

    for f in &failed {
        // The sibling rule needs a defined semester on both sides.
        let Some(failed_semester) = f.semester else {
            continue;
        };
        for e in sibling_candidates(entries, f) {
            reasons
                .entry(e.id.clone())
                .or_default()
                .push(BlockReason::SiblingSemester {
                    failed: f.id.clone(),
                    failed_semester,
                });
        }
    }

    let reached = reachable_modules(deps, &failed, traversal);
    for e in entries {
        if let Some(via) = reached.get(e.module_id.as_str()) {
            reasons
                .entry(e.id.clone())
                .or_default()
                .push(BlockReason::ModuleReached {
                    module: e.module_id.clone(),
                    via: via.map(str::to_string),
                });
        }
    }

    for list in reasons.values_mut() {
        list.sort();
        list.dedup();
    }

    reasons
}

/// Look up the entries for the failed ids, skipping unknown ids and repeats.
fn failed_entries<'a, I, S>(entries: &'a [CourseEntry], failed: I) -> Vec<&'a CourseEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let by_id: HashMap<&str, &CourseEntry> =
        entries.iter().map(|e| (e.id.as_str(), e)).collect();

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for id in failed {
        let id = id.as_ref();
        match by_id.get(id) {
            Some(entry) if seen.insert(entry.id.as_str()) => out.push(*entry),
            Some(_) => {}
            None => trace!(course = %id, "failed id not in catalog; ignoring"),
        }
    }
    out
}

/// Entries blocked by the sibling rule for one failed entry.
fn sibling_candidates<'a>(
    entries: &'a [CourseEntry],
    failed: &'a CourseEntry,
) -> impl Iterator<Item = &'a CourseEntry> + 'a {
    entries.iter().filter(move |e| {
        e.module_id == failed.module_id
            && matches!(
                (failed.semester, e.semester),
                (Some(fs), Some(es)) if fs != es
            )
    })
}

/// Breadth-first walk over declared dependents.
///
/// Returns every reached module mapped to the module it was first reached
/// from. Each module is visited at most once, so cycles terminate.
fn reachable_modules<'a>(
    deps: &'a DependencyIndex,
    failed: &[&'a CourseEntry],
    traversal: TraversalStart,
) -> HashMap<&'a str, Option<&'a str>> {
    let mut visited: HashMap<&str, Option<&str>> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    for f in failed {
        let module = f.module_id.as_str();
        if traversal.includes_own_module() {
            if visited.insert(module, None).is_none() {
                queue.push_back(module);
            }
        } else {
            queue.push_back(module);
        }
    }

    while let Some(module) = queue.pop_front() {
        for child in deps.dependents_of(module) {
            let child = child.as_str();
            if !visited.contains_key(child) {
                trace!(from = %module, to = %child, "module reached");
                visited.insert(child, Some(module));
                queue.push_back(child);
            }
        }
    }

    visited
}
