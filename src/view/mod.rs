// src/view/mod.rs

//! View projection: filter, sort and group the visible catalog entries.
//!
//! Everything here is a pure function of its inputs; [`project`] is the only
//! entry point the rest of the crate needs.

pub mod collate;
pub mod filter;
pub mod group;
pub mod sort;

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::catalog::CourseEntry;
use crate::resolve::{BlockedSet, FailedSet};
use crate::view::filter::EntryFilter;

/// User-controlled view parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    /// Case-insensitive substring matched against course and module ids.
    pub search: String,
    /// If non-empty, only entries with one of these semesters are shown.
    pub semesters: BTreeSet<u32>,
    /// Sort by semester and split the result into semester buckets.
    pub group_by_semester: bool,
}

/// Bucket key of a [`ViewGroup`].
///
/// Ordering: `All` (ungrouped), then semesters ascending, then `Unscheduled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    All,
    Semester(u32),
    Unscheduled,
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::All => f.write_str("all courses"),
            GroupKey::Semester(s) => write!(f, "semester {s}"),
            GroupKey::Unscheduled => f.write_str("no semester"),
        }
    }
}

/// One visible entry and whether it is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewRow<'a> {
    #[serde(flatten)]
    pub entry: &'a CourseEntry,
    pub blocked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewGroup<'a> {
    pub key: GroupKey,
    pub rows: Vec<ViewRow<'a>>,
}

/// Filtered, sorted and (optionally) grouped entries.
///
/// Ungrouped projections have exactly one group keyed [`GroupKey::All`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectedView<'a> {
    pub groups: Vec<ViewGroup<'a>>,
}

impl<'a> ProjectedView<'a> {
    /// All rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = &ViewRow<'a>> {
        self.groups.iter().flat_map(|g| g.rows.iter())
    }

    /// Course ids in display order.
    pub fn ids(&self) -> Vec<&'a str> {
        self.rows().map(|r| r.entry.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.rows.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Project the catalog entries for display.
pub fn project<'a>(
    entries: &'a [CourseEntry],
    blocked: &BlockedSet,
    failed: &FailedSet,
    query: &ViewQuery,
) -> ProjectedView<'a> {
    let filter = EntryFilter::new(query);

    let mut rows: Vec<ViewRow<'a>> = entries
        .iter()
        .filter(|e| filter.is_visible(e, failed))
        .map(|entry| ViewRow {
            entry,
            blocked: blocked.contains(&entry.id),
        })
        .collect();

    sort::sort_rows(&mut rows, blocked, query.group_by_semester);

    let groups = if query.group_by_semester {
        group::group_by_semester(rows)
    } else {
        vec![ViewGroup {
            key: GroupKey::All,
            rows,
        }]
    };

    ProjectedView { groups }
}
