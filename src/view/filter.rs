// src/view/filter.rs

use std::collections::BTreeSet;

use crate::catalog::CourseEntry;
use crate::resolve::FailedSet;
use crate::view::ViewQuery;

/// Visibility filter compiled from a [`ViewQuery`].
///
/// - failed courses are never listed
/// - the search text must occur in the course id or module id, ignoring case
/// - a non-empty semester filter keeps only entries with one of those semesters
#[derive(Debug, Clone)]
pub struct EntryFilter<'q> {
    needle: String,
    semesters: &'q BTreeSet<u32>,
}

impl<'q> EntryFilter<'q> {
    pub fn new(query: &'q ViewQuery) -> Self {
        Self {
            needle: query.search.to_lowercase(),
            semesters: &query.semesters,
        }
    }

    pub fn is_visible(&self, entry: &CourseEntry, failed: &FailedSet) -> bool {
        !failed.contains(&entry.id) && self.matches_search(entry) && self.matches_semester(entry)
    }

    fn matches_search(&self, entry: &CourseEntry) -> bool {
        self.needle.is_empty()
            || entry.id.to_lowercase().contains(&self.needle)
            || entry.module_id.to_lowercase().contains(&self.needle)
    }

    fn matches_semester(&self, entry: &CourseEntry) -> bool {
        if self.semesters.is_empty() {
            return true;
        }
        entry.semester.is_some_and(|s| self.semesters.contains(&s))
    }
}
