// src/resolve/failed_set.rs

use serde::{Deserialize, Serialize};

use crate::catalog::CourseId;

/// Result of [`FailedSet::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Courses the user marked as failed.
///
/// Insertion order is kept (it is what the user sees as selection chips) and
/// ids are never duplicated. The order does not influence blocking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CourseId>", into = "Vec<CourseId>")]
pub struct FailedSet {
    ids: Vec<CourseId>,
}

impl FailedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `id` if present, otherwise append it.
    pub fn toggle(&mut self, id: &str) -> Toggle {
        match self.ids.iter().position(|x| x == id) {
            Some(pos) => {
                self.ids.remove(pos);
                Toggle::Removed
            }
            None => {
                self.ids.push(id.to_string());
                Toggle::Added
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(|s| s.as_str())
    }

    pub fn as_slice(&self) -> &[CourseId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

/// Keeps the first occurrence of every id.
impl<S: Into<CourseId>> FromIterator<S> for FailedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = FailedSet::new();
        for id in iter {
            let id = id.into();
            if !set.contains(&id) {
                set.ids.push(id);
            }
        }
        set
    }
}

impl From<Vec<CourseId>> for FailedSet {
    fn from(ids: Vec<CourseId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<FailedSet> for Vec<CourseId> {
    fn from(set: FailedSet) -> Self {
        set.ids
    }
}

impl<'a> IntoIterator for &'a FailedSet {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, CourseId>, fn(&'a CourseId) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter().map(String::as_str as fn(&'a CourseId) -> &'a str)
    }
}
