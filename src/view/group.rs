// src/view/group.rs

use std::collections::BTreeMap;

use crate::view::{GroupKey, ViewGroup, ViewRow};

/// Partition already sorted rows into semester buckets.
///
/// Buckets come out in ascending semester order with
/// [`GroupKey::Unscheduled`] last; row order inside a bucket is preserved.
pub fn group_by_semester(rows: Vec<ViewRow<'_>>) -> Vec<ViewGroup<'_>> {
    let mut buckets: BTreeMap<GroupKey, Vec<ViewRow<'_>>> = BTreeMap::new();

    for row in rows {
        let key = match row.entry.semester {
            Some(s) => GroupKey::Semester(s),
            None => GroupKey::Unscheduled,
        };
        buckets.entry(key).or_default().push(row);
    }

    buckets
        .into_iter()
        .map(|(key, rows)| ViewGroup { key, rows })
        .collect()
}
