// src/view/sort.rs

use crate::resolve::BlockedSet;
use crate::view::collate::collation_key;
use crate::view::ViewRow;

/// Sort rows in place.
///
/// Keys, in order:
/// 1. blocked rows first
/// 2. (only with `by_semester`) ascending semester, undefined last
/// 3. course id by collation key
///
/// The sort is stable, so rows with equal keys keep catalog order.
pub fn sort_rows(rows: &mut [ViewRow<'_>], blocked: &BlockedSet, by_semester: bool) {
    rows.sort_by_cached_key(|row| {
        let blocked_rank = u8::from(!blocked.contains(&row.entry.id));
        let semester_rank = if by_semester {
            semester_rank(row.entry.semester)
        } else {
            (0, 0)
        };
        (blocked_rank, semester_rank, collation_key(&row.entry.id))
    });
}

/// Defined semesters ascending, then undefined.
fn semester_rank(semester: Option<u32>) -> (u8, u32) {
    match semester {
        Some(s) => (0, s),
        None => (1, 0),
    }
}
