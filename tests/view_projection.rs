// tests/view_projection.rs

use std::cmp::Ordering;
use std::collections::BTreeSet;

use coursegate::resolve::{BlockedSet, FailedSet};
use coursegate::view::collate::{collation_key, compare};
use coursegate::view::{project, GroupKey, ViewQuery};
use coursegate_test_utils::builders::{entry, CourseMapBuilder};

fn blocked(ids: &[&str]) -> BlockedSet {
    ids.iter().copied().collect()
}

#[test]
fn blocked_first_then_alphabetic() {
    let entries = vec![
        entry("Z", "M1", &[], Some(1)),
        entry("A", "M1", &[], Some(1)),
        entry("B", "M1", &[], Some(1)),
    ];

    let view = project(&entries, &blocked(&["A"]), &FailedSet::new(), &ViewQuery::default());

    assert_eq!(view.ids(), vec!["A", "B", "Z"]);
    assert_eq!(view.groups.len(), 1);
    assert_eq!(view.groups[0].key, GroupKey::All);
    let flags: Vec<bool> = view.rows().map(|r| r.blocked).collect();
    assert_eq!(flags, vec![true, false, false]);
}

#[test]
fn failed_courses_are_not_listed() {
    let entries = vec![entry("A", "M1", &[], None), entry("B", "M1", &[], None)];
    let failed: FailedSet = ["A"].into_iter().collect();

    let view = project(&entries, &BlockedSet::new(), &failed, &ViewQuery::default());
    assert_eq!(view.ids(), vec!["B"]);
}

#[test]
fn search_matches_course_or_module_ignoring_case() {
    let catalog = CourseMapBuilder::new()
        .course("CourseX", "M1", &["M2"], Some(1))
        .course("CourseY", "M2", &[], Some(2))
        .build();
    let none = BlockedSet::new();
    let failed = FailedSet::new();

    let query = ViewQuery {
        search: "cou".to_string(),
        ..ViewQuery::default()
    };
    assert_eq!(
        project(&catalog.entries, &none, &failed, &query).ids(),
        vec!["CourseX", "CourseY"]
    );

    let query = ViewQuery {
        search: "m2".to_string(),
        ..ViewQuery::default()
    };
    assert_eq!(
        project(&catalog.entries, &none, &failed, &query).ids(),
        vec!["CourseY"]
    );
}

#[test]
fn search_lowercases_unicode() {
    let entries = vec![entry("Übung Ölchemie", "MÖ", &[], None), entry("Other", "M1", &[], None)];

    let query = ViewQuery {
        search: "ÖL".to_string(),
        ..ViewQuery::default()
    };
    let ids = project(&entries, &BlockedSet::new(), &FailedSet::new(), &query).ids();
    assert_eq!(ids, vec!["Übung Ölchemie"]);
}

#[test]
fn semester_filter_drops_undefined_semesters() {
    let entries = vec![
        entry("One", "M1", &[], Some(1)),
        entry("Two", "M1", &[], Some(2)),
        entry("Never", "M1", &[], None),
    ];
    let query = ViewQuery {
        semesters: BTreeSet::from([2]),
        ..ViewQuery::default()
    };

    let view = project(&entries, &BlockedSet::new(), &FailedSet::new(), &query);
    assert_eq!(view.ids(), vec!["Two"]);
}

#[test]
fn grouping_orders_buckets_with_unscheduled_last() {
    let entries = vec![
        entry("Late", "M1", &[], Some(3)),
        entry("Floating", "M1", &[], None),
        entry("Early B", "M1", &[], Some(1)),
        entry("Early A", "M1", &[], Some(1)),
        entry("Blocked late", "M2", &[], Some(3)),
    ];
    let query = ViewQuery {
        group_by_semester: true,
        ..ViewQuery::default()
    };

    let view = project(&entries, &blocked(&["Blocked late"]), &FailedSet::new(), &query);

    let keys: Vec<GroupKey> = view.groups.iter().map(|g| g.key).collect();
    assert_eq!(
        keys,
        vec![GroupKey::Semester(1), GroupKey::Semester(3), GroupKey::Unscheduled]
    );
    assert_eq!(
        view.ids(),
        vec!["Early A", "Early B", "Blocked late", "Late", "Floating"]
    );
}

#[test]
fn empty_catalog_projects_to_empty_view() {
    let view = project(&[], &BlockedSet::new(), &FailedSet::new(), &ViewQuery::default());
    assert!(view.is_empty());
}

#[test]
fn collation_ignores_case_and_diacritics() {
    assert_eq!(collation_key("Übung"), collation_key("ubung"));
    assert_eq!(collation_key("Straße"), collation_key("STRASSE"));
    assert_eq!(compare("Ökonomie", "Physik"), Ordering::Less);
    assert_eq!(compare("apfel", "Zebra"), Ordering::Less);
}

#[test]
fn stroke_letters_fold_to_base() {
    assert_eq!(compare("Økologie", "Physik"), Ordering::Less);
    assert_eq!(collation_key("Økologie"), collation_key("okologie"));
    assert_eq!(collation_key("Łódź"), collation_key("lodz"));
    assert_eq!(compare("Đakovo", "Essen"), Ordering::Less);
}

#[test]
fn punctuation_sorts_before_digits_and_letters() {
    assert_eq!(compare("Kurs_1", "Kurs1"), Ordering::Less);
    assert_eq!(compare("Kurs 1", "Kurs_1"), Ordering::Less);
    assert_eq!(compare("Kurs9", "KursA"), Ordering::Less);
}

#[test]
fn punctuation_follows_collation_order() {
    assert_eq!(compare("A-B", "A(B"), Ordering::Less);
    assert_eq!(compare("A_B", "A-B"), Ordering::Less);
    assert_eq!(compare("A.B", "A/B"), Ordering::Less);
}

#[test]
fn stroke_letters_sort_inside_view() {
    let entries = vec![
        entry("Physik", "M1", &[], None),
        entry("Økologie", "M1", &[], None),
        entry("Łogik", "M1", &[], None),
        entry("Analysis", "M1", &[], None),
    ];

    let view = project(&entries, &BlockedSet::new(), &FailedSet::new(), &ViewQuery::default());
    assert_eq!(view.ids(), vec!["Analysis", "Łogik", "Økologie", "Physik"]);
}

#[test]
fn umlauts_sort_with_their_base_letter() {
    let entries = vec![
        entry("Zoologie", "M1", &[], None),
        entry("Ökologie", "M1", &[], None),
        entry("Physik", "M1", &[], None),
        entry("analysis", "M1", &[], None),
    ];

    let view = project(&entries, &BlockedSet::new(), &FailedSet::new(), &ViewQuery::default());
    assert_eq!(view.ids(), vec!["analysis", "Ökologie", "Physik", "Zoologie"]);
}
