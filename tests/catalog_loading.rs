// tests/catalog_loading.rs

use std::io::Write;
use std::path::Path;

use serde_json::json;
use tempfile::NamedTempFile;

use coursegate::catalog::{load_catalog, parse_catalog, RawCatalog};
use coursegate::errors::CoursegateError;
use coursegate::fs::mock::MockFileSystem;
use coursegate::fs::RealFileSystem;
use coursegate::graph::find_cycles;
use coursegate_test_utils::builders::{entry, CourseMapBuilder, ModuleListBuilder};
use coursegate_test_utils::init_tracing;

#[test]
fn mapping_shape_yields_one_entry_per_course_in_order() {
    init_tracing();

    let catalog = CourseMapBuilder::new()
        .course("CourseX", "M1", &["M2"], Some(1))
        .course("CourseY", "M2", &[], Some(2))
        .build();

    assert_eq!(
        catalog.entries,
        vec![
            entry("CourseX", "M1", &["M2"], Some(1)),
            entry("CourseY", "M2", &[], Some(2)),
        ]
    );
    assert_eq!(catalog.deps.dependents_of("M1"), ["M2".to_string()]);
    assert!(catalog.deps.dependents_of("M2").is_empty());
}

#[test]
fn sequence_shape_copies_module_dependents_to_every_course() {
    let catalog = ModuleListBuilder::new()
        .module("M1", &["M2", "M3"], &[("Analysis 1", Some(1)), ("Analysis 2", Some(2))])
        .module("M2", &[], &[("Numerik", None)])
        .build();

    assert_eq!(catalog.entries.len(), 3);
    assert_eq!(
        catalog.entries[1],
        entry("Analysis 2", "M1", &["M2", "M3"], Some(2))
    );
    assert_eq!(catalog.entries[2], entry("Numerik", "M2", &[], None));
    let modules: Vec<&str> = catalog.deps.modules().collect();
    assert_eq!(modules, vec!["M1", "M2"]);
}

#[test]
fn module_record_semester_is_inherited_by_plain_course_names() {
    let doc = json!([
        { "Modul": "M1", "semester": 3, "Lehrveranstaltungen": ["Seminar", { "name": "Praktikum", "semester": 4 }] }
    ]);
    let catalog = parse_catalog(&doc.to_string()).unwrap();

    assert_eq!(catalog.entries[0].semester, Some(3));
    assert_eq!(catalog.entries[1].semester, Some(4));
}

#[test]
fn legacy_dependent_field_is_accepted() {
    let catalog = CourseMapBuilder::new()
        .legacy_course("Alt", "M1", &["M9"])
        .build();

    assert_eq!(catalog.entries[0].dependent_module_ids, vec!["M9".to_string()]);
    assert_eq!(catalog.deps.dependents_of("M1"), ["M9".to_string()]);
}

#[test]
fn current_dependent_field_wins_over_legacy_one() {
    let catalog = CourseMapBuilder::new()
        .raw(
            "Both",
            json!({ "Modul": "M1", "dependentModules": ["M2"], "Voraussetzung": ["M3"] }),
        )
        .build();

    assert_eq!(catalog.entries[0].dependent_module_ids, vec!["M2".to_string()]);
}

#[test]
fn missing_dependent_list_is_empty() {
    let catalog = CourseMapBuilder::new()
        .raw("Solo", json!({ "Modul": "M1" }))
        .build();

    assert!(catalog.entries[0].dependent_module_ids.is_empty());
    assert!(catalog.deps.contains("M1"));
    assert_eq!(catalog.entries[0].semester, None);
}

#[test]
fn missing_module_reference_rejects_whole_catalog() {
    let doc = CourseMapBuilder::new()
        .course("Fine", "M1", &[], Some(1))
        .raw("Broken", json!({ "dependentModules": ["M1"], "semester": 2 }))
        .to_json();

    match parse_catalog(&doc) {
        Err(CoursegateError::DataShape(msg)) => assert!(msg.contains("Broken")),
        other => panic!("Expected DataShape error, got: {:?}", other),
    }
}

#[test]
fn module_record_without_module_is_a_shape_error() {
    let doc = ModuleListBuilder::new()
        .raw(json!({ "courses": ["Orphan"] }))
        .to_json();

    assert!(matches!(parse_catalog(&doc), Err(CoursegateError::DataShape(_))));
}

#[test]
fn first_module_record_wins_in_index() {
    let catalog = ModuleListBuilder::new()
        .module("M1", &["M2"], &[("A", Some(1))])
        .module("M1", &["M3"], &[("B", Some(2))])
        .build();

    assert_eq!(catalog.deps.len(), 1);
    assert_eq!(catalog.deps.dependents_of("M1"), ["M2".to_string()]);
    // Entries still carry what their own record declared.
    assert_eq!(catalog.entries[1].dependent_module_ids, vec!["M3".to_string()]);
}

#[test]
fn duplicate_course_in_sequence_is_a_shape_error() {
    let doc = ModuleListBuilder::new()
        .module("M1", &[], &[("Twice", Some(1))])
        .module("M2", &[], &[("Twice", Some(2))])
        .to_json();

    match parse_catalog(&doc) {
        Err(CoursegateError::DataShape(msg)) => assert!(msg.contains("Twice")),
        other => panic!("Expected DataShape error, got: {:?}", other),
    }
}

#[test]
fn scalar_top_level_is_a_shape_error() {
    assert!(matches!(parse_catalog("42"), Err(CoursegateError::DataShape(_))));
    assert!(matches!(
        RawCatalog::from_value(json!([1, 2])),
        Err(CoursegateError::DataShape(_))
    ));
}

#[test]
fn raw_record_count_follows_top_level_shape() {
    let by_course = RawCatalog::from_value(
        CourseMapBuilder::new()
            .course("A", "M1", &[], Some(1))
            .course("B", "M1", &[], Some(1))
            .to_value(),
    )
    .unwrap();
    assert_eq!(by_course.len(), 2);

    // One module record with two courses is still one record.
    let by_module = RawCatalog::from_value(json!([
        { "Modul": "M1", "Lehrveranstaltungen": ["A", "B"] }
    ]))
    .unwrap();
    assert_eq!(by_module.len(), 1);

    assert!(RawCatalog::from_value(json!({})).unwrap().is_empty());
}

#[test]
fn invalid_json_is_a_fetch_error() {
    assert!(matches!(parse_catalog("{ not json"), Err(CoursegateError::Fetch(_))));
}

#[test]
fn empty_catalog_is_loaded_not_an_error() {
    let catalog = parse_catalog("{}").unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.deps.is_empty());

    let catalog = parse_catalog("[]").unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn load_through_mock_filesystem() {
    let fs = MockFileSystem::new();
    fs.add_file(
        "data/modules.json",
        CourseMapBuilder::new()
            .course("CourseX", "M1", &["M2"], Some(1))
            .to_json(),
    );

    let catalog = load_catalog(&fs, Path::new("data/modules.json")).unwrap();
    assert_eq!(catalog.entries.len(), 1);
    assert!(catalog.entry("CourseX").is_some());
    assert!(catalog.entry("CourseY").is_none());
}

#[test]
fn missing_file_is_a_fetch_error() {
    let fs = MockFileSystem::new();
    let result = load_catalog(&fs, Path::new("nope.json"));
    assert!(matches!(result, Err(CoursegateError::Fetch(_))));
}

#[test]
fn load_from_real_file_with_cycle() {
    init_tracing();

    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
{{
  "A1": {{ "Modul": "MA", "dependentModules": ["MB"], "semester": 1 }},
  "B1": {{ "Modul": "MB", "dependentModules": ["MA"], "semester": 2 }},
  "C1": {{ "Modul": "MC", "dependentModules": ["MC"] }}
}}
"#
    )
    .unwrap();

    let catalog = load_catalog(&RealFileSystem, file.path()).unwrap();
    assert_eq!(catalog.entries.len(), 3);

    let cycles = find_cycles(&catalog.deps);
    assert_eq!(
        cycles,
        vec![
            vec!["MA".to_string(), "MB".to_string()],
            vec!["MC".to_string()],
        ]
    );
}

fn demo_path(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

#[test]
fn demo_catalogs_load() {
    let by_course = load_catalog(&RealFileSystem, &demo_path("modules.json")).unwrap();
    assert_eq!(by_course.entries.len(), 7);
    assert_eq!(find_cycles(&by_course.deps), vec![vec!["MA".to_string(), "MB".to_string()]]);

    let by_module = load_catalog(&RealFileSystem, &demo_path("modules-by-module.json")).unwrap();
    let ids: Vec<&str> = by_module.entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["Lineare Algebra", "Diskrete Strukturen", "Algorithmen", "Datenbanken"]
    );
    assert_eq!(by_module.entries[2].semester, Some(3));
}
