// tests/config_loading.rs

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use tempfile::NamedTempFile;

use coursegate::cli::{CliArgs, OutputFormat};
use coursegate::config::{config_root_dir, load_and_validate, load_or_default, ConfigFile, Settings};
use coursegate::errors::CoursegateError;
use coursegate::types::{PreferenceStorageMode, TraversalStart};
use coursegate_test_utils::builders::ConfigFileBuilder;

fn args(argv: &[&str]) -> CliArgs {
    let mut full = vec!["coursegate"];
    full.extend_from_slice(argv);
    CliArgs::try_parse_from(full).unwrap()
}

#[test]
fn full_config_parses() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[catalog]
path = "public/data/modules.json"

[resolver]
traversal_start = "own_module"

[view]
search = "analysis"
semesters = [1, 2]
group_by_semester = true

[selection]
failed = ["Analysis 1"]

[preferences]
storage = "file"
"#
    )
    .unwrap();

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.catalog.path, "public/data/modules.json");
    assert_eq!(cfg.resolver.traversal_start, TraversalStart::OwnModule);
    assert_eq!(cfg.view.semesters, vec![1, 2]);
    assert!(cfg.view.group_by_semester);
    assert_eq!(cfg.selection.failed, vec!["Analysis 1".to_string()]);
    assert_eq!(cfg.preferences.storage, PreferenceStorageMode::File);
}

#[test]
fn empty_config_uses_defaults() {
    let file = NamedTempFile::new().unwrap();

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.catalog.path, "modules.json");
    assert_eq!(cfg.resolver.traversal_start, TraversalStart::Dependents);
    assert_eq!(cfg.preferences.storage, PreferenceStorageMode::Memory);
    assert!(cfg.selection.failed.is_empty());
}

#[test]
fn unknown_traversal_is_a_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[resolver]
traversal_start = "everywhere"
"#
    )
    .unwrap();

    match load_and_validate(file.path()) {
        Err(CoursegateError::TomlError(_)) => {}
        other => panic!("Expected TomlError, got: {:?}", other),
    }
}

#[test]
fn semester_zero_is_rejected() {
    let result = ConfigFile::try_from(ConfigFileBuilder::new().with_semester(0).raw());
    match result {
        Err(CoursegateError::ConfigError(msg)) => assert!(msg.contains("semesters")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn duplicate_failed_ids_are_rejected() {
    let raw = ConfigFileBuilder::new()
        .with_failed("Analysis 1")
        .with_failed("Analysis 1")
        .raw();
    assert!(matches!(
        ConfigFile::try_from(raw),
        Err(CoursegateError::ConfigError(_))
    ));
}

#[test]
fn empty_catalog_path_is_rejected() {
    let raw = ConfigFileBuilder::new().with_catalog_path("  ").raw();
    assert!(matches!(
        ConfigFile::try_from(raw),
        Err(CoursegateError::ConfigError(_))
    ));
}

#[test]
fn missing_explicit_config_is_an_io_error() {
    let result = load_or_default(Some(Path::new("/definitely/not/here/Coursegate.toml")));
    assert!(matches!(result, Err(CoursegateError::IoError(_))));
}

#[test]
fn config_root_is_config_parent() {
    assert_eq!(
        config_root_dir(Some(Path::new("configs/Coursegate.toml"))),
        PathBuf::from("configs")
    );
}

#[test]
fn settings_take_config_values_without_flags() {
    let cfg = ConfigFileBuilder::new()
        .with_catalog_path("data/modules.json")
        .with_traversal(TraversalStart::OwnModule)
        .with_semester(2)
        .with_search("ana")
        .with_failed("Analysis 1")
        .with_storage(PreferenceStorageMode::File)
        .build();

    let settings = Settings::resolve(&cfg, &args(&[]), Path::new("/root/project"));

    assert_eq!(settings.catalog_path, PathBuf::from("/root/project/data/modules.json"));
    assert_eq!(settings.traversal, TraversalStart::OwnModule);
    assert_eq!(settings.query.search, "ana");
    assert!(settings.query.semesters.contains(&2));
    assert_eq!(settings.preferences, PreferenceStorageMode::File);
    assert_eq!(settings.state_root, PathBuf::from("/root/project"));
    assert_eq!(settings.initial_failed.as_slice(), ["Analysis 1"]);
    assert_eq!(settings.format, OutputFormat::Text);
}

#[test]
fn cli_flags_override_config() {
    let cfg = ConfigFileBuilder::new()
        .with_traversal(TraversalStart::OwnModule)
        .with_semester(2)
        .with_search("ana")
        .build();

    let cli = args(&[
        "--catalog",
        "other.json",
        "--traversal",
        "dependents",
        "--semester",
        "3",
        "--semester",
        "4",
        "--search",
        "lin",
        "--group-by-semester",
        "--format",
        "json",
    ]);
    let settings = Settings::resolve(&cfg, &cli, Path::new("/root/project"));

    assert_eq!(settings.catalog_path, PathBuf::from("other.json"));
    assert_eq!(settings.traversal, TraversalStart::Dependents);
    assert_eq!(settings.query.semesters.iter().copied().collect::<Vec<_>>(), vec![3, 4]);
    assert_eq!(settings.query.search, "lin");
    assert!(settings.query.group_by_semester);
    assert_eq!(settings.format, OutputFormat::Json);
}

#[test]
fn cli_rejects_semester_zero() {
    assert!(CliArgs::try_parse_from(["coursegate", "--semester", "0"]).is_err());
}

#[test]
fn traversal_flag_accepts_dashed_spelling() {
    let cli = args(&["--traversal", "own-module"]);
    assert_eq!(cli.traversal, Some(TraversalStart::OwnModule));
}
