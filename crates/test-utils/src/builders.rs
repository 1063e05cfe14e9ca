#![allow(dead_code)]

use serde_json::{json, Map, Value};

use coursegate::catalog::{parse_catalog, Catalog, CourseEntry};
use coursegate::config::{ConfigFile, RawConfigFile};
use coursegate::types::{PreferenceStorageMode, TraversalStart};

/// Shorthand for a [`CourseEntry`] in resolver and view tests.
pub fn entry(id: &str, module: &str, dependents: &[&str], semester: Option<u32>) -> CourseEntry {
    CourseEntry::new(
        id,
        module,
        dependents.iter().map(|d| d.to_string()).collect(),
        semester,
    )
}

/// Builder for a mapping-shaped catalog document:
/// `{ "<course>": { "Modul": .., "dependentModules": [..], "semester": .. } }`.
pub struct CourseMapBuilder {
    courses: Map<String, Value>,
}

impl CourseMapBuilder {
    pub fn new() -> Self {
        Self {
            courses: Map::new(),
        }
    }

    pub fn course(mut self, name: &str, module: &str, dependents: &[&str], semester: Option<u32>) -> Self {
        let mut record = json!({
            "Modul": module,
            "dependentModules": dependents,
        });
        if let Some(s) = semester {
            record["semester"] = json!(s);
        }
        self.courses.insert(name.to_string(), record);
        self
    }

    /// Same as [`course`](Self::course) but uses the legacy `Voraussetzung`
    /// field for the dependent list.
    pub fn legacy_course(mut self, name: &str, module: &str, dependents: &[&str]) -> Self {
        self.courses.insert(
            name.to_string(),
            json!({ "Modul": module, "Voraussetzung": dependents }),
        );
        self
    }

    /// Insert an arbitrary record, e.g. a malformed one.
    pub fn raw(mut self, name: &str, record: Value) -> Self {
        self.courses.insert(name.to_string(), record);
        self
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.courses.clone())
    }

    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    pub fn build(self) -> Catalog {
        parse_catalog(&self.to_json()).expect("Failed to build catalog from builder")
    }
}

impl Default for CourseMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a sequence-shaped catalog document:
/// `[ { "Modul": .., "dependentModules": [..], "courses": [..] } ]`.
pub struct ModuleListBuilder {
    modules: Vec<Value>,
}

impl ModuleListBuilder {
    pub fn new() -> Self {
        Self { modules: vec![] }
    }

    /// A module record whose courses carry their own semester.
    pub fn module(mut self, module: &str, dependents: &[&str], courses: &[(&str, Option<u32>)]) -> Self {
        let courses: Vec<Value> = courses
            .iter()
            .map(|(name, semester)| match semester {
                Some(s) => json!({ "name": name, "semester": s }),
                None => json!(name),
            })
            .collect();
        self.modules.push(json!({
            "Modul": module,
            "dependentModules": dependents,
            "courses": courses,
        }));
        self
    }

    pub fn raw(mut self, record: Value) -> Self {
        self.modules.push(record);
        self
    }

    pub fn to_json(&self) -> String {
        Value::Array(self.modules.clone()).to_string()
    }

    pub fn build(self) -> Catalog {
        parse_catalog(&self.to_json()).expect("Failed to build catalog from builder")
    }
}

impl Default for ModuleListBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn with_catalog_path(mut self, path: &str) -> Self {
        self.config.catalog.path = path.to_string();
        self
    }

    pub fn with_traversal(mut self, start: TraversalStart) -> Self {
        self.config.resolver.traversal_start = start;
        self
    }

    pub fn with_failed(mut self, id: &str) -> Self {
        self.config.selection.failed.push(id.to_string());
        self
    }

    pub fn with_semester(mut self, semester: u32) -> Self {
        self.config.view.semesters.push(semester);
        self
    }

    pub fn with_search(mut self, text: &str) -> Self {
        self.config.view.search = text.to_string();
        self
    }

    pub fn with_group_by_semester(mut self, val: bool) -> Self {
        self.config.view.group_by_semester = val;
        self
    }

    pub fn with_storage(mut self, mode: PreferenceStorageMode) -> Self {
        self.config.preferences.storage = mode;
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
