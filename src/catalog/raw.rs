// src/catalog/raw.rs

//! Raw catalog shapes as served by the catalog endpoint.
//!
//! Two top-level shapes are accepted:
//!
//! ```json
//! { "Analysis 1": { "Modul": "M1", "dependentModules": ["M2"], "semester": 1 } }
//! ```
//!
//! ```json
//! [ { "Modul": "M1", "Voraussetzung": ["M2"], "courses": ["Analysis 1"] } ]
//! ```
//!
//! The shape is decided exactly once, in [`RawCatalog::from_value`], by looking
//! at whether the top-level value is a mapping or a sequence and whether a
//! sequence item carries a course list.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::{CoursegateError, Result};

/// Field names under which a module record carries its course list.
const COURSE_LIST_FIELDS: &[&str] = &["courses", "Lehrveranstaltungen", "lehrveranstaltungen"];

/// Fields shared by every record that refers to a module.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawModuleFields {
    #[serde(default, rename = "Modul", alias = "modul", alias = "module")]
    pub module: Option<String>,

    /// Current name of the dependent-module list.
    #[serde(default, rename = "dependentModules")]
    pub dependent_modules: Option<Vec<String>>,

    /// Legacy name of the same list.
    #[serde(default, rename = "Voraussetzung")]
    pub voraussetzung: Option<Vec<String>>,

    #[serde(default)]
    pub semester: Option<u32>,
}

impl RawModuleFields {
    /// Declared dependents: `dependentModules` wins over `Voraussetzung`,
    /// and a missing list is empty.
    pub fn declared_dependents(&self) -> Vec<String> {
        self.dependent_modules
            .as_ref()
            .or(self.voraussetzung.as_ref())
            .cloned()
            .unwrap_or_default()
    }
}

/// A course record in a sequence-shaped catalog that is not a module record.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNamedCourse {
    #[serde(default, rename = "name", alias = "Lehrveranstaltung", alias = "lehrveranstaltung")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub fields: RawModuleFields,
}

/// A module record that owns its own course list.
#[derive(Debug, Clone, Deserialize)]
pub struct RawModuleRecord {
    #[serde(flatten)]
    pub fields: RawModuleFields,

    #[serde(
        default,
        rename = "courses",
        alias = "Lehrveranstaltungen",
        alias = "lehrveranstaltungen"
    )]
    pub courses: Vec<RawCourseItem>,
}

/// One item of a module record's course list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCourseItem {
    Name(String),
    Detailed {
        #[serde(alias = "Lehrveranstaltung", alias = "lehrveranstaltung")]
        name: String,
        #[serde(default)]
        semester: Option<u32>,
    },
}

impl RawCourseItem {
    pub fn name(&self) -> &str {
        match self {
            RawCourseItem::Name(name) => name,
            RawCourseItem::Detailed { name, .. } => name,
        }
    }

    pub fn semester(&self) -> Option<u32> {
        match self {
            RawCourseItem::Name(_) => None,
            RawCourseItem::Detailed { semester, .. } => *semester,
        }
    }
}

/// An item of a sequence-shaped catalog.
#[derive(Debug, Clone)]
pub enum RawSequenceItem {
    Module(RawModuleRecord),
    Course(RawNamedCourse),
}

/// The raw catalog, discriminated by shape.
#[derive(Debug, Clone)]
pub enum RawCatalog {
    /// Mapping from course name to its record, in document order.
    ByCourse(Vec<(String, RawModuleFields)>),
    /// Sequence of module records (or flat named course records).
    ByModule(Vec<RawSequenceItem>),
}

impl RawCatalog {
    /// Parse a JSON document into a raw catalog.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(value)
    }

    /// Dispatch on the structure of an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => {
                let mut records = Vec::with_capacity(map.len());
                for (name, record) in map {
                    let fields: RawModuleFields =
                        serde_json::from_value(record).map_err(|e| {
                            CoursegateError::DataShape(format!("course '{name}': {e}"))
                        })?;
                    records.push((name, fields));
                }
                Ok(RawCatalog::ByCourse(records))
            }
            Value::Array(items) => {
                let mut records = Vec::with_capacity(items.len());
                for (idx, item) in items.into_iter().enumerate() {
                    records.push(sequence_item(idx, item)?);
                }
                Ok(RawCatalog::ByModule(records))
            }
            other => Err(CoursegateError::DataShape(format!(
                "catalog must be a mapping or a sequence, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Number of top-level records: courses for the mapping shape, module
    /// or course records for the sequence shape.
    pub fn len(&self) -> usize {
        match self {
            RawCatalog::ByCourse(records) => records.len(),
            RawCatalog::ByModule(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn sequence_item(idx: usize, item: Value) -> Result<RawSequenceItem> {
    let has_course_list = match &item {
        Value::Object(map) => COURSE_LIST_FIELDS.iter().any(|f| map.contains_key(*f)),
        other => {
            return Err(CoursegateError::DataShape(format!(
                "catalog item #{idx} must be a record, got {}",
                json_kind(other)
            )));
        }
    };

    let shape_err = |e: serde_json::Error| {
        CoursegateError::DataShape(format!("catalog item #{idx}: {e}"))
    };

    if has_course_list {
        serde_json::from_value(item)
            .map(RawSequenceItem::Module)
            .map_err(shape_err)
    } else {
        serde_json::from_value(item)
            .map(RawSequenceItem::Course)
            .map_err(shape_err)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
