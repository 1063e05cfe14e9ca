// src/catalog/normalize.rs

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::raw::{RawCatalog, RawModuleFields, RawSequenceItem};
use crate::catalog::{Catalog, CourseEntry};
use crate::errors::{CoursegateError, Result};
use crate::graph::DependencyIndex;

/// Convert a raw catalog into canonical entries plus the dependency index.
///
/// - Every course yields one [`CourseEntry`] in input order.
/// - The index records each owning module's dependents; if a module repeats,
///   the first record wins.
/// - A record without a module reference rejects the whole catalog.
pub fn normalize(raw: RawCatalog) -> Result<Catalog> {
    let mut builder = CatalogBuilder::default();
    let records = raw.len();

    match raw {
        RawCatalog::ByCourse(records) => {
            for (name, fields) in records {
                builder.push_course(name, &fields, fields.semester)?;
            }
        }
        RawCatalog::ByModule(items) => {
            for (idx, item) in items.into_iter().enumerate() {
                match item {
                    RawSequenceItem::Module(record) => {
                        let fields = &record.fields;
                        let module = require_module(fields, || format!("module record #{idx}"))?;
                        let dependents = fields.declared_dependents();
                        builder.deps.insert_first(module.clone(), dependents.clone());

                        for course in &record.courses {
                            builder.push_entry(CourseEntry {
                                id: course.name().to_string(),
                                module_id: module.clone(),
                                dependent_module_ids: dependents.clone(),
                                semester: course.semester().or(fields.semester),
                            })?;
                        }
                    }
                    RawSequenceItem::Course(course) => {
                        let name = course.name.ok_or_else(|| {
                            CoursegateError::DataShape(format!(
                                "course record #{idx} has no course name"
                            ))
                        })?;
                        builder.push_course(name, &course.fields, course.fields.semester)?;
                    }
                }
            }
        }
    }

    let catalog = builder.finish();
    debug!(
        records,
        entries = catalog.entries.len(),
        modules = catalog.deps.len(),
        "normalized catalog"
    );
    Ok(catalog)
}

#[derive(Default)]
struct CatalogBuilder {
    entries: Vec<CourseEntry>,
    seen: HashSet<String>,
    deps: DependencyIndex,
}

impl CatalogBuilder {
    fn push_course(
        &mut self,
        name: String,
        fields: &RawModuleFields,
        semester: Option<u32>,
    ) -> Result<()> {
        let module = require_module(fields, || format!("course '{name}'"))?;
        let dependents = fields.declared_dependents();
        self.deps.insert_first(module.clone(), dependents.clone());
        self.push_entry(CourseEntry {
            id: name,
            module_id: module,
            dependent_module_ids: dependents,
            semester,
        })
    }

    fn push_entry(&mut self, entry: CourseEntry) -> Result<()> {
        if !self.seen.insert(entry.id.clone()) {
            return Err(CoursegateError::DataShape(format!(
                "course '{}' appears more than once",
                entry.id
            )));
        }
        self.entries.push(entry);
        Ok(())
    }

    fn finish(self) -> Catalog {
        Catalog {
            entries: self.entries,
            deps: self.deps,
        }
    }
}

fn require_module(fields: &RawModuleFields, what: impl FnOnce() -> String) -> Result<String> {
    fields.module.clone().ok_or_else(|| {
        CoursegateError::DataShape(format!("{} has no module reference", what()))
    })
}
