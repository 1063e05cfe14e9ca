// src/render.rs

//! Text and JSON output of a [`Session`] view.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;

use crate::catalog::CourseId;
use crate::cli::OutputFormat;
use crate::resolve::{BlockReason, BlockedSet};
use crate::session::Session;
use crate::types::TraversalStart;
use crate::view::{GroupKey, ProjectedView, ViewQuery};

/// A failed course together with its module (if the catalog knows it).
#[derive(Debug, Clone, Serialize)]
pub struct FailedChip<'a> {
    pub id: &'a str,
    pub module: Option<&'a str>,
}

/// Everything the presentation layer needs for one frame.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub catalog_loaded: bool,
    pub traversal: TraversalStart,
    pub failed: Vec<FailedChip<'a>>,
    pub blocked: &'a BlockedSet,
    pub view: ProjectedView<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanations: Option<BTreeMap<CourseId, Vec<BlockReason>>>,
}

impl<'a> Report<'a> {
    pub fn build(session: &'a Session, query: &ViewQuery, explain: bool) -> Self {
        let failed = session
            .failed()
            .iter()
            .map(|id| FailedChip {
                id,
                module: session.catalog_entry(id).map(|e| e.module_id.as_str()),
            })
            .collect();

        Self {
            catalog_loaded: session.catalog().is_loaded(),
            traversal: session.traversal(),
            failed,
            blocked: session.blocked(),
            view: session.view(query),
            explanations: explain.then(|| session.explain()),
        }
    }
}

/// Render `session` in the requested format.
pub fn render(
    out: &mut dyn Write,
    session: &Session,
    query: &ViewQuery,
    format: OutputFormat,
    explain: bool,
) -> io::Result<()> {
    let report = Report::build(session, query, explain);
    match format {
        OutputFormat::Text => render_text(out, &report),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)
        }
    }
}

pub fn render_text(out: &mut dyn Write, report: &Report<'_>) -> io::Result<()> {
    if !report.catalog_loaded {
        writeln!(out, "catalog not loaded")?;
        return Ok(());
    }

    if report.failed.is_empty() {
        writeln!(out, "failed: none")?;
    } else {
        let chips: Vec<String> = report
            .failed
            .iter()
            .map(|c| match c.module {
                Some(m) => format!("{} ({})", c.id, m),
                None => c.id.to_string(),
            })
            .collect();
        writeln!(out, "failed: {}", chips.join(", "))?;
    }
    writeln!(
        out,
        "blocked: {} course(s), traversal: {}",
        report.blocked.len(),
        report.traversal
    )?;

    if report.view.is_empty() {
        writeln!(out)?;
        writeln!(out, "no matching courses")?;
    }

    for group in &report.view.groups {
        writeln!(out)?;
        if group.key != GroupKey::All {
            writeln!(out, "== {} ==", group.key)?;
        }
        for row in &group.rows {
            let marker = if row.blocked { "x" } else { " " };
            let deps = if row.entry.dependent_module_ids.is_empty() {
                "none".to_string()
            } else {
                row.entry.dependent_module_ids.join(", ")
            };
            let semester = row
                .entry
                .semester
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(out, "[{marker}] {}", row.entry.id)?;
            writeln!(
                out,
                "      module: {}  dependent modules: {}  semester: {}",
                row.entry.module_id, deps, semester
            )?;
            if let Some(reasons) = report
                .explanations
                .as_ref()
                .and_then(|ex| ex.get(&row.entry.id))
            {
                for reason in reasons {
                    writeln!(out, "      because: {}", describe(reason))?;
                }
            }
        }
    }

    Ok(())
}

fn describe(reason: &BlockReason) -> String {
    match reason {
        BlockReason::SiblingSemester {
            failed,
            failed_semester,
        } => format!("same module as failed '{failed}' (semester {failed_semester})"),
        BlockReason::ModuleReached { module, via: Some(via) } => {
            format!("module {module} depends on {via}")
        }
        BlockReason::ModuleReached { module, via: None } => {
            format!("module {module} contains a failed course")
        }
    }
}
