// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::TraversalStart;

/// Command-line arguments for `coursegate`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "coursegate",
    version,
    about = "Show which courses become unavailable after failing others.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If the default `Coursegate.toml` does not exist, built-in defaults are
    /// used. An explicitly given path must exist.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Path to the catalog JSON (overrides `[catalog].path`).
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<String>,

    /// Toggle a course in the failed selection. May be repeated.
    ///
    /// Toggling a course that is already failed removes it again.
    #[arg(long = "fail", value_name = "COURSE")]
    pub fail: Vec<String>,

    /// Only list courses whose name or module contains this text.
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Only list courses offered in this semester. May be repeated.
    #[arg(long = "semester", value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub semesters: Vec<u32>,

    /// Sort by semester and print one section per semester.
    #[arg(long)]
    pub group_by_semester: bool,

    /// Where module traversal starts: `dependents` or `own-module`.
    #[arg(long, value_name = "START")]
    pub traversal: Option<TraversalStart>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print why each blocked course is blocked.
    #[arg(long)]
    pub explain: bool,

    /// Forget the stored failed selection before applying `--fail`.
    #[arg(long)]
    pub reset: bool,

    /// Keep running and re-render whenever the catalog file changes.
    #[arg(long)]
    pub watch: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// Applies to coursegate's own log targets. If omitted, `COURSEGATE_LOG`
    /// (a level or a filter directive) or `info` is used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load and validate config + catalog, print the module index, resolve nothing.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// How the view is printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
