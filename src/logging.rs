// src/logging.rs

//! Diagnostics for the `coursegate` binary.
//!
//! stdout carries only the rendered course view, so all diagnostics go to
//! stderr. The filter is built from, in order:
//! 1. `--log-level`, applied to this crate's targets
//! 2. `COURSEGATE_LOG`, either a bare level (`debug`) applied the same way, or
//!    a full filter directive (`coursegate::resolve=trace,notify=info`)
//! 3. `info` for this crate
//!
//! Other crates (`notify`, `tokio`) stay at `warn` unless a directive names them.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

/// Environment variable consulted when `--log-level` is absent.
pub const LOG_ENV_VAR: &str = "COURSEGATE_LOG";

const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Install the global subscriber. Call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let directive = log_directive(cli_level, env_value.as_deref());

    let (filter, rejected) = match EnvFilter::try_new(&directive) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(crate_directive(Level::INFO)), Some(e)),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))?;

    if let Some(e) = rejected {
        tracing::warn!("ignoring {LOG_ENV_VAR}={directive:?}: {e}");
    }
    Ok(())
}

/// Filter directive for the given CLI level and `COURSEGATE_LOG` value.
pub fn log_directive(cli_level: Option<LogLevel>, env_value: Option<&str>) -> String {
    if let Some(lvl) = cli_level {
        return crate_directive(level_from_log_level(lvl));
    }
    match env_value.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => match parse_level_str(raw) {
            Some(level) => crate_directive(level),
            None => raw.to_string(),
        },
        None => crate_directive(Level::INFO),
    }
}

/// Parse a bare level name. `warning` is accepted for `warn`.
pub fn parse_level_str(s: &str) -> Option<Level> {
    match s.trim().to_ascii_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

fn crate_directive(level: Level) -> String {
    format!("warn,{CRATE_TARGET}={}", level.as_str().to_ascii_lowercase())
}

fn level_from_log_level(lvl: LogLevel) -> Level {
    match lvl {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}
