// src/engine/mod.rs

//! Watch-mode engine.
//!
//! The pure state machine lives in [`core`]; the async shell that reads
//! events from channels and writes rendered frames is [`runtime`].

use std::path::PathBuf;

/// Events flowing into the runtime from the watcher and signal handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A watched source file was created, modified or removed.
    SourceChanged(PathBuf),
    /// Graceful shutdown requested (e.g. Ctrl-C).
    ShutdownRequested,
}

pub mod core;
pub mod runtime;

pub use self::core::{CoreRuntime, CoreStep};
pub use runtime::Runtime;
