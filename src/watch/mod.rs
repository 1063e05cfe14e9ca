// src/watch/mod.rs

//! File watching and change detection for `--watch`.
//!
//! - [`watcher`] wires up a cross-platform filesystem watcher (`notify`) for
//!   the catalog file.
//! - [`hash`] keeps content hashes so events that did not change the file
//!   content do not trigger a reload.

pub mod hash;
pub mod watcher;

pub use hash::{compute_file_hash, ContentHashes};
pub use watcher::{spawn_watcher, WatcherHandle};
