// src/resolve/mod.rs

//! Blocking resolution.
//!
//! - [`failed_set`] holds the user's insertion-ordered failed selection.
//! - [`blocking`] derives the blocked courses from the failed selection, the
//!   catalog entries and the module dependency index.

pub mod blocking;
pub mod failed_set;

pub use blocking::{explain, resolve, BlockReason, BlockedSet};
pub use failed_set::{FailedSet, Toggle};
