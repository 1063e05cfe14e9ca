// src/graph/mod.rs

//! Module dependency graph.
//!
//! - [`index`] holds the module -> dependents adjacency built from a catalog.
//! - [`cycles`] reports dependency cycles for diagnostics.

pub mod cycles;
pub mod index;

pub use cycles::find_cycles;
pub use index::DependencyIndex;
