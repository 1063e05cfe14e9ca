use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where the module-dependency traversal starts when a course is failed.
///
/// - `Dependents`: only modules reached over declared dependency edges are
///   blocked. The failed course's own module is blocked only if a cycle leads
///   back to it (default).
/// - `OwnModule`: the failed course's own module is blocked up front and the
///   traversal continues from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalStart {
    #[default]
    Dependents,
    OwnModule,
}

impl TraversalStart {
    pub fn as_str(self) -> &'static str {
        match self {
            TraversalStart::Dependents => "dependents",
            TraversalStart::OwnModule => "own_module",
        }
    }

    /// Whether the failed courses' own modules are seeded as visited.
    pub fn includes_own_module(self) -> bool {
        matches!(self, TraversalStart::OwnModule)
    }
}

impl fmt::Display for TraversalStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraversalStart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "dependents" => Ok(TraversalStart::Dependents),
            "own_module" | "own" => Ok(TraversalStart::OwnModule),
            other => Err(format!(
                "invalid traversal_start: {other} (expected \"dependents\" or \"own_module\")"
            )),
        }
    }
}

/// Mode for storing user preferences (the failed selection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceStorageMode {
    /// Store preferences in a file (`.coursegate/preferences`).
    File,
    /// Keep preferences in memory only (lost on exit).
    #[default]
    Memory,
}
