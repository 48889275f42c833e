//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathgraphConfig {
    /// Path search behaviour
    #[serde(default)]
    pub search: SearchConfig,

    /// Result printing
    #[serde(default)]
    pub output: OutputConfig,
}

/// Secondary ordering for equal-cost partial paths in the weighted search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Lexicographic order of the node sequence of each path
    #[default]
    NodeSequence,
    /// First pushed, first popped
    Insertion,
}

impl std::str::FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "node-sequence" => Ok(TieBreak::NodeSequence),
            "insertion" => Ok(TieBreak::Insertion),
            other => Err(format!(
                "unknown tie-break '{}' (expected: node-sequence, insertion)",
                other
            )),
        }
    }
}

/// Configuration for the path searches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub tie_break: TieBreak,

    /// Run graph invariant checks before each search and after each mutation
    #[serde(default)]
    pub check_invariants: bool,
}

/// Configuration for printing results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places used when printing costs and coordinates
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    3
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            precision: default_precision(),
        }
    }
}
