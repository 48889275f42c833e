//! Output format handling for pathgraph
//!
//! Supports two output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::{Edge, Path};

/// Output format for pathgraph commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(GraphError::invalid_value(
                "format (expected: human or json)",
                other,
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One line per edge: `parent to child via label`
pub fn edge_lines<N: Display, L: Display>(path: &[Edge<N, L>]) -> Vec<String> {
    path.iter()
        .map(|e| format!("{} to {} via {}", e.parent(), e.child(), e.label()))
        .collect()
}

/// One line per segment plus a closing total, costs at `precision` decimals
pub fn segment_lines<N: Display>(path: &Path<N>, precision: usize) -> Vec<String> {
    let mut lines: Vec<String> = path
        .segments()
        .map(|segment| {
            format!(
                "{} to {} with cost {:.p$}",
                segment.start(),
                segment.end(),
                segment.cost(),
                p = precision
            )
        })
        .collect();
    lines.push(format!("total cost: {:.p$}", path.cost(), p = precision));
    lines
}
