//! Error types and exit codes for pathgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, blank endpoints)
//! - 3: Data error (unknown node or building, duplicate node/edge, invalid cost)
//!
//! A search that exhausts its frontier is not an error; it returns `Ok(None)`.

mod macros;

use thiserror::Error;

/// Exit codes for the pathgraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - graph contents rejected the operation (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors raised by graph construction, path search and the file layers
#[derive(Error, Debug)]
pub enum GraphError {
    /// A required node, label or endpoint was absent
    #[error("missing {what}")]
    MissingArgument { what: String },

    #[error("node not found in graph: {node}")]
    UnknownNode { node: String },

    #[error("unknown building: {name}")]
    UnknownBuilding { name: String },

    #[error("node already exists: {node}")]
    DuplicateNode { node: String },

    #[error("edge already exists: {parent} -> {child} ({label})")]
    DuplicateEdge {
        parent: String,
        child: String,
        label: String,
    },

    /// Negative or NaN cost; path searches require non-negative weights
    #[error("invalid edge cost: {value}")]
    InvalidCost { value: f64 },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    UsageError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Create an error for an absent argument
    pub fn missing(what: &str) -> Self {
        GraphError::MissingArgument {
            what: what.to_string(),
        }
    }

    /// Create an error for a node that is not in the graph
    pub fn unknown_node(node: impl std::fmt::Debug) -> Self {
        GraphError::UnknownNode {
            node: format!("{:?}", node),
        }
    }

    pub fn unknown_building(name: &str) -> Self {
        GraphError::UnknownBuilding {
            name: name.to_string(),
        }
    }

    pub fn duplicate_node(node: impl std::fmt::Debug) -> Self {
        GraphError::DuplicateNode {
            node: format!("{:?}", node),
        }
    }

    pub fn duplicate_edge(
        parent: impl std::fmt::Debug,
        child: impl std::fmt::Debug,
        label: impl std::fmt::Debug,
    ) -> Self {
        GraphError::DuplicateEdge {
            parent: format!("{:?}", parent),
            child: format!("{:?}", child),
            label: format!("{:?}", label),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::MissingArgument { .. }
            | GraphError::InvalidValue { .. }
            | GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::UnknownNode { .. }
            | GraphError::UnknownBuilding { .. }
            | GraphError::DuplicateNode { .. }
            | GraphError::DuplicateEdge { .. }
            | GraphError::InvalidCost { .. } => ExitCode::Data,

            GraphError::Io(_) | GraphError::Toml(_) | GraphError::Json(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::MissingArgument { .. } => "missing_argument",
            GraphError::UnknownNode { .. } => "unknown_node",
            GraphError::UnknownBuilding { .. } => "unknown_building",
            GraphError::DuplicateNode { .. } => "duplicate_node",
            GraphError::DuplicateEdge { .. } => "duplicate_edge",
            GraphError::InvalidCost { .. } => "invalid_cost",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::UsageError(_) => "usage_error",
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Json(_) => "json_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for pathgraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
