//! Error types and exit codes for graphstep
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown algorithm, invalid value)
//! - 3: Graph error (missing vertex, dangling edge, duplicate label, etc.)
//!
//! "No path found" is not an error: searches report it as `reachable: false`.

mod macros;

use thiserror::Error;

/// Exit codes for the graphstep binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Graph error - rejected precondition or malformed graph (3)
    Graph = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while editing graphs, running searches or playing traces
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: bfs, dfs, dijkstra, or astar)")]
    UnknownAlgorithm(String),

    #[error("unknown representation: {0} (expected: list, adjacency-matrix, or incidence-matrix)")]
    UnknownRepresentation(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    UsageError(String),

    // Graph errors (exit code 3)
    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("vertex not found: {label}")]
    VertexNotFound { label: String },

    #[error("start and end vertex must differ (both are {label})")]
    SameEndpoints { label: String },

    #[error("vertex already exists: {label}")]
    DuplicateVertex { label: String },

    #[error("vertex label must not be empty")]
    EmptyLabel,

    #[error("edge cost for {key} must be finite and non-negative, got {cost}")]
    NegativeCost { key: String, cost: f64 },

    #[error("edge #{index} ({from} -> {to}) references unknown vertex {label}")]
    DanglingEdge {
        index: usize,
        from: String,
        to: String,
        label: String,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse config from {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a label that does not name a vertex
    pub fn vertex_not_found(label: &str) -> Self {
        GraphError::VertexNotFound {
            label: label.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UnknownAlgorithm(_)
            | GraphError::UnknownRepresentation(_)
            | GraphError::InvalidValue { .. }
            | GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::EmptyGraph
            | GraphError::VertexNotFound { .. }
            | GraphError::SameEndpoints { .. }
            | GraphError::DuplicateVertex { .. }
            | GraphError::EmptyLabel
            | GraphError::NegativeCost { .. }
            | GraphError::DanglingEdge { .. } => ExitCode::Graph,

            GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml { .. }
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Stable identifier of the error kind
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UnknownAlgorithm(_) => "unknown_algorithm",
            GraphError::UnknownRepresentation(_) => "unknown_representation",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::UsageError(_) => "usage_error",
            GraphError::EmptyGraph => "empty_graph",
            GraphError::VertexNotFound { .. } => "vertex_not_found",
            GraphError::SameEndpoints { .. } => "same_endpoints",
            GraphError::DuplicateVertex { .. } => "duplicate_vertex",
            GraphError::EmptyLabel => "empty_label",
            GraphError::NegativeCost { .. } => "negative_cost",
            GraphError::DanglingEdge { .. } => "dangling_edge",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml { .. } => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// True for rejected preconditions (the caller passed something unusable)
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            GraphError::EmptyGraph
                | GraphError::VertexNotFound { .. }
                | GraphError::SameEndpoints { .. }
                | GraphError::DuplicateVertex { .. }
                | GraphError::EmptyLabel
                | GraphError::NegativeCost { .. }
                | GraphError::InvalidValue { .. }
        )
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

/// Result type alias for graphstep operations
pub type Result<T> = std::result::Result<T, GraphError>;
