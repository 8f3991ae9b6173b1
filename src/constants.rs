//! Configuration constants for depgraph-export
//!
//! This module contains all configurable constants used throughout the
//! application.

/// Artifact defaults that suppress noisy label segments
pub mod artifact {
    /// Packaging type that is omitted from rendered labels
    pub const DEFAULT_TYPE: &str = "jar";

    /// Scope that is omitted from rendered labels and PlantUML stereotypes
    pub const DEFAULT_SCOPE: &str = "compile";
}

/// Output formatting configuration
pub mod output {
    /// Default graph format when not specified
    pub const DEFAULT_FORMAT: &str = "dot";

    /// Default name used when a listing does not carry one
    pub const DEFAULT_GRAPH_NAME: &str = "dependency-graph";
}
