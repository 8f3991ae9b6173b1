use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ExportError {
    #[error("Style resource '{path}' not found")]
    #[diagnostic(
        code(depgraph_export::style_resource_not_found),
        help("Check the path; a missing style layer is never treated as an empty configuration")
    )]
    StyleResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed style key '{key}': expected at most 5 comma-separated parts, found {parts}")]
    #[diagnostic(
        code(depgraph_export::malformed_style_key),
        help("A style key has the form 'groupId,artifactId,scope,type,version'; trailing parts may be omitted")
    )]
    MalformedStyleKey { key: String, parts: usize },

    #[error("Invalid style configuration in '{path}'")]
    #[diagnostic(
        code(depgraph_export::style_parse_error),
        help("Check the JSON syntax and the node shape type ids (box, polygon, ellipse)")
    )]
    StyleParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read graph listing '{path}'")]
    #[diagnostic(
        code(depgraph_export::listing_error),
        help("The listing must be a JSON document with a graphName and a dependencies array")
    )]
    ListingError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse graph listing '{path}'")]
    #[diagnostic(
        code(depgraph_export::listing_parse_error),
        help("The listing must be a JSON document with a graphName and a dependencies array")
    )]
    ListingParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(depgraph_export::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(depgraph_export::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(depgraph_export::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(depgraph_export::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
