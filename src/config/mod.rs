//! # Configuration Module
//!
//! This module provides configuration structures for the depgraph-export
//! commands. Each command has its own config module with builder patterns
//! for easy construction.
//!
//! ## Command Configurations
//!
//! - **RenderOptions**: Configuration for the `render` command
//! - **CheckStyleOptions**: Configuration for the `check-style` command
//!
//! ## Example
//!
//! ```
//! use depgraph_export::cli::GraphFormat;
//! use depgraph_export::config::RenderOptions;
//! use depgraph_export::format::DisplayConfig;
//!
//! // Each configuration struct provides a builder pattern with with_*
//! // methods for each field
//! let builder = RenderOptions::builder()
//!     .with_listing("graph.json".into())
//!     .with_format(GraphFormat::Mermaid)
//!     .with_output(None)
//!     .with_styles(vec![])
//!     .with_display(DisplayConfig::default())
//!     .with_omit_self_references(true)
//!     .with_repeat_transitive_dependencies(false);
//! ```

pub mod check_style;
pub mod render;

pub use check_style::CheckStyleOptions;
pub use render::RenderOptions;
