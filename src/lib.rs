//! # Depgraph Export - Multi-Format Dependency Graph Rendering
//!
//! depgraph-export renders a resolved dependency graph - nodes are artifacts,
//! edges are resolution relationships - into several textual output formats:
//! DOT/Graphviz, GML, JSON, Mermaid, PlantUML and a plain indented text tree.
//!
//! Dependency resolution itself is out of scope: an external resolver walks
//! the build tool's dependency tree and hands over `(from, to)` artifact
//! pairs that are already tagged with a resolution status.
//!
//! ## Main Components
//!
//! - **Dependency**: the artifact model crossing the resolver boundary
//! - **Graph**: the generic graph model and deduplicating builder
//! - **Format**: one renderer/formatter family per output format
//! - **Style**: layered JSON style configuration with specificity matching
//!
//! ## Usage
//!
//! ### Rendering a graph built through the library API
//!
//! ```
//! use depgraph_export::cli::GraphFormat;
//! use depgraph_export::common::ConfigBuilder;
//! use depgraph_export::dependency::Artifact;
//! use depgraph_export::format::{DisplayConfig, RendererSet};
//! use depgraph_export::graph::GraphBuilder;
//! use depgraph_export::style::StyleConfiguration;
//!
//! # fn main() -> miette::Result<()> {
//! let app = Artifact::builder()
//!     .with_group_id("com.example")
//!     .with_artifact_id("app")
//!     .with_version("1.0.0")
//!     .build()?;
//! let lib = Artifact::builder()
//!     .with_group_id("com.example")
//!     .with_artifact_id("lib")
//!     .with_version("2.0.0")
//!     .with_scope("test")
//!     .build()?;
//!
//! // Pick a format family and feed the resolver's pairs into the builder
//! let renderers = RendererSet::for_format(
//!     GraphFormat::Mermaid,
//!     DisplayConfig::default(),
//!     StyleConfiguration::built_in()?,
//!     false,
//! );
//! let mut builder = GraphBuilder::new(
//!     renderers.node_renderer.as_ref(),
//!     renderers.edge_renderer.as_ref(),
//!     true, // drop self-referential edges
//! );
//! builder.add_edge(Some(&app), Some(&lib));
//!
//! let document = renderers.formatter.format("example", builder.graph())?;
//! assert!(document.starts_with("flowchart TD"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Rendering a resolution listing
//!
//! ```
//! use depgraph_export::cli::GraphFormat;
//! use depgraph_export::format::{DisplayConfig, RendererSet};
//! use depgraph_export::listing::ResolutionListing;
//! use depgraph_export::style::StyleConfiguration;
//!
//! # fn main() -> miette::Result<()> {
//! let listing: ResolutionListing = serde_json::from_str(
//!     r#"{
//!         "graphName": "example",
//!         "dependencies": [
//!             {
//!                 "from": {"groupId": "com.example", "artifactId": "app", "version": "1.0.0"},
//!                 "to": {"groupId": "com.example", "artifactId": "lib", "version": "2.0.0"}
//!             }
//!         ]
//!     }"#,
//! )
//! .map_err(depgraph_export::error::ExportError::Json)?;
//!
//! let renderers = RendererSet::for_format(
//!     GraphFormat::Text,
//!     DisplayConfig::default(),
//!     StyleConfiguration::built_in()?,
//!     false,
//! );
//! let builder = listing.build_graph(
//!     renderers.node_renderer.as_ref(),
//!     renderers.edge_renderer.as_ref(),
//!     true,
//! );
//!
//! let tree = renderers.formatter.format(listing.graph_name(), builder.graph())?;
//! assert_eq!(tree, "com.example:app:1.0.0\n\\- com.example:lib:2.0.0\n");
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod dependency;
pub mod error;
pub mod executors;
pub mod format;
pub mod graph;
pub mod listing;
pub mod style;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
