//! Resolution listing input
//!
//! The dependency resolver is an external collaborator; its finished output
//! reaches this tool as a JSON listing of `(from, to)` artifact pairs in
//! traversal order. Either endpoint may be absent, which the graph builder
//! treats as a no-op pair for a root-only graph.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::constants::output::DEFAULT_GRAPH_NAME;
use crate::dependency::Artifact;
use crate::error::ExportError;
use crate::format::{EdgeRenderer, NodeRenderer};
use crate::graph::GraphBuilder;

/// One resolved pair handed over by the resolver
#[derive(Debug, Clone, Deserialize)]
pub struct ResolutionPair {
    #[serde(default)]
    pub from: Option<Artifact>,
    #[serde(default)]
    pub to: Option<Artifact>,
}

/// A pre-built dependency graph in resolver traversal order
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionListing {
    #[serde(default)]
    graph_name: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<ResolutionPair>,
}

impl ResolutionListing {
    /// Read a listing from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ExportError> {
        let raw = fs::read_to_string(path).map_err(|source| ExportError::ListingError {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ExportError::ListingParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn graph_name(&self) -> &str {
        self.graph_name.as_deref().unwrap_or(DEFAULT_GRAPH_NAME)
    }

    /// Feed every pair into a graph builder, in listing order.
    pub fn populate(&self, builder: &mut GraphBuilder<'_>) {
        for pair in &self.dependencies {
            builder.add_edge(pair.from.as_ref(), pair.to.as_ref());
        }
    }

    /// Convenience for building the whole graph in one call.
    pub fn build_graph<'a>(
        &self,
        node_renderer: &'a dyn NodeRenderer,
        edge_renderer: &'a dyn EdgeRenderer,
        omit_self_references: bool,
    ) -> GraphBuilder<'a> {
        let mut builder = GraphBuilder::new(node_renderer, edge_renderer, omit_self_references);
        self.populate(&mut builder);
        builder
    }
}
