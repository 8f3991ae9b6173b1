//! GML renderer family
//!
//! GML has no inline styling; nodes carry a transliterated id and a display
//! label, edges carry the conflict version when one is shown.

use std::fmt::Write;

use petgraph::graph::DiGraph;

use super::attributes::transliterate_id;
use super::{DisplayConfig, EdgeRenderer, GraphFormatter, NodeRenderer, compose_label};
use crate::dependency::{Artifact, Resolution, abbreviate_version};
use crate::error::ExportError;
use crate::graph::{GraphEdge, GraphNode};

pub struct GmlNodeRenderer {
    display: DisplayConfig,
}

impl GmlNodeRenderer {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }
}

impl NodeRenderer for GmlNodeRenderer {
    fn render(&self, artifact: &Artifact) -> String {
        compose_label(artifact, &self.display, "\n", 1)
    }
}

pub struct GmlEdgeRenderer {
    display: DisplayConfig,
}

impl GmlEdgeRenderer {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }
}

impl EdgeRenderer for GmlEdgeRenderer {
    fn render(&self, _from: &Artifact, to: &Artifact) -> String {
        match to.resolution {
            Resolution::OmittedForConflict if self.display.versions_on_edges => {
                abbreviate_version(to.effective_version())
            }
            _ => String::new(),
        }
    }
}

pub struct GmlGraphFormatter;

impl GraphFormatter for GmlGraphFormatter {
    fn format(
        &self,
        _graph_name: &str,
        graph: &DiGraph<GraphNode, GraphEdge>,
    ) -> Result<String, ExportError> {
        let mut output = String::new();
        writeln!(output, "graph [")?;

        for node in graph.node_weights() {
            writeln!(output, "  node [")?;
            writeln!(output, "    id \"{}\"", transliterate_id(&node.id))?;
            if !node.label.is_empty() {
                writeln!(output, "    label \"{}\"", escape_label(&node.label))?;
            }
            writeln!(output, "  ]")?;
        }

        for edge in graph.edge_weights() {
            writeln!(output, "  edge [")?;
            writeln!(output, "    source \"{}\"", transliterate_id(&edge.from_id))?;
            writeln!(output, "    target \"{}\"", transliterate_id(&edge.to_id))?;
            if !edge.label.is_empty() {
                writeln!(output, "    label \"{}\"", escape_label(&edge.label))?;
            }
            writeln!(output, "  ]")?;
        }

        writeln!(output, "]")?;
        Ok(output)
    }
}

fn escape_label(label: &str) -> String {
    label.replace('&', "&amp;").replace('"', "&quot;")
}
