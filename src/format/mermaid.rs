//! Mermaid renderer family
//!
//! Mermaid cannot inline edge styling on the connection statement, so the
//! formatter collects `linkStyle` directives keyed by edge emission position
//! and appends them after all edges.

use std::fmt::Write;

use petgraph::graph::DiGraph;

use super::attributes::transliterate_id;
use super::{DisplayConfig, EdgeRenderer, GraphFormatter, NodeRenderer, compose_label};
use crate::dependency::{Artifact, Resolution, abbreviate_version};
use crate::error::ExportError;
use crate::graph::{GraphEdge, GraphNode};
use crate::style::{EdgeStyle, StyleConfiguration};

pub struct MermaidNodeRenderer {
    display: DisplayConfig,
}

impl MermaidNodeRenderer {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }
}

impl NodeRenderer for MermaidNodeRenderer {
    fn render(&self, artifact: &Artifact) -> String {
        compose_label(artifact, &self.display, "<br/>", 1)
    }
}

pub struct MermaidEdgeRenderer {
    display: DisplayConfig,
}

impl MermaidEdgeRenderer {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }
}

impl EdgeRenderer for MermaidEdgeRenderer {
    fn render(&self, _from: &Artifact, to: &Artifact) -> String {
        match to.resolution {
            Resolution::OmittedForConflict if self.display.versions_on_edges => {
                abbreviate_version(to.effective_version())
            }
            _ => String::new(),
        }
    }
}

pub struct MermaidGraphFormatter {
    styles: StyleConfiguration,
}

impl MermaidGraphFormatter {
    pub fn new(styles: StyleConfiguration) -> Self {
        Self { styles }
    }
}

impl GraphFormatter for MermaidGraphFormatter {
    fn format(
        &self,
        _graph_name: &str,
        graph: &DiGraph<GraphNode, GraphEdge>,
    ) -> Result<String, ExportError> {
        let mut output = String::new();
        writeln!(output, "flowchart TD")?;

        writeln!(output, "  %% Node Definitions:")?;
        for node in graph.node_weights() {
            let id = transliterate_id(&node.id);
            if node.label.is_empty() {
                writeln!(output, "  {id}")?;
            } else {
                writeln!(output, "  {}[\"{}\"]", id, escape_label(&node.label))?;
            }
        }

        writeln!(output)?;
        writeln!(output, "  %% Edge Definitions:")?;
        // labeled edges are the styled ones; directives are positional, so
        // the index must match the emission order above
        let mut edge_styles: Vec<String> = Vec::new();
        for (index, edge) in graph.edge_weights().enumerate() {
            let from = transliterate_id(&edge.from_id);
            let to = transliterate_id(&edge.to_id);
            if edge.label.is_empty() {
                writeln!(output, "  {from} --> {to}")?;
            } else {
                writeln!(output, "  {} --{}--> {}", from, escape_label(&edge.label), to)?;
                if let Some(directive) =
                    link_style(&self.styles.resolution_style(Resolution::OmittedForConflict))
                {
                    edge_styles.push(format!("  linkStyle {index} {directive}"));
                }
            }
        }

        if !edge_styles.is_empty() {
            writeln!(output)?;
            writeln!(output, "  %% Edge Styles:")?;
            for directive in edge_styles {
                writeln!(output, "{directive}")?;
            }
        }

        Ok(output)
    }
}

fn link_style(style: &EdgeStyle) -> Option<String> {
    let color = style.color.as_deref()?;
    let mut directive = format!("color:{color},stroke:{color}");
    if matches!(style.style.as_deref(), Some("dashed") | Some("dotted")) {
        directive.push_str(",stroke-dasharray:3px");
    }
    Some(directive)
}

fn escape_label(label: &str) -> String {
    label.replace('"', "#quot;")
}
