//! DOT (Graphviz) renderer family
//!
//! Node and edge labels are complete DOT attribute lists, so the formatter
//! only has to splice them after the quoted node ids. Default node and edge
//! attributes from the style configuration are emitted once in the header.

use std::fmt::Write;

use petgraph::graph::DiGraph;

use super::attributes::DotAttributeBuilder;
use super::{DisplayConfig, EdgeRenderer, GraphFormatter, NodeRenderer, compose_label};
use crate::dependency::{Artifact, Resolution, abbreviate_version};
use crate::error::ExportError;
use crate::graph::{GraphEdge, GraphNode};
use crate::style::{EdgeStyle, NodeStyle, StyleConfiguration};

pub struct DotNodeRenderer {
    display: DisplayConfig,
    styles: StyleConfiguration,
}

impl DotNodeRenderer {
    pub fn new(display: DisplayConfig, styles: StyleConfiguration) -> Self {
        Self { display, styles }
    }
}

impl NodeRenderer for DotNodeRenderer {
    fn render(&self, artifact: &Artifact) -> String {
        let label = compose_label(artifact, &self.display, "\n", 1);
        let style = self.styles.matching_node_style(artifact);

        let builder = DotAttributeBuilder::new().add("label", &label);
        node_style_attributes(builder, &style).build()
    }
}

pub struct DotEdgeRenderer {
    display: DisplayConfig,
    styles: StyleConfiguration,
}

impl DotEdgeRenderer {
    pub fn new(display: DisplayConfig, styles: StyleConfiguration) -> Self {
        Self { display, styles }
    }
}

impl EdgeRenderer for DotEdgeRenderer {
    fn render(&self, _from: &Artifact, to: &Artifact) -> String {
        match to.resolution {
            Resolution::Included | Resolution::Parent => String::new(),
            Resolution::OmittedForConflict => {
                let mut builder = DotAttributeBuilder::new();
                if self.display.versions_on_edges {
                    builder = builder.add("label", &abbreviate_version(to.effective_version()));
                }
                edge_style_attributes(builder, &self.styles.matching_edge_style(to)).build()
            }
            Resolution::OmittedForDuplicate => {
                edge_style_attributes(DotAttributeBuilder::new(), &self.styles.matching_edge_style(to))
                    .build()
            }
        }
    }
}

pub struct DotGraphFormatter {
    styles: StyleConfiguration,
}

impl DotGraphFormatter {
    pub fn new(styles: StyleConfiguration) -> Self {
        Self { styles }
    }
}

impl GraphFormatter for DotGraphFormatter {
    fn format(
        &self,
        graph_name: &str,
        graph: &DiGraph<GraphNode, GraphEdge>,
    ) -> Result<String, ExportError> {
        let mut output = String::new();
        writeln!(output, "digraph \"{}\" {{", escape_quotes(graph_name))?;

        let node_defaults =
            node_style_attributes(DotAttributeBuilder::new(), self.styles.default_node()).build();
        if !node_defaults.is_empty() {
            writeln!(output, "  node {node_defaults}")?;
        }
        let edge_defaults =
            edge_style_attributes(DotAttributeBuilder::new(), self.styles.default_edge()).build();
        if !edge_defaults.is_empty() {
            writeln!(output, "  edge {edge_defaults}")?;
        }

        writeln!(output)?;
        for node in graph.node_weights() {
            writeln!(output, "  \"{}\"{}", escape_quotes(&node.id), node.label)?;
        }

        if graph.edge_count() > 0 {
            writeln!(output)?;
            for edge in graph.edge_weights() {
                writeln!(
                    output,
                    "  \"{}\" -> \"{}\"{}",
                    escape_quotes(&edge.from_id),
                    escape_quotes(&edge.to_id),
                    edge.label
                )?;
            }
        }

        writeln!(output, "}}")?;
        Ok(output)
    }
}

fn escape_quotes(value: &str) -> String {
    value.replace('"', "\\\"")
}

fn node_style_attributes(mut builder: DotAttributeBuilder, style: &NodeStyle) -> DotAttributeBuilder {
    if let Some(shape) = &style.shape {
        builder = builder.add("shape", shape.dot_shape());
        if let Some(sides) = shape.dot_sides() {
            builder = builder.add("sides", &sides.to_string());
        }
    }
    if let Some(color) = &style.color {
        builder = builder.add("color", color);
    }
    if let Some(fill_color) = &style.fill_color {
        builder = builder.add("style", "filled").add("fillcolor", fill_color);
    }
    if let Some(font) = &style.font {
        if let Some(name) = &font.name {
            builder = builder.add("fontname", name);
        }
        if let Some(size) = font.size {
            builder = builder.add("fontsize", &size.to_string());
        }
        if let Some(color) = &font.color {
            builder = builder.add("fontcolor", color);
        }
    }
    builder
}

fn edge_style_attributes(mut builder: DotAttributeBuilder, style: &EdgeStyle) -> DotAttributeBuilder {
    if let Some(line_style) = &style.style {
        builder = builder.add("style", line_style);
    }
    if let Some(color) = &style.color {
        builder = builder.add("color", color);
    }
    if let Some(font) = &style.font {
        if let Some(name) = &font.name {
            builder = builder.add("fontname", name);
        }
        if let Some(size) = font.size {
            builder = builder.add("fontsize", &size.to_string());
        }
        if let Some(color) = &font.color {
            builder = builder.add("fontcolor", color);
        }
    }
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    fn artifact(name: &str) -> Artifact {
        Artifact::builder()
            .with_group_id("com.example")
            .with_artifact_id(name)
            .with_version("1.0.0")
            .build()
            .unwrap()
    }

    #[test]
    fn test_node_renders_attribute_list() {
        let renderer =
            DotNodeRenderer::new(DisplayConfig::default(), StyleConfiguration::default());
        let rendered = renderer.render(&artifact("app"));
        assert_eq!(rendered, r#"[label="com.example\napp\n1.0.0"]"#);
    }

    #[test]
    fn test_node_style_rule_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        std::fs::write(
            &path,
            r##"{"nodeRules": {"com.example*,,,,": {"fillColor": "#E3F2FD"}}}"##,
        )
        .unwrap();
        let styles = StyleConfiguration::load(&path).unwrap();

        let renderer = DotNodeRenderer::new(DisplayConfig::default(), styles);
        let rendered = renderer.render(&artifact("app"));
        assert!(rendered.contains(r##"fillcolor="#E3F2FD""##));
        assert!(rendered.contains(r#"style="filled""#));
    }

    #[test]
    fn test_included_edge_renders_nothing() {
        let renderer =
            DotEdgeRenderer::new(DisplayConfig::default(), StyleConfiguration::default());
        assert_eq!(renderer.render(&artifact("a"), &artifact("b")), "");
    }

    #[test]
    fn test_conflict_edge_shows_abbreviated_version() {
        let renderer =
            DotEdgeRenderer::new(DisplayConfig::default(), StyleConfiguration::built_in().unwrap());
        let conflicting = Artifact::builder()
            .with_group_id("com.example")
            .with_artifact_id("lib")
            .with_version("1.0.0")
            .with_effective_version("2.0.0-SNAPSHOT")
            .with_resolution(Resolution::OmittedForConflict)
            .build()
            .unwrap();

        let rendered = renderer.render(&artifact("app"), &conflicting);
        assert!(rendered.contains(r#"label="2.0.0-S.""#));
        assert!(rendered.contains(r#"style="dashed""#));
        assert!(rendered.contains(r##"color="#FF0000""##));
    }

    #[test]
    fn test_duplicate_edge_never_shows_version() {
        let renderer =
            DotEdgeRenderer::new(DisplayConfig::default(), StyleConfiguration::built_in().unwrap());
        let mut duplicate = artifact("lib");
        duplicate.resolution = Resolution::OmittedForDuplicate;

        let rendered = renderer.render(&artifact("app"), &duplicate);
        assert!(!rendered.contains("label"));
        assert!(rendered.contains(r#"style="dotted""#));
    }

    #[test]
    fn test_formatter_emits_header_nodes_and_edges() {
        let mut graph = DiGraph::new();
        let a = graph.add_node(GraphNode {
            id: "com.example:app:1.0.0::jar".to_string(),
            label: r#"[label="app"]"#.to_string(),
        });
        let b = graph.add_node(GraphNode {
            id: "com.example:lib:1.0.0::jar".to_string(),
            label: r#"[label="lib"]"#.to_string(),
        });
        graph.add_edge(
            a,
            b,
            GraphEdge {
                from_id: "com.example:app:1.0.0::jar".to_string(),
                to_id: "com.example:lib:1.0.0::jar".to_string(),
                label: String::new(),
            },
        );

        let formatter = DotGraphFormatter::new(StyleConfiguration::built_in().unwrap());
        let output = formatter.format("example", &graph).unwrap();

        assert!(output.starts_with("digraph \"example\" {\n"));
        assert!(output.contains("  node [shape=\"box\""));
        assert!(output.contains("  edge [style=\"solid\""));
        assert!(output.contains("  \"com.example:app:1.0.0::jar\"[label=\"app\"]\n"));
        assert!(
            output.contains("  \"com.example:app:1.0.0::jar\" -> \"com.example:lib:1.0.0::jar\"\n")
        );
        assert!(output.ends_with("}\n"));
    }

    #[test]
    fn test_empty_label_node_line_is_valid() {
        let mut graph = DiGraph::new();
        graph.add_node(GraphNode {
            id: "g:a:1::jar".to_string(),
            label: String::new(),
        });

        let formatter = DotGraphFormatter::new(StyleConfiguration::default());
        let output = formatter.format("example", &graph).unwrap();
        assert!(output.contains("  \"g:a:1::jar\"\n"));
    }
}
