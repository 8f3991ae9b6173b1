//! PlantUML renderer family
//!
//! Rendered node and edge labels are small JSON fragments carrying the parts
//! the formatter has to place in different spots of the PlantUML grammar
//! (stereotype after the id, arrow between the ids). Failing to read such a
//! fragment back is an internal invariant violation.

use std::fmt::Write;

use petgraph::graph::DiGraph;
use serde::Deserialize;
use serde_json::json;

use super::attributes::transliterate_id;
use super::{DisplayConfig, EdgeRenderer, GraphFormatter, NodeRenderer, compose_label};
use crate::constants::artifact::DEFAULT_SCOPE;
use crate::dependency::{Artifact, Resolution, abbreviate_version};
use crate::error::ExportError;
use crate::graph::{GraphEdge, GraphNode};
use crate::style::StyleConfiguration;

#[derive(Debug, Default, Deserialize)]
struct PumlNodeInfo {
    #[serde(default)]
    label: String,
    #[serde(default)]
    stereotype: String,
}

#[derive(Debug, Deserialize)]
struct PumlEdgeInfo {
    begin: String,
    end: String,
    #[serde(default)]
    color: String,
    #[serde(default)]
    label: String,
}

pub struct PumlNodeRenderer {
    display: DisplayConfig,
}

impl PumlNodeRenderer {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }
}

impl NodeRenderer for PumlNodeRenderer {
    fn render(&self, artifact: &Artifact) -> String {
        // the scope is shown as a stereotype, not as a label segment
        let label_display = DisplayConfig {
            show_scope: false,
            ..self.display.clone()
        };
        let label = compose_label(artifact, &label_display, "<br/>", 1);

        let stereotype = if self.display.show_scope && artifact.primary_scope() != DEFAULT_SCOPE {
            artifact.primary_scope()
        } else {
            ""
        };

        json!({"label": label, "stereotype": stereotype}).to_string()
    }
}

pub struct PumlEdgeRenderer {
    display: DisplayConfig,
    styles: StyleConfiguration,
}

impl PumlEdgeRenderer {
    pub fn new(display: DisplayConfig, styles: StyleConfiguration) -> Self {
        Self { display, styles }
    }
}

impl EdgeRenderer for PumlEdgeRenderer {
    fn render(&self, _from: &Artifact, to: &Artifact) -> String {
        match to.resolution {
            Resolution::Included | Resolution::Parent => String::new(),
            Resolution::OmittedForConflict | Resolution::OmittedForDuplicate => {
                let style = self.styles.matching_edge_style(to);
                let dotted = matches!(style.style.as_deref(), Some("dashed") | Some("dotted"));
                let (begin, end) = if dotted { (".", ".>") } else { ("-", "->") };

                let label = if to.resolution == Resolution::OmittedForConflict
                    && self.display.versions_on_edges
                {
                    abbreviate_version(to.effective_version())
                } else {
                    String::new()
                };

                json!({
                    "begin": begin,
                    "end": end,
                    "color": style.color.as_deref().unwrap_or(""),
                    "label": label,
                })
                .to_string()
            }
        }
    }
}

pub struct PumlGraphFormatter;

impl GraphFormatter for PumlGraphFormatter {
    fn format(
        &self,
        _graph_name: &str,
        graph: &DiGraph<GraphNode, GraphEdge>,
    ) -> Result<String, ExportError> {
        let mut output = String::new();
        writeln!(output, "@startuml")?;
        writeln!(output, "skinparam defaultTextAlignment center")?;
        writeln!(output, "skinparam rectangleStereotypeFontSize 10")?;
        writeln!(output)?;

        for node in graph.node_weights() {
            let info: PumlNodeInfo = if node.label.is_empty() {
                PumlNodeInfo::default()
            } else {
                serde_json::from_str(&node.label).map_err(ExportError::Json)?
            };

            write!(
                output,
                "rectangle \"{}\" as {}",
                info.label,
                transliterate_id(&node.id)
            )?;
            if info.stereotype.is_empty() {
                writeln!(output)?;
            } else {
                writeln!(output, "<<{}>>", info.stereotype)?;
            }
        }

        if graph.edge_count() > 0 {
            writeln!(output)?;
        }
        for edge in graph.edge_weights() {
            let from = transliterate_id(&edge.from_id);
            let to = transliterate_id(&edge.to_id);

            if edge.label.is_empty() {
                writeln!(output, "{from} --> {to}")?;
                continue;
            }

            let info: PumlEdgeInfo =
                serde_json::from_str(&edge.label).map_err(ExportError::Json)?;
            let arrow = if info.color.is_empty() {
                format!("{}{}", info.begin, info.end)
            } else {
                format!("{}[{}]{}", info.begin, info.color, info.end)
            };

            if info.label.is_empty() {
                writeln!(output, "{from} {arrow} {to}")?;
            } else {
                writeln!(output, "{} {} {}: {}", from, arrow, to, info.label)?;
            }
        }

        writeln!(output, "@enduml")?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

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
    fn test_compile_scope_has_no_stereotype() {
        let renderer = PumlNodeRenderer::new(DisplayConfig::default());
        let fragment: serde_json::Value =
            serde_json::from_str(&renderer.render(&artifact("app"))).unwrap();

        assert_eq!(fragment["label"], "com.example<br/>app<br/>1.0.0");
        assert_eq!(fragment["stereotype"], "");
    }

    #[test]
    fn test_non_default_scope_becomes_stereotype() {
        let renderer = PumlNodeRenderer::new(DisplayConfig::default());
        let tested = Artifact::builder()
            .with_group_id("com.example")
            .with_artifact_id("app")
            .with_version("1.0.0")
            .with_scope("test")
            .build()
            .unwrap();

        let fragment: serde_json::Value =
            serde_json::from_str(&renderer.render(&tested)).unwrap();
        assert_eq!(fragment["stereotype"], "test");
        // the label never repeats the scope
        assert_eq!(fragment["label"], "com.example<br/>app<br/>1.0.0");
    }

    #[test]
    fn test_conflict_edge_fragment() {
        let renderer = PumlEdgeRenderer::new(
            DisplayConfig::default(),
            StyleConfiguration::built_in().unwrap(),
        );
        let conflicting = Artifact::builder()
            .with_group_id("com.example")
            .with_artifact_id("lib")
            .with_version("1.0.0")
            .with_effective_version("2.0.0-SNAPSHOT")
            .with_resolution(Resolution::OmittedForConflict)
            .build()
            .unwrap();

        let fragment: serde_json::Value =
            serde_json::from_str(&renderer.render(&artifact("app"), &conflicting)).unwrap();
        assert_eq!(fragment["begin"], ".");
        assert_eq!(fragment["end"], ".>");
        assert_eq!(fragment["color"], "#FF0000");
        assert_eq!(fragment["label"], "2.0.0-S.");
    }

    #[test]
    fn test_formatter_document() {
        let mut graph = DiGraph::new();
        let a = graph.add_node(GraphNode {
            id: "com.example:app:1.0.0::jar".to_string(),
            label: r#"{"label":"app","stereotype":""}"#.to_string(),
        });
        let b = graph.add_node(GraphNode {
            id: "com.example:lib:1.0.0::jar".to_string(),
            label: r#"{"label":"lib","stereotype":"test"}"#.to_string(),
        });
        graph.add_edge(
            a,
            b,
            GraphEdge {
                from_id: "com.example:app:1.0.0::jar".to_string(),
                to_id: "com.example:lib:1.0.0::jar".to_string(),
                label: r##"{"begin":".","end":".>","color":"#FF0000","label":"2.0.0"}"##.to_string(),
            },
        );

        let output = PumlGraphFormatter.format("example", &graph).unwrap();
        let expected = "@startuml\nskinparam defaultTextAlignment center\nskinparam \
                        rectangleStereotypeFontSize 10\n\nrectangle \"app\" as \
                        com_example_app_1_0_0__jar\nrectangle \"lib\" as \
                        com_example_lib_1_0_0__jar<<test>>\n\ncom_example_app_1_0_0__jar \
                        .[#FF0000].> com_example_lib_1_0_0__jar: 2.0.0\n@enduml\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_unlabeled_edge_uses_plain_arrow() {
        let mut graph = DiGraph::new();
        let a = graph.add_node(GraphNode {
            id: "a".to_string(),
            label: r#"{"label":"a","stereotype":""}"#.to_string(),
        });
        let b = graph.add_node(GraphNode {
            id: "b".to_string(),
            label: r#"{"label":"b","stereotype":""}"#.to_string(),
        });
        graph.add_edge(
            a,
            b,
            GraphEdge {
                from_id: "a".to_string(),
                to_id: "b".to_string(),
                label: String::new(),
            },
        );

        let output = PumlGraphFormatter.format("example", &graph).unwrap();
        assert!(output.contains("a --> b\n"));
    }
}
