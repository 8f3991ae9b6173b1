//! Per-format node renderers, edge renderers and document formatters
//!
//! Every output format contributes one family: a [`NodeRenderer`] and
//! [`EdgeRenderer`] that materialize labels while the graph is built, and a
//! [`GraphFormatter`] that assembles the final document from the finished
//! node and edge collections. Families are selected by
//! [`crate::cli::GraphFormat`] through [`RendererSet::for_format`].

mod attributes;
mod dot;
mod gml;
mod json;
mod mermaid;
mod puml;
mod text;

use petgraph::graph::DiGraph;

pub use attributes::{DotAttributeBuilder, transliterate_id};
pub use dot::{DotEdgeRenderer, DotGraphFormatter, DotNodeRenderer};
pub use gml::{GmlEdgeRenderer, GmlGraphFormatter, GmlNodeRenderer};
pub use json::{JsonEdgeRenderer, JsonGraphFormatter, JsonNodeRenderer};
pub use mermaid::{MermaidEdgeRenderer, MermaidGraphFormatter, MermaidNodeRenderer};
pub use puml::{PumlEdgeRenderer, PumlGraphFormatter, PumlNodeRenderer};
pub use text::{TextEdgeRenderer, TextNodeRenderer, TextTreeFormatter};

use crate::cli::GraphFormat;
use crate::constants::artifact::{DEFAULT_SCOPE, DEFAULT_TYPE};
use crate::dependency::Artifact;
use crate::error::ExportError;
use crate::graph::{GraphEdge, GraphNode};
use crate::style::StyleConfiguration;

/// Renders a node's label fragment, a pure function of the artifact and the
/// configured field display
pub trait NodeRenderer {
    fn render(&self, artifact: &Artifact) -> String;
}

/// Renders an edge's label fragment, driven entirely by the target's
/// resolution status
pub trait EdgeRenderer {
    fn render(&self, from: &Artifact, to: &Artifact) -> String;
}

/// Assembles the output document from the finished node/edge collections
pub trait GraphFormatter {
    fn format(
        &self,
        graph_name: &str,
        graph: &DiGraph<GraphNode, GraphEdge>,
    ) -> Result<String, ExportError>;
}

/// Which artifact attributes are rendered into node labels and edges
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub show_optional: bool,
    pub show_group_id: bool,
    pub show_artifact_id: bool,
    pub show_version: bool,
    pub show_types: bool,
    pub show_classifiers: bool,
    pub show_scope: bool,
    pub versions_on_edges: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_optional: true,
            show_group_id: true,
            show_artifact_id: true,
            show_version: true,
            show_types: true,
            show_classifiers: true,
            show_scope: true,
            versions_on_edges: true,
        }
    }
}

/// One renderer/formatter family, selected by output format
pub struct RendererSet {
    pub node_renderer: Box<dyn NodeRenderer>,
    pub edge_renderer: Box<dyn EdgeRenderer>,
    pub formatter: Box<dyn GraphFormatter>,
}

impl RendererSet {
    pub fn for_format(
        format: GraphFormat,
        display: DisplayConfig,
        styles: StyleConfiguration,
        repeat_transitive_dependencies: bool,
    ) -> Self {
        match format {
            GraphFormat::Dot => Self {
                node_renderer: Box::new(DotNodeRenderer::new(display.clone(), styles.clone())),
                edge_renderer: Box::new(DotEdgeRenderer::new(display, styles.clone())),
                formatter: Box::new(DotGraphFormatter::new(styles)),
            },
            GraphFormat::Gml => Self {
                node_renderer: Box::new(GmlNodeRenderer::new(display.clone())),
                edge_renderer: Box::new(GmlEdgeRenderer::new(display)),
                formatter: Box::new(GmlGraphFormatter),
            },
            GraphFormat::Json => Self {
                node_renderer: Box::new(JsonNodeRenderer::new(display.clone())),
                edge_renderer: Box::new(JsonEdgeRenderer::new(display)),
                formatter: Box::new(JsonGraphFormatter),
            },
            GraphFormat::Mermaid => Self {
                node_renderer: Box::new(MermaidNodeRenderer::new(display.clone())),
                edge_renderer: Box::new(MermaidEdgeRenderer::new(display)),
                formatter: Box::new(MermaidGraphFormatter::new(styles)),
            },
            GraphFormat::Puml => Self {
                node_renderer: Box::new(PumlNodeRenderer::new(display.clone())),
                edge_renderer: Box::new(PumlEdgeRenderer::new(display, styles)),
                formatter: Box::new(PumlGraphFormatter),
            },
            GraphFormat::Text => Self {
                node_renderer: Box::new(TextNodeRenderer::new(display.clone())),
                edge_renderer: Box::new(TextEdgeRenderer),
                formatter: Box::new(TextTreeFormatter::new(repeat_transitive_dependencies)),
            },
        }
    }
}

/// Compose a node label from the displayed fields, in the fixed order
/// optional-marker, groupId, artifactId, version, types, classifiers, scope.
///
/// Fields that are empty or at their default value are suppressed; the text
/// format additionally hides a lone classifier (`min_classifiers` = 2).
pub(crate) fn compose_label(
    artifact: &Artifact,
    display: &DisplayConfig,
    separator: &str,
    min_classifiers: usize,
) -> String {
    let mut segments: Vec<String> = Vec::new();

    if display.show_optional && artifact.optional {
        segments.push("(optional)".to_string());
    }
    if display.show_group_id && !artifact.group_id.is_empty() {
        segments.push(artifact.group_id.clone());
    }
    if display.show_artifact_id && !artifact.artifact_id.is_empty() {
        segments.push(artifact.artifact_id.clone());
    }
    if display.show_version && !artifact.version.is_empty() {
        segments.push(artifact.version.clone());
    }
    if display.show_types
        && let Some(types) = types_segment(artifact)
    {
        segments.push(types);
    }
    if display.show_classifiers && artifact.classifiers.len() >= min_classifiers.max(1) {
        let classifiers: Vec<&str> = artifact.classifiers.iter().map(String::as_str).collect();
        segments.push(classifiers.join("/"));
    }
    if display.show_scope
        && let Some(scope) = scope_segment(artifact)
    {
        segments.push(format!("({scope})"));
    }

    segments.join(separator)
}

/// Types are shown only when there is more than one, or the single type is
/// not the default packaging.
fn types_segment(artifact: &Artifact) -> Option<String> {
    if artifact.types.is_empty()
        || (artifact.types.len() == 1 && artifact.types.contains(DEFAULT_TYPE))
    {
        return None;
    }
    let types: Vec<String> = artifact.types.iter().map(|t| format!(".{t}")).collect();
    Some(types.join("/"))
}

/// Scopes are shown only when there is more than one, or the sole scope is
/// not the default.
fn scope_segment(artifact: &Artifact) -> Option<String> {
    if artifact.scopes.is_empty()
        || (artifact.scopes.len() == 1 && artifact.scopes.contains(DEFAULT_SCOPE))
    {
        return None;
    }
    let scopes: Vec<&str> = artifact.scopes.iter().map(String::as_str).collect();
    Some(scopes.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    fn base() -> crate::dependency::ArtifactBuilder {
        Artifact::builder()
            .with_group_id("com.example")
            .with_artifact_id("app")
            .with_version("1.0.0")
    }

    #[test]
    fn test_default_type_and_scope_suppressed() {
        let artifact = base().build().unwrap();
        let label = compose_label(&artifact, &DisplayConfig::default(), ":", 1);
        assert_eq!(label, "com.example:app:1.0.0");
    }

    #[test]
    fn test_multiple_types_rendered_with_dots() {
        let artifact = base().with_type("jar").with_type("zip").build().unwrap();
        let label = compose_label(&artifact, &DisplayConfig::default(), ":", 1);
        assert_eq!(label, "com.example:app:1.0.0:.jar/.zip");
    }

    #[test]
    fn test_non_default_single_type_rendered() {
        let artifact = base().with_type("war").build().unwrap();
        let label = compose_label(&artifact, &DisplayConfig::default(), ":", 1);
        assert_eq!(label, "com.example:app:1.0.0:.war");
    }

    #[test]
    fn test_non_default_scope_parenthesized() {
        let artifact = base().with_scope("test").build().unwrap();
        let label = compose_label(&artifact, &DisplayConfig::default(), ":", 1);
        assert_eq!(label, "com.example:app:1.0.0:(test)");
    }

    #[test]
    fn test_optional_marker_leads() {
        let artifact = base().with_optional(true).build().unwrap();
        let label = compose_label(&artifact, &DisplayConfig::default(), ":", 1);
        assert_eq!(label, "(optional):com.example:app:1.0.0");
    }

    #[test]
    fn test_single_classifier_hidden_below_minimum() {
        let artifact = base().with_classifier("sources").build().unwrap();
        let label = compose_label(&artifact, &DisplayConfig::default(), ":", 2);
        assert_eq!(label, "com.example:app:1.0.0");

        let both = base()
            .with_classifier("sources")
            .with_classifier("javadoc")
            .build()
            .unwrap();
        let label = compose_label(&both, &DisplayConfig::default(), ":", 2);
        assert_eq!(label, "com.example:app:1.0.0:javadoc/sources");
    }

    #[test]
    fn test_all_fields_disabled_yields_empty_label() {
        let artifact = base().build().unwrap();
        let display = DisplayConfig {
            show_optional: false,
            show_group_id: false,
            show_artifact_id: false,
            show_version: false,
            show_types: false,
            show_classifiers: false,
            show_scope: false,
            versions_on_edges: true,
        };
        assert_eq!(compose_label(&artifact, &display, ":", 1), "");
    }
}
