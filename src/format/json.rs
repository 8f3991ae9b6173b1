//! JSON renderer family
//!
//! Node and edge labels are themselves JSON object fragments; the formatter
//! splices them together with string and positional numeric identifiers.
//! Fields are only emitted when non-empty.

use std::collections::HashMap;

use petgraph::graph::DiGraph;
use serde_json::{Map, Value, json};

use super::{DisplayConfig, EdgeRenderer, GraphFormatter, NodeRenderer};
use crate::dependency::{Artifact, Resolution, abbreviate_version};
use crate::error::ExportError;
use crate::graph::{GraphEdge, GraphNode};

pub struct JsonNodeRenderer {
    display: DisplayConfig,
}

impl JsonNodeRenderer {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }
}

impl NodeRenderer for JsonNodeRenderer {
    fn render(&self, artifact: &Artifact) -> String {
        let mut object = Map::new();

        if self.display.show_optional && artifact.optional {
            object.insert("optional".to_string(), json!(true));
        }
        if self.display.show_group_id && !artifact.group_id.is_empty() {
            object.insert("groupId".to_string(), json!(artifact.group_id));
        }
        if self.display.show_artifact_id && !artifact.artifact_id.is_empty() {
            object.insert("artifactId".to_string(), json!(artifact.artifact_id));
        }
        if self.display.show_version && !artifact.version.is_empty() {
            object.insert("version".to_string(), json!(artifact.version));
        }
        if self.display.show_types && !artifact.types.is_empty() {
            object.insert("types".to_string(), json!(artifact.types));
        }
        if self.display.show_classifiers && !artifact.classifiers.is_empty() {
            object.insert("classifiers".to_string(), json!(artifact.classifiers));
        }
        if self.display.show_scope && !artifact.scopes.is_empty() {
            object.insert("scopes".to_string(), json!(artifact.scopes));
        }

        Value::Object(object).to_string()
    }
}

pub struct JsonEdgeRenderer {
    display: DisplayConfig,
}

impl JsonEdgeRenderer {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }
}

impl EdgeRenderer for JsonEdgeRenderer {
    fn render(&self, _from: &Artifact, to: &Artifact) -> String {
        match to.resolution {
            Resolution::Included | Resolution::Parent => String::new(),
            Resolution::OmittedForConflict => {
                let mut object = Map::new();
                object.insert("resolution".to_string(), json!(to.resolution.as_str()));
                if self.display.versions_on_edges {
                    object.insert(
                        "version".to_string(),
                        json!(abbreviate_version(to.effective_version())),
                    );
                }
                Value::Object(object).to_string()
            }
            Resolution::OmittedForDuplicate => {
                json!({"resolution": to.resolution.as_str()}).to_string()
            }
        }
    }
}

pub struct JsonGraphFormatter;

impl GraphFormatter for JsonGraphFormatter {
    fn format(
        &self,
        graph_name: &str,
        graph: &DiGraph<GraphNode, GraphEdge>,
    ) -> Result<String, ExportError> {
        let mut numeric_ids: HashMap<&str, usize> = HashMap::new();

        let mut artifacts = Vec::with_capacity(graph.node_count());
        for (numeric_id, node) in graph.node_weights().enumerate() {
            numeric_ids.insert(node.id.as_str(), numeric_id);

            // the label was produced by the JSON node renderer; anything else
            // is an internal invariant violation
            let mut object = splice_fragment(&node.label)?;
            object.insert("id".to_string(), json!(node.id));
            object.insert("numericId".to_string(), json!(numeric_id));
            artifacts.push(Value::Object(object));
        }

        let mut dependencies = Vec::with_capacity(graph.edge_count());
        for edge in graph.edge_weights() {
            let mut object = splice_fragment(&edge.label)?;
            object.insert("from".to_string(), json!(edge.from_id));
            object.insert("to".to_string(), json!(edge.to_id));
            if let Some(&numeric_from) = numeric_ids.get(edge.from_id.as_str()) {
                object.insert("numericFrom".to_string(), json!(numeric_from));
            }
            if let Some(&numeric_to) = numeric_ids.get(edge.to_id.as_str()) {
                object.insert("numericTo".to_string(), json!(numeric_to));
            }
            dependencies.push(Value::Object(object));
        }

        let document = json!({
            "graphName": graph_name,
            "artifacts": artifacts,
            "dependencies": dependencies,
        });

        serde_json::to_string_pretty(&document).map_err(ExportError::Json)
    }
}

fn splice_fragment(label: &str) -> Result<Map<String, Value>, ExportError> {
    if label.is_empty() {
        return Ok(Map::new());
    }
    serde_json::from_str(label).map_err(ExportError::Json)
}
