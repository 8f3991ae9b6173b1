//! Text tree renderer family
//!
//! Unlike the line-per-edge formats, the text writer renders a recursive
//! indented tree. Roots are the nodes that never appear as a non-self edge
//! target; each parent's adjacency list is consumed on first expansion, so a
//! node reached again through another path prints as a shallow leaf unless
//! `repeat_transitive_dependencies` is set.

use std::collections::{HashMap, HashSet};
use std::fmt::Write;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::{DisplayConfig, EdgeRenderer, GraphFormatter, NodeRenderer, compose_label};
use crate::dependency::Artifact;
use crate::error::ExportError;
use crate::graph::{GraphEdge, GraphNode};

const BRANCH: &str = "+- ";
const LAST_BRANCH: &str = "\\- ";
const CONTINUATION: &str = "|  ";
const LAST_CONTINUATION: &str = "   ";

pub struct TextNodeRenderer {
    display: DisplayConfig,
}

impl TextNodeRenderer {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }
}

impl NodeRenderer for TextNodeRenderer {
    fn render(&self, artifact: &Artifact) -> String {
        // a lone classifier is noise in the compact text form
        compose_label(artifact, &self.display, ":", 2)
    }
}

/// The tree shows node labels only; edges carry no text of their own.
pub struct TextEdgeRenderer;

impl EdgeRenderer for TextEdgeRenderer {
    fn render(&self, _from: &Artifact, _to: &Artifact) -> String {
        String::new()
    }
}

pub struct TextTreeFormatter {
    repeat_transitive_dependencies: bool,
}

impl TextTreeFormatter {
    pub fn new(repeat_transitive_dependencies: bool) -> Self {
        Self {
            repeat_transitive_dependencies,
        }
    }

    fn write_children(
        &self,
        output: &mut String,
        graph: &DiGraph<GraphNode, GraphEdge>,
        adjacency: &mut HashMap<NodeIndex, Vec<NodeIndex>>,
        parent: NodeIndex,
        prefix: &str,
    ) -> Result<(), ExportError> {
        let children = if self.repeat_transitive_dependencies {
            adjacency.get(&parent).cloned().unwrap_or_default()
        } else {
            adjacency.remove(&parent).unwrap_or_default()
        };

        let count = children.len();
        for (position, child) in children.into_iter().enumerate() {
            let last = position + 1 == count;
            let branch = if last { LAST_BRANCH } else { BRANCH };
            writeln!(output, "{}{}{}", prefix, branch, graph[child].label)?;

            let continuation = if last { LAST_CONTINUATION } else { CONTINUATION };
            let child_prefix = format!("{prefix}{continuation}");
            self.write_children(output, graph, adjacency, child, &child_prefix)?;
        }
        Ok(())
    }
}

impl GraphFormatter for TextTreeFormatter {
    fn format(
        &self,
        _graph_name: &str,
        graph: &DiGraph<GraphNode, GraphEdge>,
    ) -> Result<String, ExportError> {
        let mut adjacency: HashMap<NodeIndex, Vec<NodeIndex>> = HashMap::new();
        let mut targets: HashSet<NodeIndex> = HashSet::new();
        for edge in graph.edge_references() {
            adjacency.entry(edge.source()).or_default().push(edge.target());
            if edge.source() != edge.target() {
                targets.insert(edge.target());
            }
        }

        let mut output = String::new();
        for index in graph.node_indices() {
            if targets.contains(&index) {
                continue;
            }
            writeln!(output, "{}", graph[index].label)?;
            self.write_children(&mut output, graph, &mut adjacency, index, "")?;
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn node(label: &str) -> GraphNode {
        GraphNode {
            id: label.to_string(),
            label: label.to_string(),
        }
    }

    fn edge(from: &str, to: &str) -> GraphEdge {
        GraphEdge {
            from_id: from.to_string(),
            to_id: to.to_string(),
            label: String::new(),
        }
    }

    #[test]
    fn test_single_root_tree() {
        let mut graph = DiGraph::new();
        let root = graph.add_node(node("root"));
        let a = graph.add_node(node("a"));
        let b = graph.add_node(node("b"));
        let c = graph.add_node(node("c"));
        graph.add_edge(root, a, edge("root", "a"));
        graph.add_edge(root, b, edge("root", "b"));
        graph.add_edge(a, c, edge("a", "c"));

        let output = TextTreeFormatter::new(false).format("g", &graph).unwrap();
        let expected = "root\n\
                        +- a\n\
                        |  \\- c\n\
                        \\- b\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_shared_dependency_collapses_on_second_encounter() {
        let mut graph = DiGraph::new();
        let root = graph.add_node(node("root"));
        let a = graph.add_node(node("a"));
        let b = graph.add_node(node("b"));
        let shared = graph.add_node(node("shared"));
        let leaf = graph.add_node(node("leaf"));
        graph.add_edge(root, a, edge("root", "a"));
        graph.add_edge(root, b, edge("root", "b"));
        graph.add_edge(a, shared, edge("a", "shared"));
        graph.add_edge(b, shared, edge("b", "shared"));
        graph.add_edge(shared, leaf, edge("shared", "leaf"));

        let output = TextTreeFormatter::new(false).format("g", &graph).unwrap();
        // the second `shared` is a leaf: its subtree was already expanded
        let expected = "root\n\
                        +- a\n\
                        |  \\- shared\n\
                        |     \\- leaf\n\
                        \\- b\n   \\- shared\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_repeat_transitive_re_expands_subtrees() {
        let mut graph = DiGraph::new();
        let root = graph.add_node(node("root"));
        let a = graph.add_node(node("a"));
        let b = graph.add_node(node("b"));
        let shared = graph.add_node(node("shared"));
        let leaf = graph.add_node(node("leaf"));
        graph.add_edge(root, a, edge("root", "a"));
        graph.add_edge(root, b, edge("root", "b"));
        graph.add_edge(a, shared, edge("a", "shared"));
        graph.add_edge(b, shared, edge("b", "shared"));
        graph.add_edge(shared, leaf, edge("shared", "leaf"));

        let output = TextTreeFormatter::new(true).format("g", &graph).unwrap();
        assert_eq!(output.matches("\\- leaf").count(), 2);
    }

    #[test]
    fn test_multiple_roots_in_insertion_order() {
        let mut graph = DiGraph::new();
        let first = graph.add_node(node("first"));
        let child = graph.add_node(node("child"));
        graph.add_node(node("second"));
        graph.add_edge(first, child, edge("first", "child"));

        let output = TextTreeFormatter::new(false).format("g", &graph).unwrap();
        assert_eq!(output, "first\n\\- child\nsecond\n");
    }

    #[test]
    fn test_self_edge_does_not_unroot_node() {
        let mut graph = DiGraph::new();
        let root = graph.add_node(node("root"));
        graph.add_edge(root, root, edge("root", "root"));

        let output = TextTreeFormatter::new(false).format("g", &graph).unwrap();
        assert_eq!(output, "root\n\\- root\n");
    }
}
