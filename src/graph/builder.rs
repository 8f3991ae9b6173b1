use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{GraphEdge, GraphNode};
use crate::dependency::Artifact;
use crate::format::{EdgeRenderer, NodeRenderer};

/// Builder for constructing the rendered dependency graph
///
/// Nodes are identified by their artifact's natural key. A node's label is
/// rendered at most once: later insertions with the same key reuse the first
/// rendering, so revisiting shared dependencies through multiple paths is
/// cheap and stable.
pub struct GraphBuilder<'a> {
    graph: DiGraph<GraphNode, GraphEdge>,
    node_indices: HashMap<String, NodeIndex>,
    node_renderer: &'a dyn NodeRenderer,
    edge_renderer: &'a dyn EdgeRenderer,
    omit_self_references: bool,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(
        node_renderer: &'a dyn NodeRenderer,
        edge_renderer: &'a dyn EdgeRenderer,
        omit_self_references: bool,
    ) -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
            node_renderer,
            edge_renderer,
            omit_self_references,
        }
    }

    /// Register both endpoints and one edge between them.
    ///
    /// A missing endpoint makes the whole call a no-op: the resolver hands
    /// back partial pairs for a root-only node. With self-reference
    /// suppression enabled, `from == to` registers the node but drops the
    /// edge.
    pub fn add_edge(&mut self, from: Option<&Artifact>, to: Option<&Artifact>) {
        let (Some(from), Some(to)) = (from, to) else {
            return;
        };

        let from_index = self.register_node(from);
        let to_index = self.register_node(to);

        if self.omit_self_references && from_index == to_index {
            return;
        }

        let edge = GraphEdge {
            from_id: self.graph[from_index].id.clone(),
            to_id: self.graph[to_index].id.clone(),
            label: self.edge_renderer.render(from, to),
        };
        self.graph.add_edge(from_index, to_index, edge);
    }

    fn register_node(&mut self, artifact: &Artifact) -> NodeIndex {
        let key = artifact.natural_key();
        if let Some(&index) = self.node_indices.get(&key) {
            return index;
        }

        let node = GraphNode {
            id: key.clone(),
            label: self.node_renderer.render(artifact),
        };
        let index = self.graph.add_node(node);
        self.node_indices.insert(key, index);
        index
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The finished graph; node and edge iteration order is insertion order.
    pub fn graph(&self) -> &DiGraph<GraphNode, GraphEdge> {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::common::ConfigBuilder;

    /// Node renderer that records every artifact it is asked to render
    struct CountingNodeRenderer {
        rendered: RefCell<Vec<String>>,
    }

    impl CountingNodeRenderer {
        fn new() -> Self {
            Self {
                rendered: RefCell::new(Vec::new()),
            }
        }
    }

    impl NodeRenderer for CountingNodeRenderer {
        fn render(&self, artifact: &Artifact) -> String {
            self.rendered.borrow_mut().push(artifact.natural_key());
            artifact.artifact_id.clone()
        }
    }

    struct CountingEdgeRenderer {
        calls: RefCell<usize>,
    }

    impl CountingEdgeRenderer {
        fn new() -> Self {
            Self {
                calls: RefCell::new(0),
            }
        }
    }

    impl EdgeRenderer for CountingEdgeRenderer {
        fn render(&self, _from: &Artifact, _to: &Artifact) -> String {
            *self.calls.borrow_mut() += 1;
            String::new()
        }
    }

    fn artifact(name: &str) -> Artifact {
        Artifact::builder()
            .with_group_id("com.example")
            .with_artifact_id(name)
            .with_version("1.0.0")
            .build()
            .unwrap()
    }

    #[test]
    fn test_node_label_rendered_at_most_once() {
        let node_renderer = CountingNodeRenderer::new();
        let edge_renderer = CountingEdgeRenderer::new();
        let mut builder = GraphBuilder::new(&node_renderer, &edge_renderer, false);

        let root = artifact("root");
        let shared = artifact("shared");
        let other = artifact("other");

        builder.add_edge(Some(&root), Some(&shared));
        builder.add_edge(Some(&other), Some(&shared));
        builder.add_edge(Some(&root), Some(&other));

        assert_eq!(builder.node_count(), 3);
        assert_eq!(builder.edge_count(), 3);
        // `shared` was reached twice but rendered once
        assert_eq!(
            *node_renderer.rendered.borrow(),
            vec![
                root.natural_key(),
                shared.natural_key(),
                other.natural_key()
            ]
        );
    }

    #[test]
    fn test_missing_endpoint_is_a_no_op() {
        let node_renderer = CountingNodeRenderer::new();
        let edge_renderer = CountingEdgeRenderer::new();
        let mut builder = GraphBuilder::new(&node_renderer, &edge_renderer, false);

        let root = artifact("root");
        builder.add_edge(Some(&root), None);
        builder.add_edge(None, Some(&root));
        builder.add_edge(None, None);

        assert_eq!(builder.node_count(), 0);
        assert_eq!(builder.edge_count(), 0);
        assert_eq!(*edge_renderer.calls.borrow(), 0);
    }

    #[test]
    fn test_self_reference_suppression_keeps_node() {
        let node_renderer = CountingNodeRenderer::new();
        let edge_renderer = CountingEdgeRenderer::new();
        let mut builder = GraphBuilder::new(&node_renderer, &edge_renderer, true);

        let root = artifact("root");
        builder.add_edge(Some(&root), Some(&root));

        assert_eq!(builder.node_count(), 1);
        assert_eq!(builder.edge_count(), 0);
    }

    #[test]
    fn test_self_reference_kept_without_suppression() {
        let node_renderer = CountingNodeRenderer::new();
        let edge_renderer = CountingEdgeRenderer::new();
        let mut builder = GraphBuilder::new(&node_renderer, &edge_renderer, false);

        let root = artifact("root");
        builder.add_edge(Some(&root), Some(&root));

        assert_eq!(builder.node_count(), 1);
        assert_eq!(builder.edge_count(), 1);
    }

    #[test]
    fn test_edge_renderer_invoked_once_per_kept_edge() {
        let node_renderer = CountingNodeRenderer::new();
        let edge_renderer = CountingEdgeRenderer::new();
        let mut builder = GraphBuilder::new(&node_renderer, &edge_renderer, false);

        let root = artifact("root");
        let child = artifact("child");
        builder.add_edge(Some(&root), Some(&child));
        builder.add_edge(Some(&root), Some(&child));

        // duplicate edges are kept; deduplication applies to nodes only
        assert_eq!(builder.edge_count(), 2);
        assert_eq!(*edge_renderer.calls.borrow(), 2);
    }

    #[test]
    fn test_edge_insertion_order_preserved() {
        let node_renderer = CountingNodeRenderer::new();
        let edge_renderer = CountingEdgeRenderer::new();
        let mut builder = GraphBuilder::new(&node_renderer, &edge_renderer, false);

        let root = artifact("root");
        let first = artifact("first");
        let second = artifact("second");
        builder.add_edge(Some(&root), Some(&first));
        builder.add_edge(Some(&root), Some(&second));

        let targets: Vec<String> = builder
            .graph()
            .edge_weights()
            .map(|edge| edge.to_id.clone())
            .collect();
        assert_eq!(targets, vec![first.natural_key(), second.natural_key()]);
    }
}
