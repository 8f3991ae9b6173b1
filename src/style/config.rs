use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::key::StyleKey;
use super::shape::NodeShape;
use crate::dependency::{Artifact, Resolution};
use crate::error::ExportError;

/// Built-in base layer; user-supplied files are merged on top of it.
const DEFAULT_STYLE: &str = include_str!("../../resources/default-style.json");

/// Font attributes, all optional so that a layer only overrides what it sets
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Font {
    pub name: Option<String>,
    pub size: Option<u32>,
    pub color: Option<String>,
}

impl Font {
    fn merge(base: &Font, other: &Font) -> Font {
        Font {
            name: other.name.clone().or_else(|| base.name.clone()),
            size: other.size.or(base.size),
            color: other.color.clone().or_else(|| base.color.clone()),
        }
    }
}

/// Node attribute overrides
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub shape: Option<NodeShape>,
    pub color: Option<String>,
    pub fill_color: Option<String>,
    pub font: Option<Font>,
}

impl NodeStyle {
    /// Per-field merge: `other` wins wherever it is set.
    pub fn merge(base: &NodeStyle, other: &NodeStyle) -> NodeStyle {
        NodeStyle {
            shape: other.shape.clone().or_else(|| base.shape.clone()),
            color: other.color.clone().or_else(|| base.color.clone()),
            fill_color: other.fill_color.clone().or_else(|| base.fill_color.clone()),
            font: merge_fonts(&base.font, &other.font),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == NodeStyle::default()
    }
}

/// Edge attribute overrides
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub style: Option<String>,
    pub color: Option<String>,
    pub font: Option<Font>,
}

impl EdgeStyle {
    /// Per-field merge: `other` wins wherever it is set.
    pub fn merge(base: &EdgeStyle, other: &EdgeStyle) -> EdgeStyle {
        EdgeStyle {
            style: other.style.clone().or_else(|| base.style.clone()),
            color: other.color.clone().or_else(|| base.color.clone()),
            font: merge_fonts(&base.font, &other.font),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == EdgeStyle::default()
    }
}

fn merge_fonts(base: &Option<Font>, other: &Option<Font>) -> Option<Font> {
    match (base, other) {
        (Some(base), Some(other)) => Some(Font::merge(base, other)),
        (None, Some(other)) => Some(other.clone()),
        (Some(base), None) => Some(base.clone()),
        (None, None) => None,
    }
}

/// Raw serialized form of one style resource
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StyleSheet {
    default_node: NodeStyle,
    default_edge: EdgeStyle,
    edge_resolutions: BTreeMap<Resolution, EdgeStyle>,
    node_rules: BTreeMap<String, NodeStyle>,
    edge_rules: BTreeMap<String, EdgeStyle>,
}

/// Compiled style configuration used for a render
///
/// Rule tables are sorted by key specificity at load time so that matching
/// applies overrides from least to most specific.
#[derive(Debug, Clone, Default)]
pub struct StyleConfiguration {
    default_node: NodeStyle,
    default_edge: EdgeStyle,
    edge_resolutions: BTreeMap<Resolution, EdgeStyle>,
    node_rules: Vec<(StyleKey, NodeStyle)>,
    edge_rules: Vec<(StyleKey, EdgeStyle)>,
}

impl StyleConfiguration {
    /// The built-in default layer
    pub fn built_in() -> Result<Self, ExportError> {
        let sheet: StyleSheet = serde_json::from_str(DEFAULT_STYLE)?;
        Self::compile(sheet)
    }

    /// Load a single style resource. A missing file is a checked error and
    /// is never treated as an empty configuration.
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let raw = fs::read_to_string(path).map_err(|source| ExportError::StyleResourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let sheet: StyleSheet =
            serde_json::from_str(&raw).map_err(|source| ExportError::StyleParseError {
                path: path.to_path_buf(),
                source,
            })?;
        Self::compile(sheet)
    }

    /// Load the built-in default plus user layers, merged left to right.
    pub fn load_layers(paths: &[PathBuf]) -> Result<Self, ExportError> {
        let mut merged = Self::built_in()?;
        for path in paths {
            merged = Self::merge(merged, Self::load(path)?);
        }
        Ok(merged)
    }

    fn compile(sheet: StyleSheet) -> Result<Self, ExportError> {
        let mut configuration = Self {
            default_node: sheet.default_node,
            default_edge: sheet.default_edge,
            edge_resolutions: sheet.edge_resolutions,
            node_rules: Vec::with_capacity(sheet.node_rules.len()),
            edge_rules: Vec::with_capacity(sheet.edge_rules.len()),
        };
        for (key, style) in sheet.node_rules {
            configuration.node_rules.push((StyleKey::parse(&key)?, style));
        }
        for (key, style) in sheet.edge_rules {
            configuration.edge_rules.push((StyleKey::parse(&key)?, style));
        }
        configuration.sort_rules();
        Ok(configuration)
    }

    /// Merge two configuration layers per-field; rules with the same key are
    /// merged, new rules are appended.
    pub fn merge(base: Self, other: Self) -> Self {
        let mut merged = Self {
            default_node: NodeStyle::merge(&base.default_node, &other.default_node),
            default_edge: EdgeStyle::merge(&base.default_edge, &other.default_edge),
            edge_resolutions: base.edge_resolutions,
            node_rules: base.node_rules,
            edge_rules: base.edge_rules,
        };

        for (resolution, style) in other.edge_resolutions {
            merged
                .edge_resolutions
                .entry(resolution)
                .and_modify(|existing| *existing = EdgeStyle::merge(existing, &style))
                .or_insert(style);
        }

        for (key, style) in other.node_rules {
            match merged.node_rules.iter_mut().find(|(existing, _)| *existing == key) {
                Some((_, existing)) => *existing = NodeStyle::merge(existing, &style),
                None => merged.node_rules.push((key, style)),
            }
        }
        for (key, style) in other.edge_rules {
            match merged.edge_rules.iter_mut().find(|(existing, _)| *existing == key) {
                Some((_, existing)) => *existing = EdgeStyle::merge(existing, &style),
                None => merged.edge_rules.push((key, style)),
            }
        }

        merged.sort_rules();
        merged
    }

    fn sort_rules(&mut self) {
        self.node_rules
            .sort_by_key(|(key, _)| key.specificity());
        self.edge_rules
            .sort_by_key(|(key, _)| key.specificity());
    }

    /// Baseline node attributes, emitted once per document
    pub fn default_node(&self) -> &NodeStyle {
        &self.default_node
    }

    /// Baseline edge attributes, emitted once per document
    pub fn default_edge(&self) -> &EdgeStyle {
        &self.default_edge
    }

    /// Rule overrides matching an artifact, least specific applied first.
    /// The default node style is not included.
    pub fn matching_node_style(&self, artifact: &Artifact) -> NodeStyle {
        let mut merged = NodeStyle::default();
        for (key, style) in &self.node_rules {
            if key.matches_artifact(artifact) {
                merged = NodeStyle::merge(&merged, style);
            }
        }
        merged
    }

    /// Edge overrides for the target of an edge: the per-resolution style,
    /// refined by any matching edge rules.
    pub fn matching_edge_style(&self, to: &Artifact) -> EdgeStyle {
        let mut merged = self.resolution_style(to.resolution);
        for (key, style) in &self.edge_rules {
            if key.matches_artifact(to) {
                merged = EdgeStyle::merge(&merged, style);
            }
        }
        merged
    }

    /// Per-resolution edge override, without artifact-specific rules
    pub fn resolution_style(&self, resolution: Resolution) -> EdgeStyle {
        self.edge_resolutions
            .get(&resolution)
            .cloned()
            .unwrap_or_default()
    }

    pub fn node_rule_count(&self) -> usize {
        self.node_rules.len()
    }

    pub fn edge_rule_count(&self) -> usize {
        self.edge_rules.len()
    }

    pub fn resolution_count(&self) -> usize {
        self.edge_resolutions.len()
    }
}
