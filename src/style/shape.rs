use serde::{Deserialize, Serialize};

/// Node shape variants selectable from a style configuration
///
/// The shape kind is dispatched through the `type` tag of the serialized
/// configuration; an unknown tag fails deserialization of the whole style
/// resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeShape {
    Box,
    Polygon { sides: u32 },
    Ellipse,
}

impl NodeShape {
    /// Graphviz `shape` attribute value
    pub fn dot_shape(&self) -> &'static str {
        match self {
            NodeShape::Box => "box",
            NodeShape::Polygon { .. } => "polygon",
            NodeShape::Ellipse => "ellipse",
        }
    }

    /// Graphviz `sides` attribute, only meaningful for polygons
    pub fn dot_sides(&self) -> Option<u32> {
        match self {
            NodeShape::Polygon { sides } => Some(*sides),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_box() {
        let shape: NodeShape = serde_json::from_str(r#"{"type": "box"}"#).unwrap();
        assert_eq!(shape, NodeShape::Box);
        assert_eq!(shape.dot_shape(), "box");
        assert_eq!(shape.dot_sides(), None);
    }

    #[test]
    fn test_deserialize_polygon_with_sides() {
        let shape: NodeShape = serde_json::from_str(r#"{"type": "polygon", "sides": 6}"#).unwrap();
        assert_eq!(shape.dot_shape(), "polygon");
        assert_eq!(shape.dot_sides(), Some(6));
    }

    #[test]
    fn test_unknown_shape_type_is_rejected() {
        let result = serde_json::from_str::<NodeShape>(r#"{"type": "star"}"#);
        assert!(result.is_err());
    }
}
