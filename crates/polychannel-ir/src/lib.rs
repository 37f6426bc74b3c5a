//! Intermediate representation for built polychannels.
//!
//! This crate defines the DAG-based IR that records how a channel was
//! assembled: primitives, their rigid transforms, the pairwise hulls that
//! join them, and the union that displays the result.
//!
//! Nothing here holds mesh data. Meshing and rendering belong to whichever
//! CSG engine reads the document.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a node in the IR graph.
pub type NodeId = u64;

/// 3D vector with f64 components (conventionally millimeters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// Create a new Vec3.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// One operation in the graph.
///
/// Leaves are cubes and spheres; every other variant refers to its operands
/// by [`NodeId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CsgOp {
    /// Box with the given extents.
    Cube {
        /// Size along each axis.
        size: Vec3,
        /// Centered on the origin when true, otherwise corner at the origin.
        center: bool,
    },
    /// Sphere centered at origin.
    Sphere {
        /// Radius of the sphere.
        radius: f64,
        /// Number of circular segments (0 = auto).
        segments: u32,
    },
    /// Non-uniform scale.
    Scale {
        /// Child node to scale.
        child: NodeId,
        /// Scale factors per axis.
        factor: Vec3,
    },
    /// Rotation by an angle in degrees about an axis through the origin.
    Rotate {
        /// Child node to rotate.
        child: NodeId,
        /// Rotation angle in degrees.
        angle: f64,
        /// Rotation axis (not necessarily normalized).
        axis: Vec3,
    },
    /// Translation by an offset vector.
    Translate {
        /// Child node to translate.
        child: NodeId,
        /// Translation offset.
        offset: Vec3,
    },
    /// Convex hull of two geometries.
    Hull {
        /// First operand.
        left: NodeId,
        /// Second operand.
        right: NodeId,
    },
    /// Boolean union of any number of geometries.
    Union {
        /// Operands, in construction order.
        children: Vec<NodeId>,
    },
}

/// A node in the IR graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,
    /// Optional human-readable name.
    pub name: Option<String>,
    /// The operation this node represents.
    pub op: CsgOp,
}

/// Display material definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDef {
    /// Material name (e.g. "channel").
    pub name: String,
    /// Display color as `[r, g, b, a]` in 0.0..1.0.
    pub color: [f64; 4],
}

/// A root node shown with a material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneEntry {
    /// Root node of this scene part.
    pub root: NodeId,
    /// Material key referencing a [`MaterialDef::name`].
    pub material: String,
}

/// A polychannel IR document.
///
/// Contains the full IR DAG, material definitions, and scene assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Format version string (e.g. "0.1").
    pub version: String,
    /// All nodes in the graph, keyed by [`NodeId`].
    pub nodes: HashMap<NodeId, Node>,
    /// Material definitions, keyed by name.
    pub materials: HashMap<String, MaterialDef>,
    /// Scene entries (assembled parts with materials).
    pub roots: Vec<SceneEntry>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            version: "0.1".to_string(),
            nodes: HashMap::new(),
            materials: HashMap::new(),
            roots: Vec::new(),
        }
    }
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Number of nodes whose operation satisfies `pred`.
    pub fn count_ops(&self, pred: impl Fn(&CsgOp) -> bool) -> usize {
        self.nodes.values().filter(|n| pred(&n.op)).count()
    }

    /// The hull nodes, ordered by id (i.e. construction order).
    pub fn hulls(&self) -> Vec<&Node> {
        let mut hulls: Vec<&Node> = self
            .nodes
            .values()
            .filter(|n| matches!(n.op, CsgOp::Hull { .. }))
            .collect();
        hulls.sort_by_key(|n| n.id);
        hulls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(doc: &mut Document, id: NodeId, op: CsgOp) {
        doc.nodes.insert(id, Node { id, name: None, op });
    }

    #[test]
    fn test_roundtrip_document() {
        let mut doc = Document::new();

        leaf(
            &mut doc,
            1,
            CsgOp::Cube {
                size: Vec3::new(1.0, 2.0, 3.0),
                center: true,
            },
        );
        leaf(
            &mut doc,
            2,
            CsgOp::Sphere {
                radius: 0.5,
                segments: 0,
            },
        );
        leaf(
            &mut doc,
            3,
            CsgOp::Scale {
                child: 2,
                factor: Vec3::new(1.0, 1.0, 2.0),
            },
        );
        leaf(
            &mut doc,
            4,
            CsgOp::Translate {
                child: 3,
                offset: Vec3::new(7.0, 0.0, 0.0),
            },
        );
        doc.nodes.insert(
            5,
            Node {
                id: 5,
                name: Some("hull".to_string()),
                op: CsgOp::Hull { left: 1, right: 4 },
            },
        );

        doc.materials.insert(
            "channel".to_string(),
            MaterialDef {
                name: "channel".to_string(),
                color: [0.2, 0.4, 0.9, 1.0],
            },
        );
        doc.roots.push(SceneEntry {
            root: 5,
            material: "channel".to_string(),
        });

        let json = doc.to_json().expect("serialize");
        let restored = Document::from_json(&json).expect("deserialize");

        assert_eq!(doc, restored);
        assert_eq!(restored.nodes.len(), 5);
        assert_eq!(restored.materials.len(), 1);
        assert_eq!(restored.roots.len(), 1);
    }

    #[test]
    fn test_hulls_are_ordered_by_id() {
        let mut doc = Document::new();
        leaf(&mut doc, 9, CsgOp::Hull { left: 1, right: 2 });
        leaf(&mut doc, 4, CsgOp::Hull { left: 0, right: 1 });
        leaf(
            &mut doc,
            5,
            CsgOp::Union {
                children: vec![4, 9],
            },
        );

        let ids: Vec<NodeId> = doc.hulls().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![4, 9]);
        assert_eq!(doc.count_ops(|op| matches!(op, CsgOp::Union { .. })), 1);
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert_eq!(doc.version, "0.1");
        assert!(doc.nodes.is_empty());
        assert!(doc.materials.is_empty());
        assert!(doc.roots.is_empty());
    }

    #[test]
    fn test_serde_tagged_enum() {
        let op = CsgOp::Rotate {
            child: 1,
            angle: 45.0,
            axis: Vec3::new(0.0, -1.0, 0.0),
        };
        let json = serde_json::to_string(&op).unwrap();
        assert!(json.contains(r#""type":"Rotate""#));

        let restored: CsgOp = serde_json::from_str(&json).unwrap();
        assert_eq!(op, restored);
    }
}
