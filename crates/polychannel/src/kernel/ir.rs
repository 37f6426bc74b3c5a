//! Kernel that records the channel as an IR document.

use std::collections::HashMap;

use polychannel_ir::{CsgOp, Document, MaterialDef, Node, NodeId, SceneEntry, Vec3 as IrVec3};
use polychannel_math::{RigidTransform, Vec3};

use super::{Color, GeometryKernel};
use crate::placement::ShapeKind;

/// Material key used when a channel is composed without a color.
const DEFAULT_MATERIAL: &str = "default";

/// Material key used for a colored channel.
const CHANNEL_MATERIAL: &str = "channel";

fn ir_vec(v: &Vec3) -> IrVec3 {
    IrVec3::new(v.x, v.y, v.z)
}

/// Records primitives, hulls and the final union into a [`Document`].
///
/// Identity rotations and zero translations are omitted from the graph.
/// A primitive used by two hulls is recorded once and referenced twice.
/// [`compose`](GeometryKernel::compose) hands the recorded graph over and
/// leaves the kernel empty, ready for the next channel.
#[derive(Debug)]
pub struct IrKernel {
    nodes: HashMap<NodeId, Node>,
    next_id: NodeId,
    sphere_segments: u32,
}

impl Default for IrKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl IrKernel {
    /// A kernel leaving sphere tessellation to the consumer (`segments = 0`).
    pub fn new() -> Self {
        Self::with_sphere_segments(0)
    }

    /// A kernel emitting spheres with a fixed number of circular segments.
    pub fn with_sphere_segments(sphere_segments: u32) -> Self {
        Self {
            nodes: HashMap::new(),
            next_id: 1,
            sphere_segments,
        }
    }

    /// Number of nodes recorded since the last compose.
    pub fn pending_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn push(&mut self, name: Option<&str>, op: CsgOp) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(
            id,
            Node {
                id,
                name: name.map(str::to_string),
                op,
            },
        );
        id
    }
}

impl GeometryKernel for IrKernel {
    type Solid = NodeId;
    type Scene = Document;

    fn make_primitive(
        &mut self,
        kind: ShapeKind,
        size: Vec3,
        transform: &RigidTransform,
        centered: bool,
    ) -> NodeId {
        let mut id = match kind {
            ShapeKind::Cube => self.push(
                Some(kind.name()),
                CsgOp::Cube {
                    size: ir_vec(&size),
                    center: centered,
                },
            ),
            ShapeKind::Sphere => {
                let unit = self.push(
                    Some(kind.name()),
                    CsgOp::Sphere {
                        radius: 0.5,
                        segments: self.sphere_segments,
                    },
                );
                self.push(
                    None,
                    CsgOp::Scale {
                        child: unit,
                        factor: ir_vec(&size),
                    },
                )
            }
        };

        let rotation = transform.rotation;
        if rotation.angle_deg != 0.0 {
            id = self.push(
                None,
                CsgOp::Rotate {
                    child: id,
                    angle: rotation.angle_deg,
                    axis: ir_vec(&rotation.axis),
                },
            );
        }
        if transform.translation != Vec3::zeros() {
            id = self.push(
                None,
                CsgOp::Translate {
                    child: id,
                    offset: ir_vec(&transform.translation),
                },
            );
        }
        id
    }

    fn hull(&mut self, a: NodeId, b: NodeId) -> NodeId {
        self.push(Some("hull"), CsgOp::Hull { left: a, right: b })
    }

    fn compose(&mut self, solids: Vec<NodeId>, color: Option<Color>) -> Document {
        let root = self.push(Some("polychannel"), CsgOp::Union { children: solids });

        let mut doc = Document::new();
        doc.nodes = std::mem::take(&mut self.nodes);
        let material = match color {
            Some(color) => {
                doc.materials.insert(
                    CHANNEL_MATERIAL.to_string(),
                    MaterialDef {
                        name: CHANNEL_MATERIAL.to_string(),
                        color: color.to_array(),
                    },
                );
                CHANNEL_MATERIAL
            }
            None => DEFAULT_MATERIAL,
        };
        doc.roots.push(SceneEntry {
            root,
            material: material.to_string(),
        });
        doc
    }
}
