#![allow(dead_code)]

use polychannel_math::{RigidTransform, Vec3};

use crate::kernel::{Color, GeometryKernel};
use crate::placement::ShapeKind;

/// Handle returned by [`RecordingKernel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordedSolid {
    /// The n-th primitive created.
    Primitive(usize),
    /// Hull of two primitives, by creation index.
    Hull(usize, usize),
}

/// One kernel call, in the order it was made.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Primitive {
        kind: ShapeKind,
        size: Vec3,
        transform: RigidTransform,
        centered: bool,
    },
    Hull {
        a: RecordedSolid,
        b: RecordedSolid,
    },
    Compose {
        parts: usize,
        color: Option<Color>,
    },
}

/// Kernel that records every call; the scene is the list of hulled index pairs.
#[derive(Debug, Default)]
pub struct RecordingKernel {
    pub calls: Vec<Call>,
    primitives: usize,
}

impl RecordingKernel {
    pub fn hull_calls(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Hull { .. })).count()
    }

    pub fn primitive_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Primitive { .. }))
            .count()
    }

    pub fn primitive_positions(&self) -> Vec<Vec3> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Primitive { transform, .. } => Some(transform.translation),
                _ => None,
            })
            .collect()
    }
}

impl GeometryKernel for RecordingKernel {
    type Solid = RecordedSolid;
    type Scene = Vec<(usize, usize)>;

    fn make_primitive(
        &mut self,
        kind: ShapeKind,
        size: Vec3,
        transform: &RigidTransform,
        centered: bool,
    ) -> RecordedSolid {
        self.calls.push(Call::Primitive {
            kind,
            size,
            transform: *transform,
            centered,
        });
        self.primitives += 1;
        RecordedSolid::Primitive(self.primitives - 1)
    }

    fn hull(&mut self, a: RecordedSolid, b: RecordedSolid) -> RecordedSolid {
        self.calls.push(Call::Hull { a, b });
        match (a, b) {
            (RecordedSolid::Primitive(i), RecordedSolid::Primitive(j)) => RecordedSolid::Hull(i, j),
            other => panic!("hull of non-primitives: {other:?}"),
        }
    }

    fn compose(&mut self, solids: Vec<RecordedSolid>, color: Option<Color>) -> Vec<(usize, usize)> {
        self.calls.push(Call::Compose {
            parts: solids.len(),
            color,
        });
        solids
            .into_iter()
            .filter_map(|s| match s {
                RecordedSolid::Hull(i, j) => Some((i, j)),
                RecordedSolid::Primitive(_) => None,
            })
            .collect()
    }
}
