//! Placements and placement sequences.
//!
//! A [`Placement`] is one primitive (cube or sphere) with its size, position
//! and rotation. A [`PlacementSequence`] is an ordered list of placements
//! whose positions are all interpreted the same way, either as offsets from
//! the previous placement ([`Relative`]) or as world coordinates
//! ([`Absolute`]). The interpretation is part of the sequence's type.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use polychannel_math::{AxisAngle, RigidTransform, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::ChannelError;
use crate::resolve::resolve_to_absolute;

/// Primitive shape of a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Box; `size` gives its extents.
    Cube,
    /// Unit-diameter sphere scaled by `size` (so possibly an ellipsoid).
    Sphere,
}

impl ShapeKind {
    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Sphere => "sphere",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ChannelError;

    /// Accepts `"cube"`, `"sphere"` and the short form `"sphr"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cube" => Ok(ShapeKind::Cube),
            "sphere" | "sphr" => Ok(ShapeKind::Sphere),
            other => Err(ChannelError::InvalidShapeKind(other.to_string())),
        }
    }
}

/// One primitive of a channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Primitive shape.
    pub shape: ShapeKind,
    /// Box extents for a cube, per-axis diameter for a sphere.
    pub size: Vec3,
    /// Offset or world position, depending on the enclosing sequence.
    pub position: Vec3,
    /// Rotation about the primitive's own origin, applied before translation.
    pub rotation: AxisAngle,
}

impl Placement {
    /// Create a placement.
    pub fn new(shape: ShapeKind, size: Vec3, position: Vec3, rotation: AxisAngle) -> Self {
        Self {
            shape,
            size,
            position,
            rotation,
        }
    }

    /// An unrotated cube.
    pub fn cube(size: Vec3, position: Vec3) -> Self {
        Self::new(ShapeKind::Cube, size, position, AxisAngle::identity())
    }

    /// An unrotated sphere.
    pub fn sphere(size: Vec3, position: Vec3) -> Self {
        Self::new(ShapeKind::Sphere, size, position, AxisAngle::identity())
    }

    /// Copy of this placement with a different position.
    pub fn with_position(self, position: Vec3) -> Self {
        Self { position, ..self }
    }

    /// Copy of this placement with a different rotation.
    pub fn with_rotation(self, rotation: AxisAngle) -> Self {
        Self { rotation, ..self }
    }

    /// Rigid transform placing the primitive: rotate, then translate by `position`.
    ///
    /// Only meaningful for placements taken from an absolute sequence.
    pub fn transform(&self) -> RigidTransform {
        RigidTransform::new(self.rotation, self.position)
    }
}

/// How the positions of a sequence are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Element 0 is an absolute anchor, every later position is an offset
    /// from the previous element's resolved position.
    #[default]
    Relative,
    /// Every position is a world coordinate.
    Absolute,
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Relative {}
    impl Sealed for super::Absolute {}
}

/// Type-level tag for the [`Representation`] of a [`PlacementSequence`].
pub trait Frame: sealed::Sealed {
    /// The runtime representation this frame stands for.
    const REPRESENTATION: Representation;
}

/// Frame tag for relative sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relative {}

/// Frame tag for absolute sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absolute {}

impl Frame for Relative {
    const REPRESENTATION: Representation = Representation::Relative;
}

impl Frame for Absolute {
    const REPRESENTATION: Representation = Representation::Absolute;
}

/// An ordered, immutable list of placements sharing one position frame.
///
/// Every transform returns a new sequence; nothing mutates in place.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementSequence<F: Frame> {
    placements: Vec<Placement>,
    frame: PhantomData<F>,
}

impl<F: Frame> PlacementSequence<F> {
    /// Wrap a list of placements.
    pub fn new(placements: Vec<Placement>) -> Self {
        Self {
            placements,
            frame: PhantomData,
        }
    }

    /// How this sequence's positions are interpreted.
    pub fn representation(&self) -> Representation {
        F::REPRESENTATION
    }

    /// Number of placements.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// True if the sequence has no placements.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Iterate over the placements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Placement> {
        self.placements.iter()
    }

    /// The placements as a slice.
    pub fn as_slice(&self) -> &[Placement] {
        &self.placements
    }

    /// The placement at `index`.
    pub fn get(&self, index: usize) -> Option<&Placement> {
        self.placements.get(index)
    }

    /// First placement.
    pub fn first(&self) -> Option<&Placement> {
        self.placements.first()
    }

    /// Last placement.
    pub fn last(&self) -> Option<&Placement> {
        self.placements.last()
    }

    /// Positions in order.
    pub fn positions(&self) -> Vec<Vec3> {
        self.placements.iter().map(|p| p.position).collect()
    }

    /// Consume the sequence, returning its placements.
    pub fn into_vec(self) -> Vec<Placement> {
        self.placements
    }

    /// World coordinates of this sequence, resolving relative offsets if needed.
    pub fn to_absolute(&self) -> PlacementSequence<Absolute> {
        let placements = self.placements.clone();
        match F::REPRESENTATION {
            Representation::Relative => resolve_to_absolute(&PlacementSequence::new(placements)),
            Representation::Absolute => PlacementSequence::new(placements),
        }
    }
}

impl<F: Frame> Default for PlacementSequence<F> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<F: Frame> FromIterator<Placement> for PlacementSequence<F> {
    fn from_iter<I: IntoIterator<Item = Placement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<F: Frame> IntoIterator for PlacementSequence<F> {
    type Item = Placement;
    type IntoIter = std::vec::IntoIter<Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.into_iter()
    }
}

impl<'a, F: Frame> IntoIterator for &'a PlacementSequence<F> {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

/// A sequence whose representation is only known at run time.
#[derive(Debug, Clone, PartialEq)]
pub enum AnySequence {
    /// A relative sequence.
    Relative(PlacementSequence<Relative>),
    /// An absolute sequence.
    Absolute(PlacementSequence<Absolute>),
}

impl AnySequence {
    /// Tag placements with a runtime representation.
    pub fn new(representation: Representation, placements: Vec<Placement>) -> Self {
        match representation {
            Representation::Relative => AnySequence::Relative(PlacementSequence::new(placements)),
            Representation::Absolute => AnySequence::Absolute(PlacementSequence::new(placements)),
        }
    }

    /// The runtime representation.
    pub fn representation(&self) -> Representation {
        match self {
            AnySequence::Relative(_) => Representation::Relative,
            AnySequence::Absolute(_) => Representation::Absolute,
        }
    }

    /// Number of placements.
    pub fn len(&self) -> usize {
        match self {
            AnySequence::Relative(s) => s.len(),
            AnySequence::Absolute(s) => s.len(),
        }
    }

    /// True if the sequence has no placements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve to world coordinates, if not already.
    pub fn to_absolute(&self) -> PlacementSequence<Absolute> {
        match self {
            AnySequence::Relative(s) => s.to_absolute(),
            AnySequence::Absolute(s) => s.to_absolute(),
        }
    }
}

impl From<PlacementSequence<Relative>> for AnySequence {
    fn from(seq: PlacementSequence<Relative>) -> Self {
        AnySequence::Relative(seq)
    }
}

impl From<PlacementSequence<Absolute>> for AnySequence {
    fn from(seq: PlacementSequence<Absolute>) -> Self {
        AnySequence::Absolute(seq)
    }
}
