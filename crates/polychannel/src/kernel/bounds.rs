//! Kernel computing the axis-aligned bounds of a channel.

use polychannel_math::{Point3, RigidTransform, Transform, Vec3};

use super::{Color, GeometryKernel};
use crate::placement::ShapeKind;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb {
    /// The empty box (identity for [`union`](Self::union)).
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Box spanned by a set of points.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Self {
        points.into_iter().fold(Self::empty(), |acc, p| Self {
            min: acc.min.inf(p),
            max: acc.max.sup(p),
        })
    }

    /// True if the box contains no point.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &Aabb) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Extents along each axis (zero for an empty box).
    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            return Vec3::zeros();
        }
        self.max - self.min
    }

    /// Center point.
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }
}

/// Computes the axis-aligned bounding box of the composed channel.
///
/// Boxes are bounded through their eight transformed corners, ellipsoids
/// through the closed-form extent of a rotated, scaled unit sphere. Both
/// are exact. The bounds of a convex hull are the union of its operands'
/// bounds, so the channel's bounds are exact too.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoundsKernel;

impl GeometryKernel for BoundsKernel {
    type Solid = Aabb;
    type Scene = Aabb;

    fn make_primitive(
        &mut self,
        kind: ShapeKind,
        size: Vec3,
        transform: &RigidTransform,
        centered: bool,
    ) -> Aabb {
        match kind {
            ShapeKind::Cube => {
                let origin = if centered { -size / 2.0 } else { Vec3::zeros() };
                let m = transform.to_transform();
                let corners: Vec<Point3> = (0..8)
                    .map(|i| {
                        let corner = Vec3::new(
                            if i & 1 == 0 { 0.0 } else { size.x },
                            if i & 2 == 0 { 0.0 } else { size.y },
                            if i & 4 == 0 { 0.0 } else { size.z },
                        );
                        m.apply_point(&Point3::from(origin + corner))
                    })
                    .collect();
                Aabb::from_points(&corners)
            }
            ShapeKind::Sphere => {
                // Extent along axis k of {R S u : |u| = 1} is |row k of R S|.
                let half_axes = Transform::scale(size.x / 2.0, size.y / 2.0, size.z / 2.0);
                let rs = transform.rotation.to_transform().then(&half_axes).linear();
                let half = Vec3::new(rs.row(0).norm(), rs.row(1).norm(), rs.row(2).norm());
                let center = Point3::from(transform.translation);
                Aabb {
                    min: center - half,
                    max: center + half,
                }
            }
        }
    }

    fn hull(&mut self, a: Aabb, b: Aabb) -> Aabb {
        a.union(&b)
    }

    fn compose(&mut self, solids: Vec<Aabb>, _color: Option<Color>) -> Aabb {
        solids.iter().fold(Aabb::empty(), |acc, s| acc.union(s))
    }
}
