//! Circular arcs in the three coordinate planes.

use polychannel_math::{AxisAngle, Vec3};

use super::check_segments;
use crate::error::Result;
use crate::placement::{Absolute, Placement, PlacementSequence, Relative, ShapeKind};
use crate::resolve::resolve_to_relative;

/// Coordinate plane an arc lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcPlane {
    /// The XY plane; primitives turn about +Z.
    Xy,
    /// The XZ plane; primitives turn about -Y.
    Xz,
    /// The YZ plane; primitives turn about +X.
    Yz,
}

impl ArcPlane {
    /// Point at `angle_deg` on a circle of `radius` centered on the origin.
    pub fn point(&self, radius: f64, angle_deg: f64) -> Vec3 {
        let (s, c) = angle_deg.to_radians().sin_cos();
        match self {
            ArcPlane::Xy => Vec3::new(radius * c, radius * s, 0.0),
            ArcPlane::Xz => Vec3::new(radius * c, 0.0, radius * s),
            ArcPlane::Yz => Vec3::new(0.0, radius * c, radius * s),
        }
    }

    /// Axis the primitives are rotated about as they sweep the arc.
    ///
    /// Rotating by the sample angle about this axis turns the local axis
    /// that starts out radial (X for XY and XZ, Y for YZ) to stay radial.
    pub fn normal_axis(&self) -> Vec3 {
        match self {
            ArcPlane::Xy => Vec3::z(),
            ArcPlane::Xz => -Vec3::y(),
            ArcPlane::Yz => Vec3::x(),
        }
    }
}

/// Sample an arc in world coordinates.
///
/// Produces `segments + 1` placements at `angle1 + k * delta / segments`
/// degrees for `k = 0..=segments`, each rotated by its own angle about the
/// plane's normal axis.
pub fn arc_points(
    plane: ArcPlane,
    shape: ShapeKind,
    size: Vec3,
    radius: f64,
    angle1: f64,
    delta: f64,
    segments: usize,
) -> Result<PlacementSequence<Absolute>> {
    check_segments("arc", segments)?;
    log::debug!(
        "arc in {plane:?}: r={radius}, {angle1}° + {delta}° over {segments} segment(s)"
    );

    let axis = plane.normal_axis();
    Ok((0..=segments)
        .map(|k| {
            let angle = angle1 + k as f64 * delta / segments as f64;
            Placement::new(shape, size, plane.point(radius, angle), AxisAngle::new(angle, axis))
        })
        .collect())
}

/// Arc fragment as a relative sequence with a zeroed anchor.
pub fn arc(
    plane: ArcPlane,
    shape: ShapeKind,
    size: Vec3,
    radius: f64,
    angle1: f64,
    delta: f64,
    segments: usize,
) -> Result<PlacementSequence<Relative>> {
    let points = arc_points(plane, shape, size, radius, angle1, delta, segments)?;
    Ok(resolve_to_relative(&points, false))
}

/// Arc in the XY plane. See [`arc`].
pub fn arc_xy(
    shape: ShapeKind,
    size: Vec3,
    radius: f64,
    angle1: f64,
    delta: f64,
    segments: usize,
) -> Result<PlacementSequence<Relative>> {
    arc(ArcPlane::Xy, shape, size, radius, angle1, delta, segments)
}

/// Arc in the XZ plane. See [`arc`].
pub fn arc_xz(
    shape: ShapeKind,
    size: Vec3,
    radius: f64,
    angle1: f64,
    delta: f64,
    segments: usize,
) -> Result<PlacementSequence<Relative>> {
    arc(ArcPlane::Xz, shape, size, radius, angle1, delta, segments)
}

/// Arc in the YZ plane. See [`arc`].
pub fn arc_yz(
    shape: ShapeKind,
    size: Vec3,
    radius: f64,
    angle1: f64,
    delta: f64,
    segments: usize,
) -> Result<PlacementSequence<Relative>> {
    arc(ArcPlane::Yz, shape, size, radius, angle1, delta, segments)
}

/// Arc from `start_deg` to `end_deg`, expressed through the delta form.
pub fn arc_between(
    plane: ArcPlane,
    shape: ShapeKind,
    size: Vec3,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
    segments: usize,
) -> Result<PlacementSequence<Relative>> {
    arc(plane, shape, size, radius, start_deg, end_deg - start_deg, segments)
}
