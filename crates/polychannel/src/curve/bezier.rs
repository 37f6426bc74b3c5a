//! Cubic Bézier paths between two endpoints with tangent constraints.

use polychannel_math::{AxisAngle, Tolerance, Vec3};

use super::check_segments;
use crate::error::{ChannelError, Result};
use crate::placement::{Absolute, Placement, PlacementSequence, Relative, ShapeKind};
use crate::resolve::resolve_to_relative;

/// A cubic Bézier given by its endpoints and end tangents.
///
/// Control points are `p0`, `p0 + d0 / 3`, `p1 - d1 / 3`, `p1`, so the
/// curve's derivative is exactly `d0` at `t = 0` and `d1` at `t = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Start point.
    pub p0: Vec3,
    /// End point.
    pub p1: Vec3,
    /// Tangent at the start.
    pub d0: Vec3,
    /// Tangent at the end.
    pub d1: Vec3,
}

impl CubicBezier {
    /// Create a curve from endpoints and end tangents.
    pub fn new(p0: Vec3, p1: Vec3, d0: Vec3, d1: Vec3) -> Self {
        Self { p0, p1, d0, d1 }
    }

    /// The four Bézier control points.
    pub fn control_points(&self) -> [Vec3; 4] {
        [self.p0, self.p0 + self.d0 / 3.0, self.p1 - self.d1 / 3.0, self.p1]
    }

    /// Position at parameter `t` in `[0, 1]`.
    pub fn point(&self, t: f64) -> Vec3 {
        let [c0, c1, c2, c3] = self.control_points();
        let u = 1.0 - t;
        c0 * (u * u * u) + c1 * (3.0 * u * u * t) + c2 * (3.0 * u * t * t) + c3 * (t * t * t)
    }

    /// First derivative at parameter `t`.
    pub fn tangent(&self, t: f64) -> Vec3 {
        let [c0, c1, c2, c3] = self.control_points();
        let u = 1.0 - t;
        (c1 - c0) * (3.0 * u * u) + (c2 - c1) * (6.0 * u * t) + (c3 - c2) * (3.0 * t * t)
    }

    /// Arc length estimate by the midpoint rule over `num_steps` equal steps in `t`.
    ///
    /// Diagnostic only; placement spacing is uniform in `t`, not in length.
    pub fn length(&self, num_steps: usize) -> Result<f64> {
        check_segments("bezier_length", num_steps)?;
        let dt = 1.0 / num_steps as f64;
        Ok((0..num_steps)
            .map(|k| self.tangent((k as f64 + 0.5) * dt).norm() * dt)
            .sum())
    }

    /// Sample the curve in world coordinates.
    ///
    /// Produces `segments + 1` placements at `t = k / segments`, each
    /// rotated so that `shape_normal` points along the curve's tangent.
    /// Fails with [`ChannelError::AmbiguousRotation`] at the first sample
    /// where that rotation has no well-defined axis.
    pub fn placements(
        &self,
        shape: ShapeKind,
        size: Vec3,
        shape_normal: Vec3,
        segments: usize,
    ) -> Result<PlacementSequence<Absolute>> {
        check_segments("cubic_bezier", segments)?;
        log::debug!(
            "cubic bezier {:?} -> {:?} over {segments} segment(s)",
            self.p0.as_slice(),
            self.p1.as_slice()
        );

        (0..=segments)
            .map(|k| {
                let t = k as f64 / segments as f64;
                let rotation = tangent_alignment(shape_normal, self.tangent(t))
                    .ok_or(ChannelError::AmbiguousRotation { t })?;
                Ok(Placement::new(shape, size, self.point(t), rotation))
            })
            .collect::<Result<Vec<_>>>()
            .map(PlacementSequence::new)
    }
}

/// Position at `t` on the cubic Bézier from `p0` to `p1` with end tangents `d0`, `d1`.
pub fn cubic_bezier_point(t: f64, p0: Vec3, p1: Vec3, d0: Vec3, d1: Vec3) -> Vec3 {
    CubicBezier::new(p0, p1, d0, d1).point(t)
}

/// Derivative at `t` of the same curve as [`cubic_bezier_point`].
pub fn cubic_bezier_tangent(t: f64, p0: Vec3, p1: Vec3, d0: Vec3, d1: Vec3) -> Vec3 {
    CubicBezier::new(p0, p1, d0, d1).tangent(t)
}

/// Arc length estimate of the cubic Bézier. See [`CubicBezier::length`].
pub fn bezier_length(p0: Vec3, p1: Vec3, d0: Vec3, d1: Vec3, num_steps: usize) -> Result<f64> {
    CubicBezier::new(p0, p1, d0, d1).length(num_steps)
}

/// Bézier samples in world coordinates. See [`CubicBezier::placements`].
pub fn bezier_points(
    curve: &CubicBezier,
    shape: ShapeKind,
    size: Vec3,
    shape_normal: Vec3,
    segments: usize,
) -> Result<PlacementSequence<Absolute>> {
    curve.placements(shape, size, shape_normal, segments)
}

/// Bézier fragment as a relative sequence with a zeroed anchor.
pub fn cubic_bezier(
    curve: &CubicBezier,
    shape: ShapeKind,
    size: Vec3,
    shape_normal: Vec3,
    segments: usize,
) -> Result<PlacementSequence<Relative>> {
    let points = bezier_points(curve, shape, size, shape_normal, segments)?;
    Ok(resolve_to_relative(&points, false))
}

/// Rotation turning `shape_normal` onto the direction of `tangent`.
///
/// The angle is the angle between the two vectors and the axis is their
/// normalized cross product. Only directions matter, so the result does not
/// depend on the vectors' lengths. When they already point the same way the
/// result is a zero rotation about `shape_normal`. Returns `None` when the
/// axis is undefined: either vector is zero or not finite, or they point in
/// opposite directions.
pub fn tangent_alignment(shape_normal: Vec3, tangent: Vec3) -> Option<AxisAngle> {
    let normal = unit(shape_normal)?;
    let direction = unit(tangent)?;

    let cos = normal.dot(&direction).clamp(-1.0, 1.0);
    let axis = normal.cross(&direction);
    // |axis| is the sine of the angle between the unit vectors
    if axis.norm() < Tolerance::DEFAULT.angular {
        return (cos > 0.0).then(|| AxisAngle::new(0.0, normal));
    }
    Some(AxisAngle::new(cos.acos().to_degrees(), axis.normalize()))
}

fn unit(v: Vec3) -> Option<Vec3> {
    v.try_normalize(0.0).filter(|u| u.iter().all(|c| c.is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{final_absolute_position, resolve_to_absolute};
    use crate::transform::set_first_position;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn s_curve() -> CubicBezier {
        CubicBezier::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 4.0, -2.0),
            Vec3::new(12.0, 0.0, 0.0),
            Vec3::new(12.0, 0.0, 0.0),
        )
    }

    #[test]
    fn test_endpoints_are_exact() {
        let p0 = Vec3::new(-1.3, 2.7, 0.1);
        let p1 = Vec3::new(4.9, -0.3, 8.8);
        let d0 = Vec3::new(0.7, 3.0, -1.1);
        let d1 = Vec3::new(-2.0, 0.5, 6.0);
        assert_eq!(cubic_bezier_point(0.0, p0, p1, d0, d1), p0);
        assert_eq!(cubic_bezier_point(1.0, p0, p1, d0, d1), p1);
    }

    #[test]
    fn test_end_tangents_match_constraints() {
        let c = s_curve();
        assert_relative_eq!(c.tangent(0.0), c.d0, epsilon = 1e-12);
        assert_relative_eq!(c.tangent(1.0), c.d1, epsilon = 1e-12);
        assert_eq!(cubic_bezier_tangent(0.3, c.p0, c.p1, c.d0, c.d1), c.tangent(0.3));
    }

    #[test]
    fn test_tangent_matches_finite_difference() {
        let c = s_curve();
        let h = 1e-6;
        for &t in &[0.2, 0.5, 0.8] {
            let fd = (c.point(t + h) - c.point(t - h)) / (2.0 * h);
            assert_abs_diff_eq!(c.tangent(t), fd, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_placements_are_uniform_in_t_and_aligned() {
        let c = s_curve();
        let normal = Vec3::z();
        let pts = c.placements(ShapeKind::Cube, Vec3::new(1.0, 1.0, 0.2), normal, 4).unwrap();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts.first().unwrap().position, c.p0);
        assert_eq!(pts.last().unwrap().position, c.p1);

        for (k, p) in pts.iter().enumerate() {
            let t = k as f64 / 4.0;
            assert_abs_diff_eq!(p.position, c.point(t), epsilon = 1e-12);
            let turned = p.rotation.to_transform().apply_vec(&normal);
            assert_abs_diff_eq!(turned, c.tangent(t).normalize(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_alignment_of_perpendicular_vectors() {
        let r = tangent_alignment(Vec3::z(), Vec3::new(3.0, 0.0, 0.0)).unwrap();
        assert_relative_eq!(r.angle_deg, 90.0, epsilon = 1e-12);
        assert_relative_eq!(r.axis, Vec3::y(), epsilon = 1e-12);
    }

    #[test]
    fn test_alignment_of_parallel_vectors_is_a_zero_rotation() {
        let r = tangent_alignment(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, 5.0)).unwrap();
        assert_eq!(r.angle_deg, 0.0);
        assert_eq!(r.axis, Vec3::z());
    }

    #[test]
    fn test_alignment_is_ambiguous_for_antiparallel_or_zero_vectors() {
        assert!(tangent_alignment(Vec3::z(), -Vec3::z()).is_none());
        assert!(tangent_alignment(Vec3::z(), Vec3::zeros()).is_none());
        assert!(tangent_alignment(Vec3::zeros(), Vec3::x()).is_none());
        assert!(tangent_alignment(Vec3::new(f64::NAN, 0.0, 1.0), Vec3::x()).is_none());
        assert!(tangent_alignment(Vec3::z(), Vec3::new(f64::INFINITY, 0.0, 0.0)).is_none());
    }

    #[test]
    fn test_alignment_does_not_depend_on_vector_length() {
        let r = tangent_alignment(Vec3::new(0.0, 0.0, 1e-5), Vec3::new(2e-5, 0.0, 0.0)).unwrap();
        assert_relative_eq!(r.angle_deg, 90.0, epsilon = 1e-9);
        assert_relative_eq!(r.axis, Vec3::y(), epsilon = 1e-12);

        let big = tangent_alignment(Vec3::new(0.0, 0.0, 1e5), Vec3::new(2e5, 0.0, 0.0)).unwrap();
        assert_relative_eq!(big.angle_deg, r.angle_deg, epsilon = 1e-9);
    }

    #[test]
    fn test_small_scale_curve_aligns_every_sample() {
        let c = CubicBezier::new(
            Vec3::zeros(),
            Vec3::new(2e-5, 1e-5, 0.0),
            Vec3::new(2e-5, 0.0, 0.0),
            Vec3::new(2e-5, 0.0, 0.0),
        );
        let normal = Vec3::new(0.0, 0.0, 1e-5);
        let pts = c.placements(ShapeKind::Cube, Vec3::repeat(1e-6), normal, 4).unwrap();
        assert_eq!(pts.len(), 5);
        for (k, p) in pts.iter().enumerate() {
            let t = k as f64 / 4.0;
            assert_relative_eq!(p.rotation.angle_deg, 90.0, epsilon = 1e-9);
            let turned = p.rotation.to_transform().apply_vec(&normal.normalize());
            assert_abs_diff_eq!(turned, c.tangent(t).normalize(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_antiparallel_start_tangent_surfaces_an_error() {
        let c = CubicBezier::new(Vec3::zeros(), Vec3::new(-10.0, 0.0, 0.0), -Vec3::x(), -Vec3::x());
        let err = c.placements(ShapeKind::Sphere, Vec3::repeat(1.0), Vec3::x(), 3).unwrap_err();
        match err {
            ChannelError::AmbiguousRotation { t } => assert_eq!(t, 0.0),
            other => panic!("expected AmbiguousRotation, got {other:?}"),
        }
    }

    #[test]
    fn test_straight_path_along_normal_has_no_rotation() {
        let up = Vec3::new(0.0, 0.0, 6.0);
        let c = CubicBezier::new(Vec3::zeros(), up, up, up);
        let pts = c.placements(ShapeKind::Cube, Vec3::repeat(1.0), Vec3::z(), 3).unwrap();
        assert!(pts.iter().all(|p| p.rotation.angle_deg == 0.0));
        assert_abs_diff_eq!(
            pts.get(1).unwrap().position,
            Vec3::new(0.0, 0.0, 2.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_fragment_is_relative_and_reanchors() {
        let c = s_curve();
        let frag = cubic_bezier(&c, ShapeKind::Sphere, Vec3::repeat(1.0), Vec3::x(), 8).unwrap();
        assert_eq!(frag.len(), 9);
        assert_eq!(frag.first().unwrap().position, Vec3::zeros());
        assert_abs_diff_eq!(final_absolute_position(&frag).unwrap(), c.p1 - c.p0, epsilon = 1e-12);

        let world = bezier_points(&c, ShapeKind::Sphere, Vec3::repeat(1.0), Vec3::x(), 8).unwrap();
        assert_eq!(resolve_to_relative(&world, false), frag);

        let start = Vec3::new(5.0, 5.0, 5.0);
        let abs = resolve_to_absolute(&set_first_position(&frag, start));
        assert_abs_diff_eq!(abs.last().unwrap().position, start + c.p1 - c.p0, epsilon = 1e-12);
    }

    #[test]
    fn test_length_of_a_straight_segment() {
        let p0 = Vec3::zeros();
        let p1 = Vec3::new(10.0, 0.0, 0.0);
        // Uniform parameterization
        let uniform = bezier_length(p0, p1, p1, p1, 100).unwrap();
        assert_relative_eq!(uniform, 10.0, epsilon = 1e-9);
        // Zero end tangents: same segment, non-uniform speed
        let eased = bezier_length(p0, p1, Vec3::zeros(), Vec3::zeros(), 1000).unwrap();
        assert_relative_eq!(eased, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_length_of_a_quarter_circle_approximation() {
        // Standard cubic approximation of a unit quarter circle
        let k = 4.0 / 3.0 * (2.0_f64.sqrt() - 1.0) * 3.0;
        let (d0, d1) = (Vec3::new(0.0, k, 0.0), Vec3::new(-k, 0.0, 0.0));
        let len = bezier_length(Vec3::x(), Vec3::y(), d0, d1, 1000).unwrap();
        assert_relative_eq!(len, std::f64::consts::FRAC_PI_2, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_segments_or_steps_is_degenerate() {
        let c = s_curve();
        assert!(matches!(
            c.placements(ShapeKind::Cube, Vec3::repeat(1.0), Vec3::z(), 0),
            Err(ChannelError::DegenerateCurve("cubic_bezier"))
        ));
        assert!(matches!(c.length(0), Err(ChannelError::DegenerateCurve("bezier_length"))));
    }
}
