#![warn(missing_docs)]

//! Math types for polychannel placement.
//!
//! Thin wrappers around nalgebra providing the types a placement needs:
//! vectors, axis-angle rotations, the rigid transform handed to a geometry
//! kernel, and tolerance constants.

use nalgebra::{Matrix3, Matrix4, Unit, Vector3, Vector4};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `v`.
    pub fn translation(v: &Vec3) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = v.x;
        m[(1, 3)] = v.y;
        m[(2, 3)] = v.z;
        Self { matrix: m }
    }

    /// Non-uniform scale by `(sx, sy, sz)`.
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 0)] = sx;
        m[(1, 1)] = sy;
        m[(2, 2)] = sz;
        Self { matrix: m }
    }

    /// Rotation about an arbitrary axis through the origin by `angle` radians.
    ///
    /// Uses Rodrigues' rotation formula.
    pub fn rotation_about_axis(axis: &Dir3, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (axis.as_ref().x, axis.as_ref().y, axis.as_ref().z);
        let mut m = Matrix4::identity();
        m[(0, 0)] = t * x * x + c;
        m[(0, 1)] = t * x * y - s * z;
        m[(0, 2)] = t * x * z + s * y;
        m[(1, 0)] = t * x * y + s * z;
        m[(1, 1)] = t * y * y + c;
        m[(1, 2)] = t * y * z - s * x;
        m[(2, 0)] = t * x * z - s * y;
        m[(2, 1)] = t * y * z + s * x;
        m[(2, 2)] = t * z * z + c;
        Self { matrix: m }
    }

    /// Compose: `self` then `other` (self * other).
    ///
    /// Applying the result to a point applies `other` first.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (ignores translation, applies rotation/scale).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }

    /// The upper-left 3x3 linear part.
    pub fn linear(&self) -> Matrix3<f64> {
        self.matrix.fixed_view::<3, 3>(0, 0).into_owned()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// A rotation given as an angle in degrees about an axis through the origin.
///
/// The axis need not be normalized. A zero-length axis is a no-op rotation,
/// matching how CSG kernels treat `rotate(a, v = [0, 0, 0])`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle {
    /// Rotation angle in degrees (right-hand rule about `axis`).
    pub angle_deg: f64,
    /// Rotation axis.
    pub axis: Vec3,
}

impl AxisAngle {
    /// Create a rotation of `angle_deg` degrees about `axis`.
    pub fn new(angle_deg: f64, axis: Vec3) -> Self {
        Self { angle_deg, axis }
    }

    /// The identity rotation (0° about +Z).
    pub fn identity() -> Self {
        Self::new(0.0, Vec3::z())
    }

    /// The normalized axis, or `None` if the axis has zero length.
    pub fn unit_axis(&self) -> Option<Dir3> {
        Dir3::try_new(self.axis, Tolerance::DEFAULT.linear)
    }

    /// The rotation as an affine transform.
    pub fn to_transform(&self) -> Transform {
        match self.unit_axis() {
            Some(axis) => Transform::rotation_about_axis(&axis, self.angle_deg.to_radians()),
            None => Transform::identity(),
        }
    }
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self::identity()
    }
}

/// A rigid placement: rotate about the origin, then translate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RigidTransform {
    /// Rotation applied first, about the primitive's own origin.
    pub rotation: AxisAngle,
    /// Translation applied after the rotation.
    pub translation: Vec3,
}

impl RigidTransform {
    /// Create a rigid transform from its rotation and translation.
    pub fn new(rotation: AxisAngle, translation: Vec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// The combined matrix `T * R`.
    pub fn to_transform(&self) -> Transform {
        Transform::translation(&self.translation).then(&self.rotation.to_transform())
    }

    /// Apply to a point in the primitive's local frame.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        self.to_transform().apply_point(p)
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in mm.
    pub linear: f64,
    /// Angular tolerance in radians, also used for the sine of small angles.
    pub angular: f64,
}

impl Tolerance {
    /// Default tolerances (1e-9 mm linear, 1e-9 rad angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-9,
        angular: 1e-9,
    };

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
