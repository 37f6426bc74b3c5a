//! The geometry kernel a channel is materialized through.
//!
//! Polychannel never builds solids itself. It asks a [`GeometryKernel`] for
//! three things: a placed primitive, the convex hull of two solids, and the
//! final composition of all hulls into one displayable scene.
//!
//! Two kernels ship with the crate: [`IrKernel`] records the construction
//! as a [`polychannel_ir::Document`] for a CSG engine to evaluate, and
//! [`BoundsKernel`] computes the channel's axis-aligned bounding box.

mod bounds;
mod ir;

pub use bounds::{Aabb, BoundsKernel};
pub use ir::IrKernel;

use polychannel_math::{RigidTransform, Vec3};
use serde::{Deserialize, Serialize};

use crate::placement::ShapeKind;

/// Display color as RGBA components in `0.0..=1.0`.
///
/// Serialized as an `[r, g, b, a]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Color {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
    /// Alpha (1.0 = opaque).
    pub a: f64,
}

impl Color {
    /// An opaque color.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// A color with transparency.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Components as `[r, g, b, a]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f64; 4]> for Color {
    fn from([r, g, b, a]: [f64; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<Color> for [f64; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

/// Solid-geometry backend consumed by the channel builder.
///
/// Solids are cloned when one primitive takes part in two hulls, so
/// `Solid` should be a cheap handle.
pub trait GeometryKernel {
    /// Handle to a solid.
    type Solid: Clone;
    /// Result of composing solids for display.
    type Scene;

    /// Create a primitive of `size`, placed by `transform`.
    ///
    /// A cube is centered on its origin when `centered` is set, otherwise its
    /// minimum corner sits at the origin. A sphere is a unit-diameter sphere
    /// scaled per axis by `size` and is always centered.
    fn make_primitive(
        &mut self,
        kind: ShapeKind,
        size: Vec3,
        transform: &RigidTransform,
        centered: bool,
    ) -> Self::Solid;

    /// Convex hull of two solids.
    fn hull(&mut self, a: Self::Solid, b: Self::Solid) -> Self::Solid;

    /// Union the solids into a displayable scene, optionally colored.
    fn compose(&mut self, solids: Vec<Self::Solid>, color: Option<Color>) -> Self::Scene;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_written_as_an_rgba_array() {
        let color = Color::rgb(0.25, 0.5, 1.0);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "[0.25,0.5,1.0,1.0]");

        let parsed: Color = serde_json::from_str("[0.2, 0.5, 0.9, 0.5]").unwrap();
        assert_eq!(parsed, Color::rgba(0.2, 0.5, 0.9, 0.5));
        assert!(serde_json::from_str::<Color>(r#"{"r": 1.0}"#).is_err());
    }
}
