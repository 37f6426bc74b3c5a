#![warn(missing_docs)]

//! Hulled channel sweeps built from placed cubes and spheres.
//!
//! A polychannel is a solid built from a sequence of primitives (cubes and
//! spheres, each with its own size, position and rotation) where every
//! consecutive pair is joined by a convex hull. Sequences come from literal
//! placements, arc and Bézier generators, and transforms on other
//! sequences; a [`GeometryKernel`] turns the result into geometry.
//!
//! # Example
//!
//! ```rust,no_run
//! use polychannel::{
//!     arc_xy, build_channel, ChannelOptions, IrKernel, Placement, PlacementSequence, Relative,
//!     ShapeKind, Vec3,
//! };
//!
//! let size = Vec3::new(1.0, 1.0, 1.0);
//! let straight: PlacementSequence<Relative> = PlacementSequence::new(vec![
//!     Placement::cube(size, Vec3::new(3.0, 0.0, 0.0)),
//!     Placement::cube(size, Vec3::new(5.0, 0.0, 0.0)),
//! ]);
//!
//! // Arc fragments come with a zero anchor, so the turn starts where the
//! // straight run ends.
//! let turn = arc_xy(ShapeKind::Cube, size, 4.0, -90.0, 90.0, 8)?;
//! let channel = straight.splice(&turn);
//!
//! let doc = build_channel(&mut IrKernel::new(), &channel, &ChannelOptions::default())?;
//! println!("{}", doc.to_json()?);
//! # Ok::<(), polychannel::ChannelError>(())
//! ```

pub mod channel;
pub mod config;
pub mod curve;
pub mod error;
pub mod kernel;
pub mod placement;
pub mod resolve;
pub mod transform;

#[cfg(test)]
mod test_utils;

pub use channel::{build_any, build_channel, ChannelOptions};
pub use config::ChannelDescription;
pub use curve::{
    arc, arc_between, arc_points, arc_xy, arc_xz, arc_yz, bezier_length, bezier_points,
    cubic_bezier, cubic_bezier_point, cubic_bezier_tangent, tangent_alignment, ArcPlane,
    CubicBezier,
};
pub use error::{ChannelError, Result};
pub use kernel::{Aabb, BoundsKernel, Color, GeometryKernel, IrKernel};
pub use placement::{
    Absolute, AnySequence, Frame, Placement, PlacementSequence, Relative, Representation,
    ShapeKind,
};
pub use resolve::{final_absolute_position, resolve_to_absolute, resolve_to_relative};
pub use transform::{reverse_order, set_first_position, splice, uniformly_increase};

pub use polychannel_ir as ir;
pub use polychannel_math::{AxisAngle, RigidTransform, Vec3};
