//! Closed-form curve generators producing placement fragments.
//!
//! Each generator samples its curve in world coordinates and hands back a
//! relative fragment with a zeroed anchor, ready to be spliced after an
//! existing sequence and re-anchored with
//! [`set_first_position`](crate::transform::set_first_position). The
//! absolute samples are available too (`*_points`) for callers that want
//! world coordinates directly.

mod arc;
mod bezier;

pub use arc::{arc, arc_between, arc_points, arc_xy, arc_xz, arc_yz, ArcPlane};
pub use bezier::{
    bezier_length, bezier_points, cubic_bezier, cubic_bezier_point, cubic_bezier_tangent,
    tangent_alignment, CubicBezier,
};

use crate::error::{ChannelError, Result};

/// Reject segment counts below one.
fn check_segments(generator: &'static str, segments: usize) -> Result<()> {
    if segments < 1 {
        return Err(ChannelError::DegenerateCurve(generator));
    }
    Ok(())
}
