//! Order and offset transforms on placement sequences.
//!
//! All transforms return a new sequence and leave their input untouched.

use polychannel_math::Vec3;

use crate::error::{ChannelError, Result};
use crate::placement::{Absolute, Frame, PlacementSequence, Relative};
use crate::resolve::{resolve_to_absolute, resolve_to_relative};

/// Reverse a relative sequence so it traces the same path backward.
///
/// Element `j` of the result carries the shape, size and rotation of
/// original element `n-1-j`. Its anchor (element 0) is the original end
/// point and every later position is the negated original step, so the
/// last element of the result resolves back onto the original start.
pub fn reverse_order(seq: &PlacementSequence<Relative>) -> PlacementSequence<Relative> {
    let backward: PlacementSequence<Absolute> =
        resolve_to_absolute(seq).into_iter().rev().collect();
    resolve_to_relative(&backward, true)
}

/// Spread `change` evenly over the steps of a relative sequence.
///
/// Element 0 is left alone; every later offset grows by `change / (n - 1)`,
/// so the sequence's end point moves by exactly `change`. Used to fan out
/// or taper a run of identical steps.
pub fn uniformly_increase(
    seq: &PlacementSequence<Relative>,
    change: Vec3,
) -> Result<PlacementSequence<Relative>> {
    let n = seq.len();
    if n < 2 {
        return Err(ChannelError::DegenerateSequence {
            operation: "uniformly_increase",
            len: n,
            required: 2,
        });
    }
    let step = change / (n - 1) as f64;
    Ok(seq
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if i == 0 {
                *p
            } else {
                p.with_position(p.position + step)
            }
        })
        .collect())
}

/// Replace the position of element 0 only.
///
/// Re-anchors a generated curve fragment without recomputing it. An empty
/// sequence is returned unchanged.
pub fn set_first_position<F: Frame>(
    seq: &PlacementSequence<F>,
    position: Vec3,
) -> PlacementSequence<F> {
    seq.iter()
        .enumerate()
        .map(|(i, p)| if i == 0 { p.with_position(position) } else { *p })
        .collect()
}

/// Concatenate two sequences of the same frame.
pub fn splice<F: Frame>(
    head: &PlacementSequence<F>,
    tail: &PlacementSequence<F>,
) -> PlacementSequence<F> {
    head.iter().chain(tail.iter()).copied().collect()
}

impl<F: Frame> PlacementSequence<F> {
    /// Concatenate `other` after `self`. See [`splice`].
    pub fn splice(&self, other: &Self) -> Self {
        splice(self, other)
    }

    /// Replace the position of element 0. See [`set_first_position`].
    pub fn with_first_position(&self, position: Vec3) -> Self {
        set_first_position(self, position)
    }
}
