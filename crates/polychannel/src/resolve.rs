//! Conversion between relative and absolute placement sequences.

use polychannel_math::Vec3;

use crate::error::{ChannelError, Result};
use crate::placement::{Absolute, PlacementSequence, Relative};

/// Resolve relative offsets into world coordinates.
///
/// Element `i` lands at the running sum of positions `0..=i`; element 0's
/// position is the anchor. Shape, size and rotation pass through unchanged.
pub fn resolve_to_absolute(seq: &PlacementSequence<Relative>) -> PlacementSequence<Absolute> {
    let mut cursor = Vec3::zeros();
    seq.iter()
        .enumerate()
        .map(|(i, p)| {
            cursor = if i == 0 { p.position } else { cursor + p.position };
            p.with_position(cursor)
        })
        .collect()
}

/// Express world coordinates as offsets from the previous placement.
///
/// Element 0 keeps its absolute position when `keep_first_position` is set,
/// otherwise it is zeroed so the fragment can be re-anchored later with
/// [`set_first_position`](crate::transform::set_first_position).
pub fn resolve_to_relative(
    seq: &PlacementSequence<Absolute>,
    keep_first_position: bool,
) -> PlacementSequence<Relative> {
    let placements = seq.as_slice();
    placements
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let position = match i {
                0 if keep_first_position => p.position,
                0 => Vec3::zeros(),
                _ => p.position - placements[i - 1].position,
            };
            p.with_position(position)
        })
        .collect()
}

/// World position of the last placement of a relative sequence.
pub fn final_absolute_position(seq: &PlacementSequence<Relative>) -> Result<Vec3> {
    if seq.is_empty() {
        return Err(ChannelError::DegenerateSequence {
            operation: "final_absolute_position",
            len: 0,
            required: 1,
        });
    }
    Ok(seq.iter().map(|p| p.position).sum())
}
