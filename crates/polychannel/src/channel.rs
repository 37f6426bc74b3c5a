//! Channel builder: placements in, hulled geometry out.

use crate::error::{ChannelError, Result};
use crate::kernel::{Color, GeometryKernel};
use crate::placement::{AnySequence, Frame, PlacementSequence};

/// How a channel is materialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelOptions {
    /// Display color handed to the kernel's compositor.
    pub color: Option<Color>,
    /// Center cubes on their position instead of placing their minimum corner there.
    pub center: bool,
    /// Emit the bare primitives without hulling them (diagnostic view of
    /// the cross-sections).
    pub shapes_only: bool,
}

impl Default for ChannelOptions {
    fn default() -> Self {
        Self {
            color: None,
            center: true,
            shapes_only: false,
        }
    }
}

impl ChannelOptions {
    /// Set the display color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set whether cubes are centered.
    pub fn centered(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    /// Set the primitives-only diagnostic mode.
    pub fn shapes_only(mut self, shapes_only: bool) -> Self {
        self.shapes_only = shapes_only;
        self
    }
}

/// Materialize a placement sequence through `kernel`.
///
/// Relative sequences are resolved to world coordinates first. Every
/// placement becomes one primitive; unless `shapes_only` is set, each
/// adjacent pair `(i - 1, i)` is then hulled, in index order, and the
/// `n - 1` hulls are composed into the scene. Hulled builds need at least
/// two placements, primitives-only builds at least one. Nothing is sent
/// to the kernel when the sequence is too short.
pub fn build_channel<K, F>(
    kernel: &mut K,
    seq: &PlacementSequence<F>,
    options: &ChannelOptions,
) -> Result<K::Scene>
where
    K: GeometryKernel,
    F: Frame,
{
    let n = seq.len();
    let required = if options.shapes_only { 1 } else { 2 };
    if n < required {
        return Err(ChannelError::DegenerateSequence {
            operation: "build_channel",
            len: n,
            required,
        });
    }
    log::debug!(
        "building channel: {n} {:?} placement(s), shapes_only={}",
        seq.representation(),
        options.shapes_only
    );

    let absolute = seq.to_absolute();
    let primitives: Vec<K::Solid> = absolute
        .iter()
        .map(|p| kernel.make_primitive(p.shape, p.size, &p.transform(), options.center))
        .collect();

    let parts = if options.shapes_only {
        primitives
    } else {
        primitives
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                log::trace!("hull {} -> {}", i, i + 1);
                kernel.hull(pair[0].clone(), pair[1].clone())
            })
            .collect()
    };
    Ok(kernel.compose(parts, options.color))
}

/// [`build_channel`] for a sequence whose frame is known at run time.
pub fn build_any<K: GeometryKernel>(
    kernel: &mut K,
    seq: &AnySequence,
    options: &ChannelOptions,
) -> Result<K::Scene> {
    match seq {
        AnySequence::Relative(s) => build_channel(kernel, s, options),
        AnySequence::Absolute(s) => build_channel(kernel, s, options),
    }
}
