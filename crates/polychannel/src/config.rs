//! Channel descriptions authored as TOML or JSON.
//!
//! A description is the host's literal placement list plus build options:
//!
//! ```toml
//! representation = "relative"   # or "absolute"
//! color = [0.2, 0.5, 0.9, 1.0]  # optional
//! center = true
//! shapes_only = false
//!
//! [[placement]]
//! shape = "sphere"
//! size = [1.0, 1.0, 1.0]
//! position = [0.0, 0.0, 0.0]
//!
//! [[placement]]
//! shape = "cube"
//! size = [1.0, 1.0, 1.0]
//! position = [7.0, 0.0, 0.0]
//! rotation = { angle = 45.0, axis = [0.0, 0.0, 1.0] }
//! ```
//!
//! A placement may also be written as a tuple
//! `["sphr", [sx, sy, sz], [x, y, z], [angle, [ax, ay, az]]]`.
//! Every shape name is checked while loading, so an unknown shape fails
//! before any geometry is built.

use polychannel_math::{AxisAngle, Vec3};
use serde::Deserialize;

use crate::channel::{build_any, ChannelOptions};
use crate::error::Result;
use crate::kernel::{Color, GeometryKernel};
use crate::placement::{AnySequence, Placement, Representation, ShapeKind};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDescription {
    #[serde(default)]
    representation: Representation,
    #[serde(default)]
    color: Option<Color>,
    #[serde(default = "default_center")]
    center: bool,
    #[serde(default)]
    shapes_only: bool,
    #[serde(default, rename = "placement")]
    placements: Vec<RawPlacement>,
}

fn default_center() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPlacement {
    Table(RawTable),
    Tuple(String, [f64; 3], [f64; 3], (f64, [f64; 3])),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    shape: String,
    size: [f64; 3],
    position: [f64; 3],
    #[serde(default)]
    rotation: RawRotation,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRotation {
    angle: f64,
    axis: [f64; 3],
}

impl Default for RawRotation {
    fn default() -> Self {
        Self {
            angle: 0.0,
            axis: [0.0, 0.0, 1.0],
        }
    }
}

impl RawPlacement {
    fn into_placement(self) -> Result<Placement> {
        let (shape, size, position, angle, axis) = match self {
            RawPlacement::Table(RawTable {
                shape,
                size,
                position,
                rotation,
            }) => (shape, size, position, rotation.angle, rotation.axis),
            RawPlacement::Tuple(shape, size, position, (angle, axis)) => {
                (shape, size, position, angle, axis)
            }
        };
        Ok(Placement::new(
            shape.parse::<ShapeKind>()?,
            Vec3::from(size),
            Vec3::from(position),
            AxisAngle::new(angle, Vec3::from(axis)),
        ))
    }
}

/// A validated placement sequence with its build options.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelDescription {
    /// The placements, tagged with their representation.
    pub sequence: AnySequence,
    /// Options for [`build`](Self::build).
    pub options: ChannelOptions,
}

impl ChannelDescription {
    /// Parse a TOML description.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let raw: RawDescription = toml::from_str(s)?;
        Self::from_raw(raw)
    }

    /// Parse a JSON description (same fields as the TOML form).
    pub fn from_json_str(s: &str) -> Result<Self> {
        let raw: RawDescription = serde_json::from_str(s)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawDescription) -> Result<Self> {
        let placements = raw
            .placements
            .into_iter()
            .map(RawPlacement::into_placement)
            .collect::<Result<Vec<_>>>()?;
        log::info!(
            "loaded channel description: {} {:?} placement(s)",
            placements.len(),
            raw.representation
        );
        Ok(Self {
            sequence: AnySequence::new(raw.representation, placements),
            options: ChannelOptions {
                color: raw.color,
                center: raw.center,
                shapes_only: raw.shapes_only,
            },
        })
    }

    /// Build the described channel through `kernel`.
    pub fn build<K: GeometryKernel>(&self, kernel: &mut K) -> Result<K::Scene> {
        build_any(kernel, &self.sequence, &self.options)
    }
}
