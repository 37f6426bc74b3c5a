//! Error types for polychannel construction.

use thiserror::Error;

/// Errors that can occur while generating or building a channel.
#[derive(Error, Debug)]
pub enum ChannelError {
    /// A placement names a shape other than a cube or a sphere.
    #[error("invalid shape kind: {0:?} (expected \"cube\" or \"sphere\")")]
    InvalidShapeKind(String),

    /// Too few placements for the requested operation.
    #[error("{operation} needs at least {required} placement(s), got {len}")]
    DegenerateSequence {
        /// Operation that was requested.
        operation: &'static str,
        /// Length of the sequence it was given.
        len: usize,
        /// Minimum length it needs.
        required: usize,
    },

    /// A curve generator was asked for fewer than one segment.
    #[error("{0} needs at least one segment")]
    DegenerateCurve(&'static str),

    /// The tangent alignment rotation has no well-defined axis.
    #[error("ambiguous rotation at t={t}: tangent is antiparallel to the shape normal or zero")]
    AmbiguousRotation {
        /// Curve parameter of the offending sample.
        t: f64,
    },

    /// The TOML authoring input could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The JSON authoring input could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for polychannel operations.
pub type Result<T> = std::result::Result<T, ChannelError>;
