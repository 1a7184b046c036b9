//! Error type shared by the segmentation core.
//!
//! Only configuration problems and the opt-in divergence guard are errors.
//! Empty frames and masks without regions are ordinary outcomes and are
//! reported through [`crate::pipeline::FrameOutcome`] and
//! [`crate::tracking::Selection`] instead.
use thiserror::Error;

/// Errors raised by the level-set solver and the frame pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The potential selector is neither `single-well` nor `double-well`.
    #[error("unknown potential function {0:?} (expected \"single-well\" or \"double-well\")")]
    InvalidPotential(String),

    /// A numeric parameter is outside its admissible range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The field is too small for the offset-2 Neumann mirror.
    #[error("field of {width}x{height} is too small, at least 3x3 is required")]
    FieldTooSmall { width: usize, height: usize },

    /// Two fields that must share a shape do not.
    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// The edge indicator has a non-positive or non-finite sample.
    #[error("edge indicator must be strictly positive, found {value} at ({x}, {y})")]
    NonPositiveEdgeIndicator { x: usize, y: usize, value: f32 },

    /// The level-set function left the configured bound.
    #[error("level set diverged at iteration {iteration} (max |phi| = {max_abs})")]
    Diverged { iteration: usize, max_abs: f32 },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(name: &'static str, value: impl Into<f64>, reason: &'static str) -> Self {
        Error::InvalidParameter {
            name,
            value: value.into(),
            reason,
        }
    }

    /// `true` for errors caused by the caller's configuration.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Error::Diverged { .. })
    }
}
