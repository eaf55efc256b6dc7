//! Lissajous knot sampling.
//!
//! A Lissajous knot is the closed space curve
//!
//! ```text
//! x = cos(a·t + ϕ1)
//! y = cos(b·t + ϕ2)
//! z = cos(c·t)
//! ```
//!
//! (Bogle, Hearst, Jones & Stoilov, 1994). This module turns a
//! [`CurveParameters`] tuple into a [`SampledCurve`] plus the three
//! [`ProjectionOffsets`] used to draw the axis shadows.

mod params;
mod sampler;

pub use params::{CurveParameters, DEFAULT_OFFSET_RATIO, MAX_POINTS, MIN_POINTS};
pub use sampler::{Axis, ProjectionOffsets, SampledCurve, linspace, sample_knot};

/// Errors that can occur while sampling a knot or assembling its scene.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KnotError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl KnotError {
    #[must_use]
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for knot sampling and scene assembly.
pub type KnotResult<T> = Result<T, KnotError>;
