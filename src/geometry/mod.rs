//! Geometry module - plane math shared by every other module
//!
//! This module provides:
//! - `Point` with distance, direction, angle and interpolation helpers
//! - `GeometryError`, the single error type of the engine
//! - Validation helpers used at every component boundary

mod point;

pub use point::Point;

use thiserror::Error;

/// Errors produced by the geometry engine
///
/// Only invalid input can fail: every operation is a pure computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Degenerate input: {what}")]
    Degenerate { what: &'static str },

    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must not be negative (got {value})")]
    Negative { name: &'static str, value: f64 },

    #[error("{name} range is inverted (min {min} > max {max})")]
    InvalidRange { name: &'static str, min: f64, max: f64 },

    #[error("{what} must not be empty")]
    Empty { what: &'static str },

    #[error("{what} count {count} exceeds the limit of {max}")]
    TooMany {
        what: &'static str,
        count: f64,
        max: usize,
    },
}

/// Upper bound on points or dashes generated for one boundary
pub const MAX_SAMPLES: usize = 1_000_000;

/// Floor `length / spacing` into a count no larger than [`MAX_SAMPLES`]
pub(crate) fn sample_count(what: &'static str, length: f64, spacing: f64) -> Result<usize, GeometryError> {
    let count = (length / spacing).floor();
    if count.is_finite() && count <= MAX_SAMPLES as f64 {
        Ok(count.max(0.0) as usize)
    } else {
        Err(GeometryError::TooMany {
            what,
            count,
            max: MAX_SAMPLES,
        })
    }
}

/// Require a finite value strictly greater than zero
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonPositive { name, value })
    }
}

/// Require a finite value greater than or equal to zero
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value >= 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::Negative { name, value })
    }
}

/// Require `min <= max`
pub(crate) fn ensure_range(name: &'static str, min: f64, max: f64) -> Result<(), GeometryError> {
    if min <= max {
        Ok(())
    } else {
        Err(GeometryError::InvalidRange { name, min, max })
    }
}
