//! Perimeter sampler - evenly spaced points along a shape boundary
//!
//! Used to place perforation holes. Sampling ignores dash and stroke state;
//! only the shape kind and size matter.

use super::kind::ShapeKind;
use crate::geometry::{ensure_positive, sample_count, GeometryError, Point};

/// Default distance between perforation holes
pub const HOLE_SPACING: f64 = 15.0;

/// Sample `floor(boundary_length / spacing)` points along the boundary
///
/// Points are taken at progress `i / count` for `i` in `0..count`, walking
/// the same edge order as the outline builder. A shape too small to hold a
/// single hole yields an empty vector; more than `MAX_SAMPLES` holes is a
/// `TooMany` error.
pub fn sample_perimeter(kind: ShapeKind, size: f64, spacing: f64) -> Result<Vec<Point>, GeometryError> {
    ensure_positive("size", size)?;
    ensure_positive("hole spacing", spacing)?;

    let boundary = kind.boundary();
    let count = sample_count("hole", boundary.length(size), spacing)?;

    let points: Vec<Point> = (0..count)
        .map(|i| boundary.sample(size, i as f64 / count as f64))
        .collect();

    log::debug!(
        "{} perimeter: size {}, spacing {}, {} holes",
        boundary.name(),
        size,
        spacing,
        points.len()
    );
    Ok(points)
}

/// Perforation points at the default hole spacing
pub fn perforations(kind: ShapeKind, size: f64) -> Result<Vec<Point>, GeometryError> {
    sample_perimeter(kind, size, HOLE_SPACING)
}
