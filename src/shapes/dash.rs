//! Dash decomposer - split an outline into dash segments
//!
//! The number of dashes along a boundary stretch is
//! `floor(length / (dash + gap))`, so the pattern does not have to close:
//! a leftover gap at the seam is expected.

use super::descriptor::{DashPattern, ShapeDescriptor};
use crate::geometry::GeometryError;
use crate::render::{Path, StrokedPath};

/// Decompose the descriptor's shape into dashes
///
/// Every dash is a MoveTo/LineTo pair in one shared path, committed with the
/// descriptor's stroke. Corner radius is ignored: dashes follow the sharp
/// polygon edges.
pub fn dashify(descriptor: &ShapeDescriptor, pattern: DashPattern) -> Result<StrokedPath, GeometryError> {
    let descriptor = descriptor.validated()?;
    let pattern = pattern.validated()?;
    let boundary = descriptor.kind.boundary();

    let mut path = Path::new();
    let count = boundary.dashes(descriptor.size, pattern, &mut path)?;

    log::debug!(
        "{} dashes: size {}, dash {} gap {}, {} dashes",
        boundary.name(),
        descriptor.size,
        pattern.length,
        pattern.gap,
        count
    );

    Ok(StrokedPath::new(path, descriptor.stroke))
}
