//! Boundary trait definition
//!
//! The `Boundary` trait is the one abstraction every shape-kind operation
//! goes through. Outline building, dash decomposition and perimeter sampling
//! all look up the same implementation for a `ShapeKind`, so edge order and
//! start corner cannot drift between them.

use crate::geometry::{GeometryError, Point};
use crate::render::Path;

use super::descriptor::DashPattern;

/// Geometry of one emblem shape kind
///
/// Implementations are stateless: every method takes the shape `size`
/// (circumscribing diameter for circles, side length for polygons) and is
/// centered on the origin.
///
/// ## Progress Parameter
///
/// `sample` walks the boundary with a progress value `t` in [0, 1):
/// - `t = 0.0` → start point (angle 0 for circles, first vertex for polygons)
/// - polygons split progress evenly between their edges, regardless of
///   edge length
///
/// ## Thread Safety
///
/// Boundaries live in a static table and are shared by every caller, so they
/// must be `Send + Sync`.
pub trait Boundary: Send + Sync {
    /// Name of this shape kind (for logs)
    fn name(&self) -> &'static str;

    /// Length of the boundary, ignoring corner rounding
    fn length(&self, size: f64) -> f64;

    /// Point at progress `t` along the boundary
    fn sample(&self, size: f64, t: f64) -> Point;

    /// Largest corner radius that keeps the outline free of self-intersections
    ///
    /// Shapes without corners return 0.0.
    fn max_corner_radius(&self, _size: f64) -> f64 {
        0.0
    }

    /// Append the closed outline of the shape to `path`
    ///
    /// `corner_radius` has already been clamped to `max_corner_radius`.
    fn outline(&self, size: f64, corner_radius: f64, path: &mut Path) -> Result<(), GeometryError>;

    /// Append dash segments (MoveTo/LineTo pairs) to `path`
    ///
    /// Returns the number of dashes emitted, or `TooMany` when the pattern
    /// is too fine for the boundary.
    fn dashes(&self, size: f64, pattern: DashPattern, path: &mut Path) -> Result<usize, GeometryError>;
}
