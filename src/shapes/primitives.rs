//! Primitive boundaries - Circle, Square, Triangle
//!
//! All three are centered on the origin with screen-space Y (down is +Y).
//! Square and triangle share the polygon helpers at the bottom of this file,
//! so their edge order is the vertex order given here.

use std::f64::consts::{PI, TAU};

use super::descriptor::DashPattern;
use super::traits::Boundary;
use crate::geometry::{sample_count, GeometryError, Point};
use crate::render::Path;

/// A circle of diameter `size`
///
/// ## Parametric Equation
/// ```text
/// x = (size / 2) * cos(t * 2π)
/// y = (size / 2) * sin(t * 2π)
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CircleBoundary;

impl Boundary for CircleBoundary {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn length(&self, size: f64) -> f64 {
        PI * size
    }

    fn sample(&self, size: f64, t: f64) -> Point {
        Point::polar(Point::ORIGIN, size / 2.0, t * TAU)
    }

    fn outline(&self, size: f64, _corner_radius: f64, path: &mut Path) -> Result<(), GeometryError> {
        let radius = size / 2.0;
        path.move_to(Point::new(radius, 0.0))
            .arc(Point::ORIGIN, radius, 0.0, TAU)
            .close();
        Ok(())
    }

    /// Dashes are laid out by angle. Arc length and angle are proportional
    /// on a circle, so a dash of length `d` spans `d / radius` radians.
    fn dashes(&self, size: f64, pattern: DashPattern, path: &mut Path) -> Result<usize, GeometryError> {
        let radius = size / 2.0;
        let count = sample_count("dash", TAU * radius, pattern.period())?;
        let dash_angle = pattern.length / radius;
        let step_angle = pattern.period() / radius;

        for i in 0..count {
            let start = i as f64 * step_angle;
            path.move_to(Point::polar(Point::ORIGIN, radius, start))
                .line_to(Point::polar(Point::ORIGIN, radius, start + dash_angle));
        }
        Ok(count)
    }
}

/// A square with side `size`
///
/// Traced from the top-left corner, clockwise on screen:
/// top → right → bottom → left
#[derive(Clone, Copy, Debug, Default)]
pub struct SquareBoundary;

impl SquareBoundary {
    pub fn vertices(size: f64) -> [Point; 4] {
        let half = size / 2.0;
        [
            Point::new(-half, -half), // Top-left
            Point::new(half, -half),  // Top-right
            Point::new(half, half),   // Bottom-right
            Point::new(-half, half),  // Bottom-left
        ]
    }
}

impl Boundary for SquareBoundary {
    fn name(&self) -> &'static str {
        "Square"
    }

    fn length(&self, size: f64) -> f64 {
        4.0 * size
    }

    fn sample(&self, size: f64, t: f64) -> Point {
        sample_polygon(&Self::vertices(size), t)
    }

    fn max_corner_radius(&self, size: f64) -> f64 {
        size / 2.0
    }

    fn outline(&self, size: f64, corner_radius: f64, path: &mut Path) -> Result<(), GeometryError> {
        outline_polygon(&Self::vertices(size), corner_radius, path)
    }

    fn dashes(&self, size: f64, pattern: DashPattern, path: &mut Path) -> Result<usize, GeometryError> {
        dash_polygon(&Self::vertices(size), pattern, path)
    }
}

/// An equilateral triangle with side `size`, centroid on the origin
///
/// With `h = size * √3 / 2` the vertices are:
/// ```text
/// top          (0, -(h - h/3))
/// bottom-right (size/2, h/3)
/// bottom-left  (-size/2, h/3)
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TriangleBoundary;

impl TriangleBoundary {
    pub fn vertices(size: f64) -> [Point; 3] {
        let height = size * 3f64.sqrt() / 2.0;
        let base = size;
        [
            Point::new(0.0, -(height - height / 3.0)), // Top
            Point::new(base / 2.0, height / 3.0),      // Bottom-right
            Point::new(-base / 2.0, height / 3.0),     // Bottom-left
        ]
    }
}

impl Boundary for TriangleBoundary {
    fn name(&self) -> &'static str {
        "Triangle"
    }

    fn length(&self, size: f64) -> f64 {
        3.0 * size
    }

    fn sample(&self, size: f64, t: f64) -> Point {
        sample_polygon(&Self::vertices(size), t)
    }

    fn max_corner_radius(&self, size: f64) -> f64 {
        // half the shortest edge; all edges are `size` long
        size / 2.0
    }

    fn outline(&self, size: f64, corner_radius: f64, path: &mut Path) -> Result<(), GeometryError> {
        outline_polygon(&Self::vertices(size), corner_radius, path)
    }

    fn dashes(&self, size: f64, pattern: DashPattern, path: &mut Path) -> Result<usize, GeometryError> {
        dash_polygon(&Self::vertices(size), pattern, path)
    }
}

/// Walk a closed polygon with progress split evenly between its edges
fn sample_polygon(vertices: &[Point], t: f64) -> Point {
    let n = vertices.len();
    let scaled = t.clamp(0.0, 1.0) * n as f64;

    // Clamp edge to valid range (handles t = 1.0)
    let edge = (scaled as usize).min(n - 1);
    let local_t = scaled - edge as f64;

    vertices[edge].lerp(vertices[(edge + 1) % n], local_t)
}

/// Emit a closed polygon, rounding every corner when `corner_radius > 0`
///
/// A rounded corner is a line to the point `corner_radius` before the
/// vertex, then one quadratic curve with the vertex itself as control point
/// ending `corner_radius` after it. This is not a circular fillet; at the
/// radii emblems use the difference is not visible.
fn outline_polygon(vertices: &[Point], corner_radius: f64, path: &mut Path) -> Result<(), GeometryError> {
    let n = vertices.len();

    if corner_radius <= 0.0 {
        path.move_to(vertices[0]);
        for &vertex in &vertices[1..] {
            path.line_to(vertex);
        }
        path.close();
        return Ok(());
    }

    // Start halfway along the closing edge so every corner gets the same treatment
    path.move_to(vertices[n - 1].midpoint(vertices[0]));
    for i in 0..n {
        let vertex = vertices[i];
        let prev = vertices[(i + n - 1) % n];
        let next = vertices[(i + 1) % n];

        let arc_start = vertex + vertex.direction_to(prev)? * corner_radius;
        let arc_end = vertex + vertex.direction_to(next)? * corner_radius;

        path.line_to(arc_start).quadratic_curve_to(vertex, arc_end);
    }
    path.close();
    Ok(())
}

/// Lay dashes along each edge of a closed polygon
///
/// Dash numbering restarts at every edge: each edge begins with a full dash
/// at its first vertex and the leftover at its end is simply dropped. The
/// pattern is therefore not continuous around corners.
// TODO: decide with design whether dashes should carry their phase across corners.
fn dash_polygon(vertices: &[Point], pattern: DashPattern, path: &mut Path) -> Result<usize, GeometryError> {
    let n = vertices.len();
    let perimeter: f64 = (0..n).map(|i| vertices[i].distance(vertices[(i + 1) % n])).sum();
    sample_count("dash", perimeter, pattern.period())?;

    let mut total = 0;
    for i in 0..n {
        let start = vertices[i];
        let end = vertices[(i + 1) % n];
        let edge_length = start.distance(end);
        let count = sample_count("dash", edge_length, pattern.period())?;

        for dash in 0..count {
            let offset = dash as f64 * pattern.period();
            let t0 = offset / edge_length;
            let t1 = (offset + pattern.length) / edge_length;
            path.move_to(start.lerp(end, t0)).line_to(start.lerp(end, t1));
        }

        log::trace!("edge {}: length {:.2}, {} dashes", i, edge_length, count);
        total += count;
    }
    Ok(total)
}
