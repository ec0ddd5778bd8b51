//! Mark renderers - the small filled shapes placed by the scatterer

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::scatter::{MarkKind, PatternPlacement};
use crate::geometry::Point;
use crate::render::{Path, PathSink};

/// Number of outer points of a star mark
pub const STAR_POINTS: usize = 5;

/// Inner star radius as a fraction of the outer radius
pub const STAR_INNER_RATIO: f64 = 0.4;

/// Cross arm thickness as a fraction of the mark size
pub const CROSS_THICKNESS: f64 = 0.3;

/// Outline of one mark centered at `center`
///
/// `size` is the circle radius, the outer star radius and the half-length
/// of each cross arm.
pub fn mark_path(kind: MarkKind, center: Point, size: f64) -> Path {
    match kind {
        MarkKind::Circle => circle_path(center, size),
        MarkKind::Star => star_path(center, size, STAR_POINTS),
        MarkKind::Cross => cross_path(center, size),
    }
}

/// Fill one placement into a sink
pub fn draw_mark<S: PathSink + ?Sized>(placement: &PatternPlacement, sink: &mut S) {
    mark_path(placement.kind, placement.center, placement.size).replay(sink);
    sink.fill(placement.color);
}

fn circle_path(center: Point, radius: f64) -> Path {
    let mut path = Path::with_capacity(3);
    path.move_to(Point::new(center.x + radius, center.y))
        .arc(center, radius, 0.0, TAU)
        .close();
    path
}

/// Vertices alternate between outer and inner radius, starting straight up
fn star_path(center: Point, outer: f64, points: usize) -> Path {
    let inner = outer * STAR_INNER_RATIO;
    let mut path = Path::with_capacity(points * 2 + 1);

    for i in 0..points * 2 {
        let radius = if i % 2 == 0 { outer } else { inner };
        let angle = i as f64 * PI / points as f64 - FRAC_PI_2;
        let vertex = Point::polar(center, radius, angle);
        if i == 0 {
            path.move_to(vertex);
        } else {
            path.line_to(vertex);
        }
    }
    path.close();
    path
}

/// Two perpendicular bars sharing the center
fn cross_path(center: Point, size: f64) -> Path {
    let half_thickness = size * CROSS_THICKNESS / 2.0;
    let mut path = Path::with_capacity(10);
    rect(&mut path, center, size, half_thickness);
    rect(&mut path, center, half_thickness, size);
    path
}

fn rect(path: &mut Path, center: Point, half_width: f64, half_height: f64) {
    path.move_to(Point::new(center.x - half_width, center.y - half_height))
        .line_to(Point::new(center.x + half_width, center.y - half_height))
        .line_to(Point::new(center.x + half_width, center.y + half_height))
        .line_to(Point::new(center.x - half_width, center.y + half_height))
        .close();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Color, PathCommand, RecordingSink, SinkCall};

    fn vertices(path: &Path) -> Vec<Point> {
        path.commands()
            .iter()
            .filter_map(|c| match c {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_star_alternates_radii() {
        let center = Point::new(3.0, 4.0);
        let path = mark_path(MarkKind::Star, center, 10.0);
        let points = vertices(&path);

        assert_eq!(points.len(), 10);
        assert_eq!(path.last(), Some(&PathCommand::ClosePath));
        for (i, p) in points.iter().enumerate() {
            let expected = if i % 2 == 0 { 10.0 } else { 4.0 };
            assert!((p.distance(center) - expected).abs() < 1e-9);
        }

        // first point straight up in screen space
        assert!((points[0].x - 3.0).abs() < 1e-9);
        assert!((points[0].y + 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_cross_bars() {
        let path = mark_path(MarkKind::Cross, Point::ORIGIN, 10.0);
        assert_eq!(path.len(), 10);

        let points = vertices(&path);
        let expected = [
            (0, Point::new(-10.0, -1.5)),
            (2, Point::new(10.0, 1.5)),
            (4, Point::new(-1.5, -10.0)),
            (6, Point::new(1.5, 10.0)),
        ];
        for (index, point) in expected {
            assert!(points[index].distance(point) < 1e-9);
        }
    }

    #[test]
    fn test_draw_mark_fills_with_placement_color() {
        let placement = PatternPlacement {
            kind: MarkKind::Circle,
            center: Point::new(1.0, 1.0),
            size: 2.0,
            color: Color(0xABCDEF),
        };

        let mut sink = RecordingSink::new();
        draw_mark(&placement, &mut sink);

        assert_eq!(sink.calls()[0], SinkCall::MoveTo(Point::new(3.0, 1.0)));
        assert_eq!(sink.fill_count(), 1);
        assert_eq!(sink.calls().last(), Some(&SinkCall::Fill(Color(0xABCDEF))));
    }
}
