//! Outline builder - plain or dashed strokes for the emblem shape

use super::dash::dashify;
use super::descriptor::{OuterBorder, ShapeDescriptor};
use super::kind::ShapeKind;
use crate::geometry::{ensure_non_negative, ensure_positive, GeometryError};
use crate::render::{Path, StrokedPath};

/// Build the closed outline path of a shape
///
/// Corner radii above the shape's safe maximum are clamped; circles ignore
/// the radius entirely.
pub fn outline_path(kind: ShapeKind, size: f64, corner_radius: f64) -> Result<Path, GeometryError> {
    ensure_positive("size", size)?;
    ensure_non_negative("corner radius", corner_radius)?;

    let boundary = kind.boundary();
    let max_radius = boundary.max_corner_radius(size);
    let radius = if corner_radius > max_radius {
        if kind != ShapeKind::Circle {
            log::warn!(
                "{} corner radius {} exceeds {}, clamping",
                boundary.name(),
                corner_radius,
                max_radius
            );
        }
        max_radius
    } else {
        corner_radius
    };

    let mut path = Path::with_capacity(16);
    boundary.outline(size, radius, &mut path)?;
    Ok(path)
}

/// Build the primary emblem stroke
///
/// Dashed descriptors go through the dash decomposer; the rest get the plain
/// outline. Either way the result is committed with one stroke.
pub fn build_outline(descriptor: &ShapeDescriptor) -> Result<StrokedPath, GeometryError> {
    let descriptor = descriptor.validated()?;

    if let Some(pattern) = descriptor.dash {
        return dashify(&descriptor, pattern);
    }

    let path = outline_path(descriptor.kind, descriptor.size, descriptor.corner_radius)?;
    log::debug!(
        "{} outline: size {}, {} commands",
        descriptor.kind.name(),
        descriptor.size,
        path.len()
    );
    Ok(StrokedPath::new(path, descriptor.stroke))
}

/// Build every outline stroke in draw order
///
/// The outer border, when present, is its own solid stroke of the same
/// shape grown by `offset` on each side, and comes first so it sits
/// underneath the primary outline.
pub fn build_layers(
    descriptor: &ShapeDescriptor,
    border: Option<&OuterBorder>,
) -> Result<Vec<StrokedPath>, GeometryError> {
    let descriptor = descriptor.validated()?;
    let mut layers = Vec::with_capacity(2);

    if let Some(border) = border {
        let border = border.validated()?;
        let path = outline_path(
            descriptor.kind,
            descriptor.size + 2.0 * border.offset,
            descriptor.corner_radius,
        )?;
        layers.push(StrokedPath::new(path, border.stroke));
    }

    layers.push(build_outline(&descriptor)?);
    Ok(layers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::render::{Color, PathCommand, StrokeStyle};
    use crate::shapes::DashPattern;

    #[test]
    fn test_outline_starts_with_move_and_closes() {
        for &kind in ShapeKind::all() {
            for radius in [0.0, 6.0] {
                let descriptor = ShapeDescriptor::new(kind, 80.0).with_corner_radius(radius);
                let outline = build_outline(&descriptor).unwrap();
                assert!(matches!(outline.path.first(), Some(PathCommand::MoveTo(_))));
                assert_eq!(outline.path.last(), Some(&PathCommand::ClosePath));
            }
        }
    }

    #[test]
    fn test_circle_outline_is_one_arc() {
        let path = outline_path(ShapeKind::Circle, 60.0, 10.0).unwrap();
        assert_eq!(path.len(), 3);
        match path.commands()[1] {
            PathCommand::Arc { radius, start_angle, end_angle, .. } => {
                assert_eq!(radius, 30.0);
                assert_eq!(start_angle, 0.0);
                assert!((end_angle - std::f64::consts::TAU).abs() < 1e-12);
            }
            other => panic!("expected arc, got {:?}", other),
        }
    }

    #[test]
    fn test_rounded_triangle_commands() {
        let descriptor = ShapeDescriptor::new(ShapeKind::Triangle, 120.0).with_corner_radius(8.0);
        let path = build_outline(&descriptor).unwrap().path;

        // MoveTo + 3 x (LineTo + QuadraticCurveTo) + ClosePath
        assert_eq!(path.len(), 8);
        let quads: Vec<Point> = path
            .commands()
            .iter()
            .filter_map(|c| match c {
                PathCommand::QuadraticCurveTo { control, .. } => Some(*control),
                _ => None,
            })
            .collect();
        let vertices = crate::shapes::TriangleBoundary::vertices(120.0);
        assert_eq!(quads.len(), 3);
        for (control, vertex) in quads.iter().zip(vertices.iter()) {
            assert!(control.distance(*vertex) < 1e-9);
        }
    }

    #[test]
    fn test_triangle_radius_is_clamped() {
        let clamped = outline_path(ShapeKind::Triangle, 40.0, 500.0).unwrap();
        let limit = outline_path(ShapeKind::Triangle, 40.0, 20.0).unwrap();
        assert_eq!(clamped, limit);

        // arc endpoints never leave the edges
        for command in clamped.commands() {
            if let PathCommand::LineTo(p) = command {
                assert!(p.length() < 40.0);
            }
        }
    }

    #[test]
    fn test_square_radius_is_clamped() {
        let clamped = outline_path(ShapeKind::Square, 40.0, 500.0).unwrap();
        let limit = outline_path(ShapeKind::Square, 40.0, 20.0).unwrap();
        assert_eq!(clamped, limit);
    }

    #[test]
    fn test_invalid_size_fails() {
        assert!(outline_path(ShapeKind::Square, 0.0, 0.0).is_err());
        assert!(build_outline(&ShapeDescriptor::new(ShapeKind::Circle, -1.0)).is_err());
    }

    #[test]
    fn test_dashed_descriptor_delegates() {
        let descriptor = ShapeDescriptor::new(ShapeKind::Circle, 100.0)
            .with_dash(DashPattern::new(2.0, 8.0));
        let outline = build_outline(&descriptor).unwrap();
        assert_eq!(outline.path.len(), 62);
        assert!(!outline.path.commands().contains(&PathCommand::ClosePath));
    }

    #[test]
    fn test_layers_put_border_first() {
        let stroke = StrokeStyle::new(Color(0x8B4513), 4.0, 1.0);
        let echo = StrokeStyle::new(Color(0xFFFFFF), 2.0, 0.6);
        let descriptor = ShapeDescriptor::new(ShapeKind::Square, 100.0).with_stroke(stroke);
        let border = OuterBorder::new(5.0, echo);

        let layers = build_layers(&descriptor, Some(&border)).unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].style, echo);
        assert_eq!(layers[1].style, stroke);
        assert_eq!(
            layers[0].path.first(),
            Some(&PathCommand::MoveTo(Point::new(-55.0, -55.0)))
        );

        let single = build_layers(&descriptor, None).unwrap();
        assert_eq!(single.len(), 1);
    }
}
