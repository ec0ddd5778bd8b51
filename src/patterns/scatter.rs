//! Scatter - decorative marks spread around a center point
//!
//! Placement `i` of `count` sits at angle `i / count * 2π` so the marks
//! cover the full turn evenly, at a random radius inside the annulus and
//! nudged by up to `JITTER` on each axis.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use crate::geometry::{ensure_non_negative, ensure_positive, ensure_range, GeometryError, Point};
use crate::render::Color;

/// Maximum offset added independently to x and y of each placement
pub const JITTER: f64 = 20.0;

/// The three mark renderers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkKind {
    Circle,
    Star,
    Cross,
}

impl MarkKind {
    pub fn all() -> &'static [MarkKind] {
        &[MarkKind::Circle, MarkKind::Star, MarkKind::Cross]
    }
}

/// How each placement picks its mark
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternMode {
    #[default]
    Circles,
    Stars,
    Crosses,
    /// Uniform random pick per placement
    Mixed,
}

/// Inclusive-exclusive range of mark sizes
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
}

impl SizeRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Parameters of one scatter pass
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterRequest {
    pub center: Point,
    pub count: usize,
    pub min_radius: f64,
    pub max_radius: f64,
    pub size_range: SizeRange,
    pub mode: PatternMode,
    /// Colors to pick from; must not be empty
    pub palette: Vec<Color>,
}

impl ScatterRequest {
    pub fn validate(&self) -> Result<(), GeometryError> {
        ensure_non_negative("scatter min radius", self.min_radius)?;
        ensure_non_negative("scatter max radius", self.max_radius)?;
        ensure_range("scatter radius", self.min_radius, self.max_radius)?;
        ensure_positive("pattern min size", self.size_range.min)?;
        ensure_positive("pattern max size", self.size_range.max)?;
        ensure_range("pattern size", self.size_range.min, self.size_range.max)?;
        if self.palette.is_empty() {
            return Err(GeometryError::Empty {
                what: "pattern palette",
            });
        }
        Ok(())
    }
}

impl Default for ScatterRequest {
    fn default() -> Self {
        Self {
            center: Point::ORIGIN,
            count: 24,
            min_radius: 20.0,
            max_radius: 120.0,
            size_range: SizeRange::new(2.0, 5.0),
            mode: PatternMode::Circles,
            palette: vec![Color(0x8B5A2B)],
        }
    }
}

/// One decorative mark, ready to draw
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatternPlacement {
    pub kind: MarkKind,
    pub center: Point,
    pub size: f64,
    pub color: Color,
}

/// Lazy placement generator returned by [`scatter`]
pub struct Scatter<'a, R: RandomSource + ?Sized> {
    request: &'a ScatterRequest,
    rng: &'a mut R,
    index: usize,
}

/// Start scattering `request.count` placements
///
/// Nothing is drawn from `rng` until the iterator is advanced. Calling
/// `scatter` again restarts from placement 0 with whatever state `rng` has.
pub fn scatter<'a, R: RandomSource + ?Sized>(
    request: &'a ScatterRequest,
    rng: &'a mut R,
) -> Result<Scatter<'a, R>, GeometryError> {
    request.validate()?;
    log::debug!(
        "scatter: {} marks in annulus {}..{}",
        request.count,
        request.min_radius,
        request.max_radius
    );
    Ok(Scatter {
        request,
        rng,
        index: 0,
    })
}

impl<R: RandomSource + ?Sized> Iterator for Scatter<'_, R> {
    type Item = PatternPlacement;

    fn next(&mut self) -> Option<PatternPlacement> {
        let request = self.request;
        if self.index >= request.count {
            return None;
        }

        let angle = self.index as f64 / request.count as f64 * TAU;
        self.index += 1;

        let radius = self.rng.next_range(request.min_radius, request.max_radius);
        let jitter_x = self.rng.next_range(-JITTER, JITTER);
        let jitter_y = self.rng.next_range(-JITTER, JITTER);
        let size = self.rng.next_range(request.size_range.min, request.size_range.max);

        let kind = match request.mode {
            PatternMode::Circles => MarkKind::Circle,
            PatternMode::Stars => MarkKind::Star,
            PatternMode::Crosses => MarkKind::Cross,
            PatternMode::Mixed => MarkKind::all()[self.rng.next_index(MarkKind::all().len())],
        };

        let color = match request.palette.as_slice() {
            [only] => *only,
            palette => palette[self.rng.next_index(palette.len())],
        };

        let center = Point::polar(request.center, radius, angle) + Point::new(jitter_x, jitter_y);

        Some(PatternPlacement {
            kind,
            center,
            size,
            color,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.request.count.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<R: RandomSource + ?Sized> ExactSizeIterator for Scatter<'_, R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::SeededRandom;

    /// Always returns the same value
    struct FixedRandom(f64);

    impl RandomSource for FixedRandom {
        fn next_f64(&mut self) -> f64 {
            self.0
        }
    }

    fn request(count: usize) -> ScatterRequest {
        ScatterRequest {
            center: Point::new(10.0, -10.0),
            count,
            min_radius: 40.0,
            max_radius: 100.0,
            size_range: SizeRange::new(3.0, 6.0),
            mode: PatternMode::Mixed,
            palette: vec![Color(0x111111), Color(0x222222), Color(0x333333)],
        }
    }

    #[test]
    fn test_fixed_source_geometry() {
        let request = request(4);
        let mut rng = FixedRandom(0.5);
        let placements: Vec<_> = scatter(&request, &mut rng).unwrap().collect();

        assert_eq!(placements.len(), 4);
        // radius 70, no jitter at 0.5, angles 0, π/2, π, 3π/2
        let expected = [(80.0, -10.0), (10.0, 60.0), (-60.0, -10.0), (10.0, -80.0)];
        for (placement, (x, y)) in placements.iter().zip(expected) {
            assert!((placement.center.x - x).abs() < 1e-9);
            assert!((placement.center.y - y).abs() < 1e-9);
            assert_eq!(placement.size, 4.5);
            assert_eq!(placement.kind, MarkKind::Star);
            assert_eq!(placement.color, Color(0x222222));
        }
    }

    #[test]
    fn test_seeded_bounds() {
        let request = request(500);
        let mut rng = SeededRandom::new(2024);

        for (i, placement) in scatter(&request, &mut rng).unwrap().enumerate() {
            let distance = placement.center.distance(request.center);
            let slack = JITTER * std::f64::consts::SQRT_2;
            assert!(distance >= request.min_radius - slack);
            assert!(distance < request.max_radius + slack);
            assert!(placement.size >= 3.0 && placement.size < 6.0);
            assert!(request.palette.contains(&placement.color));

            // jitter never pushes a mark across the center, away from its slot
            let slot = i as f64 / 500.0 * TAU;
            let offset = placement.center - request.center;
            let direction = Point::polar(Point::ORIGIN, 1.0, slot);
            assert!(offset.x * direction.x + offset.y * direction.y > 0.0);
        }
    }

    #[test]
    fn test_mixed_mode_uses_every_mark() {
        let request = request(300);
        let mut rng = SeededRandom::new(5);
        let kinds: Vec<MarkKind> = scatter(&request, &mut rng).unwrap().map(|p| p.kind).collect();
        for kind in MarkKind::all() {
            assert!(kinds.contains(kind));
        }
    }

    #[test]
    fn test_same_seed_same_placements() {
        let request = request(40);
        let a: Vec<_> = scatter(&request, &mut SeededRandom::new(77)).unwrap().collect();
        let b: Vec<_> = scatter(&request, &mut SeededRandom::new(77)).unwrap().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_exact_size_and_empty() {
        let mut rng = SeededRandom::new(1);
        let request = request(12);
        let mut iter = scatter(&request, &mut rng).unwrap();
        assert_eq!(iter.len(), 12);
        iter.next();
        assert_eq!(iter.len(), 11);

        let empty = self::request(0);
        assert_eq!(scatter(&empty, &mut rng).unwrap().count(), 0);
    }

    #[test]
    fn test_invalid_requests() {
        let mut rng = FixedRandom(0.0);

        let mut inverted = request(3);
        inverted.min_radius = 200.0;
        assert!(scatter(&inverted, &mut rng).is_err());

        let mut no_colors = request(3);
        no_colors.palette.clear();
        assert!(matches!(
            scatter(&no_colors, &mut rng).err(),
            Some(GeometryError::Empty { .. })
        ));

        let mut zero_size = request(3);
        zero_size.size_range = SizeRange::new(0.0, 2.0);
        assert!(scatter(&zero_size, &mut rng).is_err());
    }
}
