//! Emblem - composition of outline, perforations and surface patterns
//!
//! A `CookieEmblem` bundles the pieces that make up one cookie face and
//! draws them in layer order:
//!
//! 1. surface patterns
//! 2. outer border (echo stroke)
//! 3. primary outline, solid or dashed
//! 4. perforation holes

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::geometry::{ensure_positive, GeometryError, Point};
use crate::patterns::{draw_mark, scatter, PatternPlacement, RandomSource, ScatterRequest};
use crate::render::{Color, Path, PathSink, StrokedPath};
use crate::shapes::{build_layers, outline_path, sample_perimeter, OuterBorder, ShapeDescriptor, HOLE_SPACING};

/// How perforation holes look
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerforationStyle {
    /// Distance between holes along the boundary
    pub spacing: f64,
    /// Radius of each hole marker
    pub radius: f64,
    pub color: Color,
}

impl Default for PerforationStyle {
    fn default() -> Self {
        Self {
            spacing: HOLE_SPACING,
            radius: 3.0,
            color: Color(0x5C3A1E),
        }
    }
}

/// Everything drawn for one cookie face
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CookieEmblem {
    pub shape: ShapeDescriptor,
    pub outer_border: Option<OuterBorder>,
    pub perforation: Option<PerforationStyle>,
    pub surface: Option<ScatterRequest>,
}

/// Everything an emblem draws, computed up front
struct Layers {
    placements: Vec<PatternPlacement>,
    outlines: Vec<StrokedPath>,
    holes: Option<(Path, Color)>,
}

impl CookieEmblem {
    pub fn new(shape: ShapeDescriptor) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }

    pub fn with_outer_border(mut self, border: OuterBorder) -> Self {
        self.outer_border = Some(border);
        self
    }

    pub fn with_perforation(mut self, perforation: PerforationStyle) -> Self {
        self.perforation = Some(perforation);
        self
    }

    pub fn with_surface(mut self, surface: ScatterRequest) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Outline strokes in draw order (outer border first)
    pub fn outline_layers(&self) -> Result<Vec<StrokedPath>, GeometryError> {
        build_layers(&self.shape, self.outer_border.as_ref())
    }

    /// Perforation hole centers; empty when perforation is off
    pub fn perforations(&self) -> Result<Vec<Point>, GeometryError> {
        match &self.perforation {
            Some(style) => sample_perimeter(self.shape.kind, self.shape.size, style.spacing),
            None => Ok(Vec::new()),
        }
    }

    /// Plain outline used to mask the cookie texture, never dashed
    pub fn mask_outline(&self) -> Result<Path, GeometryError> {
        outline_path(self.shape.kind, self.shape.size, self.shape.corner_radius)
    }

    /// Fill the mask outline
    pub fn draw_mask<S: PathSink + ?Sized>(&self, sink: &mut S, color: Color) -> Result<(), GeometryError> {
        self.mask_outline()?.replay(sink);
        sink.fill(color);
        Ok(())
    }

    /// Draw every layer into `sink`
    ///
    /// All geometry is computed before the first command is emitted, so an
    /// invalid emblem leaves the sink untouched.
    pub fn draw<S, R>(&self, sink: &mut S, rng: &mut R) -> Result<(), GeometryError>
    where
        S: PathSink + ?Sized,
        R: RandomSource + ?Sized,
    {
        let layers = self.layers(rng)?;

        for placement in &layers.placements {
            draw_mark(placement, sink);
        }
        for outline in &layers.outlines {
            outline.draw(sink);
        }
        if let Some((holes, color)) = &layers.holes {
            holes.replay(sink);
            sink.fill(*color);
        }

        log::debug!(
            "emblem drawn: {} marks, {} outline layers, holes {}",
            layers.placements.len(),
            layers.outlines.len(),
            layers.holes.is_some()
        );
        Ok(())
    }

    fn layers<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Layers, GeometryError> {
        let outlines = self.outline_layers()?;

        let placements = match &self.surface {
            Some(request) => scatter(request, rng)?.collect(),
            None => Vec::new(),
        };

        let holes = match &self.perforation {
            Some(style) => {
                ensure_positive("hole radius", style.radius)?;
                let centers = self.perforations()?;
                let mut path = Path::with_capacity(centers.len() * 3);
                for center in centers {
                    path.move_to(Point::new(center.x + style.radius, center.y))
                        .arc(center, style.radius, 0.0, TAU)
                        .close();
                }
                (!path.is_empty()).then_some((path, style.color))
            }
            None => None,
        };

        Ok(Layers {
            placements,
            outlines,
            holes,
        })
    }
}
