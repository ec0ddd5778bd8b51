//! Shape descriptors - the plain data callers hand to the builders

use serde::{Deserialize, Serialize};

use super::kind::ShapeKind;
use crate::geometry::{ensure_non_negative, ensure_positive, GeometryError};
use crate::render::StrokeStyle;

/// Dash metrics, measured along the true boundary
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    /// Length of each visible dash
    pub length: f64,
    /// Length of the invisible gap after each dash
    pub gap: f64,
}

impl DashPattern {
    pub fn new(length: f64, gap: f64) -> Self {
        Self { length, gap }
    }

    /// Length of one dash plus one gap
    pub fn period(&self) -> f64 {
        self.length + self.gap
    }

    pub fn validated(self) -> Result<Self, GeometryError> {
        ensure_positive("dash length", self.length)?;
        ensure_positive("dash gap", self.gap)?;
        Ok(self)
    }
}

/// Everything needed to draw the emblem outline
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeDescriptor {
    pub kind: ShapeKind,
    /// Circumscribing diameter for circles, side length for squares and triangles
    pub size: f64,
    /// Ignored for circles
    pub corner_radius: f64,
    pub stroke: StrokeStyle,
    /// Dashed outline when set, solid otherwise
    pub dash: Option<DashPattern>,
}

impl ShapeDescriptor {
    pub fn new(kind: ShapeKind, size: f64) -> Self {
        Self {
            kind,
            size,
            ..Self::default()
        }
    }

    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_dash(mut self, dash: DashPattern) -> Self {
        self.dash = Some(dash);
        self
    }

    /// Check every numeric field, returning a copy with a normalized stroke
    pub fn validated(&self) -> Result<Self, GeometryError> {
        ensure_positive("size", self.size)?;
        ensure_non_negative("corner radius", self.corner_radius)?;
        let stroke = self.stroke.validated()?;
        let dash = self.dash.map(DashPattern::validated).transpose()?;
        Ok(Self {
            stroke,
            dash,
            ..self.clone()
        })
    }
}

impl Default for ShapeDescriptor {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Circle,
            size: 200.0,
            corner_radius: 0.0,
            stroke: StrokeStyle::default(),
            dash: None,
        }
    }
}

/// An echo stroke drawn underneath the primary outline
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OuterBorder {
    /// Distance between the primary outline and the echo, on each side
    pub offset: f64,
    pub stroke: StrokeStyle,
}

impl OuterBorder {
    pub fn new(offset: f64, stroke: StrokeStyle) -> Self {
        Self { offset, stroke }
    }

    pub fn validated(self) -> Result<Self, GeometryError> {
        ensure_non_negative("border offset", self.offset)?;
        Ok(Self {
            stroke: self.stroke.validated()?,
            ..self
        })
    }
}
