//! Path commands and paint styles
//!
//! A `Path` is an ordered list of drawing commands. It carries no paint:
//! pairing it with a `StrokeStyle` gives a `StrokedPath`, which is what the
//! builders hand to a sink.

use serde::{Deserialize, Serialize};

use super::sink::PathSink;
use crate::geometry::{ensure_positive, GeometryError, Point};

/// A packed 0xRRGGBB color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xFFFFFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub fn r(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn g(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn b(&self) -> u8 {
        self.0 as u8
    }

    /// CSS hex notation, e.g. `#c68642`
    pub fn to_hex(&self) -> String {
        format!("#{:06x}", self.0 & 0xFF_FFFF)
    }
}

/// Paint parameters for a stroke commit
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    /// Opacity, 0.0 (invisible) to 1.0 (opaque)
    pub alpha: f64,
}

impl StrokeStyle {
    pub fn new(color: Color, width: f64, alpha: f64) -> Self {
        Self {
            color,
            width,
            alpha,
        }
    }

    /// Check the width and pull alpha into [0, 1]
    pub fn validated(self) -> Result<Self, GeometryError> {
        ensure_positive("stroke width", self.width)?;
        let alpha = if self.alpha.is_nan() {
            1.0
        } else {
            self.alpha.clamp(0.0, 1.0)
        };
        Ok(Self { alpha, ..self })
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(Color::BLACK, 2.0, 1.0)
    }
}

/// A single drawing command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath (SVG M)
    MoveTo(Point),
    /// Straight line from the current point (SVG L)
    LineTo(Point),
    /// Quadratic Bézier from the current point (SVG Q)
    QuadraticCurveTo { control: Point, end: Point },
    /// Circular arc around `center`, clockwise on screen from `start_angle` to `end_angle`
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    /// Close the current subpath (SVG Z)
    ClosePath,
}

/// An ordered sequence of drawing commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn first(&self) -> Option<&PathCommand> {
        self.commands.first()
    }

    pub fn last(&self) -> Option<&PathCommand> {
        self.commands.last()
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn quadratic_curve_to(&mut self, control: Point, end: Point) -> &mut Self {
        self.commands
            .push(PathCommand::QuadraticCurveTo { control, end });
        self
    }

    pub fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) -> &mut Self {
        self.commands.push(PathCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::ClosePath);
        self
    }

    /// Emit the commands to a sink, in order
    pub fn replay<S: PathSink + ?Sized>(&self, sink: &mut S) {
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => sink.move_to(p),
                PathCommand::LineTo(p) => sink.line_to(p),
                PathCommand::QuadraticCurveTo { control, end } => {
                    sink.quadratic_curve_to(control, end)
                }
                PathCommand::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                } => sink.arc(center, radius, start_angle, end_angle),
                PathCommand::ClosePath => sink.close_path(),
            }
        }
    }
}

/// A path and the one stroke that commits it
#[derive(Clone, Debug, PartialEq)]
pub struct StrokedPath {
    pub path: Path,
    pub style: StrokeStyle,
}

impl StrokedPath {
    pub fn new(path: Path, style: StrokeStyle) -> Self {
        Self { path, style }
    }

    /// Replay the path and commit it with a single stroke
    pub fn draw<S: PathSink + ?Sized>(&self, sink: &mut S) {
        self.path.replay(sink);
        sink.stroke(&self.style);
    }
}
