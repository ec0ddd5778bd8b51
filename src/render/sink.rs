//! Path sink trait - the boundary to whatever actually draws
//!
//! The engine never rasterizes anything. It emits path construction calls
//! followed by a `fill` or `stroke` commit, and the sink turns those into
//! pixels, SVG, GPU geometry or anything else.

use super::path::{Color, StrokeStyle};
use crate::geometry::Point;

/// A consumer of drawing commands
///
/// Commands arrive in emission order. `fill` and `stroke` commit the
/// path accumulated since the previous commit.
pub trait PathSink {
    fn move_to(&mut self, p: Point);

    fn line_to(&mut self, p: Point);

    fn quadratic_curve_to(&mut self, control: Point, end: Point);

    /// Circular arc around `center` from `start_angle` to `end_angle` (radians)
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);

    fn close_path(&mut self);

    /// Commit the accumulated path as a filled area
    fn fill(&mut self, color: Color);

    /// Commit the accumulated path as an outline
    fn stroke(&mut self, style: &StrokeStyle);
}

/// One recorded sink call
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SinkCall {
    MoveTo(Point),
    LineTo(Point),
    QuadraticCurveTo { control: Point, end: Point },
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    ClosePath,
    Fill(Color),
    Stroke(StrokeStyle),
}

/// A sink that keeps every call as a display list
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    /// Number of `stroke` commits
    pub fn stroke_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SinkCall::Stroke(_)))
            .count()
    }

    /// Number of `fill` commits
    pub fn fill_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SinkCall::Fill(_)))
            .count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl PathSink for RecordingSink {
    fn move_to(&mut self, p: Point) {
        self.calls.push(SinkCall::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.calls.push(SinkCall::LineTo(p));
    }

    fn quadratic_curve_to(&mut self, control: Point, end: Point) {
        self.calls.push(SinkCall::QuadraticCurveTo { control, end });
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        self.calls.push(SinkCall::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn close_path(&mut self) {
        self.calls.push(SinkCall::ClosePath);
    }

    fn fill(&mut self, color: Color) {
        self.calls.push(SinkCall::Fill(color));
    }

    fn stroke(&mut self, style: &StrokeStyle) {
        self.calls.push(SinkCall::Stroke(*style));
    }
}
