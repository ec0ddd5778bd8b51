//! SVG output - a path sink that writes an SVG document
//!
//! Each `fill` or `stroke` commit becomes one `<path>` element carrying the
//! path data accumulated since the previous commit.

use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;

use super::path::{Color, StrokeStyle};
use super::sink::PathSink;
use crate::geometry::Point;

/// Sweeps this close to a full turn are drawn as a full circle
const FULL_TURN_EPSILON: f64 = 1e-9;

/// Accumulates sink calls as SVG `<path>` elements
#[derive(Debug, Default)]
pub struct SvgSink {
    /// Finished elements, in commit order
    elements: Vec<String>,
    /// Path data of the uncommitted path
    data: String,
    /// Current pen position, `None` until the first command of a path
    current: Option<Point>,
    /// Start of the current subpath (for close_path)
    subpath_start: Option<Point>,
}

impl SvgSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed elements
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Wrap the committed elements in an SVG document centered on the origin
    pub fn finish(&self, width: f64, height: f64) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            num(width),
            num(height),
            num(-width / 2.0),
            num(-height / 2.0),
            num(width),
            num(height)
        );
        for element in &self.elements {
            let _ = writeln!(out, "  {element}");
        }
        out.push_str("</svg>\n");
        out
    }

    fn commit(&mut self, paint: String) {
        if !self.data.is_empty() {
            let data = std::mem::take(&mut self.data);
            self.elements
                .push(format!(r#"<path d="{}" {}/>"#, data.trim_end(), paint));
        }
        self.current = None;
        self.subpath_start = None;
    }

    fn push_arc_segment(&mut self, radius: f64, sweep: f64, end: Point) {
        let large_arc = if sweep.abs() > PI { 1 } else { 0 };
        let sweep_flag = if sweep >= 0.0 { 1 } else { 0 };
        let _ = write!(
            self.data,
            "A{} {} 0 {} {} {} {} ",
            num(radius),
            num(radius),
            large_arc,
            sweep_flag,
            num(end.x),
            num(end.y)
        );
    }
}

impl PathSink for SvgSink {
    fn move_to(&mut self, p: Point) {
        let _ = write!(self.data, "M{} {} ", num(p.x), num(p.y));
        self.current = Some(p);
        self.subpath_start = Some(p);
    }

    fn line_to(&mut self, p: Point) {
        if self.current.is_none() {
            self.move_to(p);
            return;
        }
        let _ = write!(self.data, "L{} {} ", num(p.x), num(p.y));
        self.current = Some(p);
    }

    fn quadratic_curve_to(&mut self, control: Point, end: Point) {
        if self.current.is_none() {
            self.move_to(control);
        }
        let _ = write!(
            self.data,
            "Q{} {} {} {} ",
            num(control.x),
            num(control.y),
            num(end.x),
            num(end.y)
        );
        self.current = Some(end);
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        let start = Point::polar(center, radius, start_angle);
        let current = self.current;
        match current {
            None => self.move_to(start),
            Some(p) if p.distance(start) > FULL_TURN_EPSILON => self.line_to(start),
            Some(_) => {}
        }

        let sweep = end_angle - start_angle;
        let end = Point::polar(center, radius, end_angle);
        if sweep.abs() >= TAU - FULL_TURN_EPSILON {
            // SVG cannot draw a full circle in one arc: split at the halfway point
            let mid = Point::polar(center, radius, start_angle + sweep / 2.0);
            self.push_arc_segment(radius, sweep / 2.0, mid);
            self.push_arc_segment(radius, sweep / 2.0, end);
        } else {
            self.push_arc_segment(radius, sweep, end);
        }
        self.current = Some(end);
    }

    fn close_path(&mut self) {
        self.data.push_str("Z ");
        self.current = self.subpath_start;
    }

    fn fill(&mut self, color: Color) {
        self.commit(format!(r#"fill="{}""#, color.to_hex()));
    }

    fn stroke(&mut self, style: &StrokeStyle) {
        self.commit(format!(
            r#"fill="none" stroke="{}" stroke-width="{}" stroke-opacity="{}" stroke-linecap="round" stroke-linejoin="round""#,
            style.color.to_hex(),
            num(style.width),
            num(style.alpha)
        ));
    }
}

/// Format a coordinate with at most three decimals and no trailing zeros
fn num(value: f64) -> String {
    let s = format!("{value:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(1.0), "1");
        assert_eq!(num(-2.5), "-2.5");
        assert_eq!(num(0.12345), "0.123");
        assert_eq!(num(-0.0001), "0");
    }

    #[test]
    fn test_stroke_commits_one_element() {
        let mut sink = SvgSink::new();
        sink.move_to(Point::new(0.0, 0.0));
        sink.line_to(Point::new(10.0, 0.0));
        sink.close_path();
        sink.stroke(&StrokeStyle::new(Color(0xFF0000), 2.0, 0.5));

        assert_eq!(sink.element_count(), 1);
        let svg = sink.finish(100.0, 50.0);
        assert!(svg.contains(r#"d="M0 0 L10 0 Z""#));
        assert!(svg.contains(r##"stroke="#ff0000""##));
        assert!(svg.contains(r#"stroke-opacity="0.5""#));
        assert!(svg.contains(r#"viewBox="-50 -25 100 50""#));
    }

    #[test]
    fn test_full_circle_is_split() {
        let mut sink = SvgSink::new();
        sink.arc(Point::ORIGIN, 5.0, 0.0, TAU);
        sink.fill(Color::WHITE);

        let svg = sink.finish(20.0, 20.0);
        assert!(svg.contains("M5 0 A5 5 0 0 1 -5 0 A5 5 0 0 1 5 0"));
        assert!(svg.contains(r##"fill="#ffffff""##));
    }

    #[test]
    fn test_empty_commit_is_skipped() {
        let mut sink = SvgSink::new();
        sink.stroke(&StrokeStyle::default());
        assert_eq!(sink.element_count(), 0);
    }
}
