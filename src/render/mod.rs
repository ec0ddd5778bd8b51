//! Render module - drawing commands and the sinks that consume them
//!
//! This module provides:
//! - `Path` / `PathCommand` for ordered drawing commands
//! - `Color`, `StrokeStyle` and `StrokedPath` for paint
//! - `PathSink` trait, the boundary to the rendering backend
//! - `RecordingSink` (display list) and `SvgSink` (SVG document)

mod path;
mod sink;
mod svg;

pub use path::{Color, Path, PathCommand, StrokeStyle, StrokedPath};
pub use sink::{PathSink, RecordingSink, SinkCall};
pub use svg::SvgSink;
