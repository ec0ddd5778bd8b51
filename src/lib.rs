//! cookie-emblem - geometry for a breakable cookie surface
//!
//! The engine computes everything needed to decorate one cookie face and
//! hands it to a rendering backend as path commands:
//!
//! - emblem outlines for circles, rounded squares and rounded triangles
//! - dashed variants of those outlines
//! - perforation ("bite") points spaced evenly along the outline
//! - decorative marks scattered around the emblem
//!
//! Nothing here draws pixels. Output goes through the [`render::PathSink`]
//! trait; [`render::SvgSink`] is the bundled implementation.
//!
//! ```
//! use cookie_emblem::render::RecordingSink;
//! use cookie_emblem::shapes::{build_outline, perforations, ShapeDescriptor, ShapeKind};
//!
//! let descriptor = ShapeDescriptor::new(ShapeKind::Triangle, 120.0).with_corner_radius(8.0);
//! let outline = build_outline(&descriptor).unwrap();
//!
//! let mut sink = RecordingSink::new();
//! outline.draw(&mut sink);
//! assert_eq!(sink.stroke_count(), 1);
//!
//! let holes = perforations(ShapeKind::Triangle, 120.0).unwrap();
//! assert_eq!(holes.len(), 24);
//! ```

pub mod emblem;
pub mod geometry;
pub mod patterns;
pub mod render;
pub mod settings;
pub mod shapes;

pub use emblem::{CookieEmblem, PerforationStyle};
pub use geometry::{GeometryError, Point};
pub use settings::{EmblemSettings, SettingsError};
pub use shapes::{ShapeDescriptor, ShapeKind};
