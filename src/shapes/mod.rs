//! Shapes module - emblem outlines, dashes and perforations
//!
//! This module provides:
//! - `ShapeKind` and the `Boundary` dispatch table behind it
//! - `ShapeDescriptor`, `DashPattern` and `OuterBorder` input data
//! - Outline builder (`build_outline`, `build_layers`, `outline_path`)
//! - Dash decomposer (`dashify`)
//! - Perimeter sampler (`sample_perimeter`, `perforations`)

mod dash;
mod descriptor;
mod kind;
mod outline;
mod perimeter;
mod primitives;
mod traits;

pub use dash::dashify;
pub use descriptor::{DashPattern, OuterBorder, ShapeDescriptor};
pub use kind::ShapeKind;
pub use outline::{build_layers, build_outline, outline_path};
pub use perimeter::{perforations, sample_perimeter, HOLE_SPACING};
pub use primitives::{CircleBoundary, SquareBoundary, TriangleBoundary};
pub use traits::Boundary;
