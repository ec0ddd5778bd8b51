//! Patterns module - decorative marks scattered over the cookie surface
//!
//! This module provides:
//! - `RandomSource` trait with seeded and thread-shared implementations
//! - `scatter`, a lazy generator of `PatternPlacement`s in an annulus
//! - Mark renderers for circles, stars and crosses

mod marks;
mod random;
mod scatter;

pub use marks::{draw_mark, mark_path, CROSS_THICKNESS, STAR_INNER_RATIO, STAR_POINTS};
pub use random::{RandomSource, SeededRandom, SharedRandom};
pub use scatter::{
    scatter, MarkKind, PatternMode, PatternPlacement, Scatter, ScatterRequest, SizeRange, JITTER,
};
