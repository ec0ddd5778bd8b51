//! Shape kinds and the dispatch table behind them

use serde::{Deserialize, Serialize};

use super::primitives::{CircleBoundary, SquareBoundary, TriangleBoundary};
use super::traits::Boundary;

/// The emblem shape kinds
///
/// Parsing never fails: any unrecognized name becomes `Circle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ShapeKind {
    #[default]
    Circle,
    Square,
    Triangle,
}

/// One boundary per kind, indexed by discriminant
static BOUNDARIES: [&dyn Boundary; 3] = [&CircleBoundary, &SquareBoundary, &TriangleBoundary];

impl ShapeKind {
    /// Get all shape kinds
    pub fn all() -> &'static [ShapeKind] {
        &[ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle]
    }

    /// Parse a kind name, falling back to `Circle`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "circle" => ShapeKind::Circle,
            "square" => ShapeKind::Square,
            "triangle" => ShapeKind::Triangle,
            other => {
                log::warn!("Unknown shape kind {:?}, using circle", other);
                ShapeKind::Circle
            }
        }
    }

    pub fn name(&self) -> &'static str {
        self.boundary().name()
    }

    /// The geometry shared by outline, dash and perimeter operations
    pub fn boundary(self) -> &'static dyn Boundary {
        BOUNDARIES[self as usize]
    }
}

impl From<&str> for ShapeKind {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for ShapeKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(ShapeKind::from("square"), ShapeKind::Square);
        assert_eq!(ShapeKind::from(" Triangle "), ShapeKind::Triangle);
        assert_eq!(ShapeKind::from("CIRCLE"), ShapeKind::Circle);
        assert_eq!(ShapeKind::from("heart"), ShapeKind::Circle);
        assert_eq!(ShapeKind::from(""), ShapeKind::Circle);
    }

    #[test]
    fn test_table_matches_kind() {
        assert_eq!(ShapeKind::Circle.name(), "Circle");
        assert_eq!(ShapeKind::Square.name(), "Square");
        assert_eq!(ShapeKind::Triangle.name(), "Triangle");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ShapeKind::Triangle).unwrap();
        assert_eq!(json, "\"triangle\"");

        let kinds: Vec<ShapeKind> =
            serde_json::from_str(r#"["square", "triangle", "star"]"#).unwrap();
        assert_eq!(
            kinds,
            vec![ShapeKind::Square, ShapeKind::Triangle, ShapeKind::Circle]
        );
    }
}
