//! Point type and the vector helpers every other module builds on
//!
//! ## Coordinate System
//!
//! - (0, 0) is the emblem center
//! - X grows to the right, Y grows downward (screen space)
//! - Angles are measured from +X toward +Y, so a positive angle turns clockwise on screen

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use super::GeometryError;

/// A plane coordinate
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `center` in direction `angle` (radians)
    #[inline]
    pub fn polar(center: Point, radius: f64, angle: f64) -> Self {
        Self::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        (*self - other).length()
    }

    /// Length of this point taken as a vector from the origin
    #[inline]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the direction of this vector
    ///
    /// A zero-length vector has no direction, so this fails with
    /// [`GeometryError::Degenerate`] instead of producing NaN.
    pub fn normalize(&self) -> Result<Point, GeometryError> {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            return Err(GeometryError::Degenerate {
                what: "normalize of a zero-length vector",
            });
        }
        Ok(Point::new(self.x / len, self.y / len))
    }

    /// Unit vector pointing from `self` toward `target`
    pub fn direction_to(&self, target: Point) -> Result<Point, GeometryError> {
        (target - *self).normalize()
    }

    /// Angle of `self` as seen from `pivot`, in radians (-π, π]
    #[inline]
    pub fn angle_from(&self, pivot: Point) -> f64 {
        (self.y - pivot.y).atan2(self.x - pivot.x)
    }

    /// Linear interpolation: `t = 0` is `self`, `t = 1` is `other`
    #[inline]
    pub fn lerp(&self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y),
        )
    }

    #[inline]
    pub fn midpoint(&self, other: Point) -> Point {
        self.lerp(other, 0.5)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}
