//! Geometric value types.
//!
//! The same [`Point`] type is used for grid-index space and for the continuous
//! drawing space; which space a value lives in is a property of where it came
//! from, not of the type.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    pub fn distance_squared_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// A circle. A non-positive radius is the "no result" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// The canonical failed result: zero radius at the origin.
    pub fn invalid() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.radius > 0.0
    }

    /// Unsigned distance from `point` to the circle boundary.
    pub fn distance_from_boundary(&self, point: &Point) -> f64 {
        (self.center.distance_to(point) - self.radius).abs()
    }

    pub fn is_point_near_boundary(&self, point: &Point, threshold: f64) -> bool {
        self.distance_from_boundary(point) <= threshold
    }
}

/// A rotated ellipse.
///
/// When `valid`, `semi_major >= semi_minor > 0`. `angle` is the rotation of the
/// major axis from +x in radians and is not reduced to any range; compare
/// angles modulo π.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EllipseShape {
    pub center: Point,
    pub semi_major: f64,
    pub semi_minor: f64,
    pub angle: f64,
    pub valid: bool,
}

impl EllipseShape {
    pub fn new(center: Point, semi_major: f64, semi_minor: f64, angle: f64) -> Self {
        Self {
            center,
            semi_major,
            semi_minor,
            angle,
            valid: true,
        }
    }

    pub fn invalid() -> Self {
        Self::default()
    }

    /// Major-axis angle reduced to `[0, π)`.
    pub fn normalized_angle(&self) -> f64 {
        self.angle.rem_euclid(PI)
    }

    /// Samples the boundary as a closed polyline of `segments + 1` points.
    ///
    /// Returns an empty polyline for invalid ellipses or `segments == 0`.
    pub fn outline(&self, segments: usize) -> Vec<Point> {
        if !self.valid || self.semi_major <= 0.0 || self.semi_minor <= 0.0 || segments == 0 {
            return Vec::new();
        }

        let (sin_a, cos_a) = self.angle.sin_cos();
        (0..=segments)
            .map(|i| {
                let t = TAU * i as f64 / segments as f64;
                let ex = self.semi_major * t.cos();
                let ey = self.semi_minor * t.sin();
                Point::new(
                    self.center.x + ex * cos_a - ey * sin_a,
                    self.center.y + ex * sin_a + ey * cos_a,
                )
            })
            .collect()
    }
}
