//! Coordinate type for well locations and section-line nodes.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Map coordinates (world units, typically metres in a projected CRS).
///
/// Equality is exact value equality; use [`Coordinate::approx_eq`] where a
/// tolerance is wanted.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Easting
    pub x: f64,
    /// Northing
    pub y: f64,
}

impl Coordinate {
    /// Create a new coordinate
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin
    pub const ZERO: Coordinate = Coordinate { x: 0.0, y: 0.0 };

    /// Euclidean distance to another coordinate
    #[inline]
    pub fn distance(&self, other: &Coordinate) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Squared distance (avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &Coordinate) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Angle from this coordinate to another (radians, CCW from +X)
    #[inline]
    pub fn angle_to(&self, other: &Coordinate) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Rotate about the origin by `angle` (radians, CCW positive)
    #[inline]
    pub fn rotate(&self, angle: f64) -> Coordinate {
        let (sin_a, cos_a) = angle.sin_cos();
        Coordinate::new(
            self.x * cos_a - self.y * sin_a,
            self.y * cos_a + self.x * sin_a,
        )
    }

    /// Length as a vector from the origin
    #[inline]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Cross product (z-component)
    #[inline]
    pub fn cross(&self, other: &Coordinate) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Component-wise comparison within `epsilon`
    #[inline]
    pub fn approx_eq(&self, other: &Coordinate, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl From<(f64, f64)> for Coordinate {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Coordinate::new(x, y)
    }
}

impl Add for Coordinate {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Coordinate::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Coordinate {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Coordinate::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Coordinate {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Coordinate::new(self.x * scalar, self.y * scalar)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
