//! Directed straight segment with a local (along, normal) frame.
//!
//! A segment is represented by its endpoints only. Its orientation defines a
//! local coordinate system rooted at the start point: the along axis points
//! from start to end, the normal axis is the along axis rotated 90° CCW.

use serde::{Deserialize, Serialize};

use crate::core::{principal_angle, Coordinate};

/// Position of a world coordinate relative to a segment's frame.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct LocalCoordinate {
    /// Signed projection length onto the segment direction.
    pub along: f64,
    /// Signed perpendicular offset (positive to the left).
    pub normal: f64,
}

/// A directed 2-D segment from `start` to `end`.
///
/// Coincident endpoints are permitted. Such a segment has length 0 and an
/// arbitrary angle; callers check [`DirectedSegment::is_degenerate`] before
/// relying on its frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectedSegment {
    /// Start point of the segment.
    pub start: Coordinate,
    /// End point of the segment.
    pub end: Coordinate,
}

impl DirectedSegment {
    /// Create a new segment.
    #[inline]
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    /// Direction vector from start to end (not normalized).
    #[inline]
    pub fn direction(&self) -> Coordinate {
        self.end - self.start
    }

    /// Length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Zero-length segment.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Angle of the direction from +X, in (-π, π].
    #[inline]
    pub fn angle(&self) -> f64 {
        let d = self.direction();
        principal_angle(d.y.atan2(d.x))
    }

    /// Midpoint of the segment.
    #[inline]
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.start.x + self.end.x) * 0.5,
            (self.start.y + self.end.y) * 0.5,
        )
    }

    /// Point at parameter `t` (0 = start, 1 = end).
    #[inline]
    pub fn point_at(&self, t: f64) -> Coordinate {
        self.start + self.direction() * t
    }

    /// Map a world coordinate into this segment's local frame.
    ///
    /// ```text
    /// (u + iv)(c - is) = (uc + vs) + i(vc - us)
    /// ```
    /// with `(u, v) = point - start` and `(c, s) = (cos a, sin a)`.
    #[inline]
    pub fn to_local(&self, point: Coordinate) -> LocalCoordinate {
        Self::local_about(self.start, self.angle(), point)
    }

    /// Like [`to_local`](Self::to_local) but rooted at the end point, so
    /// `along` is measured back from the end (and is ≤ 0 inside the segment).
    ///
    /// A point coincident with `end` maps to exactly (0, 0).
    #[inline]
    pub fn to_local_from_end(&self, point: Coordinate) -> LocalCoordinate {
        Self::local_about(self.end, self.angle(), point)
    }

    /// Map a local (along, normal) pair back to world coordinates.
    #[inline]
    pub fn from_local(&self, local: LocalCoordinate) -> Coordinate {
        let (s, c) = self.angle().sin_cos();
        Coordinate::new(
            self.start.x + local.along * c - local.normal * s,
            self.start.y + local.along * s + local.normal * c,
        )
    }

    /// Perpendicular distance from `point` to the infinite line.
    ///
    /// Degenerate segments fall back to the distance to `start`.
    #[inline]
    pub fn distance_to_point(&self, point: Coordinate) -> f64 {
        if self.is_degenerate() {
            return point.distance(&self.start);
        }
        (point - self.start).cross(&self.direction()).abs() / self.length()
    }

    fn local_about(origin: Coordinate, angle: f64, point: Coordinate) -> LocalCoordinate {
        let u = point.x - origin.x;
        let v = point.y - origin.y;
        let (s, c) = angle.sin_cos();
        LocalCoordinate {
            along: u * c + v * s,
            normal: v * c - u * s,
        }
    }
}

impl Default for DirectedSegment {
    fn default() -> Self {
        Self::new(Coordinate::ZERO, Coordinate::ZERO)
    }
}
