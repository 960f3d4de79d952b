//! Perpendicular projection of points onto a straight section line.
//!
//! Points are moved into a frame where the line is the local X axis. The
//! projected position keeps the local x and drops the local y. Ordering is
//! by local x, so it follows the line direction.

use serde::{Deserialize, Serialize};

use crate::core::math::{from_frame, stable_argsort, to_frame};
use crate::core::Coordinate;
use crate::error::{Result, SectionError};
use crate::features::{DirectedSegment, PointId, PointSet, Polyline};

/// Offsets below this many ulps of the local coordinate magnitude count as
/// lying on the line.
const ON_LINE_ULPS: f64 = 8.0;

/// Position and direction of a straight projection line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum LineAnchor {
    /// A user segment: its direction and midpoint define the line.
    Segment(DirectedSegment),
    /// A direction through a given point (typically a best-fit angle and the
    /// point-set centroid).
    Angle {
        /// Line direction in radians.
        angle: f64,
        /// A point on the line.
        through: Coordinate,
    },
}

impl LineAnchor {
    /// Anchor on the first segment of a guideline.
    ///
    /// Waypoints past the second are ignored.
    pub fn from_guideline(waypoints: &[Coordinate]) -> Result<Self> {
        if waypoints.len() < 2 {
            return Err(SectionError::MalformedGuideline {
                waypoints: waypoints.len(),
            });
        }
        if waypoints.len() > 2 {
            log::warn!(
                "Projected line uses the first guideline segment, ignoring {} extra waypoints",
                waypoints.len() - 2
            );
        }
        let segment = DirectedSegment::new(waypoints[0], waypoints[1]);
        if segment.is_degenerate() {
            return Err(SectionError::DegenerateGuideline);
        }
        Ok(Self::Segment(segment))
    }

    /// Line direction in radians.
    pub fn angle(&self) -> f64 {
        match self {
            Self::Segment(segment) => segment.angle(),
            Self::Angle { angle, .. } => *angle,
        }
    }

    /// Origin of the working frame.
    pub fn origin(&self) -> Coordinate {
        match self {
            Self::Segment(segment) => segment.center(),
            Self::Angle { through, .. } => *through,
        }
    }
}

/// Result of projecting a point set onto a line.
#[derive(Clone, Debug)]
pub struct Projection<K> {
    /// Identifiers sorted along the line.
    pub order: Vec<K>,
    /// Straight line through the projected positions, in `order`.
    pub section_line: Polyline,
    /// One segment per point, from its location to its projected position.
    pub leaders: Vec<DirectedSegment>,
    /// Signed position of each projected point along the line, measured from
    /// the anchor origin, in `order`.
    pub along: Vec<f64>,
}

/// Project every point perpendicularly onto the anchored line.
pub fn project_points<K: PointId>(
    points: &PointSet<K>,
    anchor: &LineAnchor,
) -> Result<Projection<K>> {
    if points.is_empty() {
        return Err(SectionError::EmptyPointSet);
    }

    let alpha = anchor.angle();
    let origin = anchor.origin();
    let coords = points.coordinates();
    let local = to_frame(coords, origin, -alpha);

    let projected: Vec<Coordinate> = coords
        .iter()
        .zip(&local)
        .map(|(world, uv)| {
            let scale = uv.x.abs().max(uv.y.abs());
            if uv.y.abs() <= ON_LINE_ULPS * f64::EPSILON * scale {
                *world
            } else {
                from_frame(Coordinate::new(uv.x, 0.0), origin, -alpha)
            }
        })
        .collect();

    let u: Vec<f64> = local.iter().map(|p| p.x).collect();
    let sorted = stable_argsort(&u);

    let ids = points.ids();
    let order: Vec<K> = sorted.iter().map(|&i| ids[i].clone()).collect();
    let nodes: Vec<Coordinate> = sorted.iter().map(|&i| projected[i]).collect();
    let leaders = sorted
        .iter()
        .map(|&i| DirectedSegment::new(coords[i], projected[i]))
        .collect();
    let along = sorted.iter().map(|&i| u[i]).collect();

    log::debug!(
        "Projected {} points onto line at {:.4} rad through {}",
        points.len(),
        alpha,
        origin
    );

    Ok(Projection {
        order,
        section_line: Polyline::new(nodes)?,
        leaders,
        along,
    })
}
