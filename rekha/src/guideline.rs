//! Ordering points along a user-drawn guideline.
//!
//! Each point is located by arc length on the guideline polyline. Only the
//! one or two segments touching the point's nearest waypoint are considered,
//! which keeps a point from latching onto a far-away stretch of a winding
//! guideline.
//!
//! ```text
//!        entering          leaving
//!   ●───────────────▶●───────────────▶●
//!  w[i-1]       s1 = w[i] = s0       w[i+1]
//!                    ▲
//!                    │ nearest waypoint
//!                    ◦ point
//! ```
//!
//! A projection is valid on a segment when its arc-length coordinate falls
//! inside that segment's `[s0, s1]` interval. The leaving segment of the
//! first waypoint is also valid before its start, and the entering segment
//! of the last waypoint is also valid past its end.

use crate::core::math::stable_argsort;
use crate::core::Coordinate;
use crate::error::{Result, SectionError};
use crate::features::{DirectedSegment, PointId, PointSet, Polyline};

/// Arc-length coordinate of a point on one guideline segment.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ArcProjection {
    position: f64,
    valid: bool,
}

/// Points ordered by their arc-length position on a guideline.
#[derive(Clone, Debug)]
pub struct GuidelineOrdering<K> {
    /// Identifiers sorted by position.
    pub order: Vec<K>,
    /// Resolved arc-length position of each identifier, in `order`.
    pub positions: Vec<f64>,
}

/// Maps points onto a directed multi-segment guideline.
#[derive(Clone, Debug)]
pub struct GuidelineMapper {
    path: Polyline,
}

impl GuidelineMapper {
    /// Build from at least two waypoints. A zero-length guideline is rejected.
    pub fn new(waypoints: Vec<Coordinate>) -> Result<Self> {
        if waypoints.len() < 2 {
            return Err(SectionError::MalformedGuideline {
                waypoints: waypoints.len(),
            });
        }
        let path = Polyline::new(waypoints)?;
        if path.length() == 0.0 {
            return Err(SectionError::DegenerateGuideline);
        }
        Ok(Self { path })
    }

    /// The guideline as a polyline.
    pub fn path(&self) -> &Polyline {
        &self.path
    }

    /// Number of waypoints.
    pub fn waypoint_count(&self) -> usize {
        self.path.len()
    }

    /// Resolved arc-length position of `point`, or `None` if neither segment
    /// next to its nearest waypoint yields a projection.
    ///
    /// Resolution order: the single valid segment; the mean of both when both
    /// are valid; the entering segment, then the leaving segment, when
    /// neither is valid.
    pub fn locate(&self, point: Coordinate) -> Option<f64> {
        let i = self.nearest_waypoint(point);
        let last = self.path.len() - 1;

        let entering = if i > 0 { self.entering(i, point) } else { None };
        let leaving = if i < last { self.leaving(i, point) } else { None };

        match (entering, leaving) {
            (Some(l), Some(r)) if l.valid && r.valid => Some((l.position + r.position) / 2.0),
            (Some(l), _) if l.valid => Some(l.position),
            (_, Some(r)) if r.valid => Some(r.position),
            (Some(l), _) => Some(l.position),
            (None, Some(r)) => Some(r.position),
            (None, None) => None,
        }
    }

    /// Order a point set along the guideline. Ties keep point-set order.
    pub fn order<K: PointId>(&self, points: &PointSet<K>) -> Result<GuidelineOrdering<K>> {
        if points.is_empty() {
            return Err(SectionError::EmptyPointSet);
        }

        let mut resolved = Vec::with_capacity(points.len());
        for (id, point) in points.iter() {
            let position = self
                .locate(point)
                .ok_or_else(|| SectionError::UnresolvedProjection {
                    id: format!("{:?}", id),
                })?;
            log::trace!("Guideline position of {:?}: {:.3}", id, position);
            resolved.push(position);
        }

        let sorted = stable_argsort(&resolved);
        let ids = points.ids();

        Ok(GuidelineOrdering {
            order: sorted.iter().map(|&i| ids[i].clone()).collect(),
            positions: sorted.iter().map(|&i| resolved[i]).collect(),
        })
    }

    /// Index of the closest waypoint; the first one wins on ties.
    fn nearest_waypoint(&self, point: Coordinate) -> usize {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (i, w) in self.path.nodes().iter().enumerate() {
            let d = point.distance_squared(w);
            if d < best_dist {
                best = i;
                best_dist = d;
            }
        }
        best
    }

    fn segment(&self, k: usize) -> DirectedSegment {
        let nodes = self.path.nodes();
        DirectedSegment::new(nodes[k], nodes[k + 1])
    }

    /// Projection on the segment ending at waypoint `i`, measured back from
    /// its end so a point on the waypoint lands exactly on `s1`.
    fn entering(&self, i: usize, point: Coordinate) -> Option<ArcProjection> {
        let segment = self.segment(i - 1);
        if segment.is_degenerate() {
            return None;
        }
        let s0 = self.path.arc_lengths()[i - 1];
        let s1 = self.path.arc_lengths()[i];
        let position = s1 + segment.to_local_from_end(point).along;
        let is_last = i == self.path.len() - 1;
        Some(ArcProjection {
            position,
            valid: (s0..=s1).contains(&position) || (is_last && position >= s0),
        })
    }

    /// Projection on the segment starting at waypoint `i`.
    fn leaving(&self, i: usize, point: Coordinate) -> Option<ArcProjection> {
        let segment = self.segment(i);
        if segment.is_degenerate() {
            return None;
        }
        let s0 = self.path.arc_lengths()[i];
        let s1 = self.path.arc_lengths()[i + 1];
        let position = s0 + segment.to_local(point).along;
        Some(ArcProjection {
            position,
            valid: (s0..=s1).contains(&position) || (i == 0 && position <= s1),
        })
    }
}

/// Parse a flat `x1 y1 x2 y2 …` list into waypoints.
pub fn guideline_from_flat(values: &[f64]) -> Result<Vec<Coordinate>> {
    if values.len() % 2 != 0 {
        return Err(SectionError::OddCoordinateCount {
            count: values.len(),
        });
    }
    Ok(values
        .chunks_exact(2)
        .map(|xy| Coordinate::new(xy[0], xy[1]))
        .collect())
}
