//! Polyline with arc-length parametrization.

use serde::{Deserialize, Serialize};

use crate::core::{compute_centroid, Coordinate};
use crate::error::{Result, SectionError};

use super::DirectedSegment;

/// An ordered sequence of one or more nodes.
///
/// Derived attributes are computed once at construction:
/// - `segment_lengths[i]` = |node[i+1] - node[i]|
/// - `arc_lengths[0] = 0`, `arc_lengths[last] = length`
///
/// A 1-node polyline is valid and has length 0 (singleton section lines).
///
/// Serialises as its node list; deserialising rebuilds the caches through
/// [`Polyline::new`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct Polyline {
    nodes: Vec<Coordinate>,
    segment_lengths: Vec<f64>,
    arc_lengths: Vec<f64>,
}

impl Polyline {
    /// Build a polyline. Fails on an empty node list.
    pub fn new(nodes: Vec<Coordinate>) -> Result<Self> {
        if nodes.is_empty() {
            return Err(SectionError::TooFewPoints {
                required: 1,
                found: 0,
            });
        }

        let segment_lengths: Vec<f64> = nodes.windows(2).map(|w| w[0].distance(&w[1])).collect();

        let mut arc_lengths = Vec::with_capacity(nodes.len());
        let mut s = 0.0;
        arc_lengths.push(s);
        for len in &segment_lengths {
            s += len;
            arc_lengths.push(s);
        }

        Ok(Self {
            nodes,
            segment_lengths,
            arc_lengths,
        })
    }

    /// Single-node polyline.
    pub fn point(at: Coordinate) -> Self {
        Self {
            nodes: vec![at],
            segment_lengths: Vec::new(),
            arc_lengths: vec![0.0],
        }
    }

    /// Nodes in order.
    #[inline]
    pub fn nodes(&self) -> &[Coordinate] {
        &self.nodes
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true for a constructed polyline.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node.
    #[inline]
    pub fn first(&self) -> Coordinate {
        self.nodes[0]
    }

    /// Last node.
    #[inline]
    pub fn last(&self) -> Coordinate {
        self.nodes[self.nodes.len() - 1]
    }

    /// Length of each segment (`len() - 1` entries).
    #[inline]
    pub fn segment_lengths(&self) -> &[f64] {
        &self.segment_lengths
    }

    /// Cumulative arc length at each node.
    #[inline]
    pub fn arc_lengths(&self) -> &[f64] {
        &self.arc_lengths
    }

    /// Total length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.arc_lengths[self.arc_lengths.len() - 1]
    }

    /// Mean of the node coordinates.
    #[inline]
    pub fn centroid(&self) -> Coordinate {
        compute_centroid(&self.nodes)
    }

    /// Directed segments between consecutive nodes.
    pub fn segments(&self) -> impl Iterator<Item = DirectedSegment> + '_ {
        self.nodes
            .windows(2)
            .map(|w| DirectedSegment::new(w[0], w[1]))
    }

    /// Coordinate at arc length `s`, clamped to the ends.
    pub fn point_at(&self, s: f64) -> Coordinate {
        if s <= 0.0 || self.nodes.len() == 1 {
            return self.first();
        }
        if s >= self.length() {
            return self.last();
        }

        // First node whose arc length exceeds s; s lies in the segment before it.
        let upper = self.arc_lengths.partition_point(|&a| a <= s);
        let i = upper.saturating_sub(1).min(self.segment_lengths.len() - 1);
        let seg_len = self.segment_lengths[i];
        if seg_len == 0.0 {
            return self.nodes[i];
        }
        let t = (s - self.arc_lengths[i]) / seg_len;
        DirectedSegment::new(self.nodes[i], self.nodes[i + 1]).point_at(t)
    }
}

impl TryFrom<Vec<Coordinate>> for Polyline {
    type Error = SectionError;

    fn try_from(nodes: Vec<Coordinate>) -> Result<Self> {
        Self::new(nodes)
    }
}

impl From<Polyline> for Vec<Coordinate> {
    fn from(polyline: Polyline) -> Self {
        polyline.nodes
    }
}
