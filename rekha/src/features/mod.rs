//! Geometric feature types for section lines.
//!
//! This module provides:
//! - [`DirectedSegment`]: Segment with a local (along, normal) frame
//! - [`Polyline`]: Node sequence with arc-length parametrization
//! - [`PointSet`]: Identifier-to-coordinate mapping (wells)

pub mod point_set;
pub mod polyline;
pub mod segment;

pub use point_set::{PointId, PointSet};
pub use polyline::Polyline;
pub use segment::{DirectedSegment, LocalCoordinate};
