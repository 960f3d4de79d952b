//! Core types for the rekha section-line library.
//!
//! - [`Coordinate`]: 2-D map coordinate
//! - [`math`]: angle helpers, centroid, working-frame transforms

pub mod math;
mod point;

pub use math::{compute_centroid, principal_angle};
pub use point::Coordinate;
