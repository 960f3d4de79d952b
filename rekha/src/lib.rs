//! # Rekha: Section-Line Engine for Well Cross Sections
//!
//! Chooses a one-dimensional path through a set of map points (wells),
//! orders the points along it, and builds the line geometry a cross-section
//! renderer needs.
//!
//! ## Features
//!
//! - **Best-fit lines**: iterative rotation/regression with optional angle
//!   hint and tolerance
//! - **Fencelines**: paths through the points, shortened by adjacent-swap
//!   smoothing
//! - **Projected lines**: straight lines with perpendicular leader segments
//! - **Guidelines**: user-drawn polylines that fix the ordering
//!
//! ## Quick Start
//!
//! ```rust
//! use rekha::{PointSet, SectionHints, SectionLineEngine, SectionMode};
//!
//! let wells = PointSet::from_entries([
//!     ("101", (500_100.0, 500_200.0)),
//!     ("202", (500_700.0, 500_400.0)),
//!     ("303", (500_500.0, 500_500.0)),
//! ])
//! .unwrap();
//!
//! let hints = SectionHints::new(SectionMode::Projected).with_azimuth_degrees(60.0);
//! let result = SectionLineEngine::default().build(&wells, &hints).unwrap();
//!
//! assert_eq!(result.order.len(), 3);
//! assert_eq!(result.leaders().len(), 3);
//! println!("Section line length: {:.1}", result.section_line.length());
//! ```
//!
//! ## Coordinate Frame
//!
//! - Coordinates are planar map units (typically UTM metres), stored as `f64`
//! - Angles are radians, counter-clockwise from east, in (-π, π]
//! - Compass bearings (degrees clockwise from north) are accepted through
//!   [`SectionHints::with_azimuth_degrees`]
//!
//! ## Architecture
//!
//! - [`core`]: Coordinate and angle math
//! - [`features`]: Directed segments, polylines, point sets
//! - [`fitting`]: Best-fit line solver
//! - [`projection`]: Perpendicular projection onto a straight line
//! - [`guideline`]: Ordering along a user guideline
//! - [`smoothing`]: Adjacent-swap path smoother
//! - [`section`]: Engine dispatch and result bundle
//! - [`config`]: YAML configuration
//! - [`io`]: Request and response documents

pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod fitting;
pub mod guideline;
pub mod io;
pub mod projection;
pub mod section;
pub mod smoothing;

pub use config::{ConfigError, EngineConfig};
pub use core::Coordinate;
pub use error::{Result, SectionError};
pub use features::{DirectedSegment, LocalCoordinate, PointSet, Polyline};
pub use fitting::{BestFitLine, BestFitSolver, FitConfig, FitTermination};
pub use guideline::{guideline_from_flat, GuidelineMapper};
pub use io::{RequestError, SectionRequest};
pub use projection::{project_points, LineAnchor, Projection};
pub use section::{Diagnostics, SectionHints, SectionLineEngine, SectionLineResult, SectionMode};
pub use smoothing::{path_length, PathSmoother, SmoothingConfig};
