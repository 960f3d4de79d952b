//! Error types for the section-line engine.
//!
//! Structural input problems surface as distinct [`SectionError`] variants.
//! Numeric hiccups inside the solver are recovered locally and never reach
//! the caller.

/// Result type alias
pub type Result<T> = std::result::Result<T, SectionError>;

/// Failures surfaced by section-line construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SectionError {
    /// No points were supplied.
    #[error("Point set is empty")]
    EmptyPointSet,

    /// An operation needs more points than were supplied.
    #[error("Too few points: {found} supplied, {required} required")]
    TooFewPoints {
        /// Minimum count for the operation.
        required: usize,
        /// Count actually supplied.
        found: usize,
    },

    /// Singleton mode was requested for more than one point.
    #[error("Singleton mode requires exactly one point, got {found}")]
    SingletonModeWithMultiplePoints {
        /// Number of points supplied.
        found: usize,
    },

    /// An identifier appears twice.
    #[error("Duplicate point id: {id}")]
    DuplicateId {
        /// Debug rendering of the offending id.
        id: String,
    },

    /// An identifier is not part of the point set.
    #[error("Unknown point id: {id}")]
    UnknownId {
        /// Debug rendering of the offending id.
        id: String,
    },

    /// An ordering does not cover the point set.
    #[error("Ordering has {found} ids, point set has {expected}")]
    OrderMismatch {
        /// Size of the point set.
        expected: usize,
        /// Length of the ordering.
        found: usize,
    },

    /// A guideline needs at least two waypoints.
    #[error("Guideline needs at least 2 waypoints, got {waypoints}")]
    MalformedGuideline {
        /// Number of waypoints supplied.
        waypoints: usize,
    },

    /// The guideline (or its anchoring segment) has zero length.
    #[error("Guideline has zero length")]
    DegenerateGuideline,

    /// A point could not be mapped onto any guideline segment.
    #[error("Point {id} cannot be projected onto the guideline")]
    UnresolvedProjection {
        /// Debug rendering of the offending id.
        id: String,
    },

    /// A flat coordinate list has an odd number of values.
    #[error("Flat coordinate list has odd length {count}")]
    OddCoordinateCount {
        /// Number of values supplied.
        count: usize,
    },

    /// Projected-line respacing was rejected.
    #[error("Cannot respace section line: {reason}")]
    InvalidRespacing {
        /// Why the request was rejected.
        reason: String,
    },
}

impl SectionError {
    /// Get a short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyPointSet => "EMPTY_POINT_SET",
            Self::TooFewPoints { .. } => "TOO_FEW_POINTS",
            Self::SingletonModeWithMultiplePoints { .. } => "SINGLETON_MULTIPLE",
            Self::DuplicateId { .. } => "DUPLICATE_ID",
            Self::UnknownId { .. } => "UNKNOWN_ID",
            Self::OrderMismatch { .. } => "ORDER_MISMATCH",
            Self::MalformedGuideline { .. } => "MALFORMED_GUIDELINE",
            Self::DegenerateGuideline => "DEGENERATE_GUIDELINE",
            Self::UnresolvedProjection { .. } => "UNRESOLVED_PROJECTION",
            Self::OddCoordinateCount { .. } => "ODD_COORDINATE_COUNT",
            Self::InvalidRespacing { .. } => "INVALID_RESPACING",
        }
    }

    /// True for errors caused by the guideline rather than the point set.
    pub fn is_guideline_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedGuideline { .. }
                | Self::DegenerateGuideline
                | Self::UnresolvedProjection { .. }
                | Self::OddCoordinateCount { .. }
        )
    }
}
