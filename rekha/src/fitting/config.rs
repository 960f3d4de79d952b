//! Configuration for the best-fit line solver.

use std::f64::consts::{FRAC_PI_2, PI};

/// Configuration for [`BestFitSolver`](super::BestFitSolver).
#[derive(Clone, Debug, PartialEq)]
pub struct FitConfig {
    /// Maximum number of regression rounds.
    /// Default: 20
    pub max_rounds: usize,

    /// Stop once a round rotates by less than this (radians).
    /// Default: 1°
    pub convergence_tolerance: f64,

    /// Rotation applied after a degenerate (vertical) regression (radians).
    /// The sign alternates on each retry.
    /// Default: 0.01
    pub nudge: f64,

    /// Consecutive degenerate regressions before the refinement is abandoned.
    /// Default: 4
    pub max_nudges: usize,

    /// Bound on the accumulated rotation when no angle hint is given.
    /// With a hint but no tolerance the bound is π/2.
    /// Default: 0.99·π/2
    pub unconstrained_limit: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            max_rounds: 20,
            convergence_tolerance: PI / 180.0,
            nudge: 0.01,
            max_nudges: 4,
            unconstrained_limit: 0.99 * FRAC_PI_2,
        }
    }
}

impl FitConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the round cap.
    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Builder-style setter for the convergence tolerance.
    pub fn with_convergence_tolerance(mut self, radians: f64) -> Self {
        self.convergence_tolerance = radians;
        self
    }

    /// Builder-style setter for the degenerate-regression nudge.
    pub fn with_nudge(mut self, radians: f64) -> Self {
        self.nudge = radians;
        self
    }

    /// Builder-style setter for the consecutive-failure cap.
    pub fn with_max_nudges(mut self, count: usize) -> Self {
        self.max_nudges = count;
        self
    }

    /// Builder-style setter for the unhinted rotation bound.
    pub fn with_unconstrained_limit(mut self, radians: f64) -> Self {
        self.unconstrained_limit = radians;
        self
    }

    /// Maximum accumulated rotation away from the hint.
    ///
    /// | hint | tolerance | bound |
    /// |------|-----------|-------|
    /// | none | ignored   | `unconstrained_limit` |
    /// | some | none      | π/2 |
    /// | some | `t`       | min(\|t\|, π/2) |
    pub fn rotation_limit(&self, hint: Option<f64>, tolerance: Option<f64>) -> f64 {
        match (hint, tolerance) {
            (None, _) => self.unconstrained_limit,
            (Some(_), None) => FRAC_PI_2,
            (Some(_), Some(t)) => t.abs().min(FRAC_PI_2),
        }
    }
}
