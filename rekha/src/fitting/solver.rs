//! Iterative best-fit line solver.

use serde::{Deserialize, Serialize};

use crate::core::math::{stable_argsort, to_frame};
use crate::core::{principal_angle, Coordinate};
use crate::error::{Result, SectionError};
use crate::features::{PointId, PointSet};

use super::config::FitConfig;
use super::regression::fit_ols;

/// Why the rotation refinement stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitTermination {
    /// A round rotated by less than the convergence tolerance.
    Converged,
    /// The accumulated rotation hit the angular bound and was clamped.
    ConstraintReached,
    /// The round cap was exhausted.
    RoundCapReached,
    /// Too many consecutive vertical regressions; the last valid rotation
    /// was kept.
    DegenerateRegression,
}

/// Solver output: an ordering along the fitted line plus its orientation.
#[derive(Clone, Debug)]
pub struct BestFitLine<K> {
    /// Identifiers sorted by position along the line.
    pub order: Vec<K>,
    /// Final line angle in (-π, π]. Sorting runs in this direction.
    pub angle: f64,
    /// Point through which the line passes.
    pub centroid: Coordinate,
    /// Successful regression rounds performed.
    pub rounds: usize,
    /// Stop reason.
    pub termination: FitTermination,
}

/// Best-fit line through a point set, optionally steered by an angle hint.
///
/// # Algorithm
///
/// 1. Translate so the centroid is the origin and rotate by `-hint`.
/// 2. Each round: rotate by the accumulated offset, regress y on x, and add
///    `atan(slope)` to the offset.
/// 3. Stop when the increment drops below the tolerance, when the offset
///    reaches the angular bound (clamped), or at the round cap.
/// 4. A vertical regression nudges the offset by an alternating ±epsilon;
///    after too many consecutive failures the last valid offset is kept.
///
/// The final angle is `hint + offset`, and identifiers are ordered by x in
/// the final frame (ties keep point-set order).
#[derive(Clone, Debug, Default)]
pub struct BestFitSolver {
    config: FitConfig,
}

impl BestFitSolver {
    /// Create a solver.
    pub fn new(config: FitConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    /// Fit a line and order the points along it.
    ///
    /// `hint` is the preferred angle (radians). `tolerance` bounds the
    /// deviation from it; see [`FitConfig::rotation_limit`].
    pub fn solve<K: PointId>(
        &self,
        points: &PointSet<K>,
        hint: Option<f64>,
        tolerance: Option<f64>,
    ) -> Result<BestFitLine<K>> {
        if points.len() < 2 {
            return Err(SectionError::TooFewPoints {
                required: 2,
                found: points.len(),
            });
        }

        let base = hint.unwrap_or(0.0);
        let limit = self.config.rotation_limit(hint, tolerance);
        let centroid = points.centroid();
        let working = to_frame(points.coordinates(), centroid, -base);

        let mut theta = 0.0;
        let mut last_valid = 0.0;
        let mut nudge = self.config.nudge;
        let mut failures = 0;
        let mut rounds = 0;
        let mut termination = FitTermination::RoundCapReached;

        while rounds < self.config.max_rounds {
            let rotated: Vec<Coordinate> = working.iter().map(|p| p.rotate(-theta)).collect();

            let Some(fit) = fit_ols(&rotated) else {
                failures += 1;
                if failures >= self.config.max_nudges {
                    log::warn!(
                        "Degenerate regression {} times in a row, keeping offset {:.4} rad",
                        failures,
                        last_valid
                    );
                    theta = last_valid;
                    termination = FitTermination::DegenerateRegression;
                    break;
                }
                log::debug!("Vertical regression, nudging by {:+.3} rad", nudge);
                theta += nudge;
                nudge = -nudge;
                continue;
            };

            failures = 0;
            rounds += 1;
            let step = fit.angle();
            theta += step;

            log::debug!(
                "Round {}: step={:.4}°, angle={:.4}°, bound={:.4}°",
                rounds,
                step.to_degrees(),
                (base + theta).to_degrees(),
                limit.to_degrees()
            );

            if theta <= -limit {
                theta = -limit;
                termination = FitTermination::ConstraintReached;
                break;
            }
            if theta >= limit {
                theta = limit;
                termination = FitTermination::ConstraintReached;
                break;
            }
            last_valid = theta;
            if step.abs() < self.config.convergence_tolerance {
                termination = FitTermination::Converged;
                break;
            }
        }

        if termination == FitTermination::RoundCapReached {
            log::warn!(
                "Best-fit solver hit the {}-round cap, using angle {:.4} rad",
                self.config.max_rounds,
                base + theta
            );
        }

        let along: Vec<f64> = working.iter().map(|p| p.rotate(-theta).x).collect();
        let ids = points.ids();
        let order = stable_argsort(&along)
            .into_iter()
            .map(|i| ids[i].clone())
            .collect();

        Ok(BestFitLine {
            order,
            angle: principal_angle(base + theta),
            centroid,
            rounds,
            termination,
        })
    }
}
