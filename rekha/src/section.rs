//! Section-line engine: mode dispatch and result bundle.
//!
//! ```text
//!                    PointSet + SectionHints
//!                             │
//!                   ┌─────────┴─────────┐
//!              1 point            2+ points (spread if coincident)
//!                   │                   │
//!               Singleton     ┌─────────┴──────────┐
//!                         Fenceline            Projected
//!                             │                    │
//!                 guideline? ─┤        guideline? ─┤
//!                 yes: mapper │        yes: first segment
//!                 no: best fit│        no: best fit + centroid
//!                             ▼                    ▼
//!                       PathSmoother         project_points
//! ```

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::core::math::{azimuth_to_angle, deg_to_rad, peak_to_peak};
use crate::core::Coordinate;
use crate::error::{Result, SectionError};
use crate::features::{DirectedSegment, PointId, PointSet, Polyline};
use crate::fitting::{BestFitLine, BestFitSolver, FitTermination};
use crate::guideline::GuidelineMapper;
use crate::projection::{project_points, LineAnchor};
use crate::smoothing::{PathSmoother, SmoothResult};

/// Kind of section line to build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionMode {
    /// Piecewise path through the points themselves.
    #[default]
    Fenceline,
    /// Straight line with the points projected onto it.
    Projected,
    /// A single point.
    Singleton,
}

/// Optional steering for section-line construction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionHints {
    /// Requested mode.
    #[serde(default)]
    pub mode: SectionMode,
    /// User-drawn guideline waypoints (at least two when present).
    #[serde(default)]
    pub guideline: Option<Vec<Coordinate>>,
    /// Preferred line angle in radians, counter-clockwise from east.
    #[serde(default)]
    pub angle: Option<f64>,
    /// Maximum deviation from `angle` in radians. Absent means unconstrained.
    #[serde(default)]
    pub tolerance: Option<f64>,
}

impl SectionHints {
    /// Hints for a mode with nothing else set.
    pub fn new(mode: SectionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Builder-style setter for the guideline.
    pub fn with_guideline(mut self, waypoints: Vec<Coordinate>) -> Self {
        self.guideline = Some(waypoints);
        self
    }

    /// Builder-style setter for the angle hint (radians).
    pub fn with_angle(mut self, radians: f64) -> Self {
        self.angle = Some(radians);
        self
    }

    /// Builder-style setter for the angle tolerance (radians).
    pub fn with_tolerance(mut self, radians: f64) -> Self {
        self.tolerance = Some(radians);
        self
    }

    /// Set the angle hint from a compass bearing (degrees clockwise from north).
    pub fn with_azimuth_degrees(self, bearing: f64) -> Self {
        self.with_angle(azimuth_to_angle(bearing))
    }

    /// Set the tolerance in degrees. Magnitudes above 90° are capped.
    pub fn with_tolerance_degrees(self, degrees: f64) -> Self {
        self.with_tolerance(deg_to_rad(degrees.abs().min(90.0)))
    }
}

/// Solver and smoother statistics for a build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Regression rounds, when the best-fit solver ran.
    pub fit_rounds: Option<usize>,
    /// Solver stop reason, when the best-fit solver ran.
    pub fit_termination: Option<FitTermination>,
    /// Smoother sweeps, when the smoother ran.
    pub smoothing_sweeps: Option<usize>,
    /// Smoother swaps, when the smoother ran.
    pub smoothing_swaps: Option<usize>,
    /// The smoother stopped at its sweep cap.
    pub smoothing_exhausted: bool,
    /// Coincident input points were spread out before dispatch.
    pub spread_applied: bool,
}

impl Diagnostics {
    fn record_fit<K>(&mut self, fit: &BestFitLine<K>) {
        self.fit_rounds = Some(fit.rounds);
        self.fit_termination = Some(fit.termination);
    }

    fn record_smoothing<K>(&mut self, smooth: &SmoothResult<K>) {
        self.smoothing_sweeps = Some(smooth.sweeps);
        self.smoothing_swaps = Some(smooth.swaps);
        self.smoothing_exhausted = smooth.exhausted;
    }
}

/// Engine output.
#[derive(Clone, Debug, Serialize)]
pub struct SectionLineResult<K> {
    /// Mode that produced this result.
    pub mode: SectionMode,
    /// Every input identifier exactly once, in section order.
    pub order: Vec<K>,
    /// Fenceline: the path through the points. Projected: the straight line
    /// through the projected positions. Singleton: a single node.
    pub section_line: Polyline,
    /// Projected mode only: one segment from each point (in `order`) to its
    /// node on the section line.
    pub leaders: Option<Vec<DirectedSegment>>,
    /// Best-fit angle, when the solver ran.
    pub fit_angle: Option<f64>,
    /// Solver statistics.
    pub diagnostics: Diagnostics,
}

impl<K: PointId> SectionLineResult<K> {
    /// Leader segments, empty outside projected mode.
    pub fn leaders(&self) -> &[DirectedSegment] {
        self.leaders.as_deref().unwrap_or(&[])
    }

    /// Move the nodes of a projected line so their spacing follows `offsets`.
    ///
    /// Node `i` lands at `first + s·(last − first)` with
    /// `s = (offsets[i] − offsets[0]) / ptp(offsets)`. Leaders are rebuilt
    /// from each original point to its moved node.
    pub fn respace_projected(&self, offsets: &[f64]) -> Result<Self> {
        let leaders = match (&self.leaders, self.mode) {
            (Some(leaders), SectionMode::Projected) => leaders,
            _ => return Err(respacing("only projected section lines can be respaced")),
        };
        if offsets.len() != self.order.len() {
            return Err(respacing(&format!(
                "expected {} offsets, got {}",
                self.order.len(),
                offsets.len()
            )));
        }
        let spread = peak_to_peak(offsets);
        if !(spread.is_finite() && spread > 0.0) {
            return Err(respacing("offsets have zero spread"));
        }

        let first = self.section_line.first();
        let span = self.section_line.last() - first;
        let nodes: Vec<Coordinate> = offsets
            .iter()
            .map(|x| first + span * ((x - offsets[0]) / spread))
            .collect();
        let leaders = leaders
            .iter()
            .zip(&nodes)
            .map(|(leader, node)| DirectedSegment::new(leader.start, *node))
            .collect();

        Ok(Self {
            mode: self.mode,
            order: self.order.clone(),
            section_line: Polyline::new(nodes)?,
            leaders: Some(leaders),
            fit_angle: self.fit_angle,
            diagnostics: self.diagnostics,
        })
    }
}

fn respacing(reason: &str) -> SectionError {
    SectionError::InvalidRespacing {
        reason: reason.to_string(),
    }
}

/// Builds section lines from point sets.
///
/// # Example
/// ```
/// use rekha::{PointSet, SectionHints, SectionLineEngine, SectionMode};
///
/// let wells = PointSet::from_entries([
///     ("A", (0.0, 0.0)),
///     ("B", (10.0, 10.0)),
///     ("C", (5.0, 0.0)),
///     ("D", (15.0, 10.0)),
/// ])
/// .unwrap();
///
/// let engine = SectionLineEngine::default();
/// let result = engine.build(&wells, &SectionHints::new(SectionMode::Fenceline)).unwrap();
/// assert_eq!(result.order.len(), 4);
/// assert!(result.leaders().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct SectionLineEngine {
    solver: BestFitSolver,
    smoother: PathSmoother,
    smooth_after_guideline: bool,
    guideline_min_points: usize,
    guideline_density: f64,
    spread_spacing: f64,
}

impl Default for SectionLineEngine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl SectionLineEngine {
    /// Create an engine from configuration.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            solver: BestFitSolver::new(config.to_fit_config()),
            smoother: PathSmoother::new(config.to_smoothing_config()),
            smooth_after_guideline: config.smoothing.after_guideline,
            guideline_min_points: config.smoothing.guideline_min_points,
            guideline_density: config.smoothing.guideline_density,
            spread_spacing: config.spread.spacing,
        }
    }

    /// Build the section line for `points`.
    pub fn build<K: PointId>(
        &self,
        points: &PointSet<K>,
        hints: &SectionHints,
    ) -> Result<SectionLineResult<K>> {
        if points.is_empty() {
            return Err(SectionError::EmptyPointSet);
        }
        if hints.mode == SectionMode::Singleton && points.len() > 1 {
            return Err(SectionError::SingletonModeWithMultiplePoints {
                found: points.len(),
            });
        }
        if points.len() == 1 {
            return Ok(Self::singleton(points));
        }

        let mut diagnostics = Diagnostics::default();
        let spread;
        let points = if points.is_coincident() {
            log::debug!("All {} points coincide, spreading them out", points.len());
            diagnostics.spread_applied = true;
            spread = points.with_spread_in_order(self.spread_spacing);
            &spread
        } else {
            points
        };

        log::debug!(
            "Building {:?} section line for {} points (guideline: {}, angle: {:?}, tolerance: {:?})",
            hints.mode,
            points.len(),
            hints.guideline.is_some(),
            hints.angle,
            hints.tolerance
        );

        match hints.mode {
            SectionMode::Projected => self.projected(points, hints, diagnostics),
            _ => self.fenceline(points, hints, diagnostics),
        }
    }

    fn singleton<K: PointId>(points: &PointSet<K>) -> SectionLineResult<K> {
        SectionLineResult {
            mode: SectionMode::Singleton,
            order: points.ids().to_vec(),
            section_line: Polyline::point(points.coordinates()[0]),
            leaders: None,
            fit_angle: None,
            diagnostics: Diagnostics::default(),
        }
    }

    fn fenceline<K: PointId>(
        &self,
        points: &PointSet<K>,
        hints: &SectionHints,
        mut diagnostics: Diagnostics,
    ) -> Result<SectionLineResult<K>> {
        let mut fit_angle = None;

        let order = match &hints.guideline {
            Some(waypoints) => {
                let mapper = GuidelineMapper::new(waypoints.clone())?;
                let mapped = mapper.order(points)?;
                if self.should_smooth_guideline(points.len(), mapper.waypoint_count()) {
                    let smooth = self.smoother.smooth(points, &mapped.order)?;
                    diagnostics.record_smoothing(&smooth);
                    smooth.order
                } else {
                    mapped.order
                }
            }
            None => {
                let fit = self.solver.solve(points, hints.angle, hints.tolerance)?;
                diagnostics.record_fit(&fit);
                fit_angle = Some(fit.angle);
                let smooth = self.smoother.smooth(points, &fit.order)?;
                diagnostics.record_smoothing(&smooth);
                smooth.order
            }
        };

        let section_line = Polyline::new(points.coordinates_of(&order)?)?;
        Ok(SectionLineResult {
            mode: SectionMode::Fenceline,
            order,
            section_line,
            leaders: None,
            fit_angle,
            diagnostics,
        })
    }

    fn projected<K: PointId>(
        &self,
        points: &PointSet<K>,
        hints: &SectionHints,
        mut diagnostics: Diagnostics,
    ) -> Result<SectionLineResult<K>> {
        let (anchor, fit_angle) = match &hints.guideline {
            Some(waypoints) => (LineAnchor::from_guideline(waypoints)?, None),
            None => {
                let fit = self.solver.solve(points, hints.angle, hints.tolerance)?;
                diagnostics.record_fit(&fit);
                let anchor = LineAnchor::Angle {
                    angle: fit.angle,
                    through: fit.centroid,
                };
                (anchor, Some(fit.angle))
            }
        };

        let projection = project_points(points, &anchor)?;
        Ok(SectionLineResult {
            mode: SectionMode::Projected,
            order: projection.order,
            section_line: projection.section_line,
            leaders: Some(projection.leaders),
            fit_angle,
            diagnostics,
        })
    }

    /// Guideline orderings are smoothed only when points are plentiful and
    /// the guideline is sparse relative to them.
    fn should_smooth_guideline(&self, points: usize, waypoints: usize) -> bool {
        self.smooth_after_guideline
            && points >= self.guideline_min_points
            && points as f64 / waypoints as f64 > self.guideline_density
    }
}
