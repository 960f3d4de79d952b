//! Ordinary least-squares line fitting.
//!
//! Regresses y on x, so the residual is measured vertically in the current
//! frame. The best-fit solver rotates the frame until the fitted slope
//! vanishes, which turns this into a perpendicular fit.

use crate::core::Coordinate;

/// Straight line `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFit {
    /// Rise over run.
    pub slope: f64,
    /// Value at x = 0.
    pub intercept: f64,
}

impl LinearFit {
    /// Angle of the fitted line from +X, in (-π/2, π/2).
    #[inline]
    pub fn angle(&self) -> f64 {
        self.slope.atan()
    }
}

/// Fit `y = a·x + b` by ordinary least squares.
///
/// Returns `None` when the regression is degenerate: fewer than two points,
/// or an x spread that is negligible against the y spread (the best line is
/// vertical in this frame).
///
/// # Example
/// ```
/// use rekha::core::Coordinate;
/// use rekha::fitting::fit_ols;
///
/// let points = [Coordinate::new(0.0, 1.0), Coordinate::new(2.0, 2.0), Coordinate::new(4.0, 3.0)];
/// let fit = fit_ols(&points).unwrap();
/// assert!((fit.slope - 0.5).abs() < 1e-12);
/// assert!((fit.intercept - 1.0).abs() < 1e-12);
///
/// let vertical = [Coordinate::new(1.0, 0.0), Coordinate::new(1.0, 5.0)];
/// assert!(fit_ols(&vertical).is_none());
/// ```
pub fn fit_ols(points: &[Coordinate]) -> Option<LinearFit> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let mean_x = sum_x / n;
    let mean_y = sum_y / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for p in points {
        let dx = p.x - mean_x;
        let dy = p.y - mean_y;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    // Also catches fully coincident points (0 <= 0).
    if sxx <= f64::EPSILON * syy {
        return None;
    }

    let slope = sxy / sxx;
    if !slope.is_finite() {
        return None;
    }

    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}
