//! Mathematical utilities for angles and point sets.
//!
//! All angles are in radians, measured counter-clockwise from +X (east).

use std::f64::consts::PI;

use super::Coordinate;

/// Two times PI (full circle in radians).
pub const TWO_PI: f64 = 2.0 * PI;

/// Shift an angle into the principal range (-π, π].
///
/// # Example
/// ```
/// use rekha::core::math::principal_angle;
/// use std::f64::consts::PI;
///
/// assert!((principal_angle(2.5 * PI) - PI / 2.0).abs() < 1e-12);
/// assert!((principal_angle(-PI) - PI).abs() < 1e-12);
/// assert!((principal_angle(PI / 2.0) - PI / 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn principal_angle(angle: f64) -> f64 {
    let mut a = angle % TWO_PI;
    if a <= -PI {
        a += TWO_PI;
    } else if a > PI {
        a -= TWO_PI;
    }
    a
}

/// Signed angular difference from `from` to `to`, in (-π, π].
#[inline]
pub fn angle_diff(from: f64, to: f64) -> f64 {
    principal_angle(to - from)
}

/// True when two undirected line orientations agree within `tolerance`.
///
/// Lines at `a` and `a + π` are the same line, so the comparison is made
/// modulo π.
#[inline]
pub fn line_angles_equal(a: f64, b: f64, tolerance: f64) -> bool {
    let d = angle_diff(a, b).abs();
    d <= tolerance || (PI - d) <= tolerance
}

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Convert a compass bearing (degrees clockwise from north) into a section
/// angle (radians counter-clockwise from east, principal range).
///
/// # Example
/// ```
/// use rekha::core::math::azimuth_to_angle;
/// use std::f64::consts::FRAC_PI_2;
///
/// assert!(azimuth_to_angle(90.0).abs() < 1e-12); // due east
/// assert!((azimuth_to_angle(0.0) - FRAC_PI_2).abs() < 1e-12); // due north
/// ```
#[inline]
pub fn azimuth_to_angle(azimuth_deg: f64) -> f64 {
    principal_angle(deg_to_rad(90.0 - azimuth_deg))
}

/// Arithmetic mean of a set of coordinates. Empty input yields the origin.
///
/// # Example
/// ```
/// use rekha::core::{Coordinate, math::compute_centroid};
///
/// let points = [Coordinate::new(0.0, 0.0), Coordinate::new(2.0, 0.0), Coordinate::new(1.0, 3.0)];
/// let c = compute_centroid(&points);
/// assert!((c.x - 1.0).abs() < 1e-12);
/// assert!((c.y - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn compute_centroid(points: &[Coordinate]) -> Coordinate {
    if points.is_empty() {
        return Coordinate::ZERO;
    }

    let n = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));

    Coordinate::new(sum_x / n, sum_y / n)
}

/// Translate every coordinate so `origin` maps to (0, 0), then rotate by `angle`.
///
/// This is the working-frame transform shared by the best-fit solver and the
/// projection: with `angle = -line_angle`, the line through `origin` lands on
/// the local X axis.
pub fn to_frame(points: &[Coordinate], origin: Coordinate, angle: f64) -> Vec<Coordinate> {
    points.iter().map(|p| (*p - origin).rotate(angle)).collect()
}

/// Inverse of [`to_frame`] for a single coordinate.
#[inline]
pub fn from_frame(local: Coordinate, origin: Coordinate, angle: f64) -> Coordinate {
    local.rotate(-angle) + origin
}

/// Indices that sort `keys` ascending. Ties keep their input order.
pub fn stable_argsort(keys: &[f64]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..keys.len()).collect();
    idx.sort_by(|&a, &b| keys[a].total_cmp(&keys[b]));
    idx
}

/// Peak-to-peak range (max - min). Empty input yields 0.
pub fn peak_to_peak(values: &[f64]) -> f64 {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if values.is_empty() {
        0.0
    } else {
        hi - lo
    }
}
