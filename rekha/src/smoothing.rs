//! Adjacent-swap path smoothing.
//!
//! A greedy local search that shortens the path through an ordered point
//! sequence. Each sweep scores every adjacent pair swap and applies only
//! the single best one. Sweeps repeat until nothing improves or the sweep cap
//! is reached. Total length never increases, so the search terminates.
//!
//! Swap scores are `new length − old length` of the affected edges:
//!
//! ```text
//! end pair       [b c d …]   → [c b d …]     Δ = |b−d| − |c−d|
//! interior pair  [… a b c d …] → [… a c b d …] Δ = |a−c| + |b−d| − |a−b| − |c−d|
//! ```
//!
//! This is not a full 2-opt and does not guarantee a shortest path.

use crate::core::Coordinate;
use crate::error::Result;
use crate::features::{PointId, PointSet};

/// Configuration for [`PathSmoother`].
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothingConfig {
    /// Maximum number of sweeps.
    /// Default: 100
    pub max_sweeps: usize,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self { max_sweeps: 100 }
    }
}

impl SmoothingConfig {
    /// Builder-style setter for the sweep cap.
    pub fn with_max_sweeps(mut self, sweeps: usize) -> Self {
        self.max_sweeps = sweeps;
        self
    }
}

/// Output of a smoothing run.
#[derive(Clone, Debug)]
pub struct SmoothResult<K> {
    /// Reordered identifiers.
    pub order: Vec<K>,
    /// Sweeps performed.
    pub sweeps: usize,
    /// Swaps applied.
    pub swaps: usize,
    /// True if the sweep cap stopped the search while swaps were still
    /// improving the path.
    pub exhausted: bool,
}

/// Adjacent-swap path-length optimizer.
#[derive(Clone, Debug, Default)]
pub struct PathSmoother {
    config: SmoothingConfig,
}

impl PathSmoother {
    /// Create a smoother.
    pub fn new(config: SmoothingConfig) -> Self {
        Self { config }
    }

    /// Reorder `order` to shorten the path through `points`.
    ///
    /// `order` must be a permutation of the point set's identifiers.
    pub fn smooth<K: PointId>(&self, points: &PointSet<K>, order: &[K]) -> Result<SmoothResult<K>> {
        points.check_permutation(order)?;
        let mut ids = order.to_vec();
        let mut path = points.coordinates_of(order)?;
        let n = ids.len();

        if n < 3 {
            return Ok(SmoothResult {
                order: ids,
                sweeps: 0,
                swaps: 0,
                exhausted: false,
            });
        }

        if n == 3 {
            let front = end_swap_delta(path[0], path[1], path[2]);
            let back = end_swap_delta(path[2], path[1], path[0]);
            let swap = if front < 0.0 && front < back {
                Some(0)
            } else if back < 0.0 {
                Some(1)
            } else {
                None
            };
            if let Some(i) = swap {
                ids.swap(i, i + 1);
            }
            return Ok(SmoothResult {
                order: ids,
                sweeps: 1,
                swaps: usize::from(swap.is_some()),
                exhausted: false,
            });
        }

        let mut sweeps = 0;
        let mut swaps = 0;
        let mut improving = true;
        while sweeps < self.config.max_sweeps {
            sweeps += 1;
            match best_swap(&path) {
                Some((i, delta)) => {
                    log::debug!(
                        "Sweep {}: swapping positions {} and {} (Δ={:.3})",
                        sweeps,
                        i,
                        i + 1,
                        delta
                    );
                    ids.swap(i, i + 1);
                    path.swap(i, i + 1);
                    swaps += 1;
                }
                None => {
                    improving = false;
                    break;
                }
            }
        }

        let exhausted = improving && best_swap(&path).is_some();
        if exhausted {
            log::warn!(
                "Path smoother hit the {}-sweep cap with improvements remaining",
                self.config.max_sweeps
            );
        }

        Ok(SmoothResult {
            order: ids,
            sweeps,
            swaps,
            exhausted,
        })
    }
}

/// Total length of the path through `points` in order.
pub fn path_length(points: &[Coordinate]) -> f64 {
    points.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

/// Length change from swapping end point `b` with its neighbour `c`,
/// where `d` is the next point along: `[b c d]` → `[c b d]`.
#[inline]
fn end_swap_delta(b: Coordinate, c: Coordinate, d: Coordinate) -> f64 {
    b.distance(&d) - c.distance(&d)
}

/// Length change from `[a b c d]` → `[a c b d]`.
#[inline]
fn interior_swap_delta(a: Coordinate, b: Coordinate, c: Coordinate, d: Coordinate) -> f64 {
    (a.distance(&c) + b.distance(&d)) - (a.distance(&b) + c.distance(&d))
}

/// Most-improving swap of positions `(i, i + 1)`; first wins on ties.
/// Requires at least 4 points.
fn best_swap(path: &[Coordinate]) -> Option<(usize, f64)> {
    let n = path.len();
    let mut best: Option<(usize, f64)> = None;
    for i in 0..n - 1 {
        let delta = if i == 0 {
            end_swap_delta(path[0], path[1], path[2])
        } else if i == n - 2 {
            end_swap_delta(path[n - 1], path[n - 2], path[n - 3])
        } else {
            interior_swap_delta(path[i - 1], path[i], path[i + 1], path[i + 2])
        };
        if delta < 0.0 && best.map_or(true, |(_, b)| delta < b) {
            best = Some((i, delta));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    fn abcd() -> PointSet<&'static str> {
        PointSet::from_entries([
            ("A", (0.0, 0.0)),
            ("B", (10.0, 10.0)),
            ("C", (5.0, 0.0)),
            ("D", (15.0, 10.0)),
        ])
        .unwrap()
    }

    fn length_of<K: PointId>(points: &PointSet<K>, order: &[K]) -> f64 {
        path_length(&points.coordinates_of(order).unwrap())
    }

    #[test]
    fn test_zigzag_is_untangled() {
        let points = abcd();
        let before = vec!["A", "B", "C", "D"];
        let result = PathSmoother::default().smooth(&points, &before).unwrap();

        assert_eq!(result.order, vec!["A", "C", "B", "D"]);
        assert_eq!(result.swaps, 1);
        assert_eq!(result.sweeps, 2);
        assert!(!result.exhausted);
        assert!(length_of(&points, &result.order) < length_of(&points, &before));
    }

    #[test]
    fn test_fixed_point_is_idempotent() {
        let points = abcd();
        let smoother = PathSmoother::default();
        let once = smoother.smooth(&points, &["A", "B", "C", "D"]).unwrap();
        let twice = smoother.smooth(&points, &once.order).unwrap();
        assert_eq!(twice.order, once.order);
        assert_eq!(twice.swaps, 0);
    }

    #[test]
    fn test_short_paths_unchanged() {
        let points = PointSet::from_entries([(1, (0.0, 0.0)), (2, (5.0, 5.0))]).unwrap();
        let result = PathSmoother::default().smooth(&points, &[2, 1]).unwrap();
        assert_eq!(result.order, vec![2, 1]);
        assert_eq!(result.sweeps, 0);
    }

    #[test]
    fn test_three_points() {
        // Middle point sits past the end: [A C B] should become [A B C].
        let points =
            PointSet::from_entries([('A', (0.0, 0.0)), ('B', (5.0, 0.0)), ('C', (10.0, 0.0))])
                .unwrap();
        let result = PathSmoother::default().smooth(&points, &['A', 'C', 'B']).unwrap();
        assert_eq!(result.order, vec!['A', 'B', 'C']);

        let kept = PathSmoother::default().smooth(&points, &['A', 'B', 'C']).unwrap();
        assert_eq!(kept.order, vec!['A', 'B', 'C']);
        assert_eq!(kept.swaps, 0);
    }

    #[test]
    fn test_front_end_swap() {
        let points = PointSet::from_entries([
            (0, (5.0, 0.0)),
            (1, (0.0, 0.0)),
            (2, (10.0, 0.0)),
            (3, (15.0, 0.0)),
        ])
        .unwrap();
        let result = PathSmoother::default().smooth(&points, &[0, 1, 2, 3]).unwrap();
        assert_eq!(result.order, vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_rejects_non_permutation() {
        let points = abcd();
        assert!(PathSmoother::default().smooth(&points, &["A", "B"]).is_err());
        assert!(PathSmoother::default()
            .smooth(&points, &["A", "B", "C", "E"])
            .is_err());
    }

    #[test]
    fn test_sweep_cap() {
        // Two separate tangles along a line; one sweep fixes only one.
        let points = PointSet::from_entries(
            [0.0, 20.0, 10.0, 30.0, 50.0, 40.0]
                .iter()
                .enumerate()
                .map(|(i, &x)| (i, (x, 0.0))),
        )
        .unwrap();
        let smoother = PathSmoother::new(SmoothingConfig::default().with_max_sweeps(1));
        let result = smoother.smooth(&points, &[0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(result.order, vec![0, 2, 1, 3, 4, 5]);
        assert_eq!(result.sweeps, 1);
        assert_eq!(result.swaps, 1);
        assert!(result.exhausted);
    }

    #[test]
    fn test_random_paths_never_get_longer() {
        let mut rng = StdRng::seed_from_u64(42);
        let smoother = PathSmoother::default();

        for n in 3..12 {
            let points = PointSet::from_entries(
                (0..n).map(|i| (i, (rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0)))),
            )
            .unwrap();
            let mut order: Vec<usize> = (0..n).collect();
            order.shuffle(&mut rng);

            let result = smoother.smooth(&points, &order).unwrap();
            let mut sorted = result.order.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..n).collect::<Vec<_>>());

            let before = length_of(&points, &order);
            let after = length_of(&points, &result.order);
            assert!(after <= before + 1e-9, "n={}: {} > {}", n, after, before);

            let again = smoother.smooth(&points, &result.order).unwrap();
            if n >= 4 && !result.exhausted {
                assert_relative_eq!(length_of(&points, &again.order), after, epsilon = 1e-9);
            }
        }
    }
}
