//! End-to-end checks of the section-line engine through its public API.

use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rekha::core::math::{from_frame, line_angles_equal, to_frame};
use rekha::core::principal_angle;
use rekha::{
    path_length, BestFitSolver, Coordinate, EngineConfig, GuidelineMapper, PathSmoother, PointSet,
    SectionError, SectionHints, SectionLineEngine, SectionMode,
};

fn c(x: f64, y: f64) -> Coordinate {
    Coordinate::new(x, y)
}

fn random_wells(rng: &mut StdRng, n: u32) -> PointSet<u32> {
    PointSet::from_entries((0..n).map(|i| {
        (
            i,
            (
                rng.gen_range(500_000.0..502_000.0),
                rng.gen_range(4_900_000.0..4_901_500.0),
            ),
        )
    }))
    .unwrap()
}

fn assert_permutation(order: &[u32], n: u32) {
    let mut sorted = order.to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..n).collect::<Vec<_>>());
}

// ───────────────────────────────────────────────────────────────────────────
// Ordering is always a permutation
// ───────────────────────────────────────────────────────────────────────────

#[test]
fn test_every_mode_returns_a_permutation() {
    env_logger::try_init().ok();
    let mut rng = StdRng::seed_from_u64(7);
    let engine = SectionLineEngine::default();

    for n in 1..=25 {
        let wells = random_wells(&mut rng, n);
        let angle = rng.gen_range(-PI..PI);
        let tolerance = rng.gen_range(0.0..FRAC_PI_2);
        let guideline: Vec<Coordinate> = (0..rng.gen_range(2..5))
            .map(|i| c(500_000.0 + 600.0 * i as f64, rng.gen_range(4_900_000.0..4_901_500.0)))
            .collect();

        let variants = [
            SectionHints::new(SectionMode::Fenceline),
            SectionHints::new(SectionMode::Fenceline).with_angle(angle),
            SectionHints::new(SectionMode::Fenceline).with_guideline(guideline.clone()),
            SectionHints::new(SectionMode::Projected),
            SectionHints::new(SectionMode::Projected)
                .with_angle(angle)
                .with_tolerance(tolerance),
            SectionHints::new(SectionMode::Projected).with_guideline(guideline.clone()),
        ];

        for hints in &variants {
            let result = engine.build(&wells, hints).unwrap();
            assert_permutation(&result.order, n);
            assert_eq!(result.section_line.len(), n as usize);
            if n > 1 && hints.mode == SectionMode::Projected {
                assert_eq!(result.leaders().len(), n as usize);
            } else {
                assert!(result.leaders().is_empty());
            }
        }
    }
}

// ───────────────────────────────────────────────────────────────────────────
// Path smoother
// ───────────────────────────────────────────────────────────────────────────

#[test]
fn test_smoother_shortens_zigzag() {
    let wells = PointSet::from_entries([
        ("A", (0.0, 0.0)),
        ("B", (10.0, 10.0)),
        ("C", (5.0, 0.0)),
        ("D", (15.0, 10.0)),
    ])
    .unwrap();
    let naive = ["A", "B", "C", "D"];
    let smoother = PathSmoother::default();

    let once = smoother.smooth(&wells, &naive).unwrap();
    let before = path_length(&wells.coordinates_of(&naive).unwrap());
    let after = path_length(&wells.coordinates_of(&once.order).unwrap());
    assert!(after <= before);
    assert_eq!(once.order, vec!["A", "C", "B", "D"]);

    let twice = smoother.smooth(&wells, &once.order).unwrap();
    assert_eq!(twice.order, once.order);
}

#[test]
fn test_fenceline_is_never_longer_than_best_fit_order() {
    let mut rng = StdRng::seed_from_u64(11);
    let engine = SectionLineEngine::default();
    let solver = BestFitSolver::default();

    for n in 3..20 {
        let wells = random_wells(&mut rng, n);
        let fit = solver.solve(&wells, None, None).unwrap();
        let fit_length = path_length(&wells.coordinates_of(&fit.order).unwrap());

        let result = engine
            .build(&wells, &SectionHints::new(SectionMode::Fenceline))
            .unwrap();
        assert!(result.section_line.length() <= fit_length + 1e-6);
        assert_eq!(result.fit_angle, Some(fit.angle));
    }
}

// ───────────────────────────────────────────────────────────────────────────
// Best-fit solver
// ───────────────────────────────────────────────────────────────────────────

#[test]
fn test_two_points_fit_their_own_segment() {
    let mut rng = StdRng::seed_from_u64(3);
    let solver = BestFitSolver::default();

    for _ in 0..200 {
        let wells = random_wells(&mut rng, 2);
        let p = wells.coordinates();
        let segment_angle = p[0].angle_to(&p[1]);
        let hint = if rng.gen_bool(0.5) {
            Some(rng.gen_range(-PI..PI))
        } else {
            None
        };

        // Offset the solver has to turn through, folded into (-π/2, π/2].
        let mut offset = principal_angle(segment_angle - hint.unwrap_or(0.0));
        if offset > FRAC_PI_2 {
            offset -= PI;
        } else if offset <= -FRAC_PI_2 {
            offset += PI;
        }
        let bound = if hint.is_some() { FRAC_PI_2 } else { 0.99 * FRAC_PI_2 };
        if offset.abs() > bound - 0.02 {
            continue;
        }

        let fit = solver.solve(&wells, hint, None).unwrap();
        assert!(
            line_angles_equal(fit.angle, segment_angle, 1e-9),
            "segment {} hint {:?} fit {}",
            segment_angle,
            hint,
            fit.angle
        );
    }
}

#[test]
fn test_zero_tolerance_returns_hint() {
    let wells =
        PointSet::from_entries([("A", (0.0, 0.0)), ("B", (1.0, 1.0)), ("C", (2.0, -1.0))]).unwrap();

    let fit = BestFitSolver::default()
        .solve(&wells, Some(0.0), Some(0.0))
        .unwrap();
    assert_eq!(fit.angle, 0.0);
    assert_eq!(fit.order, vec!["A", "B", "C"]);

    let hints = SectionHints::new(SectionMode::Projected)
        .with_angle(0.0)
        .with_tolerance(0.0);
    let result = SectionLineEngine::default().build(&wells, &hints).unwrap();
    assert_eq!(result.fit_angle, Some(0.0));
    assert_eq!(result.order, vec!["A", "B", "C"]);
    assert_eq!(
        result.section_line.nodes(),
        &[c(0.0, 0.0), c(1.0, 0.0), c(2.0, 0.0)]
    );
}

// ───────────────────────────────────────────────────────────────────────────
// Projection
// ───────────────────────────────────────────────────────────────────────────

#[test]
fn test_point_on_guideline_is_not_moved() {
    let wells =
        PointSet::from_entries([("on", (0.0, 0.0)), ("off", (2.0, 6.0)), ("end", (8.0, 6.0))])
            .unwrap();
    let hints = SectionHints::new(SectionMode::Projected)
        .with_guideline(vec![c(0.0, 0.0), c(8.0, 6.0), c(20.0, 0.0)]);
    let result = SectionLineEngine::default().build(&wells, &hints).unwrap();

    assert_eq!(result.order, vec!["on", "off", "end"]);
    assert_eq!(result.section_line.first(), c(0.0, 0.0));
    assert_eq!(result.section_line.last(), c(8.0, 6.0));
    assert_eq!(result.leaders()[0].length(), 0.0);

    let foot = result.section_line.nodes()[1];
    assert_relative_eq!(foot.x, 4.16, epsilon = 1e-9);
    assert_relative_eq!(foot.y, 3.12, epsilon = 1e-9);
    assert_eq!(result.fit_angle, None);
}

#[test]
fn test_projected_guideline_errors() {
    let wells = PointSet::from_entries([(1, (0.0, 0.0)), (2, (5.0, 5.0))]).unwrap();
    let engine = SectionLineEngine::default();

    let short = SectionHints::new(SectionMode::Projected).with_guideline(vec![c(1.0, 1.0)]);
    assert_eq!(
        engine.build(&wells, &short).unwrap_err(),
        SectionError::MalformedGuideline { waypoints: 1 }
    );

    let flat = SectionHints::new(SectionMode::Projected)
        .with_guideline(vec![c(1.0, 1.0), c(1.0, 1.0)]);
    assert_eq!(
        engine.build(&wells, &flat).unwrap_err(),
        SectionError::DegenerateGuideline
    );
}

// ───────────────────────────────────────────────────────────────────────────
// Guideline mapper
// ───────────────────────────────────────────────────────────────────────────

#[test]
fn test_interior_waypoints_resolve_exactly() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let waypoints: Vec<Coordinate> = (0..5)
            .map(|_| {
                c(
                    rng.gen_range(500_000.0..502_000.0),
                    rng.gen_range(4_900_000.0..4_901_500.0),
                )
            })
            .collect();
        let mapper = GuidelineMapper::new(waypoints.clone()).unwrap();
        for k in 1..4 {
            let expected = mapper.path().arc_lengths()[k];
            assert_eq!(mapper.locate(waypoints[k]), Some(expected));
        }
    }
}

#[test]
fn test_unresolvable_point_is_reported() {
    let wells = PointSet::from_entries([("w1", (-1.0, 0.5)), ("w2", (6.0, 0.2))]).unwrap();
    let hints = SectionHints::new(SectionMode::Fenceline)
        .with_guideline(vec![c(0.0, 0.0), c(0.0, 0.0), c(10.0, 0.0)]);
    let err = SectionLineEngine::default().build(&wells, &hints).unwrap_err();
    assert!(matches!(err, SectionError::UnresolvedProjection { ref id } if id.contains("w1")));
    assert_eq!(err.code(), "UNRESOLVED_PROJECTION");
}

#[test]
fn test_sparse_guideline_is_smoothed() {
    // Eight wells zig-zagging around a two-point guideline.
    let wells = PointSet::from_entries(
        [
            (0.0, 1.0),
            (10.0, -1.0),
            (20.0, 1.0),
            (30.0, -1.0),
            (40.0, 1.0),
            (50.0, -1.0),
            (60.0, 1.0),
            (70.0, -1.0),
        ]
        .into_iter()
        .enumerate(),
    )
    .unwrap();
    let hints =
        SectionHints::new(SectionMode::Fenceline).with_guideline(vec![c(-5.0, 0.0), c(75.0, 0.0)]);
    let result = SectionLineEngine::default().build(&wells, &hints).unwrap();
    assert_eq!(result.order, (0..8).collect::<Vec<usize>>());
    assert!(result.diagnostics.smoothing_sweeps.is_some());
    assert_eq!(result.diagnostics.fit_rounds, None);

    let mut config = EngineConfig::default();
    config.smoothing.after_guideline = false;
    let result = SectionLineEngine::new(&config).build(&wells, &hints).unwrap();
    assert!(result.diagnostics.smoothing_sweeps.is_none());
}

// ───────────────────────────────────────────────────────────────────────────
// Singleton and primitives
// ───────────────────────────────────────────────────────────────────────────

#[test]
fn test_singleton() {
    let wells = PointSet::from_entries([("only", (501_234.5, 4_900_777.25))]).unwrap();
    let result = SectionLineEngine::default()
        .build(&wells, &SectionHints::new(SectionMode::Singleton))
        .unwrap();
    assert_eq!(result.order, vec!["only"]);
    assert_eq!(result.section_line.len(), 1);
    assert_eq!(result.section_line.length(), 0.0);
    assert!(result.leaders().is_empty());
}

#[test]
fn test_rotation_round_trip() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..100 {
        let p = c(rng.gen_range(-1e6..1e6), rng.gen_range(-1e6..1e6));
        let theta = rng.gen_range(-10.0..10.0);
        let back = p.rotate(theta).rotate(-theta);
        assert!(back.approx_eq(&p, 1e-6));

        let origin = c(rng.gen_range(-1e3..1e3), rng.gen_range(-1e3..1e3));
        let local = to_frame(&[p], origin, theta);
        assert!(from_frame(local[0], origin, theta).approx_eq(&p, 1e-6));
    }
}

#[test]
fn test_default_config_file_matches_defaults() {
    let config = EngineConfig::load_default().unwrap();
    let defaults = EngineConfig::default();
    assert_eq!(config.fitting.max_rounds, defaults.fitting.max_rounds);
    assert_eq!(config.smoothing.max_sweeps, defaults.smoothing.max_sweeps);
    assert_eq!(config.spread.spacing, defaults.spread.spacing);
}
