//! Randomised tests on the default windy path arena.

use blind_guide::{
    math::{Point2d, Vector2d},
    Guide, GuideConfig, Obstacle, Pose, ResistanceCurve, Side,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI};

fn windy_guide(curve: ResistanceCurve) -> Guide {
    let mut guide = Guide::new(GuideConfig {
        curve,
        ..Default::default()
    })
    .unwrap();
    guide.initialize_borders().unwrap();
    guide
}

fn random_query(rng: &mut StdRng) -> (Pose, Vector2d, Vec<Obstacle>) {
    let pose = Pose::new(
        rng.gen_range(-6.0..6.0),
        rng.gen_range(-8.0..8.0),
        rng.gen_range(-2.0 * PI..2.0 * PI),
    );
    let force = Vector2d::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
    let obstacles = (0..rng.gen_range(0..4))
        .map(|_| Obstacle::new(rng.gen_range(-4.0..4.0), rng.gen_range(-6.0..6.0)))
        .collect();
    (pose, force, obstacles)
}

/// Test that resistance is always within [0, 1], for both curves.
#[test]
fn resistance_in_range() {
    let mut rng = StdRng::seed_from_u64(12);
    for curve in [ResistanceCurve::Linear, ResistanceCurve::StaticOffset] {
        let guide = windy_guide(curve);
        for _ in 0..5000 {
            let (pose, force, obstacles) = random_query(&mut rng);
            let res = guide.get_resistance(pose, force, &obstacles).unwrap();
            assert!((0.0..=1.0).contains(&res), "{} out of range for {:?}", res, pose);
        }
    }
}

/// Test that identical queries give identical answers.
#[test]
fn queries_are_repeatable() {
    let mut rng = StdRng::seed_from_u64(7);
    let guide = windy_guide(ResistanceCurve::Linear);
    for _ in 0..500 {
        let (pose, force, obstacles) = random_query(&mut rng);
        let first = guide.evaluate(pose, force, obstacles.iter().copied()).unwrap();
        let second = guide.evaluate(pose, force, obstacles.iter().copied()).unwrap();
        assert_eq!(first, second);
    }
}

/// Test that a zero push never resists on the safe side of every border.
#[test]
fn no_push_no_resistance() {
    let guide = windy_guide(ResistanceCurve::Linear);
    // In the corridor between the outer wall and the island.
    let res = guide
        .get_resistance(Pose::new(-3.5, 0.0, 0.0), Vector2d::new(0.0, 0.0), &[])
        .unwrap();
    assert_eq!(res, 0.0);
}

/// Test that the island resists a push towards it even though the outer
/// wall behind the robot is nearer.
#[test]
fn pushed_towards_island() {
    let guide = windy_guide(ResistanceCurve::Linear);
    // Facing +y, so the robot frame matches the world frame.
    let res = guide
        .get_resistance(Pose::new(-3.5, 0.0, FRAC_PI_2), Vector2d::new(50.0, 0.0), &[])
        .unwrap();
    assert!(res > 0.8, "{}", res);
}

/// Queries along the path a bench driver walks the robot.
#[test]
fn bench_driver_queries() {
    let guide = windy_guide(ResistanceCurve::Linear);
    for (heading, fx, fy) in [(2.5 * PI, 10.0, -7.0), (2.75 * PI, -10.0, -7.0)] {
        let res = guide
            .get_resistance_flat(0.0, 0.0, heading, fx, fy, &[1.0, -2.0])
            .unwrap();
        assert!((0.0..=1.0).contains(&res));
    }
    let mut ox = -2.0;
    while ox <= 2.0 {
        let res = guide
            .get_resistance_flat(0.0, 0.0, 0.5 * PI, 0.0, 20.0, &[ox, 0.6, 0.0, 1.5])
            .unwrap();
        assert!((0.0..=1.0).contains(&res));
        ox += 0.2;
    }
}

/// Test that cleaning up and initialising again drops added borders.
#[test]
fn reinitialise_resets_borders() {
    let mut guide = windy_guide(ResistanceCurve::Linear);
    let initial = guide.borders().unwrap().len();
    for i in 0..37 {
        let y = i as f64 * 0.1;
        guide
            .add_border(Point2d::new(-1.0, y), Point2d::new(1.0, y), Side::Left)
            .unwrap();
    }
    let borders = guide.borders().unwrap();
    assert_eq!(borders.len(), initial + 37);
    for (i, border) in borders.iter().skip(initial).enumerate() {
        assert_eq!(border.bottom(), Point2d::new(-1.0, i as f64 * 0.1));
        assert_eq!(border.good_side(), Side::Left);
    }

    guide.cleanup();
    assert!(guide.get_resistance_flat(0.0, 0.0, 0.0, 1.0, 0.0, &[]).is_err());
    guide.initialize_borders().unwrap();
    assert_eq!(guide.borders().unwrap().len(), initial);
}
