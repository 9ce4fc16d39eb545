//! Randomized checks over seeded random control polygons

use bezier_arclen::{BezierCurve, Point2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 0x5eed_cafe;

fn random_curve(rng: &mut StdRng) -> BezierCurve<2> {
    let count = rng.gen_range(2..=7);
    let points: Vec<Point2> = (0..count)
        .map(|_| Point2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
        .collect();
    BezierCurve::new(&points).unwrap()
}

#[test]
fn test_endpoints_are_interpolated() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..100 {
        let curve = random_curve(&mut rng);
        assert_eq!(curve.evaluate(0.0), curve.first());
        assert_eq!(curve.evaluate(1.0), curve.last());
    }
}

#[test]
fn test_length_grows_as_accuracy_tightens() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..50 {
        let curve = random_curve(&mut rng);
        let mut previous = 0.0;
        for accuracy in [1.0, 0.1, 0.01, 0.001] {
            let length = curve.length(accuracy).unwrap();
            assert!(length >= previous - 1e-9, "{} shrank to {}", previous, length);
            previous = length;
        }
        // an inscribed polyline never beats the control polygon or falls below the chord
        assert!(previous <= curve.control_polygon_length() + 1e-9);
        assert!(previous >= curve.chord_length() - 1e-9);
    }
}

#[test]
fn test_split_pieces_add_up() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..30 {
        let curve = random_curve(&mut rng);
        let t = rng.gen_range(0.1..0.9);
        let (left, right) = curve.split(t).unwrap();

        let point = curve.evaluate(t);
        assert!(left.last().distance_to(&point) < 1e-9);
        assert!(right.first().distance_to(&point) < 1e-9);

        let whole = curve.length(1e-4).unwrap();
        let parts = left.length(1e-4).unwrap() + right.length(1e-4).unwrap();
        assert!((whole - parts).abs() < 1e-2, "{} vs {}", whole, parts);
    }
}
