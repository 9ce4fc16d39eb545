use bezier_arclen::{bezier, pt, BezierCurve, BezierCurveBuilder, BezierError, LengthConfig};

#[test]
fn test_complete_workflow() {
    // Build the symmetric quadratic and print it the way the demo does
    let quadratic = bezier!([(0, 0), (1, 1), (2, 0)]).unwrap();
    assert_eq!(quadratic.to_string(), "BezierCurve[(0, 0), (1, 1), (2, 0)]");

    let mid = quadratic.evaluate(0.5);
    assert!((mid.x() - 1.0).abs() < 1e-12);
    assert!((mid.y() - 0.5).abs() < 1e-12);

    let coarse = quadratic.length(0.01).unwrap();
    let fine = quadratic.length(0.001).unwrap();
    assert!(fine >= coarse);
    for length in [coarse, fine] {
        assert!((length - 2.296).abs() / 2.296 < 0.01);
    }

    // The cubic from the demo converges to within the coarse accuracy
    let cubic = bezier!([(0, 0), (0, 1), (1, 1), (1, 0)]).unwrap();
    let coarse = cubic.length(0.01).unwrap();
    let fine = cubic.length(0.001).unwrap();
    assert!((fine - coarse).abs() <= 0.01);
    assert!(fine >= coarse);
}

#[test]
fn test_builder_matches_constructor() {
    let built = BezierCurveBuilder::new()
        .add_cv(pt!(0, 0))
        .add_cv(pt!(0, 1))
        .add_cv(pt!(1, 1))
        .add_cv(pt!(1, 0))
        .finalize()
        .unwrap();
    let direct = BezierCurve::new(&[pt!(0, 0), pt!(0, 1), pt!(1, 1), pt!(1, 0)]).unwrap();
    assert_eq!(built, direct);
    assert_eq!(built.degree(), 3);
    assert_eq!(built.interval(), (0.0, 1.0));
}

#[test]
fn test_invalid_arguments() {
    let err = BezierCurve::<2>::new(&[]).unwrap_err();
    assert!(matches!(err, BezierError::InvalidArgument(_)));
    assert!(matches!(
        BezierCurve::new(&[pt!(1, 1)]),
        Err(BezierError::InvalidArgument(_))
    ));

    let curve = bezier!([(0, 0), (1, 1), (2, 0)]).unwrap();
    assert!(matches!(curve.length(0.0), Err(BezierError::InvalidArgument(_))));
    assert!(matches!(
        curve.length(-0.01),
        Err(BezierError::InvalidArgument(_))
    ));
}

#[test]
fn test_config_from_json_drives_length() {
    let config = LengthConfig::from_json_str(r#"{"initial_segments": 64, "max_doublings": 0}"#)
        .unwrap();
    let curve = bezier!([(0, 0), (1, 1), (2, 0)]).unwrap();
    let length = curve.length_with_config(1e-12, &config).unwrap();
    // a single 64-segment polyline, no refinement
    assert!((length - 2.2956).abs() < 1e-3);
    assert!(length <= curve.length(1e-6).unwrap());
}

#[test]
fn test_three_dimensional_curve() {
    let curve = BezierCurve::new(&[pt!(0, 0, 0), pt!(1, 0, 1), pt!(1, 1, 2)]).unwrap();
    assert_eq!(curve.evaluate(0.0), pt!(0, 0, 0));
    assert_eq!(curve.evaluate(1.0), pt!(1, 1, 2));

    let length = curve.length(1e-4).unwrap();
    assert!(length > curve.chord_length());
    assert!(length < curve.control_polygon_length());

    let path = curve.create_path(1e-4).unwrap();
    assert!((path.length() - length).abs() < 1e-2);
}

#[test]
fn test_curves_are_shareable_across_threads() {
    let curve = bezier!([(0, 0), (0, 1), (1, 1), (1, 0)]).unwrap();
    let expected = curve.length(0.001).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| curve.length(0.001).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
