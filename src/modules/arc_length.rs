//! Arc length of a Bezier curve by polyline approximation
//!
//! Arc length has no closed form for curves of degree two and above, so it is estimated
//! by the length of an inscribed polyline through uniformly spaced curve points:
//!
//! 1. start with `initial_segments` segments,
//! 2. double the segment count and recompute,
//! 3. stop when two successive estimates differ by at most the requested accuracy,
//! 4. or after `max_doublings` rounds, returning the last estimate.
//!
//! Every refinement keeps the previous sample parameters, so the estimates never decrease.
//! Curves whose control polygon is already a straight line are answered directly with
//! their chord length, provided the polygon exceeds the chord by no more than `accuracy`
//! (the true length lies between the two).
//!
//! # Example
//!
//! ```rust
//! use bezier_arclen::{bezier, BezierResult};
//!
//! let curve = bezier!([(0, 0), (1, 1), (2, 0)]).unwrap();
//! let length: BezierResult<f64> = curve.length(0.001);
//! assert!((length.unwrap() - 2.2956).abs() < 0.01);
//! ```

use tracing::{debug, warn};

use super::check_accuracy;
use crate::config::LengthConfig;
use crate::data::curve::BezierCurve;
use crate::error::BezierResult;

/// Length of the polyline through `segments + 1` uniformly spaced points of the curve
pub fn polyline_length<const D: usize>(curve: &BezierCurve<D>, segments: usize) -> f64 {
    if segments == 0 {
        return 0.0;
    }
    let mut scratch = Vec::with_capacity(curve.control_points().len());
    let mut previous = curve.first();
    let mut length = 0.0;
    for i in 1..=segments {
        let t = i as f64 / segments as f64;
        let current = curve.evaluate_with(&mut scratch, t);
        length += previous.distance_to(&current);
        previous = current;
    }
    length
}

/// Estimate the arc length of `curve` to within `accuracy`
pub fn estimate_length<const D: usize>(
    curve: &BezierCurve<D>,
    accuracy: f64,
    config: &LengthConfig,
) -> BezierResult<f64> {
    check_accuracy(accuracy)?;
    config.validate()?;

    let slack = curve.control_polygon_length() - curve.chord_length();
    if slack <= accuracy && curve.is_flat(config.flatness_epsilon) {
        debug!(degree = curve.degree(), "straight control polygon, using chord length");
        return Ok(curve.chord_length());
    }

    let mut segments = config.initial_segments;
    let mut estimate = polyline_length(curve, segments);
    for round in 1..=config.max_doublings {
        segments = segments.saturating_mul(2);
        let finer = polyline_length(curve, segments);
        let delta = (finer - estimate).abs();
        debug!(round, segments, estimate = finer, delta, "refined arc length");
        if delta <= accuracy {
            return Ok(finer);
        }
        estimate = finer;
    }

    warn!(
        max_doublings = config.max_doublings,
        segments,
        estimate,
        accuracy,
        "arc length did not converge, returning last estimate"
    );
    Ok(estimate)
}
