//! Adaptive flattening of a Bezier curve into a [`Path`]
//!
//! The curve is split in half until each piece is flat enough, i.e. its control
//! polygon is less than `accuracy` longer than its chord. The end point of every flat
//! piece is recorded together with its parameter, so the resulting path follows the
//! curve closely where it bends and uses few points where it is straight.

use tracing::{trace, warn};

use super::check_accuracy;
use crate::config::LengthConfig;
use crate::data::curve::BezierCurve;
use crate::data::path::{Path, PathBuilder};
use crate::error::BezierResult;

/// Flatten `curve` into a path whose pieces deviate from the curve by less than `accuracy`
pub fn flatten<const D: usize>(
    curve: &BezierCurve<D>,
    accuracy: f64,
    config: &LengthConfig,
) -> BezierResult<Path<D>> {
    check_accuracy(accuracy)?;
    config.validate()?;

    let mut builder = PathBuilder::new();
    builder.add_sorted_point(curve.first(), curve.interval().0);
    let capped = subdivide(curve, accuracy, config.max_subdivision_depth, &mut builder);
    if capped > 0 {
        warn!(
            capped,
            max_subdivision_depth = config.max_subdivision_depth,
            "flattening hit the depth limit before reaching the requested accuracy"
        );
    }
    Ok(builder.finalize())
}

/// Returns the number of pieces accepted only because the depth budget ran out
fn subdivide<const D: usize>(
    curve: &BezierCurve<D>,
    accuracy: f64,
    depth_left: u32,
    builder: &mut PathBuilder<D>,
) -> usize {
    let flatness = curve.control_polygon_length() - curve.chord_length();
    if flatness < accuracy || depth_left == 0 {
        trace!(interval = ?curve.interval(), flatness, "flat piece");
        builder.add_sorted_point(curve.last(), curve.interval().1);
        return usize::from(!(flatness < accuracy));
    }
    let (left, right) = curve.split_unchecked(0.5);
    subdivide(&left, accuracy, depth_left - 1, builder)
        + subdivide(&right, accuracy, depth_left - 1, builder)
}
