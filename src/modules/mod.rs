//! Algorithms operating on Bezier curves
//!
//! - [arc_length](arc_length/index.html) - Arc-length estimation by uniform polyline refinement
//! - [flatten](flatten/index.html) - Adaptive subdivision of a curve into a [`Path`](crate::Path)

pub mod arc_length;
pub mod flatten;

use crate::error::{BezierError, BezierResult};

/// Accuracies must be strictly positive; NaN is rejected as well
pub(crate) fn check_accuracy(accuracy: f64) -> BezierResult<()> {
    if !(accuracy > 0.0) {
        return Err(BezierError::invalid(format!(
            "accuracy must be positive, got {}",
            accuracy
        )));
    }
    Ok(())
}
