//! A Bezier curve of arbitrary degree defined by its control points.

use std::fmt;

use crate::config::LengthConfig;
use crate::constants::DEFAULT_INTERVAL;
use crate::data::path::Path;
use crate::data::point::Point;
use crate::error::{BezierError, BezierResult};
use crate::modules::{arc_length, flatten};

/// An immutable Bezier curve with `degree = control_points.len() - 1`
///
/// The curve owns a copy of its control points and never changes after construction,
/// so it can be shared between threads freely. Besides the control points it carries
/// a parameter interval (`[0, 1]` unless set through [`BezierCurveBuilder`]) used to
/// label the samples of a flattened [`Path`].
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve<const D: usize> {
    control_points: Vec<Point<D>>,
    interval: (f64, f64),
}

impl<const D: usize> BezierCurve<D> {
    /// Create a curve from at least two control points
    pub fn new(control_points: &[Point<D>]) -> BezierResult<Self> {
        check_control_points(control_points.len())?;
        Ok(Self {
            control_points: control_points.to_vec(),
            interval: DEFAULT_INTERVAL,
        })
    }

    pub fn builder() -> BezierCurveBuilder<D> {
        BezierCurveBuilder::new()
    }

    pub fn control_points(&self) -> &[Point<D>] {
        &self.control_points
    }

    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    pub fn interval(&self) -> (f64, f64) {
        self.interval
    }

    /// First control point, where the curve starts
    pub fn first(&self) -> Point<D> {
        self.control_points[0]
    }

    /// Last control point, where the curve ends
    pub fn last(&self) -> Point<D> {
        self.control_points[self.control_points.len() - 1]
    }

    /// Map a local parameter `t` in [0, 1] into the curve's interval
    pub fn parameter_at(&self, t: f64) -> f64 {
        let (low, high) = self.interval;
        (1.0 - t) * low + t * high
    }

    /// Get the point on the curve at parameter t (0 <= t <= 1)
    ///
    /// Uses de Casteljau's algorithm. Values of `t` outside [0, 1] extrapolate the curve.
    pub fn evaluate(&self, t: f64) -> Point<D> {
        let mut scratch = self.control_points.clone();
        casteljau(&mut scratch, t)
    }

    /// Generate `num_points` uniformly spaced points along the curve
    pub fn sample_points(&self, num_points: usize) -> Vec<Point<D>> {
        match num_points {
            0 => Vec::new(),
            1 => vec![self.first()],
            _ => {
                let mut scratch = Vec::with_capacity(self.control_points.len());
                (0..num_points)
                    .map(|i| {
                        let t = i as f64 / (num_points - 1) as f64;
                        self.evaluate_with(&mut scratch, t)
                    })
                    .collect()
            }
        }
    }

    /// Evaluate at `t` reusing `scratch` as the working buffer
    pub(crate) fn evaluate_with(&self, scratch: &mut Vec<Point<D>>, t: f64) -> Point<D> {
        scratch.clear();
        scratch.extend_from_slice(&self.control_points);
        casteljau(scratch, t)
    }

    /// Split the curve at `t` into two curves tracing the same path
    ///
    /// The left piece covers `[low, parameter_at(t)]` of the interval, the right piece
    /// `[parameter_at(t), high]`.
    pub fn split(&self, t: f64) -> BezierResult<(Self, Self)> {
        if !(0.0..=1.0).contains(&t) {
            return Err(BezierError::invalid(format!(
                "split parameter must lie in [0, 1], got {}",
                t
            )));
        }
        Ok(self.split_unchecked(t))
    }

    pub(crate) fn split_unchecked(&self, t: f64) -> (Self, Self) {
        let n = self.control_points.len();
        let mut left = self.control_points.clone();
        let mut right = self.control_points.clone();
        // overwritten every level, the outer points of each level are kept in left and right
        let mut work = self.control_points.clone();

        for level in 1..=n {
            left[level - 1] = work[0];
            right[n - level] = work[n - level];
            for j in 0..n - level {
                work[j] = work[j].lerp(work[j + 1], t);
            }
        }

        let (low, high) = self.interval;
        let mid = self.parameter_at(t);
        (
            Self {
                control_points: left,
                interval: (low, mid),
            },
            Self {
                control_points: right,
                interval: (mid, high),
            },
        )
    }

    /// Sum of the distances between consecutive control points
    pub fn control_polygon_length(&self) -> f64 {
        self.control_points
            .windows(2)
            .map(|w| w[0].distance_to(&w[1]))
            .sum()
    }

    /// Distance between the first and last control point
    pub fn chord_length(&self) -> f64 {
        self.first().distance_to(&self.last())
    }

    /// Whether the control polygon is a straight, non-backtracking line
    ///
    /// In that case the curve is exactly the segment between its end points.
    pub fn is_flat(&self, epsilon: f64) -> bool {
        let polygon = self.control_polygon_length();
        polygon - self.chord_length() <= epsilon * polygon.max(1.0)
    }

    /// Approximate arc length, accurate to about `accuracy`
    ///
    /// See [`arc_length::estimate_length`] for the refinement scheme.
    pub fn length(&self, accuracy: f64) -> BezierResult<f64> {
        self.length_with_config(accuracy, &LengthConfig::default())
    }

    pub fn length_with_config(&self, accuracy: f64, config: &LengthConfig) -> BezierResult<f64> {
        arc_length::estimate_length(self, accuracy, config)
    }

    /// Flatten the curve into a parameter-sorted polyline within `accuracy`
    pub fn create_path(&self, accuracy: f64) -> BezierResult<Path<D>> {
        self.create_path_with_config(accuracy, &LengthConfig::default())
    }

    pub fn create_path_with_config(
        &self,
        accuracy: f64,
        config: &LengthConfig,
    ) -> BezierResult<Path<D>> {
        flatten::flatten(self, accuracy, config)
    }
}

/// In-place de Casteljau reduction; `points` must not be empty
fn casteljau<const D: usize>(points: &mut [Point<D>], t: f64) -> Point<D> {
    let n = points.len();
    for level in 1..n {
        for i in 0..n - level {
            points[i] = points[i].lerp(points[i + 1], t);
        }
    }
    points[0]
}

fn check_control_points(count: usize) -> BezierResult<()> {
    if count < 2 {
        return Err(BezierError::invalid(format!(
            "a Bezier curve needs at least 2 control points, got {}",
            count
        )));
    }
    Ok(())
}

impl<const D: usize> fmt::Display for BezierCurve<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BezierCurve[")?;
        for (i, p) in self.control_points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, "]")?;
        if self.interval != DEFAULT_INTERVAL {
            write!(f, " on [{}, {}]", self.interval.0, self.interval.1)?;
        }
        Ok(())
    }
}

/// Helper to construct a [`BezierCurve`] one control vertex at a time
#[derive(Debug, Clone)]
pub struct BezierCurveBuilder<const D: usize> {
    cvs: Vec<Point<D>>,
    interval: (f64, f64),
}

impl<const D: usize> Default for BezierCurveBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const D: usize> BezierCurveBuilder<D> {
    /// Prepare a curve over the interval [0, 1]
    pub fn new() -> Self {
        Self {
            cvs: Vec::new(),
            interval: DEFAULT_INTERVAL,
        }
    }

    /// Append a control vertex; the number of vertices defines the degree
    pub fn add_cv(&mut self, cv: Point<D>) -> &mut Self {
        self.cvs.push(cv);
        self
    }

    /// Override the default interval of [0, 1]
    pub fn set_interval(&mut self, low: f64, high: f64) -> &mut Self {
        self.interval = (low, high);
        self
    }

    pub fn finalize(&self) -> BezierResult<BezierCurve<D>> {
        check_control_points(self.cvs.len())?;
        let (low, high) = self.interval;
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(BezierError::invalid(format!(
                "interval must be finite with low < high, got [{}, {}]",
                low, high
            )));
        }
        Ok(BezierCurve {
            control_points: self.cvs.clone(),
            interval: self.interval,
        })
    }
}
