//! Core data structures: points, curves and flattened paths.

pub mod curve;
pub mod macros;
pub mod path;
pub mod point;

pub use curve::{BezierCurve, BezierCurveBuilder};
pub use path::{Path, PathBuilder};
pub use point::{Point, Point2, Point3};
