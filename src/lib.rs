pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;

pub use config::LengthConfig;
pub use data::curve::{BezierCurve, BezierCurveBuilder};
pub use data::path::{Path, PathBuilder};
pub use data::point::{Point, Point2, Point3};
pub use error::{BezierError, BezierResult};
