//! This module provides convenient macros for creating points and curves.

/// Macro for creating a 2D or 3D Point
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr) => {
        $crate::data::Point2::new($x as f64, $y as f64)
    };
    ($x:expr, $y:expr, $z:expr) => {
        $crate::data::Point3::new($x as f64, $y as f64, $z as f64)
    };
}

/// Macro for creating a planar Bezier curve from coordinate pairs
///
/// Expands to a `BezierResult<BezierCurve<2>>`, since fewer than two points are rejected.
#[macro_export]
macro_rules! bezier {
    ([$(($x:expr, $y:expr)),* $(,)?]) => {
        $crate::data::BezierCurve::new(&[$($crate::pt!($x, $y)),*])
    };
}

#[cfg(test)]
mod tests {
    use crate::data::{Point2, Point3};
    use crate::error::BezierError;

    #[test]
    fn test_pt_macro() {
        assert_eq!(crate::pt!(1, 2), Point2::new(1.0, 2.0));
        assert_eq!(crate::pt!(1, 2.5, -3), Point3::new(1.0, 2.5, -3.0));
    }

    #[test]
    fn test_bezier_macro() {
        let curve = crate::bezier!([(0, 0), (1, 1), (2, 0)]).unwrap();
        assert_eq!(curve.degree(), 2);
        assert_eq!(curve.last(), Point2::new(2.0, 0.0));

        assert!(matches!(
            crate::bezier!([(0, 0)]),
            Err(BezierError::InvalidArgument(_))
        ));
    }
}
