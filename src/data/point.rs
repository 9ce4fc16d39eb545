//! A point in D-dimensional euclidean space.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use nalgebra::SVector;

/// Immutable point with `D` real coordinates, backed by a nalgebra vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<const D: usize> {
    coords: SVector<f64, D>,
}

/// Point in the plane
pub type Point2 = Point<2>;
/// Point in space
pub type Point3 = Point<3>;

impl Point<2> {
    pub fn new(x: f64, y: f64) -> Self {
        Self::from_coords([x, y])
    }

    pub fn x(&self) -> f64 {
        self.coords[0]
    }

    pub fn y(&self) -> f64 {
        self.coords[1]
    }
}

impl Point<3> {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_coords([x, y, z])
    }

    pub fn x(&self) -> f64 {
        self.coords[0]
    }

    pub fn y(&self) -> f64 {
        self.coords[1]
    }

    pub fn z(&self) -> f64 {
        self.coords[2]
    }
}

impl<const D: usize> Point<D> {
    pub fn from_coords(coords: [f64; D]) -> Self {
        Self {
            coords: SVector::from(coords),
        }
    }

    /// The point with all coordinates zero
    pub fn origin() -> Self {
        Self {
            coords: SVector::zeros(),
        }
    }

    /// Coordinate along `axis` (0 is x, 1 is y, ...), panics if `axis >= D`
    pub fn coord(&self, axis: usize) -> f64 {
        self.coords[axis]
    }

    pub fn coords(&self) -> [f64; D] {
        std::array::from_fn(|i| self.coords[i])
    }

    /// Componentwise sum
    pub fn add(self, other: Self) -> Self {
        Self {
            coords: self.coords + other.coords,
        }
    }

    /// Componentwise multiplication by `k`
    pub fn scale(self, k: f64) -> Self {
        Self {
            coords: self.coords * k,
        }
    }

    /// `self * (1 - t) + other * t`, extrapolating for `t` outside [0, 1]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self.scale(1.0 - t).add(other.scale(t))
    }

    /// Euclidean distance between the two points
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.coords - other.coords).norm()
    }
}

impl<const D: usize> Default for Point<D> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<const D: usize> From<[f64; D]> for Point<D> {
    fn from(coords: [f64; D]) -> Self {
        Self::from_coords(coords)
    }
}

impl<const D: usize> Add for Point<D> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Point::<D>::add(self, other)
    }
}

impl<const D: usize> Sub for Point<D> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            coords: self.coords - other.coords,
        }
    }
}

impl<const D: usize> Mul<f64> for Point<D> {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        self.scale(k)
    }
}

impl<const D: usize> fmt::Display for Point<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}
