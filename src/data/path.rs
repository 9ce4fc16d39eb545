//! A polyline produced by flattening a curve, each point tagged with its curve parameter.

use crate::data::point::Point;

/// Parameter-sorted sequence of points on a curve
#[derive(Debug, Clone, PartialEq)]
pub struct Path<const D: usize> {
    samples: Vec<(f64, Point<D>)>,
}

impl<const D: usize> Path<D> {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `(parameter, point)` pairs in increasing parameter order
    pub fn samples(&self) -> &[(f64, Point<D>)] {
        &self.samples
    }

    pub fn points(&self) -> impl Iterator<Item = Point<D>> + '_ {
        self.samples.iter().map(|&(_, p)| p)
    }

    pub fn params(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|&(t, _)| t)
    }

    pub fn first(&self) -> Option<(f64, Point<D>)> {
        self.samples.first().copied()
    }

    pub fn last(&self) -> Option<(f64, Point<D>)> {
        self.samples.last().copied()
    }

    /// Total length of the polyline
    pub fn length(&self) -> f64 {
        self.samples
            .windows(2)
            .map(|w| w[0].1.distance_to(&w[1].1))
            .sum()
    }
}

/// Collects samples for a [`Path`], keeping them ordered by parameter
#[derive(Debug, Clone, Default)]
pub struct PathBuilder<const D: usize> {
    samples: Vec<(f64, Point<D>)>,
}

impl<const D: usize> PathBuilder<D> {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Insert `point` after every sample whose parameter is not greater than `param`
    pub fn add_sorted_point(&mut self, point: Point<D>, param: f64) -> &mut Self {
        let at = self.samples.partition_point(|&(t, _)| t <= param);
        self.samples.insert(at, (param, point));
        self
    }

    pub fn finalize(&self) -> Path<D> {
        Path {
            samples: self.samples.clone(),
        }
    }
}
