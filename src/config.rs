//! Tuning knobs for arc-length estimation and adaptive flattening
//!
//! A [`LengthConfig`] can be built in code or loaded from a JSON document such as
//!
//! ```json
//! { "initial_segments": 4, "max_doublings": 16 }
//! ```
//!
//! Missing fields fall back to the values in [`crate::constants`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FLATNESS_EPSILON, DEFAULT_INITIAL_SEGMENTS, DEFAULT_MAX_DOUBLINGS,
    DEFAULT_MAX_SUBDIVISION_DEPTH, MAX_POLYLINE_SEGMENTS, MAX_SUBDIVISION_DEPTH,
};
use crate::error::{BezierError, BezierResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LengthConfig {
    /// Segments of the coarsest polyline estimate
    pub initial_segments: usize,
    /// Upper bound on the number of refinement rounds of `length`
    pub max_doublings: u32,
    /// Upper bound on the recursion depth of `create_path`
    pub max_subdivision_depth: u32,
    /// Relative slack under which a control polygon is treated as a straight line
    pub flatness_epsilon: f64,
}

impl Default for LengthConfig {
    fn default() -> Self {
        Self {
            initial_segments: DEFAULT_INITIAL_SEGMENTS,
            max_doublings: DEFAULT_MAX_DOUBLINGS,
            max_subdivision_depth: DEFAULT_MAX_SUBDIVISION_DEPTH,
            flatness_epsilon: DEFAULT_FLATNESS_EPSILON,
        }
    }
}

impl LengthConfig {
    /// Check that the configuration can drive a refinement loop
    pub fn validate(&self) -> BezierResult<()> {
        if self.initial_segments == 0 {
            return Err(BezierError::invalid(
                "initial_segments must be at least 1",
            ));
        }
        // the finest polyline has initial_segments << max_doublings segments
        let max_initial = MAX_POLYLINE_SEGMENTS
            .checked_shr(self.max_doublings)
            .unwrap_or(0);
        if self.initial_segments > max_initial {
            return Err(BezierError::invalid(format!(
                "initial_segments {} doubled {} times exceeds {} segments",
                self.initial_segments, self.max_doublings, MAX_POLYLINE_SEGMENTS
            )));
        }
        if self.max_subdivision_depth > MAX_SUBDIVISION_DEPTH {
            return Err(BezierError::invalid(format!(
                "max_subdivision_depth must be at most {}, got {}",
                MAX_SUBDIVISION_DEPTH, self.max_subdivision_depth
            )));
        }
        if !(self.flatness_epsilon.is_finite() && self.flatness_epsilon >= 0.0) {
            return Err(BezierError::invalid(format!(
                "flatness_epsilon must be a finite non-negative number, got {}",
                self.flatness_epsilon
            )));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON text
    pub fn from_json_str(text: &str) -> BezierResult<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| BezierError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> BezierResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| BezierError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&text)
    }
}
