//! Default values shared by the length estimation and flattening routines.

/// Number of uniform segments of the first polyline estimate
pub const DEFAULT_INITIAL_SEGMENTS: usize = 2;

/// Maximum number of times the segment count is doubled before giving up
pub const DEFAULT_MAX_DOUBLINGS: u32 = 20;

/// Maximum recursion depth of the adaptive flattening
pub const DEFAULT_MAX_SUBDIVISION_DEPTH: u32 = 20;

/// Relative tolerance under which a control polygon counts as a straight line
pub const DEFAULT_FLATNESS_EPSILON: f64 = 1e-12;

/// Upper bound on the number of segments of the finest polyline, `initial_segments << max_doublings`
pub const MAX_POLYLINE_SEGMENTS: usize = 1 << 26;

/// Upper bound on the recursion depth of the adaptive flattening
pub const MAX_SUBDIVISION_DEPTH: u32 = 26;

/// Default parameter interval of a freshly built curve
pub const DEFAULT_INTERVAL: (f64, f64) = (0.0, 1.0);
