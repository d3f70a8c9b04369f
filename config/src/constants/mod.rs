//! Configuration values shared across the fence mesh pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for general floating-point comparisons.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!((1.0_f64 - (1.0 + 1e-11)).abs() < EPSILON);
/// ```
pub const EPSILON: f64 = 1e-10;

/// Minimum segment length accepted when deriving a section's direction.
///
/// Segments at or below this length are degenerate: a unit direction computed
/// from them would amplify floating-point noise.
///
/// # Examples
/// ```
/// use config::constants::DEGENERATE_SEGMENT_TOLERANCE;
/// assert!(DEGENERATE_SEGMENT_TOLERANCE > 0.0);
/// ```
pub const DEGENERATE_SEGMENT_TOLERANCE: f64 = 1e-12;

/// Tolerance for the signed-area test used by the optional convexity check.
///
/// Edge pairs whose cross product magnitude falls below this value are
/// treated as collinear and never flip the winding sign.
///
/// # Examples
/// ```
/// use config::constants::{CONVEXITY_TOLERANCE, EPSILON};
/// assert!(CONVEXITY_TOLERANCE >= EPSILON);
/// ```
pub const CONVEXITY_TOLERANCE: f64 = 1e-9;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Number of scalars per vertex in a section's flat `(u, z)` array.
///
/// # Examples
/// ```
/// use config::constants::UZ_COMPONENTS;
/// let uz = [0.0, 0.0, 10.0, 0.0, 5.0, 3.0];
/// assert_eq!(uz.len() / UZ_COMPONENTS, 3);
/// ```
pub const UZ_COMPONENTS: usize = 2;

/// Number of scalars per planar point in a flat polyline `[x0, y0, x1, y1, ...]`.
///
/// # Examples
/// ```
/// use config::constants::XY_COMPONENTS;
/// assert_eq!(XY_COMPONENTS, 2);
/// ```
pub const XY_COMPONENTS: usize = 2;

/// Smallest vertex count that forms a polygon with area.
///
/// Polygons below this count produce no triangles and no boundary loop.
///
/// # Examples
/// ```
/// use config::constants::MIN_POLYGON_VERTICES;
/// let vertex_count = 2;
/// assert!(vertex_count < MIN_POLYGON_VERTICES);
/// ```
pub const MIN_POLYGON_VERTICES: usize = 3;

// =============================================================================
// PARALLELISM
// =============================================================================

/// Section count at which batch aggregation switches to the parallel path.
///
/// Below this, thread pool dispatch costs more than the mesh work itself.
///
/// # Examples
/// ```
/// use config::constants::PARALLEL_SECTION_THRESHOLD;
/// assert!(PARALLEL_SECTION_THRESHOLD >= 2);
/// ```
pub const PARALLEL_SECTION_THRESHOLD: usize = 16;

// =============================================================================
// HELPERS
// =============================================================================

/// Returns true when `a` and `b` differ by less than [`EPSILON`].
///
/// # Examples
/// ```
/// use config::constants::approx_equal;
/// assert!(approx_equal(1.0, 1.0 + 1e-12));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true when `value` is within [`EPSILON`] of zero.
///
/// # Examples
/// ```
/// use config::constants::approx_zero;
/// assert!(approx_zero(0.0));
/// assert!(!approx_zero(0.5));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of numeric settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.segment_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Minimum accepted segment length for frame construction.
    pub segment_tolerance: f64,
    /// Collinearity tolerance for the convexity check.
    pub convexity_tolerance: f64,
    /// Section count that enables parallel aggregation.
    pub parallel_threshold: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerances.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-9, 1.0e-9, 4).expect("valid config");
    /// assert_eq!(cfg.parallel_threshold, 4);
    /// ```
    pub fn new(
        segment_tolerance: f64,
        convexity_tolerance: f64,
        parallel_threshold: usize,
    ) -> Result<Self, ConfigError> {
        if !(segment_tolerance > 0.0 && segment_tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(segment_tolerance));
        }
        if !(convexity_tolerance >= 0.0 && convexity_tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(convexity_tolerance));
        }
        if parallel_threshold == 0 {
            return Err(ConfigError::InvalidThreshold(parallel_threshold));
        }
        Ok(Self {
            segment_tolerance,
            convexity_tolerance,
            parallel_threshold,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            segment_tolerance: DEGENERATE_SEGMENT_TOLERANCE,
            convexity_tolerance: CONVEXITY_TOLERANCE,
            parallel_threshold: PARALLEL_SECTION_THRESHOLD,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when a tolerance is negative, non-finite, or zero where a
    /// positive value is required.
    InvalidTolerance(f64),
    /// Raised when the parallel threshold is zero.
    InvalidThreshold(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidThreshold(value) => {
                write!(f, "parallel_threshold must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
