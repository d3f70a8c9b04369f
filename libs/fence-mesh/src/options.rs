//! # Mesh Options
//!
//! Tunables for a reconstruction run, layered over the shared
//! [`GlobalConfig`] snapshot.

use config::constants::GlobalConfig;
use glam::DVec2;

use crate::error::FenceMeshResult;

/// What the aggregator does with a section that fails to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Keep the error in the section's slot and continue with the rest.
    #[default]
    Skip,
    /// Fail the whole batch with the first error in section order.
    Abort,
}

/// Planar point subtracted from all output coordinates for display.
///
/// Translation only. Indices and topology are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DisplayOrigin {
    /// Keep global coordinates.
    #[default]
    None,
    /// Use the start point of the first input section.
    FirstSectionStart,
    /// Use a caller supplied point.
    Explicit(DVec2),
}

/// Options controlling a fence reconstruction run.
///
/// # Example
///
/// ```rust
/// use fence_mesh::{BatchPolicy, DisplayOrigin, MeshOptions};
///
/// let options = MeshOptions::default()
///     .with_batch_policy(BatchPolicy::Abort)
///     .with_display_origin(DisplayOrigin::FirstSectionStart)
///     .with_convexity_check(true);
/// assert!(options.check_convexity);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshOptions {
    /// Numeric tolerances and thresholds.
    pub config: GlobalConfig,
    /// Failure handling across sections.
    pub batch_policy: BatchPolicy,
    /// Allow sections to be built on the rayon pool.
    pub parallel: bool,
    /// Reject non-convex polygons instead of fanning them.
    pub check_convexity: bool,
    /// Translation applied to the aggregated output.
    pub display_origin: DisplayOrigin,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self::from_config(GlobalConfig::default())
    }
}

impl MeshOptions {
    /// Creates options around an already validated configuration.
    pub fn from_config(config: GlobalConfig) -> Self {
        Self {
            config,
            batch_policy: BatchPolicy::default(),
            parallel: true,
            check_convexity: false,
            display_origin: DisplayOrigin::default(),
        }
    }

    /// Replaces the degenerate segment tolerance.
    ///
    /// Fails with [`FenceMeshError::Config`](crate::FenceMeshError::Config)
    /// for zero, negative, or non-finite values.
    pub fn with_segment_tolerance(mut self, tolerance: f64) -> FenceMeshResult<Self> {
        self.config = GlobalConfig::new(
            tolerance,
            self.config.convexity_tolerance,
            self.config.parallel_threshold,
        )?;
        Ok(self)
    }

    /// Sets how failing sections are handled.
    #[must_use]
    pub fn with_batch_policy(mut self, policy: BatchPolicy) -> Self {
        self.batch_policy = policy;
        self
    }

    /// Enables or disables parallel section building.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enables the polygon convexity check.
    #[must_use]
    pub fn with_convexity_check(mut self, enabled: bool) -> Self {
        self.check_convexity = enabled;
        self
    }

    /// Sets the planar point subtracted from output coordinates.
    #[must_use]
    pub fn with_display_origin(mut self, origin: DisplayOrigin) -> Self {
        self.display_origin = origin;
        self
    }

    /// True when a batch of `section_count` sections should use rayon.
    pub fn use_parallel(&self, section_count: usize) -> bool {
        self.parallel && section_count >= self.config.parallel_threshold
    }
}
