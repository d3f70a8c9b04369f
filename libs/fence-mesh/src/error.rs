//! # Error Types
//!
//! Error types for fence mesh reconstruction. Every per-section error
//! carries the section index and the offending counts or indices.
//!
//! ## Error Policy
//!
//! - NO default substitution when a section is malformed
//! - Indices are never clamped or truncated
//! - Errors are raised before any triangle is emitted for the section

use config::constants::ConfigError;
use glam::DVec2;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while turning cut sections into geometry.
///
/// ## Example
///
/// ```rust
/// use fence_mesh::{build_section_geometry, FenceMeshError, MeshOptions};
/// use fence_types::Section;
/// use glam::DVec2;
///
/// let section = Section::new(DVec2::ONE, DVec2::ONE, vec![], vec![], vec![]);
/// match build_section_geometry(3, &section, &MeshOptions::default()) {
///     Err(FenceMeshError::DegenerateSegment { section, .. }) => assert_eq!(section, 3),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FenceMeshError {
    /// Start and end points coincide, so the section has no direction.
    #[error("Section {section}: degenerate segment from {start} to {end} (length {length:e})")]
    DegenerateSegment {
        /// Section position in the input sequence
        section: usize,
        /// Segment start point
        start: DVec2,
        /// Segment end point
        end: DVec2,
        /// Measured planar length
        length: f64,
    },

    /// The flat `(u, z)` array cannot be split into pairs.
    #[error("Section {section}: vertex array has odd length {length}, expected (u, z) pairs")]
    OddVertexArrayLength {
        /// Section position in the input sequence
        section: usize,
        /// Number of scalars supplied
        length: usize,
    },

    /// Polygon sizes and polygon indices disagree, or an index is out of range.
    #[error("Section {section}: malformed section: {kind}")]
    MalformedSection {
        /// Section position in the input sequence
        section: usize,
        /// What exactly is inconsistent
        kind: MalformedKind,
    },

    /// A polygon failed the opt-in convexity check.
    #[error("Section {section}: polygon {polygon} is not convex")]
    NonConvexPolygon {
        /// Section position in the input sequence
        section: usize,
        /// Polygon position within the section
        polygon: usize,
    },

    /// Invalid mesh options.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Inconsistency found in a section's polygon description.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedKind {
    /// A `vertices_per_polygon` entry is zero.
    #[error("polygon {polygon} has zero vertices")]
    EmptyPolygon {
        /// Polygon position within the section
        polygon: usize,
    },

    /// `vertices_per_polygon` does not sum to the number of polygon indices.
    #[error("polygon sizes sum to {expected} but {actual} polygon indices were supplied")]
    IndexCountMismatch {
        /// Sum of `vertices_per_polygon`
        expected: usize,
        /// Length of `polygon_vertex_indices`
        actual: usize,
    },

    /// A polygon references a vertex pair that does not exist.
    #[error(
        "polygon {polygon} references vertex {index} at position {position}, \
         but the section has {vertex_count} vertices"
    )]
    IndexOutOfRange {
        /// Polygon position within the section
        polygon: usize,
        /// Position within `polygon_vertex_indices`
        position: usize,
        /// The offending vertex index
        index: u32,
        /// Number of `(u, z)` pairs available
        vertex_count: usize,
    },
}

impl FenceMeshError {
    /// Creates a malformed section error.
    pub fn malformed(section: usize, kind: MalformedKind) -> Self {
        Self::MalformedSection { section, kind }
    }

    /// Section index the error refers to, if any.
    pub fn section(&self) -> Option<usize> {
        match self {
            Self::DegenerateSegment { section, .. }
            | Self::OddVertexArrayLength { section, .. }
            | Self::MalformedSection { section, .. }
            | Self::NonConvexPolygon { section, .. } => Some(*section),
            Self::Config(_) => None,
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for fence mesh operations.
pub type FenceMeshResult<T> = Result<T, FenceMeshError>;

// =============================================================================
// TESTS
// =============================================================================
