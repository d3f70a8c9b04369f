//! # Renderer Buffers
//!
//! Flat layouts consumed by plotting and GPU front ends:
//!
//! - [`SurfaceBuffers`]: per-axis coordinate columns plus `i/j/k` triangle
//!   corner columns, one set per section mesh
//! - [`LineStrip`]: the outlines of every built section merged into one
//!   path, with explicit breaks between loops and sections

use glam::DVec3;
use serde::Serialize;

use crate::aggregate::FenceGeometry;
use crate::boundary::{BoundaryLoops, PathElement};
use crate::mesh::Mesh;

/// Column layout of a triangle mesh.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SurfaceBuffers {
    /// Vertex x coordinates
    pub x: Vec<f64>,
    /// Vertex y coordinates
    pub y: Vec<f64>,
    /// Vertex z coordinates
    pub z: Vec<f64>,
    /// First corner of each triangle
    pub i: Vec<u32>,
    /// Second corner of each triangle
    pub j: Vec<u32>,
    /// Third corner of each triangle
    pub k: Vec<u32>,
}

impl From<&Mesh> for SurfaceBuffers {
    fn from(mesh: &Mesh) -> Self {
        let vertices = mesh.vertices();
        let triangles = mesh.triangles();
        Self {
            x: vertices.iter().map(|v| v.x).collect(),
            y: vertices.iter().map(|v| v.y).collect(),
            z: vertices.iter().map(|v| v.z).collect(),
            i: triangles.iter().map(|t| t[0]).collect(),
            j: triangles.iter().map(|t| t[1]).collect(),
            k: triangles.iter().map(|t| t[2]).collect(),
        }
    }
}

/// One continuous outline path made of points and breaks.
///
/// # Example
///
/// ```rust
/// use fence_mesh::{LineStrip, PathElement};
/// use glam::DVec3;
///
/// let strip = LineStrip::new(vec![
///     PathElement::Point(DVec3::ZERO),
///     PathElement::Point(DVec3::X),
///     PathElement::Break,
/// ]);
/// let [x, _, _] = strip.coordinate_columns();
/// assert_eq!(x, vec![Some(0.0), Some(1.0), None]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LineStrip {
    elements: Vec<PathElement>,
}

impl LineStrip {
    /// Wraps an already flattened path.
    pub fn new(elements: Vec<PathElement>) -> Self {
        Self { elements }
    }

    /// Merges the loops of several sections, in order.
    pub fn from_loops<'a>(loops: impl IntoIterator<Item = &'a BoundaryLoops>) -> Self {
        let mut elements = Vec::new();
        for section_loops in loops {
            section_loops.extend_path(&mut elements);
        }
        Self { elements }
    }

    /// Merges the loops of every built section of a fence.
    pub fn from_fence(fence: &FenceGeometry) -> Self {
        Self::from_loops(fence.geometries().map(|geometry| &geometry.loops))
    }

    /// Path elements, breaks included.
    #[inline]
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Number of points.
    pub fn point_count(&self) -> usize {
        self.elements.iter().filter(|e| !e.is_break()).count()
    }

    /// Number of path breaks.
    pub fn break_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_break()).count()
    }

    /// Splits the strip at its breaks into point runs.
    pub fn paths(&self) -> Vec<Vec<DVec3>> {
        self.elements
            .split(PathElement::is_break)
            .filter(|run| !run.is_empty())
            .map(|run| run.iter().filter_map(PathElement::point).collect())
            .collect()
    }

    /// Per-axis columns where a break becomes `None`, the gap convention of
    /// plotting line traces.
    pub fn coordinate_columns(&self) -> [Vec<Option<f64>>; 3] {
        let column = |axis: fn(DVec3) -> f64| -> Vec<Option<f64>> {
            self.elements
                .iter()
                .map(|e| e.point().map(axis))
                .collect()
        };
        [column(|p| p.x), column(|p| p.y), column(|p| p.z)]
    }
}
