//! # Section Mesh
//!
//! Triangle mesh of one fence section.
//!
//! ## Invariant: `SectionLocalIndices`
//!
//! Every section owns its own vertex index space: indices start at 0 and
//! refer only to that section's `vertices`. Meshes from different sections
//! are never merged into a shared index space by this crate.

use glam::DVec3;
use serde::Serialize;

use crate::triangulate::Triangle;

/// A triangle mesh with vertices and indices.
///
/// All geometry is f64. Export to f32 only happens at the renderer
/// boundary.
///
/// # Example
///
/// ```rust
/// use fence_mesh::Mesh;
/// use glam::DVec3;
///
/// let mesh = Mesh::from_parts(vec![DVec3::ZERO, DVec3::X, DVec3::Z], vec![[0, 1, 2]]);
/// assert_eq!(mesh.vertex_count(), 3);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Mesh {
    /// Vertex positions, index-aligned with the section's `(u, z)` pairs
    vertices: Vec<DVec3>,
    /// Triangle indices into `vertices`
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a mesh from reconstructed vertices and triangles.
    pub fn from_parts(vertices: Vec<DVec3>, triangles: Vec<Triangle>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Triangles as indices into [`Mesh::vertices`].
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> Option<DVec3> {
        self.vertices.get(index as usize).copied()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let (first, rest) = self.vertices.split_first()?;
        Some(rest.iter().fold((*first, *first), |(min, max), v| {
            (min.min(*v), max.max(*v))
        }))
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Validates the `SectionLocalIndices` invariant.
    ///
    /// Checks:
    /// - All triangle indices are below `vertex_count()`
    /// - No triangle repeats an index
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len();
        self.triangles.iter().all(|tri| {
            tri.iter().all(|&i| (i as usize) < vertex_count)
                && tri[0] != tri[1]
                && tri[1] != tri[2]
                && tri[0] != tri[2]
        })
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports triangle indices as flat u32 array for GPU.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}
