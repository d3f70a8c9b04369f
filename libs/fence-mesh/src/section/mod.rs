//! # Section Mesh Builder
//!
//! Runs the full per-section pipeline:
//!
//! ```text
//! Section → LocalFrame → validate → vertices → triangles + boundary loops
//! ```
//!
//! A section reads only its own record and writes only its own output, so
//! sections can be built independently and in any order.

use fence_types::Section;
use log::debug;
use serde::Serialize;

use crate::boundary::{build_boundary_loops, BoundaryLoops};
use crate::error::{FenceMeshError, FenceMeshResult};
use crate::frame::LocalFrame;
use crate::mesh::Mesh;
use crate::options::MeshOptions;
use crate::partition::{find_non_convex, validate_section};
use crate::triangulate::triangulate;
use crate::vertices::{reconstruct_vertices, uz_points};

/// Counts describing one built section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SectionStats {
    /// Number of reconstructed vertices.
    pub vertex_count: usize,
    /// Number of polygons, degenerate ones included.
    pub polygon_count: usize,
    /// Polygons with fewer than three vertices.
    pub degenerate_polygon_count: usize,
    /// Number of fan triangles.
    pub triangle_count: usize,
    /// Number of boundary loops.
    pub loop_count: usize,
}

/// Mesh and outlines of one section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionGeometry {
    /// Position of the section in the input sequence.
    pub index: usize,
    /// Frame of the section's segment, in global coordinates.
    pub frame: LocalFrame,
    /// Triangle mesh with section-local indices.
    pub mesh: Mesh,
    /// Closed outline of every non-degenerate polygon.
    pub loops: BoundaryLoops,
    /// Counts for logging and display.
    pub stats: SectionStats,
}

impl SectionGeometry {
    /// Splits into the `(Mesh, BoundaryLoops)` pair handed to renderers.
    pub fn into_pair(self) -> (Mesh, BoundaryLoops) {
        (self.mesh, self.loops)
    }
}

/// Builds the mesh and boundary loops of the section at position `index`.
///
/// Checks run before any geometry is produced, in this order:
/// degenerate segment, odd `(u, z)` length, polygon size sum, index range,
/// then convexity when enabled.
///
/// # Example
///
/// ```rust
/// use fence_mesh::{build_section_geometry, MeshOptions};
/// use fence_types::Section;
/// use glam::{DVec2, DVec3};
///
/// let section = Section::new(
///     DVec2::new(0.0, 0.0),
///     DVec2::new(10.0, 0.0),
///     vec![0.0, 0.0, 5.0, 0.0, 10.0, 0.0, 5.0, 3.0],
///     vec![4],
///     vec![0, 1, 2, 3],
/// );
/// let geometry = build_section_geometry(0, &section, &MeshOptions::default()).unwrap();
/// assert_eq!(geometry.mesh.triangles(), &[[0, 1, 2], [0, 2, 3]]);
/// assert_eq!(geometry.mesh.vertex(3), Some(DVec3::new(5.0, 0.0, 3.0)));
/// ```
pub fn build_section_geometry(
    index: usize,
    section: &Section,
    options: &MeshOptions,
) -> FenceMeshResult<SectionGeometry> {
    let frame = LocalFrame::for_section(index, section, options.config.segment_tolerance)?;
    let partition = validate_section(index, section)?;

    if options.check_convexity {
        let uz = uz_points(&section.vertex_array_uz);
        if let Some(polygon) =
            find_non_convex(&partition, &uz, options.config.convexity_tolerance)
        {
            return Err(FenceMeshError::NonConvexPolygon {
                section: index,
                polygon,
            });
        }
    }

    let vertices = reconstruct_vertices(&section.vertex_array_uz, &frame);
    let triangles = triangulate(&partition);
    let loops = build_boundary_loops(&partition, &vertices);

    let stats = SectionStats {
        vertex_count: vertices.len(),
        polygon_count: partition.polygon_count(),
        degenerate_polygon_count: partition.degenerate_count(),
        triangle_count: triangles.len(),
        loop_count: loops.len(),
    };
    debug!(
        "section {index}: {} vertices, {} polygons ({} degenerate), {} triangles",
        stats.vertex_count,
        stats.polygon_count,
        stats.degenerate_polygon_count,
        stats.triangle_count
    );

    Ok(SectionGeometry {
        index,
        frame,
        mesh: Mesh::from_parts(vertices, triangles),
        loops,
        stats,
    })
}
