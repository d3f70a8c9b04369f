//! # Fence Mesh
//!
//! Rebuilds renderable geometry from a grid cut along a fence polyline.
//! The grid-cutting service returns, per polyline segment, flat `(u, z)`
//! vertex pairs and index-based polygons; this crate turns them into a
//! triangle mesh and closed outline loops per section.
//!
//! ## Architecture
//!
//! ```text
//! Section ─► LocalFrame ─► reconstruct_vertices ─┬─► triangulate ──────────► Mesh
//!                                                 └─► build_boundary_loops ─► BoundaryLoops
//!
//! [Section] ─► aggregate_sections ─► FenceGeometry ─► SurfaceBuffers / LineStrip
//! ```
//!
//! Sections are independent: every stage is a pure function of one
//! [`Section`](fence_types::Section), and each mesh owns a 0-based vertex
//! index space.
//!
//! ## Usage
//!
//! ```rust
//! use fence_mesh::{aggregate_sections, LineStrip, MeshOptions};
//! use fence_types::Section;
//! use glam::DVec2;
//!
//! let sections = vec![Section::new(
//!     DVec2::new(0.0, 0.0),
//!     DVec2::new(10.0, 0.0),
//!     vec![0.0, 0.0, 5.0, 0.0, 10.0, 0.0, 5.0, 3.0],
//!     vec![4],
//!     vec![0, 1, 2, 3],
//! )];
//!
//! let fence = aggregate_sections(&sections, &MeshOptions::default()).unwrap();
//! let section = fence.get(0).unwrap();
//! assert_eq!(section.mesh.triangles(), &[[0, 1, 2], [0, 2, 3]]);
//! assert_eq!(LineStrip::from_fence(&fence).break_count(), 1);
//! ```

pub mod aggregate;
pub mod boundary;
pub mod error;
pub mod frame;
pub mod mesh;
pub mod options;
pub mod partition;
pub mod render;
pub mod section;
pub mod triangulate;
pub mod vertices;

pub use aggregate::{
    aggregate_sections, build_fence_geometry, FenceGeometry, SectionCountMismatch,
};
pub use boundary::{build_boundary_loops, BoundaryLoop, BoundaryLoops, PathElement};
pub use error::{FenceMeshError, FenceMeshResult, MalformedKind};
pub use frame::LocalFrame;
pub use mesh::Mesh;
pub use options::{BatchPolicy, DisplayOrigin, MeshOptions};
pub use partition::{validate_section, PolygonPartition, PolygonRun};
pub use render::{LineStrip, SurfaceBuffers};
pub use section::{build_section_geometry, SectionGeometry, SectionStats};
pub use triangulate::{fan_triangulate, triangulate, Triangle};
pub use vertices::reconstruct_vertices;
