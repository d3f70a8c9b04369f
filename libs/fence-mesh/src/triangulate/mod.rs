//! # Fan Triangulation
//!
//! Every polygon with `n >= 3` vertices becomes `n - 2` triangles anchored at
//! its first vertex: `(v0, v1, v2), (v0, v2, v3), ...`. Vertex indices are
//! resolved through the polygon's own index run.
//!
//! Cut polygons are convex or near-planar, so the fan is exact for them.
//! Concave input yields index-valid but possibly overlapping triangles; see
//! [`MeshOptions::check_convexity`](crate::MeshOptions::check_convexity).

use crate::partition::{PolygonPartition, PolygonRun};

/// Triangle as three vertex indices.
pub type Triangle = [u32; 3];

/// Appends the fan of a single polygon run to `out`.
///
/// Degenerate runs (fewer than three vertices) emit nothing.
pub fn fan_triangulate(run: &PolygonRun<'_>, out: &mut Vec<Triangle>) {
    if run.is_degenerate() {
        return;
    }
    let v0 = run.indices[0];
    out.extend(run.indices[1..].windows(2).map(|edge| [v0, edge[0], edge[1]]));
}

/// Triangulates every polygon of a section, in polygon order.
///
/// # Example
///
/// ```rust
/// use fence_mesh::{triangulate, PolygonPartition};
///
/// let partition = PolygonPartition::new(&[4], &[0, 1, 2, 3], 4).unwrap();
/// assert_eq!(triangulate(&partition), vec![[0, 1, 2], [0, 2, 3]]);
/// ```
pub fn triangulate(partition: &PolygonPartition<'_>) -> Vec<Triangle> {
    let mut triangles = Vec::with_capacity(partition.triangle_count());
    for run in partition.runs() {
        fan_triangulate(&run, &mut triangles);
    }
    triangles
}
