//! # Vertex Reconstruction
//!
//! Maps a section's flat `(u, z)` array to 3D points through its
//! [`LocalFrame`]. Pair `k` becomes vertex `k`, so polygon indices from the
//! service address the reconstructed vertices directly.

use config::constants::UZ_COMPONENTS;
use glam::{DVec2, DVec3};

use crate::frame::LocalFrame;

/// Reconstructs one 3D vertex per `(u, z)` pair.
///
/// `u` is measured from the frame origin. A trailing lone scalar is never
/// read; validation rejects odd arrays before this is called.
///
/// # Example
///
/// ```rust
/// use fence_mesh::{reconstruct_vertices, LocalFrame};
/// use glam::{DVec2, DVec3};
///
/// let frame = LocalFrame::try_new(DVec2::ZERO, DVec2::new(0.0, 2.0), 1e-12).unwrap();
/// let vertices = reconstruct_vertices(&[0.0, -5.0, 1.5, -6.0], &frame);
/// assert_eq!(vertices, vec![DVec3::new(0.0, 0.0, -5.0), DVec3::new(0.0, 1.5, -6.0)]);
/// ```
pub fn reconstruct_vertices(vertex_array_uz: &[f64], frame: &LocalFrame) -> Vec<DVec3> {
    vertex_array_uz
        .chunks_exact(UZ_COMPONENTS)
        .map(|uz| frame.point_at(uz[0], uz[1]))
        .collect()
}

/// Views the flat array as 2D points in the section plane.
pub fn uz_points(vertex_array_uz: &[f64]) -> Vec<DVec2> {
    vertex_array_uz
        .chunks_exact(UZ_COMPONENTS)
        .map(|uz| DVec2::new(uz[0], uz[1]))
        .collect()
}

#[cfg(test)]
mod tests;
