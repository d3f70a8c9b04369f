//! # Local Frame
//!
//! Each section is parameterized along its own segment: a vertex `(u, z)`
//! lies `u` units from the section start in the segment direction, at
//! elevation `z`. The frame holds that start point and unit direction.

use fence_types::Section;
use glam::{DVec2, DVec3};
use serde::Serialize;

use crate::error::{FenceMeshError, FenceMeshResult};

/// Origin and unit direction of one section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocalFrame {
    origin: DVec2,
    unit_direction: DVec2,
    length: f64,
}

impl LocalFrame {
    /// Derives the frame from a segment's endpoints.
    ///
    /// Returns `None` when the segment is not longer than `tolerance` or
    /// either endpoint is non-finite. No default direction is ever assumed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fence_mesh::LocalFrame;
    /// use glam::DVec2;
    ///
    /// let frame = LocalFrame::try_new(DVec2::ZERO, DVec2::new(3.0, 4.0), 1e-12).unwrap();
    /// assert_eq!(frame.unit_direction(), DVec2::new(0.6, 0.8));
    /// assert!(LocalFrame::try_new(DVec2::ONE, DVec2::ONE, 1e-12).is_none());
    /// ```
    pub fn try_new(start: DVec2, end: DVec2, tolerance: f64) -> Option<Self> {
        let delta = end - start;
        let length = delta.length();
        if !length.is_finite() || !start.is_finite() || length <= tolerance {
            return None;
        }
        Some(Self {
            origin: start,
            unit_direction: delta / length,
            length,
        })
    }

    /// Derives the frame for the section at position `index`, failing with
    /// [`FenceMeshError::DegenerateSegment`].
    pub fn for_section(index: usize, section: &Section, tolerance: f64) -> FenceMeshResult<Self> {
        Self::try_new(section.start_point, section.end_point, tolerance).ok_or_else(|| {
            FenceMeshError::DegenerateSegment {
                section: index,
                start: section.start_point,
                end: section.end_point,
                length: section.length(),
            }
        })
    }

    /// Start point of the segment.
    #[inline]
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    /// Unit vector from start to end point.
    #[inline]
    pub fn unit_direction(&self) -> DVec2 {
        self.unit_direction
    }

    /// Planar length of the segment the frame was built from.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Maps a local `(u, z)` coordinate to a 3D point.
    #[inline]
    pub fn point_at(&self, u: f64, z: f64) -> DVec3 {
        let xy = self.origin + self.unit_direction * u;
        DVec3::new(xy.x, xy.y, z)
    }
}
