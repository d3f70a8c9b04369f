//! # Polygon Partition
//!
//! Splits a section's flat `polygon_vertex_indices` into per-polygon runs.
//! A run starts at the sum of all earlier polygon sizes, so polygons too
//! small to render still advance the offset and never misalign later ones.
//!
//! A [`PolygonPartition`] can only be obtained through validation, which
//! makes every run slice and every vertex index in it safe to use. Polygon
//! sizes must be positive; a zero-size entry is malformed.

use std::f64::consts::{PI, TAU};

use config::constants::{MIN_POLYGON_VERTICES, UZ_COMPONENTS};
use fence_types::Section;
use glam::DVec2;

use crate::error::{FenceMeshError, FenceMeshResult, MalformedKind};

/// One polygon's slice of the flat index array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolygonRun<'a> {
    /// Polygon position within the section.
    pub polygon: usize,
    /// Offset of the run within `polygon_vertex_indices`.
    pub offset: usize,
    /// Vertex indices of the polygon, in boundary order.
    pub indices: &'a [u32],
}

impl PolygonRun<'_> {
    /// Number of vertices in the polygon.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True when the run holds no vertex.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Polygons with fewer than three vertices have no area.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.indices.len() < MIN_POLYGON_VERTICES
    }
}

/// Validated polygon description of one section.
#[derive(Debug, Clone, Copy)]
pub struct PolygonPartition<'a> {
    sizes: &'a [u32],
    indices: &'a [u32],
    vertex_count: usize,
}

impl<'a> PolygonPartition<'a> {
    /// Checks that every size is positive, that `sizes` sums to
    /// `indices.len()`, and that every index is below `vertex_count`.
    pub fn new(
        sizes: &'a [u32],
        indices: &'a [u32],
        vertex_count: usize,
    ) -> Result<Self, MalformedKind> {
        if let Some(polygon) = sizes.iter().position(|&n| n == 0) {
            return Err(MalformedKind::EmptyPolygon { polygon });
        }
        let expected: usize = sizes.iter().map(|&n| n as usize).sum();
        if expected != indices.len() {
            return Err(MalformedKind::IndexCountMismatch {
                expected,
                actual: indices.len(),
            });
        }

        let partition = Self {
            sizes,
            indices,
            vertex_count,
        };
        for run in partition.runs() {
            if let Some((i, &index)) = run
                .indices
                .iter()
                .enumerate()
                .find(|(_, &index)| index as usize >= vertex_count)
            {
                return Err(MalformedKind::IndexOutOfRange {
                    polygon: run.polygon,
                    position: run.offset + i,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(partition)
    }

    /// Iterates polygon runs in input order, degenerate ones included.
    pub fn runs(&self) -> impl Iterator<Item = PolygonRun<'a>> + '_ {
        let indices = self.indices;
        self.sizes
            .iter()
            .enumerate()
            .scan(0usize, move |offset, (polygon, &size)| {
                let start = *offset;
                *offset += size as usize;
                Some(PolygonRun {
                    polygon,
                    offset: start,
                    indices: &indices[start..*offset],
                })
            })
    }

    /// Number of polygons, degenerate ones included.
    #[inline]
    pub fn polygon_count(&self) -> usize {
        self.sizes.len()
    }

    /// Number of `(u, z)` pairs the indices were checked against.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of polygons with fewer than three vertices.
    pub fn degenerate_count(&self) -> usize {
        self.sizes
            .iter()
            .filter(|&&n| (n as usize) < MIN_POLYGON_VERTICES)
            .count()
    }

    /// Number of triangles a fan over every polygon produces.
    pub fn triangle_count(&self) -> usize {
        self.sizes
            .iter()
            .map(|&n| (n as usize).saturating_sub(2))
            .sum()
    }

    /// Number of closed loops, one per non-degenerate polygon.
    pub fn loop_count(&self) -> usize {
        self.polygon_count() - self.degenerate_count()
    }
}

/// Runs every input check for the section at position `index`.
///
/// Order: odd `(u, z)` array length first, then zero polygon sizes, then
/// polygon size sum, then index range.
pub fn validate_section(
    index: usize,
    section: &Section,
) -> FenceMeshResult<PolygonPartition<'_>> {
    let length = section.vertex_array_uz.len();
    if length % UZ_COMPONENTS != 0 {
        return Err(FenceMeshError::OddVertexArrayLength {
            section: index,
            length,
        });
    }
    PolygonPartition::new(
        &section.vertices_per_polygon,
        &section.polygon_vertex_indices,
        section.vertex_count(),
    )
    .map_err(|kind| FenceMeshError::malformed(index, kind))
}

/// Returns the first polygon whose `(u, z)` outline is not convex.
///
/// Collinear edge pairs (cross product within `tolerance`) are ignored, so
/// polygons with repeated or collinear points still pass. An outline that
/// doubles back on itself, or winds around more than once (a star), is not
/// convex.
pub fn find_non_convex(
    partition: &PolygonPartition<'_>,
    uz: &[DVec2],
    tolerance: f64,
) -> Option<usize> {
    partition
        .runs()
        .filter(|run| !run.is_degenerate())
        .find(|run| !is_convex(run.indices, uz, tolerance))
        .map(|run| run.polygon)
}

fn is_convex(indices: &[u32], uz: &[DVec2], tolerance: f64) -> bool {
    let n = indices.len();
    let mut positive = false;
    let mut negative = false;
    let mut turning = 0.0;
    for i in 0..n {
        let a = uz[indices[i] as usize];
        let b = uz[indices[(i + 1) % n] as usize];
        let c = uz[indices[(i + 2) % n] as usize];
        let (incoming, outgoing) = (b - a, c - b);
        let cross = incoming.perp_dot(outgoing);
        let dot = incoming.dot(outgoing);
        if cross > tolerance {
            positive = true;
        } else if cross < -tolerance {
            negative = true;
        } else if dot < -tolerance {
            // Reversal along a straight line
            return false;
        } else {
            continue;
        }
        if positive && negative {
            return false;
        }
        turning += cross.atan2(dot);
    }
    if !positive && !negative {
        // Zero area, nothing for the fan to overlap
        return true;
    }
    // A simple convex outline turns exactly once around; a star turns twice
    // or more with every corner bending the same way.
    (turning.abs() - TAU).abs() < PI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_follow_offsets() {
        let sizes = [3, 2, 4];
        let indices = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        let partition = PolygonPartition::new(&sizes, &indices, 9).unwrap();
        let runs: Vec<_> = partition.runs().collect();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].indices, &[0, 1, 2]);
        assert_eq!(runs[1].offset, 3);
        assert_eq!(runs[1].indices, &[3, 4]);
        assert!(runs[1].is_degenerate());
        assert_eq!(runs[2].offset, 5);
        assert_eq!(runs[2].indices, &[5, 6, 7, 8]);
    }

    #[test]
    fn test_counts() {
        let sizes = [3, 2, 4, 1];
        let indices = [0, 1, 2, 0, 1, 0, 1, 2, 3, 2];
        let partition = PolygonPartition::new(&sizes, &indices, 4).unwrap();
        assert_eq!(partition.polygon_count(), 4);
        assert_eq!(partition.degenerate_count(), 2);
        assert_eq!(partition.loop_count(), 2);
        assert_eq!(partition.triangle_count(), 1 + 2);
    }

    #[test]
    fn test_zero_size_polygon_is_malformed() {
        let err = PolygonPartition::new(&[3, 0, 3], &[0, 1, 2, 0, 1, 2], 3).unwrap_err();
        assert_eq!(err, MalformedKind::EmptyPolygon { polygon: 1 });
    }

    #[test]
    fn test_sum_mismatch_is_malformed() {
        let err = PolygonPartition::new(&[4, 3], &[0, 1, 2, 3, 0, 1], 4).unwrap_err();
        assert_eq!(
            err,
            MalformedKind::IndexCountMismatch {
                expected: 7,
                actual: 6
            }
        );
    }

    #[test]
    fn test_out_of_range_reports_position() {
        let err = PolygonPartition::new(&[3, 3], &[0, 1, 2, 2, 3, 4], 4).unwrap_err();
        assert_eq!(
            err,
            MalformedKind::IndexOutOfRange {
                polygon: 1,
                position: 5,
                index: 4,
                vertex_count: 4,
            }
        );
    }

    #[test]
    fn test_out_of_range_in_degenerate_polygon_is_still_malformed() {
        assert!(PolygonPartition::new(&[2], &[0, 10], 3).is_err());
    }

    #[test]
    fn test_validate_section_odd_length() {
        let section = Section::new(
            DVec2::ZERO,
            DVec2::X,
            vec![0.0, 0.0, 1.0],
            vec![],
            vec![],
        );
        assert_eq!(
            validate_section(2, &section).unwrap_err(),
            FenceMeshError::OddVertexArrayLength {
                section: 2,
                length: 3
            }
        );
    }

    #[test]
    fn test_validate_section_wraps_malformed() {
        let section = Section::new(
            DVec2::ZERO,
            DVec2::X,
            vec![0.0, 0.0, 1.0, 0.0],
            vec![3],
            vec![0, 1],
        );
        let err = validate_section(9, &section).unwrap_err();
        assert!(matches!(
            err,
            FenceMeshError::MalformedSection { section: 9, .. }
        ));
    }

    #[test]
    fn test_convex_quad_passes() {
        let uz = [
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 3.0),
            DVec2::new(0.0, 3.0),
        ];
        let partition = PolygonPartition::new(&[4], &[0, 1, 2, 3], 4).unwrap();
        assert_eq!(find_non_convex(&partition, &uz, 1e-9), None);
    }

    #[test]
    fn test_collinear_points_pass() {
        // Cut polygons often carry points along a straight cell edge
        let uz = [
            DVec2::new(0.0, 0.0),
            DVec2::new(5.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(5.0, 3.0),
        ];
        let partition = PolygonPartition::new(&[4], &[0, 1, 2, 3], 4).unwrap();
        assert_eq!(find_non_convex(&partition, &uz, 1e-9), None);
    }

    #[test]
    fn test_concave_polygon_is_found() {
        let uz = [
            DVec2::new(0.0, 0.0),
            DVec2::new(4.0, 0.0),
            DVec2::new(4.0, 4.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(0.0, 4.0),
        ];
        let partition =
            PolygonPartition::new(&[3, 5], &[0, 1, 2, 0, 1, 2, 3, 4], 5).unwrap();
        assert_eq!(find_non_convex(&partition, &uz, 1e-9), Some(1));
    }

    #[test]
    fn test_pentagram_is_found() {
        // Every corner turns the same way, but the outline winds twice
        let uz: Vec<DVec2> = (0..5)
            .map(|k| {
                let angle = PI / 2.0 + f64::from(k * 2 % 5) * TAU / 5.0;
                DVec2::new(angle.cos(), angle.sin())
            })
            .collect();
        let partition = PolygonPartition::new(&[5], &[0, 1, 2, 3, 4], 5).unwrap();
        assert_eq!(find_non_convex(&partition, &uz, 1e-9), Some(0));
    }

    #[test]
    fn test_regular_pentagon_passes() {
        let uz: Vec<DVec2> = (0..5)
            .map(|k| {
                let angle = PI / 2.0 + f64::from(k) * TAU / 5.0;
                DVec2::new(angle.cos(), angle.sin())
            })
            .collect();
        let partition = PolygonPartition::new(&[5], &[0, 1, 2, 3, 4], 5).unwrap();
        assert_eq!(find_non_convex(&partition, &uz, 1e-9), None);
    }

    #[test]
    fn test_doubled_back_outline_is_found() {
        let uz = [
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(5.0, 0.0),
        ];
        let partition = PolygonPartition::new(&[3], &[0, 1, 2], 3).unwrap();
        assert_eq!(find_non_convex(&partition, &uz, 1e-9), Some(0));
    }
}
