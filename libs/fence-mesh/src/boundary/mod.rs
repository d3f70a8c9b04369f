//! # Boundary Loops
//!
//! Closed outlines of the cut polygons, one per polygon with at least three
//! vertices. Each loop repeats its first point at the end.
//!
//! When loops are flattened into a single line strip, a
//! [`PathElement::Break`] follows every loop so a line renderer never draws a
//! segment between unrelated polygons.

use glam::DVec3;
use serde::Serialize;

use crate::partition::PolygonPartition;

/// Element of a flattened outline path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PathElement {
    /// Next point of the current path.
    Point(DVec3),
    /// End of the current path; the next point starts a new one.
    Break,
}

impl PathElement {
    /// True for a path break.
    #[inline]
    pub fn is_break(&self) -> bool {
        matches!(self, PathElement::Break)
    }

    /// Point carried by this element, `None` for a break.
    #[inline]
    pub fn point(&self) -> Option<DVec3> {
        match self {
            PathElement::Point(p) => Some(*p),
            PathElement::Break => None,
        }
    }
}

/// Closed outline of one polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryLoop {
    polygon: usize,
    points: Vec<DVec3>,
}

impl BoundaryLoop {
    /// Polygon position within its section.
    #[inline]
    pub fn polygon(&self) -> usize {
        self.polygon
    }

    /// Loop points, first point repeated at the end.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Number of points, closing point included.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the loop holds no point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when the last point repeats the first.
    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }

    fn translate(&mut self, offset: DVec3) {
        for p in &mut self.points {
            *p += offset;
        }
    }
}

/// All boundary loops of one section, in polygon order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoundaryLoops {
    loops: Vec<BoundaryLoop>,
}

impl BoundaryLoops {
    /// Creates an empty set of loops.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of loops.
    #[inline]
    pub fn len(&self) -> usize {
        self.loops.len()
    }

    /// True when the section has no loop.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }

    /// Iterates the loops in polygon order.
    pub fn iter(&self) -> std::slice::Iter<'_, BoundaryLoop> {
        self.loops.iter()
    }

    /// Loop at position `index`.
    pub fn get(&self, index: usize) -> Option<&BoundaryLoop> {
        self.loops.get(index)
    }

    /// Flattens the loops into one path, with a break after every loop.
    pub fn path_elements(&self) -> Vec<PathElement> {
        let mut elements = Vec::with_capacity(self.loops.iter().map(|l| l.len() + 1).sum());
        self.extend_path(&mut elements);
        elements
    }

    pub(crate) fn extend_path(&self, out: &mut Vec<PathElement>) {
        for boundary in &self.loops {
            out.extend(boundary.points.iter().copied().map(PathElement::Point));
            out.push(PathElement::Break);
        }
    }

    /// Shifts every point by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        for boundary in &mut self.loops {
            boundary.translate(offset);
        }
    }
}

impl<'a> IntoIterator for &'a BoundaryLoops {
    type Item = &'a BoundaryLoop;
    type IntoIter = std::slice::Iter<'a, BoundaryLoop>;

    fn into_iter(self) -> Self::IntoIter {
        self.loops.iter()
    }
}

/// Builds the closed outline of every non-degenerate polygon.
///
/// `vertices` are the section's reconstructed vertices; the partition must
/// have been validated against the same vertex count.
///
/// # Example
///
/// ```rust
/// use fence_mesh::{build_boundary_loops, PolygonPartition};
/// use glam::DVec3;
///
/// let vertices = [DVec3::ZERO, DVec3::X, DVec3::Z];
/// let partition = PolygonPartition::new(&[3], &[0, 1, 2], 3).unwrap();
/// let loops = build_boundary_loops(&partition, &vertices);
/// assert_eq!(loops.get(0).unwrap().points(), &[DVec3::ZERO, DVec3::X, DVec3::Z, DVec3::ZERO]);
/// ```
pub fn build_boundary_loops(partition: &PolygonPartition<'_>, vertices: &[DVec3]) -> BoundaryLoops {
    let loops = partition
        .runs()
        .filter(|run| !run.is_degenerate())
        .map(|run| {
            let mut points = Vec::with_capacity(run.len() + 1);
            points.extend(run.indices.iter().map(|&i| vertices[i as usize]));
            points.push(vertices[run.indices[0] as usize]);
            BoundaryLoop {
                polygon: run.polygon,
                points,
            }
        })
        .collect();
    BoundaryLoops { loops }
}

#[cfg(test)]
mod tests;
