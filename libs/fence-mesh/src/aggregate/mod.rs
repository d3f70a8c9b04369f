//! # Result Aggregation
//!
//! Builds every section of a cut response and collects the results in input
//! order. Slot `i` of a [`FenceGeometry`] always belongs to input section `i`,
//! whether it built or failed.
//!
//! ## Failure Policy
//!
//! - [`BatchPolicy::Skip`]: a failing section keeps its error in its slot,
//!   is logged, and is counted in [`FenceGeometry::skipped_count`]
//! - [`BatchPolicy::Abort`]: the first failing section in input order fails
//!   the whole batch

use fence_types::{CutResponse, FencePolyline, Section, TimeElapsedInfo};
use glam::{DVec2, DVec3};
use log::{info, warn};
use rayon::prelude::*;

use crate::boundary::BoundaryLoops;
use crate::error::{FenceMeshError, FenceMeshResult};
use crate::mesh::Mesh;
use crate::options::{BatchPolicy, DisplayOrigin, MeshOptions};
use crate::section::{build_section_geometry, SectionGeometry};

/// Disagreement between the polyline's segment count and the sections
/// returned for it.
///
/// The service leaves out segments that miss the grid, so this is reported
/// rather than raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCountMismatch {
    /// Segment count of the polyline
    pub expected: usize,
    /// Number of sections returned
    pub actual: usize,
}

/// Per-section results of a whole fence, index-aligned with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct FenceGeometry {
    entries: Vec<FenceMeshResult<SectionGeometry>>,
    display_origin: DVec2,
}

impl FenceGeometry {
    /// Number of input sections.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no section was supplied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Result slot for every input section.
    #[inline]
    pub fn entries(&self) -> &[FenceMeshResult<SectionGeometry>] {
        &self.entries
    }

    /// Geometry of input section `index`, if it built.
    pub fn get(&self, index: usize) -> Option<&SectionGeometry> {
        self.entries.get(index).and_then(|entry| entry.as_ref().ok())
    }

    /// Successfully built sections, in input order.
    pub fn geometries(&self) -> impl Iterator<Item = &SectionGeometry> + '_ {
        self.entries.iter().filter_map(|entry| entry.as_ref().ok())
    }

    /// Errors of skipped sections, in input order.
    pub fn errors(&self) -> impl Iterator<Item = &FenceMeshError> + '_ {
        self.entries.iter().filter_map(|entry| entry.as_ref().err())
    }

    /// Number of sections that built.
    pub fn built_count(&self) -> usize {
        self.geometries().count()
    }

    /// Number of sections that failed and were skipped.
    pub fn skipped_count(&self) -> usize {
        self.errors().count()
    }

    /// Planar point subtracted from every output coordinate.
    #[inline]
    pub fn display_origin(&self) -> DVec2 {
        self.display_origin
    }

    /// Consumes the batch into renderer pairs. Skipped sections are `None`.
    pub fn into_pairs(self) -> Vec<Option<(Mesh, BoundaryLoops)>> {
        self.entries
            .into_iter()
            .map(|entry| entry.ok().map(SectionGeometry::into_pair))
            .collect()
    }

    /// Compares the section count against the polyline the cut was made
    /// along, logging a warning on mismatch.
    pub fn check_section_count(&self, polyline: &FencePolyline) -> Option<SectionCountMismatch> {
        let expected = polyline.expected_section_count();
        let actual = self.entries.len();
        if expected == actual {
            return None;
        }
        warn!("polyline has {expected} segments but {actual} sections were returned");
        Some(SectionCountMismatch { expected, actual })
    }
}

/// Builds every section in input order.
///
/// # Example
///
/// ```rust
/// use fence_mesh::{aggregate_sections, MeshOptions};
/// use fence_types::Section;
/// use glam::DVec2;
///
/// let quad = |start: DVec2, end: DVec2| {
///     let uz = vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
///     Section::new(start, end, uz, vec![4], vec![0, 1, 2, 3])
/// };
/// let sections = [
///     quad(DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0)),
///     quad(DVec2::new(5.0, 5.0), DVec2::new(5.0, 5.0)),
/// ];
/// let fence = aggregate_sections(&sections, &MeshOptions::default()).unwrap();
/// assert_eq!(fence.built_count(), 1);
/// assert_eq!(fence.skipped_count(), 1);
/// ```
pub fn aggregate_sections(
    sections: &[Section],
    options: &MeshOptions,
) -> FenceMeshResult<FenceGeometry> {
    let build = |(index, section): (usize, &Section)| {
        build_section_geometry(index, section, options)
    };

    let mut entries: Vec<FenceMeshResult<SectionGeometry>> =
        if options.use_parallel(sections.len()) {
            sections.par_iter().enumerate().map(build).collect()
        } else {
            sections.iter().enumerate().map(build).collect()
        };

    if options.batch_policy == BatchPolicy::Abort {
        if let Some(err) = entries.iter().find_map(|entry| entry.as_ref().err()) {
            return Err(err.clone());
        }
    }

    let display_origin = resolve_display_origin(options.display_origin, sections);
    if display_origin != DVec2::ZERO {
        let offset = DVec3::new(-display_origin.x, -display_origin.y, 0.0);
        for geometry in entries.iter_mut().filter_map(|entry| entry.as_mut().ok()) {
            geometry.mesh.translate(offset);
            geometry.loops.translate(offset);
        }
    }

    let fence = FenceGeometry {
        entries,
        display_origin,
    };
    for err in fence.errors() {
        warn!("skipping {err}");
    }
    info!(
        "built {} of {} fence sections ({} skipped)",
        fence.built_count(),
        fence.len(),
        fence.skipped_count()
    );
    Ok(fence)
}

/// Builds the geometry of a whole cut response, logging the service timing
/// report when present.
pub fn build_fence_geometry(
    response: &CutResponse,
    options: &MeshOptions,
) -> FenceMeshResult<FenceGeometry> {
    if let Some(timing) = &response.time_elapsed {
        log_timing(timing);
    }
    info!("received {} fence mesh sections", response.sections.len());
    aggregate_sections(&response.sections, options)
}

fn log_timing(timing: &TimeElapsedInfo) {
    info!("grid cut took {} ms", timing.total_ms);
    for (event, ms) in &timing.named_events_ms {
        info!("  {event}: {ms} ms");
    }
}

fn resolve_display_origin(origin: DisplayOrigin, sections: &[Section]) -> DVec2 {
    match origin {
        DisplayOrigin::None => DVec2::ZERO,
        DisplayOrigin::FirstSectionStart => sections
            .first()
            .map_or(DVec2::ZERO, |section| section.start_point),
        DisplayOrigin::Explicit(point) => point,
    }
}
