//! Records exchanged with the grid-cutting collaborator.
//!
//! These mirror the logical shape of a cut-along-polyline response. Field
//! names on the wire follow the service (`startUtmXY`, `vertexArrayUZ`, ...);
//! the Rust names are snake_case.

use std::collections::BTreeMap;

use config::constants::{UZ_COMPONENTS, XY_COMPONENTS};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// One linear segment of the fence polyline, as cut by the service.
///
/// Vertices are stored as flat `(u, z)` pairs where `u` is the distance along
/// the segment from `start_point` and `z` is elevation. Polygons are described
/// by `vertices_per_polygon` and a flat run of pair indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "startUtmXY")]
    pub start_point: DVec2,
    #[serde(rename = "endUtmXY")]
    pub end_point: DVec2,
    #[serde(rename = "vertexArrayUZ")]
    pub vertex_array_uz: Vec<f64>,
    #[serde(rename = "verticesPerPolygonArr")]
    pub vertices_per_polygon: Vec<u32>,
    #[serde(rename = "polyIndicesArr")]
    pub polygon_vertex_indices: Vec<u32>,
}

impl Section {
    pub fn new(
        start_point: DVec2,
        end_point: DVec2,
        vertex_array_uz: Vec<f64>,
        vertices_per_polygon: Vec<u32>,
        polygon_vertex_indices: Vec<u32>,
    ) -> Self {
        Self {
            start_point,
            end_point,
            vertex_array_uz,
            vertices_per_polygon,
            polygon_vertex_indices,
        }
    }

    /// Number of complete `(u, z)` pairs in the vertex array.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_array_uz.len() / UZ_COMPONENTS
    }

    #[inline]
    pub fn polygon_count(&self) -> usize {
        self.vertices_per_polygon.len()
    }

    /// Planar length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.end_point - self.start_point).length()
    }
}

/// Fence polyline in flat `[x0, y0, x1, y1, ...]` UTM form, as sent in the
/// cut request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FencePolyline {
    #[serde(rename = "fencePolylineUtmXY")]
    pub utm_xy: Vec<f64>,
}

impl FencePolyline {
    pub fn new(utm_xy: Vec<f64>) -> Self {
        Self { utm_xy }
    }

    /// Builds a polyline from points.
    pub fn from_points(points: &[DVec2]) -> Self {
        Self {
            utm_xy: points.iter().flat_map(|p| [p.x, p.y]).collect(),
        }
    }

    /// Number of complete points. A trailing lone coordinate is ignored.
    pub fn point_count(&self) -> usize {
        self.utm_xy.len() / XY_COMPONENTS
    }

    /// True when the flat array holds whole `(x, y)` pairs.
    pub fn is_well_formed(&self) -> bool {
        self.utm_xy.len() % XY_COMPONENTS == 0
    }

    pub fn points(&self) -> Vec<DVec2> {
        self.utm_xy
            .chunks_exact(XY_COMPONENTS)
            .map(|xy| DVec2::new(xy[0], xy[1]))
            .collect()
    }

    /// Number of linear segments, which is the number of sections a full cut
    /// would return.
    pub fn expected_section_count(&self) -> usize {
        self.point_count().saturating_sub(1)
    }
}

/// Timing report attached to a cut response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeElapsedInfo {
    #[serde(rename = "totalTimeElapsedMs")]
    pub total_ms: u32,
    #[serde(rename = "namedEventsAndTimeElapsedMs", default)]
    pub named_events_ms: BTreeMap<String, u32>,
}

/// The complete payload handed over by the grid-cutting collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CutResponse {
    #[serde(rename = "fenceMeshSections")]
    pub sections: Vec<Section>,
    #[serde(rename = "timeElapsedInfo", default)]
    pub time_elapsed: Option<TimeElapsedInfo>,
}

impl CutResponse {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            time_elapsed: None,
        }
    }

    pub fn with_time_elapsed(mut self, info: TimeElapsedInfo) -> Self {
        self.time_elapsed = Some(info);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_section() -> Section {
        Section::new(
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            vec![0.0, 0.0, 5.0, 0.0, 10.0, 0.0, 5.0, 3.0],
            vec![4],
            vec![0, 1, 2, 3],
        )
    }

    #[test]
    fn test_section_counts() {
        let section = quad_section();
        assert_eq!(section.vertex_count(), 4);
        assert_eq!(section.polygon_count(), 1);
        assert_eq!(section.length(), 10.0);
    }

    #[test]
    fn test_vertex_count_ignores_trailing_scalar() {
        let mut section = quad_section();
        section.vertex_array_uz.push(1.0);
        assert_eq!(section.vertex_count(), 4);
    }

    #[test]
    fn test_polyline_expected_sections() {
        let polyline = FencePolyline::new(vec![
            456221.0, 7.32113e6, 457150.0, 7.32106e6, 456885.0, 7.32176e6,
        ]);
        assert!(polyline.is_well_formed());
        assert_eq!(polyline.point_count(), 3);
        assert_eq!(polyline.expected_section_count(), 2);
    }

    #[test]
    fn test_polyline_degenerate_counts() {
        assert_eq!(FencePolyline::default().expected_section_count(), 0);
        let single = FencePolyline::new(vec![1.0, 2.0]);
        assert_eq!(single.expected_section_count(), 0);
        let odd = FencePolyline::new(vec![1.0, 2.0, 3.0]);
        assert!(!odd.is_well_formed());
        assert_eq!(odd.point_count(), 1);
    }

    #[test]
    fn test_polyline_points_roundtrip() {
        let points = vec![DVec2::new(1.0, 2.0), DVec2::new(3.0, 4.0)];
        let polyline = FencePolyline::from_points(&points);
        assert_eq!(polyline.utm_xy, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(polyline.points(), points);
    }

    #[test]
    fn test_deserialize_wire_names() {
        let json = r#"{
            "fenceMeshSections": [{
                "startUtmXY": [0.0, 0.0],
                "endUtmXY": [10.0, 0.0],
                "vertexArrayUZ": [0.0, 0.0, 5.0, 0.0, 10.0, 0.0, 5.0, 3.0],
                "verticesPerPolygonArr": [4],
                "polyIndicesArr": [0, 1, 2, 3]
            }],
            "timeElapsedInfo": {
                "totalTimeElapsedMs": 12,
                "namedEventsAndTimeElapsedMs": { "cut": 9 }
            }
        }"#;
        let response: CutResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.sections, vec![quad_section()]);
        let timing = response.time_elapsed.unwrap();
        assert_eq!(timing.total_ms, 12);
        assert_eq!(timing.named_events_ms.get("cut"), Some(&9));
    }

    #[test]
    fn test_deserialize_without_timing() {
        let json = r#"{ "fenceMeshSections": [] }"#;
        let response: CutResponse = serde_json::from_str(json).unwrap();
        assert!(response.sections.is_empty());
        assert!(response.time_elapsed.is_none());
    }
}
