use super::*;

fn grid_vertices() -> Vec<DVec3> {
    vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(5.0, 0.0, 0.0),
        DVec3::new(10.0, 0.0, 0.0),
        DVec3::new(5.0, 0.0, 3.0),
        DVec3::new(10.0, 0.0, 3.0),
    ]
}

#[test]
fn test_single_quad_loop() {
    let vertices = grid_vertices();
    let partition = PolygonPartition::new(&[4], &[0, 1, 2, 3], 5).unwrap();
    let loops = build_boundary_loops(&partition, &vertices);
    assert_eq!(loops.len(), 1);
    let boundary = loops.get(0).unwrap();
    assert_eq!(boundary.polygon(), 0);
    assert!(boundary.is_closed());
    assert_eq!(
        boundary.points(),
        &[
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(5.0, 0.0, 0.0),
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::new(5.0, 0.0, 3.0),
            DVec3::new(0.0, 0.0, 0.0),
        ]
    );
}

#[test]
fn test_loops_follow_index_order() {
    let vertices = grid_vertices();
    let partition = PolygonPartition::new(&[3], &[4, 2, 3], 5).unwrap();
    let loops = build_boundary_loops(&partition, &vertices);
    assert_eq!(
        loops.get(0).unwrap().points(),
        &[vertices[4], vertices[2], vertices[3], vertices[4]]
    );
}

#[test]
fn test_degenerate_polygons_skipped_without_misalignment() {
    let vertices = grid_vertices();
    let partition = PolygonPartition::new(&[2, 3, 1, 3], &[0, 1, 1, 2, 4, 3, 2, 4, 3], 5).unwrap();
    let loops = build_boundary_loops(&partition, &vertices);
    assert_eq!(loops.len(), 2);

    let first = loops.get(0).unwrap();
    assert_eq!(first.polygon(), 1);
    assert_eq!(first.points(), &[vertices[1], vertices[2], vertices[4], vertices[1]]);

    let second = loops.get(1).unwrap();
    assert_eq!(second.polygon(), 3);
    assert_eq!(second.points(), &[vertices[2], vertices[4], vertices[3], vertices[2]]);
}

#[test]
fn test_every_loop_is_closed() {
    let vertices = grid_vertices();
    let indices = [0, 1, 3, 1, 2, 4, 3, 0, 1, 2, 4, 3];
    let partition = PolygonPartition::new(&[3, 4, 5], &indices, 5).unwrap();
    let loops = build_boundary_loops(&partition, &vertices);
    assert_eq!(loops.len(), 3);
    for boundary in &loops {
        assert!(boundary.is_closed());
        assert_eq!(boundary.points().first(), boundary.points().last());
    }
}

#[test]
fn test_path_elements_break_after_each_loop() {
    let vertices = grid_vertices();
    let partition = PolygonPartition::new(&[3, 3], &[0, 1, 3, 1, 2, 4], 5).unwrap();
    let elements = build_boundary_loops(&partition, &vertices).path_elements();
    assert_eq!(elements.len(), 2 * (4 + 1));
    assert!(elements[4].is_break());
    assert!(elements[9].is_break());
    assert_eq!(elements.iter().filter(|e| e.is_break()).count(), 2);
    // Points on both sides of the first break belong to different polygons
    assert_eq!(elements[3].point(), Some(vertices[0]));
    assert_eq!(elements[5].point(), Some(vertices[1]));
}

#[test]
fn test_translate_shifts_points() {
    let vertices = grid_vertices();
    let partition = PolygonPartition::new(&[3], &[0, 1, 3], 5).unwrap();
    let mut loops = build_boundary_loops(&partition, &vertices);
    loops.translate(DVec3::new(-5.0, 1.0, 0.0));
    assert_eq!(loops.get(0).unwrap().points()[0], DVec3::new(-5.0, 1.0, 0.0));
    assert!(loops.get(0).unwrap().is_closed());
}

#[test]
fn test_no_loops_yields_empty_path() {
    let loops = BoundaryLoops::new();
    assert!(loops.is_empty());
    assert!(loops.path_elements().is_empty());
}
