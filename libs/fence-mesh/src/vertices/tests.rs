use super::*;
use approx::assert_relative_eq;

fn frame(start: DVec2, end: DVec2) -> LocalFrame {
    LocalFrame::try_new(start, end, 1e-12).unwrap()
}

#[test]
fn test_reconstruct_along_x_axis() {
    let f = frame(DVec2::ZERO, DVec2::new(10.0, 0.0));
    let vertices = reconstruct_vertices(&[0.0, 0.0, 5.0, 0.0, 10.0, 0.0, 5.0, 3.0], &f);
    assert_eq!(
        vertices,
        vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(5.0, 0.0, 0.0),
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::new(5.0, 0.0, 3.0),
        ]
    );
}

#[test]
fn test_u_zero_equals_origin() {
    let start = DVec2::new(460877.0, 7.3236e6);
    let f = frame(start, DVec2::new(459279.0, 7.32477e6));
    let vertices = reconstruct_vertices(&[0.0, -1702.125], &f);
    assert_eq!(vertices[0], DVec3::new(start.x, start.y, -1702.125));
}

#[test]
fn test_diagonal_direction() {
    let f = frame(DVec2::new(1.0, 2.0), DVec2::new(4.0, 6.0));
    let vertices = reconstruct_vertices(&[2.5, 7.0], &f);
    assert_relative_eq!(vertices[0].x, 1.0 + 2.5 * 0.6, epsilon = 1e-12);
    assert_relative_eq!(vertices[0].y, 2.0 + 2.5 * 0.8, epsilon = 1e-12);
    assert_eq!(vertices[0].z, 7.0);
}

#[test]
fn test_u_beyond_segment_extrapolates() {
    let f = frame(DVec2::ZERO, DVec2::new(0.0, 1.0));
    let vertices = reconstruct_vertices(&[-2.0, 0.0, 3.0, 0.0], &f);
    assert_eq!(vertices[0], DVec3::new(0.0, -2.0, 0.0));
    assert_eq!(vertices[1], DVec3::new(0.0, 3.0, 0.0));
}

#[test]
fn test_empty_array() {
    let f = frame(DVec2::ZERO, DVec2::X);
    assert!(reconstruct_vertices(&[], &f).is_empty());
}

#[test]
fn test_uz_points_pairs() {
    assert_eq!(
        uz_points(&[1.0, 2.0, 3.0, 4.0]),
        vec![DVec2::new(1.0, 2.0), DVec2::new(3.0, 4.0)]
    );
}
