use super::*;
use nalgebra::vector;

fn e(x0: f64, y0: f64, x1: f64, y1: f64) -> Edge {
    Edge::new(vector![x0, y0], vector![x1, y1])
}

#[test]
fn cross_sign_follows_turn_direction() {
    let east = vector![1.0, 0.0];
    let north = vector![0.0, 1.0];
    assert!((cross(east, north) - 1.0).abs() < 1e-12);
    assert!((cross(north, east) + 1.0).abs() < 1e-12);
    assert_eq!(cross(east, east * 3.0), 0.0);
}

#[test]
fn edge_length_is_euclidean() {
    assert!((edge_length(&e(1.0, 1.0, 4.0, 5.0)) - 5.0).abs() < 1e-12);
    assert_eq!(edge_length(&e(2.0, 2.0, 2.0, 2.0)), 0.0);
}

#[test]
fn point_on_segment_needs_line_and_box() {
    let tol = Tolerance::default();
    let seg = e(0.0, 0.0, 4.0, 4.0);
    assert!(point_on_segment(vector![2.0, 2.0], &seg, tol));
    // endpoints are inclusive
    assert!(point_on_segment(vector![0.0, 0.0], &seg, tol));
    assert!(point_on_segment(vector![4.0, 4.0], &seg, tol));
    // on the line but past the end
    assert!(!point_on_segment(vector![5.0, 5.0], &seg, tol));
    // inside the box but off the line
    assert!(!point_on_segment(vector![1.0, 3.0], &seg, tol));
}

#[test]
fn point_on_segment_tolerance_window() {
    let seg = e(0.0, 0.0, 10.0, 0.0);
    // cross = 10 * dy
    assert!(point_on_segment(vector![5.0, 5e-11], &seg, Tolerance::new(1e-9)));
    assert!(!point_on_segment(vector![5.0, 5e-9], &seg, Tolerance::new(1e-9)));
    assert!(point_on_segment(vector![5.0, 5e-9], &seg, Tolerance::new(1e-7)));
}

#[test]
fn colinear_requires_containment_of_second_edge() {
    let tol = Tolerance::default();
    let long = e(0.0, 0.0, 0.0, 10.0);
    let inner = e(0.0, 8.0, 0.0, 2.0);
    assert!(is_colinear(&long, &inner, tol));
    assert!(!is_colinear(&inner, &long, tol));
    // parallel but offset
    assert!(!is_colinear(&long, &e(1.0, 2.0, 1.0, 8.0), tol));
    // touching end to end is not containment
    assert!(!is_colinear(&long, &e(0.0, 10.0, 0.0, 12.0), tol));
}

#[test]
fn same_direction_uses_dot_product() {
    let a = e(0.0, 0.0, 2.0, 0.0);
    assert!(is_same_direction(&a, &e(5.0, 1.0, 9.0, 2.0)));
    assert!(!is_same_direction(&a, &e(2.0, 0.0, 0.0, 0.0)));
    // perpendicular is not "same"
    assert!(!is_same_direction(&a, &e(0.0, 0.0, 0.0, 1.0)));
}

#[test]
fn touches_checks_all_four_endpoints() {
    let tol = Tolerance::default();
    let a = e(0.0, 0.0, 4.0, 0.0);
    assert!(touches(&a, &e(2.0, 0.0, 2.0, 3.0), tol));
    assert!(touches(&e(2.0, 0.0, 2.0, 3.0), &a, tol));
    assert!(!touches(&a, &e(2.0, 1.0, 2.0, 3.0), tol));
}

#[test]
fn segment_intersection_cases() {
    let tol = Tolerance::default();
    assert!(segments_intersect(
        &e(0.0, 0.0, 2.0, 2.0),
        &e(0.0, 2.0, 2.0, 0.0),
        tol
    ));
    assert!(!segments_intersect(
        &e(0.0, 0.0, 1.0, 0.0),
        &e(0.0, 1.0, 1.0, 1.0),
        tol
    ));
    // T-junction counts
    assert!(segments_intersect(
        &e(0.0, 0.0, 2.0, 0.0),
        &e(1.0, 0.0, 1.0, 1.0),
        tol
    ));
}

#[test]
fn signed_area_and_orientation() {
    let ccw = vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 3.0],
        vector![0.0, 3.0],
    ];
    assert!((signed_area(&ccw) - 12.0).abs() < 1e-12);
    assert_eq!(Orientation::of(&ccw), Some(Orientation::CounterClockwise));

    let cw: Vec<_> = ccw.iter().rev().copied().collect();
    assert!((signed_area(&cw) + 12.0).abs() < 1e-12);
    assert_eq!(Orientation::of(&cw), Some(Orientation::Clockwise));
    assert_eq!(Orientation::Clockwise.opposite(), Orientation::CounterClockwise);

    let flat = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]];
    assert_eq!(Orientation::of(&flat), None);
}

#[test]
fn signed_area_survives_large_offsets() {
    let off = vector![2325.55, 21765.5];
    let square: Vec<_> = [
        vector![0.0, 0.0],
        vector![0.1, 0.0],
        vector![0.1, 0.1],
        vector![0.0, 0.1],
    ]
    .iter()
    .map(|p| p + off)
    .collect();
    assert!((signed_area(&square) - 0.01).abs() < 1e-9);
}

#[test]
fn simplicity_check() {
    let tol = Tolerance::default();
    let square = vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ];
    assert!(is_simple(&square, tol));
    let bowtie = vec![
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![1.0, 0.0],
        vector![0.0, 1.0],
    ];
    assert!(!is_simple(&bowtie, tol));
    assert!(!is_simple(&square[..2], tol));
}

#[test]
fn point_location_in_keyhole_ring() {
    let tol = Tolerance::default();
    let ring: Vec<Point> = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (2.0, 1.0), (0.0, 4.0)]
        .iter()
        .map(|&(x, y)| vector![x, y])
        .collect();
    assert_eq!(locate(vector![1.0, 0.5], &ring, tol), Location::Inside);
    assert_eq!(locate(vector![2.0, 3.0], &ring, tol), Location::Outside);
    assert_eq!(locate(vector![5.0, 1.0], &ring, tol), Location::Outside);
    assert_eq!(locate(vector![2.0, 0.0], &ring, tol), Location::Boundary);
    assert_eq!(locate(vector![4.0, 4.0], &ring, tol), Location::Boundary);
}

#[test]
fn scaled_tolerance_grows_with_coordinates() {
    let small = Tolerance::scaled_for(&[vector![0.5, -0.25]]);
    assert_eq!(small.eps, DEFAULT_EPS);
    let big = Tolerance::scaled_for(&[vector![100.0, -20000.0]]);
    assert!((big.eps - DEFAULT_EPS * 20000.0).abs() < 1e-18);
    assert!(big.coincident(vector![1.0, 1.0], vector![1.0 + 1e-6, 1.0]));
    assert!(!small.coincident(vector![1.0, 1.0], vector![1.0 + 1e-6, 1.0]));
}
