use super::*;

use crate::doc::ShapeKind;

fn shape_at(id: ShapeId, x: f64, y: f64) -> Shape {
    Shape { id, kind: ShapeKind::Circle, x, y }
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn empty_input_yields_no_hits() {
    assert!(shapes_near(pt(0.0, 0.0), &[], 30.0).is_empty());
}

#[test]
fn shape_inside_radius_is_hit() {
    let shapes = [shape_at(1, 100.0, 100.0)];
    assert_eq!(shapes_near(pt(110.0, 100.0), &shapes, 30.0), [1]);
}

#[test]
fn boundary_distance_is_inclusive() {
    let shapes = [shape_at(1, 130.0, 100.0)];
    assert_eq!(shapes_near(pt(100.0, 100.0), &shapes, 30.0), [1]);
}

#[test]
fn shape_just_outside_radius_is_missed() {
    let shapes = [shape_at(1, 130.5, 100.0)];
    assert!(shapes_near(pt(100.0, 100.0), &shapes, 30.0).is_empty());
}

#[test]
fn every_shape_within_radius_is_hit_not_just_nearest() {
    let shapes = [
        shape_at(1, 100.0, 100.0),
        shape_at(2, 115.0, 100.0),
        shape_at(3, 140.0, 100.0),
    ];
    assert_eq!(shapes_near(pt(100.0, 100.0), &shapes, 30.0), [1, 2]);
}

#[test]
fn hits_come_back_in_store_order() {
    let shapes = [
        shape_at(9, 105.0, 100.0),
        shape_at(2, 95.0, 100.0),
        shape_at(5, 100.0, 110.0),
    ];
    assert_eq!(shapes_near(pt(100.0, 100.0), &shapes, 30.0), [9, 2, 5]);
}

#[test]
fn radius_ignores_shape_kind() {
    let mut triangle = shape_at(1, 120.0, 100.0);
    triangle.kind = ShapeKind::Triangle;
    let mut unknown = shape_at(2, 120.0, 100.0);
    unknown.kind = ShapeKind::Other("hexagon".into());

    let shapes = [triangle, unknown];
    assert_eq!(shapes_near(pt(100.0, 100.0), &shapes, 30.0), [1, 2]);
}

#[test]
fn zero_radius_still_hits_exact_point() {
    let shapes = [shape_at(1, 50.0, 60.0)];
    assert_eq!(shapes_near(pt(50.0, 60.0), &shapes, 0.0), [1]);
    assert!(shapes_near(pt(50.0, 61.0), &shapes, 0.0).is_empty());
}
