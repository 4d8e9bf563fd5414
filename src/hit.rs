//! Hit-testing: which shapes qualify for removal around a click point.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{Shape, ShapeId};
use crate::geom::Point;

/// Ids of every shape whose placement point lies within `radius` of `at`
/// (Euclidean, inclusive), in store order.
///
/// The radius is the same for every kind regardless of its drawn size, and a
/// double-click removes every hit at once rather than only the nearest.
#[must_use]
pub fn shapes_near(at: Point, shapes: &[Shape], radius: f64) -> Vec<ShapeId> {
    shapes
        .iter()
        .filter(|shape| shape.at().distance_to(at) <= radius)
        .map(|shape| shape.id)
        .collect()
}
