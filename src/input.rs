//! Input surface: decoding the drag-and-drop payload.
//!
//! A drag gesture carries a single string tag naming the shape icon being
//! dragged. The host reads the tag off the drop event and forwards it here
//! untouched.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::ShapeKind;

/// Decode a drag payload into a shape kind.
///
/// Only the three known tags create shapes. An empty, absent, or
/// unrecognized payload yields `None` and the drop is ignored.
#[must_use]
pub fn parse_drag_payload(raw: &str) -> Option<ShapeKind> {
    ShapeKind::known_from_tag(raw.trim())
}
