//! Document model: shapes, their kinds, and the in-memory store.
//!
//! This module defines the core data types that describe what is on the
//! drawing surface (`Shape`, `ShapeKind`), the lenient JSON reader used by
//! import (`Shape::from_json`), and the runtime store that owns the ordered
//! shape sequence (`ShapeStore`).
//!
//! Data flows into this layer from the input engine (drops) and from the
//! serializer (imported documents). The renderer reads from `ShapeStore` via
//! `all` and paints the sequence in order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Serialize, Serializer};

use crate::geom::Point;

/// Unique identifier for a placed shape. Assigned from a monotonic counter,
/// never displayed to the user.
pub type ShapeId = i64;

/// The kind of a placed shape.
///
/// The known set is closed (`circle`, `square`, `triangle`). Imported
/// documents may carry any tag; unrecognized tags are kept verbatim as
/// [`ShapeKind::Other`] so the document survives a later export unchanged.
/// `Other` shapes occupy a slot in the store and count toward the total, but
/// leave no visible mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeKind {
    /// Filled disc centered on the placement point.
    Circle,
    /// Filled square centered on the placement point.
    Square,
    /// Filled isosceles triangle, apex above the placement point.
    Triangle,
    /// Unrecognized tag carried through from an imported document.
    Other(String),
}

impl ShapeKind {
    /// The wire tag for this kind (`"circle"`, `"square"`, `"triangle"`, or
    /// the carried tag for `Other`).
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Other(tag) => tag,
        }
    }

    /// Decode one of the three known tags. Anything else is `None`.
    #[must_use]
    pub fn known_from_tag(tag: &str) -> Option<Self> {
        match tag {
            "circle" => Some(Self::Circle),
            "square" => Some(Self::Square),
            "triangle" => Some(Self::Triangle),
            _ => None,
        }
    }

    /// Decode any tag, preserving unrecognized ones as [`ShapeKind::Other`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        Self::known_from_tag(tag).unwrap_or_else(|| Self::Other(tag.to_owned()))
    }
}

impl Serialize for ShapeKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.tag())
    }
}

/// A placed shape as stored in the document and in the export file.
///
/// These are exactly the exported fields, in wire order. A shape's fields are
/// never mutated in place; shapes are created whole and removed whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    /// Unique identifier, used only for identity.
    pub id: ShapeId,
    /// Shape kind; `"type"` on the wire.
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    /// Placement point x, in canvas pixels from the left edge.
    pub x: f64,
    /// Placement point y, in canvas pixels from the top edge.
    pub y: f64,
}

impl Shape {
    /// The shape's placement point.
    #[must_use]
    pub fn at(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Read a shape out of an arbitrary JSON value.
    ///
    /// Import performs no per-element validation: missing or ill-typed fields
    /// fall back to defaults (`id` 0, empty `Other` kind, origin placement),
    /// and the element still occupies a store slot.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        Self {
            id: value
                .get("id")
                .and_then(serde_json::Value::as_i64)
                .unwrap_or(0),
            kind: ShapeKind::from_tag(
                value
                    .get("type")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or(""),
            ),
            x: value
                .get("x")
                .and_then(serde_json::Value::as_f64)
                .unwrap_or(0.0),
            y: value
                .get("y")
                .and_then(serde_json::Value::as_f64)
                .unwrap_or(0.0),
        }
    }
}

/// Per-kind shape tally.
///
/// `circle + square + triangle <= total`; the difference is shapes with
/// unrecognized kinds from an imported document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeCounts {
    pub circle: usize,
    pub square: usize,
    pub triangle: usize,
    pub total: usize,
}

/// In-memory store of placed shapes.
///
/// The sequence is ordered; order determines paint order only (later shapes
/// draw over earlier ones). The store is the sole source of truth for what is
/// drawn.
pub struct ShapeStore {
    shapes: Vec<Shape>,
    next_id: ShapeId,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: Vec::new(), next_id: 1 }
    }

    /// Append a new shape with a freshly generated id. Existing entries are
    /// never reordered.
    pub fn add(&mut self, kind: ShapeKind, at: Point) -> Shape {
        let shape = Shape { id: self.next_id, kind, x: at.x, y: at.y };
        self.next_id += 1;
        self.shapes.push(shape.clone());
        shape
    }

    /// Remove every shape matching the predicate, keeping the rest in order.
    /// Returns the number removed.
    pub fn remove_where<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(&Shape) -> bool,
    {
        let before = self.shapes.len();
        self.shapes.retain(|shape| !predicate(shape));
        before - self.shapes.len()
    }

    /// Discard the current sequence and install a caller-provided one
    /// verbatim. The id counter advances past the highest installed id so
    /// later `add` calls keep ids unique.
    pub fn replace_all(&mut self, shapes: Vec<Shape>) {
        let max_id = shapes.iter().map(|shape| shape.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id.saturating_add(1));
        self.shapes = shapes;
    }

    /// The current ordered sequence.
    #[must_use]
    pub fn all(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the store contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Tally shapes by kind.
    #[must_use]
    pub fn counts(&self) -> ShapeCounts {
        let mut counts = ShapeCounts { total: self.shapes.len(), ..ShapeCounts::default() };
        for shape in &self.shapes {
            match &shape.kind {
                ShapeKind::Circle => counts.circle += 1,
                ShapeKind::Square => counts.square += 1,
                ShapeKind::Triangle => counts.triangle += 1,
                ShapeKind::Other(_) => {}
            }
        }
        counts
    }
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}
