//! Shared numeric constants for the shapepad crate.

// ── Surface ─────────────────────────────────────────────────────

/// Logical drawing surface width in CSS pixels.
pub const CANVAS_WIDTH: u32 = 800;

/// Logical drawing surface height in CSS pixels.
pub const CANVAS_HEIGHT: u32 = 500;

// ── Hit-testing ─────────────────────────────────────────────────

/// Removal radius in pixels around a double-click. The same constant applies
/// to every shape kind; it is not a per-kind exact geometric bound.
pub const HIT_RADIUS: f64 = 30.0;

// ── Shape geometry ──────────────────────────────────────────────

/// Circle radius in pixels, centered on the placement point.
pub const CIRCLE_RADIUS: f64 = 20.0;

/// Square side length in pixels, centered on the placement point.
pub const SQUARE_SIDE: f64 = 40.0;

/// Horizontal distance from a triangle's placement point to each base corner.
pub const TRIANGLE_HALF_BASE: f64 = 25.0;

/// Vertical rise from a triangle's placement point to its apex.
pub const TRIANGLE_APEX_RISE: f64 = 25.0;

/// Vertical drop from a triangle's placement point to its base.
pub const TRIANGLE_BASE_DROP: f64 = 20.0;

// ── Style ───────────────────────────────────────────────────────

/// Fill color shared by every shape kind.
pub const SHAPE_FILL: &str = "#333";

// ── Export ──────────────────────────────────────────────────────

/// File name stem used when the user leaves the title blank.
pub const DEFAULT_EXPORT_STEM: &str = "painting";
