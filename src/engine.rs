//! Top-level engine: the state container and the wasm boundary.
//!
//! [`EngineCore`] owns the shape store and exposes explicit mutation methods;
//! each returns an [`Action`] describing what changed so the caller can decide
//! whether a redraw is due. [`Engine`] is the `#[wasm_bindgen]` wrapper that
//! binds a core to a browser canvas element and redraws after every mutation.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, HIT_RADIUS};
use crate::doc::{Shape, ShapeCounts, ShapeStore};
use crate::geom::Point;
use crate::hit;
use crate::input;
use crate::render;
use crate::ser::{self, ImportError};

/// What a mutation did to the store. `None` means the store is unchanged and
/// no redraw is needed.
#[derive(Debug, Clone)]
pub enum Action {
    None,
    ShapeAdded(Shape),
    ShapesRemoved { count: usize },
    StoreReplaced { count: usize },
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies. Handlers run on the single browser event loop thread, one
/// gesture at a time; there is no other mutation path into the store.
#[derive(Default)]
pub struct EngineCore {
    store: ShapeStore,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Gestures ---

    /// A drag-and-drop completed over the canvas at `at` (canvas-relative
    /// pixels). A recognized payload appends a shape; anything else is a
    /// no-op.
    pub fn on_drop(&mut self, payload: &str, at: Point) -> Action {
        let Some(kind) = input::parse_drag_payload(payload) else {
            return Action::None;
        };
        Action::ShapeAdded(self.store.add(kind, at))
    }

    /// A double-click landed at `at`. Every shape within [`HIT_RADIUS`] is
    /// removed at once.
    pub fn on_double_click(&mut self, at: Point) -> Action {
        let hits = hit::shapes_near(at, self.store.all(), HIT_RADIUS);
        if hits.is_empty() {
            return Action::None;
        }
        let count = self.store.remove_where(|shape| hits.contains(&shape.id));
        Action::ShapesRemoved { count }
    }

    // --- Documents ---

    /// Wholesale-replace the store from an imported document.
    ///
    /// # Errors
    ///
    /// Propagates [`ImportError`]; the store is untouched on failure.
    pub fn import_document(&mut self, text: &str) -> Result<Action, ImportError> {
        let shapes = ser::import_document(text)?;
        let count = shapes.len();
        self.store.replace_all(shapes);
        log::info!("imported document with {count} shapes");
        Ok(Action::StoreReplaced { count })
    }

    /// Serialize the current store for download. Read-only.
    ///
    /// # Errors
    ///
    /// Returns `Err` if JSON serialization fails.
    pub fn export_document(&self) -> serde_json::Result<String> {
        ser::export_document(self.store.all())
    }

    // --- Queries ---

    /// The current ordered shape sequence.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        self.store.all()
    }

    /// Number of shapes in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the store contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Per-kind shape tally.
    #[must_use]
    pub fn counts(&self) -> ShapeCounts {
        self.store.counts()
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the 2D context of the
/// browser canvas element.
#[wasm_bindgen]
pub struct Engine {
    ctx: CanvasRenderingContext2d,
    core: EngineCore,
}

#[wasm_bindgen]
impl Engine {
    /// Create a new engine bound to the given canvas element. The element is
    /// sized to the fixed logical surface.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Engine, JsValue> {
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx, core: EngineCore::new() })
    }

    // --- Gestures ---

    /// Host drop handler. `x`/`y` are canvas-relative CSS pixels, computed by
    /// the host from the drop event and the element's bounding box.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn on_drop(&mut self, payload: &str, x: f64, y: f64) -> Result<(), JsValue> {
        let action = self.core.on_drop(payload, Point::new(x, y));
        self.redraw_if_mutated(&action)
    }

    /// Host double-click handler.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn on_double_click(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        let action = self.core.on_double_click(Point::new(x, y));
        self.redraw_if_mutated(&action)
    }

    // --- Documents ---

    /// Import a document read from a user-selected file.
    ///
    /// # Errors
    ///
    /// Returns `Err` carrying the user-visible message for the host to show
    /// as a blocking notification. The store is untouched on failure.
    pub fn import_json(&mut self, text: &str) -> Result<(), JsValue> {
        let action = match self.core.import_document(text) {
            Ok(action) => action,
            Err(err) => {
                log::warn!("import rejected: {err}");
                return Err(JsValue::from_str(&err.to_string()));
            }
        };
        self.redraw_if_mutated(&action)
    }

    /// Serialize the current store for the host to download.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn export_json(&self) -> Result<String, JsValue> {
        self.core
            .export_document()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.ctx, self.core.shapes())
    }

    // --- Queries ---

    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.core.len()
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.core.counts().circle
    }

    #[must_use]
    pub fn square_count(&self) -> usize {
        self.core.counts().square
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.core.counts().triangle
    }

    fn redraw_if_mutated(&self, action: &Action) -> Result<(), JsValue> {
        if matches!(action, Action::None) {
            return Ok(());
        }
        self.render()
    }
}

/// File name for an export, derived from the title field. Exposed for the
/// host's download link.
#[wasm_bindgen]
#[must_use]
pub fn export_file_name(title: &str) -> String {
    ser::export_file_name(title)
}
