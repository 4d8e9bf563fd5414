//! Canvas engine for a drag-and-drop shape sketching pad.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the drawing surface: translating host-forwarded gestures
//! (icon drops, double-clicks) into shape store mutations, hit-testing shapes
//! for removal, serializing the board for export/import, and rendering the
//! scene. The host JavaScript layer is responsible only for wiring DOM events
//! to the [`engine::Engine`], performing the actual file download/read, and
//! surfacing import errors to the user.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | In-memory shape store and shape types |
//! | [`geom`] | Points and distance math |
//! | [`hit`] | Radius hit-testing against placed shapes |
//! | [`input`] | Drag payload decoding |
//! | [`ser`] | Export/import document serialization |
//! | [`render`] | Scene rendering to the 2D context |
//! | [`consts`] | Shared numeric constants (surface size, hit radius, etc.) |

pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod render;
pub mod ser;

use wasm_bindgen::prelude::wasm_bindgen;

/// Module start hook: route `log` macros to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::default());
}
