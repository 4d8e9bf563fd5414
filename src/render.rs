//! Rendering: draws the full shape scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the shape sequence and produces pixels —
//! it does not mutate any application state.
//!
//! Every draw is a full re-execute: clear the surface, then paint each shape
//! in sequence order. There is no incremental diffing; later shapes simply
//! paint over earlier ones.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    CANVAS_HEIGHT, CANVAS_WIDTH, CIRCLE_RADIUS, SHAPE_FILL, SQUARE_SIDE, TRIANGLE_APEX_RISE,
    TRIANGLE_BASE_DROP, TRIANGLE_HALF_BASE,
};
use crate::doc::{Shape, ShapeKind};

/// Draw the full scene.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, shapes: &[Shape]) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, f64::from(CANVAS_WIDTH), f64::from(CANVAS_HEIGHT));
    ctx.set_fill_style_str(SHAPE_FILL);

    for shape in shapes {
        draw_shape(ctx, shape)?;
    }

    Ok(())
}

fn draw_shape(ctx: &CanvasRenderingContext2d, shape: &Shape) -> Result<(), JsValue> {
    match &shape.kind {
        ShapeKind::Circle => draw_circle(ctx, shape),
        ShapeKind::Square => {
            draw_square(ctx, shape);
            Ok(())
        }
        ShapeKind::Triangle => {
            draw_triangle(ctx, shape);
            Ok(())
        }
        // Unrecognized kinds keep their store slot but leave no mark.
        ShapeKind::Other(_) => Ok(()),
    }
}

fn draw_circle(ctx: &CanvasRenderingContext2d, shape: &Shape) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(shape.x, shape.y, CIRCLE_RADIUS, 0.0, 2.0 * PI)?;
    ctx.fill();
    Ok(())
}

fn draw_square(ctx: &CanvasRenderingContext2d, shape: &Shape) {
    let half = SQUARE_SIDE / 2.0;
    ctx.fill_rect(shape.x - half, shape.y - half, SQUARE_SIDE, SQUARE_SIDE);
}

fn draw_triangle(ctx: &CanvasRenderingContext2d, shape: &Shape) {
    ctx.begin_path();
    ctx.move_to(shape.x, shape.y - TRIANGLE_APEX_RISE);
    ctx.line_to(shape.x - TRIANGLE_HALF_BASE, shape.y + TRIANGLE_BASE_DROP);
    ctx.line_to(shape.x + TRIANGLE_HALF_BASE, shape.y + TRIANGLE_BASE_DROP);
    ctx.close_path();
    ctx.fill();
}
