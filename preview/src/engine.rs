use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::input::{DragState, Point, Rotation};
use crate::knife::KnifeStyle;
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub style: KnifeStyle,
    pub rotation: Rotation,
    pub drag: DragState,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Replace the rendered knife style. Returns whether a redraw is needed.
    pub fn set_style(&mut self, style: KnifeStyle) -> bool {
        if self.style == style {
            return false;
        }
        self.style = style;
        true
    }

    // --- Input events ---

    /// Begin a drag gesture at the given canvas-local position.
    pub fn on_pointer_down(&mut self, screen_pt: Point) {
        self.drag = DragState::Dragging { last_screen: screen_pt };
    }

    /// Accumulate drag deltas into the rotation. Returns whether a redraw is
    /// needed; moves while no drag is active are no-ops.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> bool {
        let DragState::Dragging { last_screen } = self.drag else {
            return false;
        };
        // Horizontal drag spins (y), vertical drag wobbles (x).
        self.rotation.y += screen_pt.x - last_screen.x;
        self.rotation.x += screen_pt.y - last_screen.y;
        self.drag = DragState::Dragging { last_screen: screen_pt };
        true
    }

    /// End the active drag gesture, if any.
    pub fn on_pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Leaving the canvas ends the gesture exactly like pointer-up.
    pub fn on_pointer_leave(&mut self) {
        self.drag = DragState::Idle;
    }

    // --- Queries ---

    /// The current accumulated rotation.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// The current knife style.
    #[must_use]
    pub fn style(&self) -> &KnifeStyle {
        &self.style
    }
}

/// The full preview engine. Wraps `EngineCore` and owns the canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element, fixing its
    /// backing store to the 500×400 logical size.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);
        Self { canvas, core: EngineCore::new() }
    }

    // --- Delegated data inputs ---

    pub fn set_style(&mut self, style: KnifeStyle) -> bool {
        self.core.set_style(style)
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point) {
        self.core.on_pointer_down(screen_pt);
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> bool {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self) {
        self.core.on_pointer_up();
    }

    pub fn on_pointer_leave(&mut self) {
        self.core.on_pointer_leave();
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or any `Canvas2D` call
    /// fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("canvas context has unexpected type"))?;
        render::draw(&ctx, &self.core.style, self.core.rotation)
    }
}
