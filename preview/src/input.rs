//! Pointer input model: the drag gesture state machine and rotation state.
//!
//! The preview supports a single gesture: drag anywhere on the canvas to
//! rotate the knife. Horizontal drag spins the knife around the canvas
//! center; vertical drag feeds a cosmetic wobble. Rotation accumulates
//! without bounds and resets only when the engine is recreated.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// A point in screen space (CSS pixels, canvas-local).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Accumulated drag deltas consumed by the renderer.
///
/// `x` accumulates vertical drag (wobble input), `y` accumulates horizontal
/// drag (spin input). Both are unbounded signed values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
}

/// The active pointer gesture, if any.
#[derive(Debug, Clone, Copy, Default)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is rotating the knife by dragging.
    Dragging {
        /// Screen-space position of the previous pointer event, used to
        /// compute the incremental delta.
        last_screen: Point,
    },
}

impl DragState {
    /// Whether a drag gesture is currently active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
