//! Shared numeric constants for the preview crate.

// ── Canvas ──────────────────────────────────────────────────────

/// Logical canvas width in pixels.
pub const CANVAS_WIDTH: f64 = 500.0;

/// Logical canvas height in pixels.
pub const CANVAS_HEIGHT: f64 = 400.0;

/// Horizontal canvas center; the knife is drawn in coordinates local to this point.
pub const CENTER_X: f64 = 250.0;

/// Vertical canvas center.
pub const CENTER_Y: f64 = 200.0;

/// Outer radius of the background radial gradient.
pub const BACKGROUND_RADIUS: f64 = 200.0;

// ── Interaction ─────────────────────────────────────────────────

/// Radians of view rotation per horizontal drag pixel.
pub const ROTATION_PER_PIXEL: f64 = 0.01;

/// Amplitude of the cosmetic vertical wobble tied to vertical drag.
pub const WOBBLE_AMPLITUDE: f64 = 0.05;

// ── Blade ───────────────────────────────────────────────────────

/// Reference blade length in cm; a 20cm blade renders at unit horizontal scale.
pub const REFERENCE_LENGTH_CM: f64 = 20.0;

/// Number of curved strokes in the damascus pattern overlay.
pub const DAMASCUS_STROKES: u32 = 8;

/// Horizontal spacing between damascus strokes.
pub const DAMASCUS_SPACING: f64 = 15.0;

// ── Handle ──────────────────────────────────────────────────────

/// Handle rectangle: left edge.
pub const HANDLE_X: f64 = -30.0;

/// Handle rectangle: top edge.
pub const HANDLE_Y: f64 = -12.0;

/// Handle rectangle: width.
pub const HANDLE_WIDTH: f64 = 100.0;

/// Handle rectangle: height.
pub const HANDLE_HEIGHT: f64 = 24.0;

/// Brightness lift applied at the handle gradient midpoint.
pub const HANDLE_HIGHLIGHT: i16 = 30;

/// Number of grain lines drawn on a wood handle.
pub const GRAIN_LINES: u32 = 5;

/// Horizontal spacing between wood grain lines.
pub const GRAIN_SPACING: f64 = 20.0;

/// Pommel cap center X (the far end of the handle).
pub const POMMEL_X: f64 = 70.0;

/// Pommel cap radius.
pub const POMMEL_RADIUS: f64 = 8.0;

// ── Engraving ───────────────────────────────────────────────────

/// Tilt applied to blade-face engraving text, in radians.
pub const ENGRAVING_TILT: f64 = -std::f64::consts::PI / 20.0;

/// Engraving position for handle placement (local coordinates).
pub const HANDLE_ENGRAVING_X: f64 = 20.0;

/// Engraving baseline for handle placement.
pub const HANDLE_ENGRAVING_Y: f64 = 5.0;

/// Floor for the engraving font size in pixels.
pub const MIN_ENGRAVING_FONT_PX: f64 = 10.0;

/// Engraving font size at the reference blade length.
pub const BASE_ENGRAVING_FONT_PX: f64 = 14.0;

// ── Shadow ──────────────────────────────────────────────────────

/// Drop shadow color applied inside the transformed context.
pub const SHADOW_COLOR: &str = "rgba(0,0,0,0.3)";

/// Drop shadow blur radius.
pub const SHADOW_BLUR: f64 = 15.0;

/// Drop shadow vertical offset.
pub const SHADOW_OFFSET_Y: f64 = 10.0;
