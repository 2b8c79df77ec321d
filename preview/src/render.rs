//! Rendering: draws the parametric knife preview to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only style and rotation and produces pixels — it does
//! not mutate any application state. Every call is a full repaint; there is
//! no incremental redraw and no animation loop.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::color::lighten;
use crate::consts::{
    BACKGROUND_RADIUS, CANVAS_HEIGHT, CANVAS_WIDTH, CENTER_X, CENTER_Y, DAMASCUS_SPACING,
    DAMASCUS_STROKES, ENGRAVING_TILT, GRAIN_LINES, GRAIN_SPACING, HANDLE_ENGRAVING_X,
    HANDLE_ENGRAVING_Y, HANDLE_HEIGHT, HANDLE_HIGHLIGHT, HANDLE_WIDTH, HANDLE_X, HANDLE_Y,
    POMMEL_RADIUS, POMMEL_X, ROTATION_PER_PIXEL, SHADOW_BLUR, SHADOW_COLOR, SHADOW_OFFSET_Y,
    WOBBLE_AMPLITUDE,
};
use crate::input::Rotation;
use crate::knife::{BladeMaterial, EngravingPosition, HandleMaterial, KnifeKind, KnifeStyle};

/// Damascus pattern stroke color.
const DAMASCUS_STROKE: &str = "#1a252f";

/// Wood grain line color.
const GRAIN_STROKE: &str = "#654321";

/// Draw the full scene: background, blade, handle, engraving, and pommel.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, style: &KnifeStyle, rotation: Rotation) -> Result<(), JsValue> {
    // Layer 1: clear and repaint the background.
    ctx.clear_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);
    draw_background(ctx)?;

    // Layer 2: the knife, in a transformed context. Horizontal drag spins the
    // view; vertical drag feeds a small sinusoidal wobble; blade length sets
    // the horizontal scale (20cm = unit scale).
    ctx.save();
    ctx.translate(CENTER_X, CENTER_Y)?;
    ctx.rotate(rotation.y * ROTATION_PER_PIXEL)?;
    let scale_x = style.blade_length.scale_factor();
    let scale_y = 1.0 + (rotation.x * ROTATION_PER_PIXEL).sin() * WOBBLE_AMPLITUDE;
    ctx.scale(scale_x, scale_y)?;

    ctx.set_shadow_color(SHADOW_COLOR);
    ctx.set_shadow_blur(SHADOW_BLUR);
    ctx.set_shadow_offset_y(SHADOW_OFFSET_Y);

    draw_blade(ctx, style)?;
    draw_handle(ctx, style.handle_material)?;
    draw_engraving(ctx, style)?;
    draw_pommel(ctx, style.handle_material)?;

    ctx.restore();
    Ok(())
}

// =============================================================
// Background
// =============================================================

fn draw_background(ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
    let gradient =
        ctx.create_radial_gradient(CENTER_X, CENTER_Y, 0.0, CENTER_X, CENTER_Y, BACKGROUND_RADIUS)?;
    gradient.add_color_stop(0.0, "#f8f9fa")?;
    gradient.add_color_stop(1.0, "#e9ecef")?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);
    Ok(())
}

// =============================================================
// Blade
// =============================================================

fn draw_blade(ctx: &CanvasRenderingContext2d, style: &KnifeStyle) -> Result<(), JsValue> {
    let damascus = style.blade_material == BladeMaterial::Damascus;
    let (edge, spine) = if damascus {
        ("#2c3e50", "#34495e")
    } else {
        ("#95a5a6", "#bdc3c7")
    };

    let gradient = ctx.create_linear_gradient(-120.0, -15.0, -120.0, 15.0);
    gradient.add_color_stop(0.0, edge)?;
    gradient.add_color_stop(0.5, spine)?;
    gradient.add_color_stop(1.0, edge)?;
    ctx.set_fill_style_canvas_gradient(&gradient);

    ctx.begin_path();
    trace_silhouette(ctx, style.kind);
    ctx.fill();

    if damascus {
        draw_damascus_pattern(ctx);
    }
    Ok(())
}

/// Trace the fixed vector outline for one knife kind.
///
/// Coordinates are local units: the blade extends left of the origin, the
/// handle to the right. Paths are scaled by the global transform, so every
/// kind shares one coordinate system.
fn trace_silhouette(ctx: &CanvasRenderingContext2d, kind: KnifeKind) {
    match kind {
        KnifeKind::Chef => {
            // Wide curved blade.
            ctx.move_to(-150.0, 0.0);
            ctx.quadratic_curve_to(-120.0, -30.0, -30.0, -10.0);
            ctx.line_to(-30.0, 10.0);
            ctx.quadratic_curve_to(-120.0, 30.0, -150.0, 0.0);
        }
        KnifeKind::Santoku => {
            // Straight spine with a dropped tip.
            ctx.move_to(-140.0, -10.0);
            ctx.line_to(-40.0, -10.0);
            ctx.quadratic_curve_to(-30.0, 0.0, -40.0, 10.0);
            ctx.line_to(-140.0, 10.0);
            ctx.close_path();
        }
        KnifeKind::Paring => {
            // Small pointed blade.
            ctx.move_to(-100.0, 0.0);
            ctx.line_to(-30.0, -10.0);
            ctx.line_to(-30.0, 10.0);
            ctx.close_path();
        }
        KnifeKind::Butcher => {
            // Tall profile with an angled tip.
            ctx.move_to(-150.0, -20.0);
            ctx.line_to(-50.0, -20.0);
            ctx.line_to(-30.0, 0.0);
            ctx.line_to(-50.0, 20.0);
            ctx.line_to(-150.0, 20.0);
            ctx.close_path();
        }
        KnifeKind::Bread => {
            // Serrated outline: notches along the spine and back along the edge.
            ctx.move_to(-160.0, -10.0);
            for i in (-160..-30).step_by(10) {
                let x = f64::from(i);
                ctx.line_to(x + 5.0, -15.0);
                ctx.line_to(x + 10.0, -10.0);
            }
            ctx.line_to(-30.0, -10.0);
            ctx.line_to(-30.0, 10.0);
            for i in (-150..=-30).rev().step_by(10) {
                let x = f64::from(i);
                ctx.line_to(x - 5.0, 15.0);
                ctx.line_to(x - 10.0, 10.0);
            }
            ctx.close_path();
        }
        KnifeKind::Fillet => {
            // Long thin taper.
            ctx.move_to(-160.0, 0.0);
            ctx.quadratic_curve_to(-80.0, -10.0, -30.0, -2.0);
            ctx.line_to(-30.0, 2.0);
            ctx.quadratic_curve_to(-80.0, 10.0, -160.0, 0.0);
        }
    }
}

/// Overlay the repeating curved damascus motif across the blade face.
/// Drawn identically regardless of kind or length.
fn draw_damascus_pattern(ctx: &CanvasRenderingContext2d) {
    ctx.set_stroke_style_str(DAMASCUS_STROKE);
    ctx.set_line_width(1.0);
    for i in 0..DAMASCUS_STROKES {
        let x = DAMASCUS_SPACING.mul_add(f64::from(i), -150.0);
        ctx.begin_path();
        ctx.move_to(x, -10.0);
        ctx.quadratic_curve_to(x + 7.0, 0.0, x, 10.0);
        ctx.stroke();
    }
}

// =============================================================
// Handle
// =============================================================

fn draw_handle(ctx: &CanvasRenderingContext2d, material: HandleMaterial) -> Result<(), JsValue> {
    let base = material.color();
    let gradient = ctx.create_linear_gradient(HANDLE_X, HANDLE_Y, HANDLE_X, HANDLE_Y + HANDLE_HEIGHT);
    // Lighter midpoint so the flat fill reads as a rounded grip.
    gradient.add_color_stop(0.0, base)?;
    gradient.add_color_stop(0.5, &lighten(base, HANDLE_HIGHLIGHT))?;
    gradient.add_color_stop(1.0, base)?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(HANDLE_X, HANDLE_Y, HANDLE_WIDTH, HANDLE_HEIGHT);

    if material == HandleMaterial::Wood {
        draw_grain_lines(ctx);
    }
    Ok(())
}

fn draw_grain_lines(ctx: &CanvasRenderingContext2d) {
    ctx.set_stroke_style_str(GRAIN_STROKE);
    ctx.set_line_width(1.0);
    for i in 0..GRAIN_LINES {
        let x = GRAIN_SPACING.mul_add(f64::from(i), -25.0);
        ctx.begin_path();
        ctx.move_to(x, -10.0);
        ctx.line_to(x, 10.0);
        ctx.stroke();
    }
}

fn draw_pommel(ctx: &CanvasRenderingContext2d, material: HandleMaterial) -> Result<(), JsValue> {
    ctx.set_fill_style_str(material.color());
    ctx.begin_path();
    ctx.arc(POMMEL_X, 0.0, POMMEL_RADIUS, 0.0, std::f64::consts::TAU)?;
    ctx.fill();
    Ok(())
}

// =============================================================
// Engraving
// =============================================================

fn draw_engraving(ctx: &CanvasRenderingContext2d, style: &KnifeStyle) -> Result<(), JsValue> {
    if style.engraving_text.is_empty() {
        return Ok(());
    }

    let color = if style.engraving_color.is_empty() {
        "#444"
    } else {
        style.engraving_color.as_str()
    };
    ctx.set_fill_style_str(color);
    let font_px = style.engraving_font_px();
    ctx.set_font(&format!("{font_px}px serif"));
    ctx.set_text_align("center");

    match style.engraving_position {
        EngravingPosition::Blade => {
            ctx.save();
            ctx.rotate(ENGRAVING_TILT)?;
            let (anchor_x, anchor_y) = style.kind.engraving_anchor();
            ctx.translate(anchor_x, anchor_y)?;
            ctx.fill_text(&style.engraving_text, 0.0, 0.0)?;
            ctx.restore();
        }
        EngravingPosition::Handle => {
            ctx.fill_text(&style.engraving_text, HANDLE_ENGRAVING_X, HANDLE_ENGRAVING_Y)?;
        }
    }
    Ok(())
}
