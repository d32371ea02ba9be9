//! Cairo-based replay of history steps.

use super::color::Color;
use super::history::Step;
use super::paint::PaintAttributes;
use super::shape::{Bounds, Point, Shape};

/// Fills the entire canvas with the surface background color.
///
/// Should be called before rendering steps; eraser ink only matches the
/// background when both use the same color.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    ctx.save().ok();
    color.apply_source(ctx);
    ctx.set_operator(cairo::Operator::Source);
    let _ = ctx.paint(); // Ignore errors - a failed paint leaves the previous contents
    ctx.restore().ok();
}

/// Renders steps in order (first step = bottom layer).
///
/// Reads the steps only; calling it again with the same slice produces the
/// same pixels.
pub fn render_steps(ctx: &cairo::Context, steps: &[Step]) {
    for step in steps {
        render_step(ctx, step);
    }
}

/// Renders a single step with its frozen paint.
///
/// Context state is saved and restored around the step so nothing leaks into
/// the next one.
pub fn render_step(ctx: &cairo::Context, step: &Step) {
    ctx.save().ok();
    step.paint.apply(ctx);

    match &step.shape {
        Shape::Curve { points } => render_curve(ctx, points),
        Shape::Rectangle { bounds, .. } => render_rectangle(ctx, bounds),
        Shape::Oval { bounds, .. } => render_oval(ctx, bounds),
        Shape::Label { anchor, text } => render_label(ctx, *anchor, text, &step.paint),
    }

    ctx.restore().ok();
}

/// Render a freehand polyline.
///
/// A single-point curve still shows up as a dot thanks to the round cap.
fn render_curve(ctx: &cairo::Context, points: &[Point]) {
    let Some(first) = points.first() else {
        return;
    };

    ctx.move_to(first.x, first.y);
    if points.len() == 1 {
        ctx.line_to(first.x, first.y);
    }
    for point in &points[1..] {
        ctx.line_to(point.x, point.y);
    }

    let _ = ctx.stroke();
}

/// Render a rectangle outline
fn render_rectangle(ctx: &cairo::Context, bounds: &Bounds) {
    ctx.rectangle(bounds.left, bounds.top, bounds.width(), bounds.height());
    let _ = ctx.stroke();
}

/// Render an ellipse inscribed in `bounds` using Cairo's arc with scaling
fn render_oval(ctx: &cairo::Context, bounds: &Bounds) {
    if bounds.is_degenerate() {
        return;
    }

    let cx = (bounds.left + bounds.right) / 2.0;
    let cy = (bounds.top + bounds.bottom) / 2.0;

    // Scale only while building the path so the stroke width stays uniform
    ctx.save().ok();
    ctx.translate(cx, cy);
    ctx.scale(bounds.width() / 2.0, bounds.height() / 2.0);
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    ctx.restore().ok();

    let _ = ctx.stroke();
}

/// Renders label text with its baseline starting at `anchor`.
///
/// Glyphs are stroked, not filled, in keeping with the stroke-only paint.
fn render_label(ctx: &cairo::Context, anchor: Point, text: &str, paint: &PaintAttributes) {
    if text.is_empty() {
        return;
    }

    let layout = pangocairo::functions::create_layout(ctx);
    layout.set_font_description(Some(&paint.font.to_font_description(paint.text_size)));
    layout.set_text(text);

    // Pango positions layouts by their top-left corner; shift up to the baseline
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    ctx.move_to(anchor.x, anchor.y - baseline);
    pangocairo::functions::layout_path(ctx, &layout);

    let _ = ctx.stroke();
}
