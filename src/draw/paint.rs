//! Frozen paint attributes captured when a step is created.

use super::color::Color;
use super::font::FontDescriptor;

/// Paint used to draw one step.
///
/// Captured from the surface's pen settings at press time and never changed
/// afterwards. Style (antialiasing, round joins and caps, stroke-only) is the
/// same for every step and lives in the associated constants.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintAttributes {
    /// Stroke width in pixels (always positive)
    pub width: f64,
    /// Stroke color
    pub color: Color,
    /// Label text size in pixels
    pub text_size: f64,
    /// Label font
    pub font: FontDescriptor,
}

impl PaintAttributes {
    pub const ANTIALIAS: cairo::Antialias = cairo::Antialias::Best;
    pub const LINE_JOIN: cairo::LineJoin = cairo::LineJoin::Round;
    pub const LINE_CAP: cairo::LineCap = cairo::LineCap::Round;

    pub fn new(width: f64, color: Color, text_size: f64, font: FontDescriptor) -> Self {
        Self {
            width,
            color,
            text_size,
            font,
        }
    }

    /// Loads the stroke settings into a Cairo context.
    pub fn apply(&self, ctx: &cairo::Context) {
        self.color.apply_source(ctx);
        ctx.set_line_width(self.width);
        ctx.set_line_join(Self::LINE_JOIN);
        ctx.set_line_cap(Self::LINE_CAP);
        ctx.set_antialias(Self::ANTIALIAS);
    }
}
