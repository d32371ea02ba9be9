//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::Tool;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the pen, background and label font the surface starts with.
/// The host can change tool, pen width and pen color at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Tool selected when the surface is created
    #[serde(default = "default_tool")]
    pub default_tool: Tool,

    /// Pen stroke width in pixels (valid range: 0.5 - 100.0)
    #[serde(default = "default_pen_width")]
    pub pen_width: f64,

    /// Pen color - either a named color (red, green, blue, yellow, orange, pink, white, black)
    /// or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_pen_color")]
    pub pen_color: ColorSpec,

    /// Surface background color; the eraser paints with this color
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,

    /// Label text size in pixels (valid range: 8.0 - 400.0)
    #[serde(default = "default_label_font_size")]
    pub label_font_size: f64,

    /// Font family name for labels (e.g., "Sans", "Monospace")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", or "100" - "900")
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            pen_width: default_pen_width(),
            pen_color: default_pen_color(),
            background_color: default_background_color(),
            label_font_size: default_label_font_size(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
        }
    }
}

/// Undo history settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of steps kept in memory; the oldest step is evicted
    /// beyond it (0 = unlimited)
    #[serde(default)]
    pub max_steps: usize,
}

fn default_tool() -> Tool {
    Tool::Pen
}

fn default_pen_width() -> f64 {
    3.0
}

fn default_pen_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_background_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_label_font_size() -> f64 {
    100.0
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}
