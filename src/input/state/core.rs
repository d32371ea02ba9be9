//! Drawing state machine and surface state management.

use super::label::{LabelPrompt, LabelRequest};
use crate::config::Config;
use crate::draw::{
    Color, FontDescriptor, History, PaintAttributes, Step,
    color::{BLACK, WHITE},
};
use crate::input::{SurfaceError, Tool};
use crate::util;
use log::debug;

/// Current gesture state machine.
///
/// Tracks whether the surface is idle, reshaping the step created by the last
/// press, or waiting for the host to supply label text.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// No gesture in progress - waiting for a press
    Idle,
    /// A press created a step that drags now reshape
    Drawing {
        /// History index of the step this gesture owns
        step: usize,
    },
    /// A label press is waiting for text from the host
    AwaitingLabel {
        /// Press location and frozen paint for the label
        request: LabelRequest,
    },
}

/// Initial pen, background and history settings for a [`DrawingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSettings {
    pub tool: Tool,
    pub pen_width: f64,
    pub pen_color: Color,
    pub background_color: Color,
    pub label_font_size: f64,
    pub font_descriptor: FontDescriptor,
    /// Maximum retained history steps (0 = unlimited)
    pub max_steps: usize,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            tool: Tool::Pen,
            pen_width: 3.0,
            pen_color: BLACK,
            background_color: WHITE,
            label_font_size: 100.0,
            font_descriptor: FontDescriptor::default(),
            max_steps: 0,
        }
    }
}

impl From<&Config> for SurfaceSettings {
    fn from(config: &Config) -> Self {
        let drawing = &config.drawing;
        Self {
            tool: drawing.default_tool,
            pen_width: drawing.pen_width,
            pen_color: drawing.pen_color.to_color_or(BLACK),
            background_color: drawing.background_color.to_color_or(WHITE),
            label_font_size: drawing.label_font_size,
            font_descriptor: FontDescriptor::new(
                drawing.font_family.clone(),
                drawing.font_weight.clone(),
                drawing.font_style.clone(),
            ),
            max_steps: config.history.max_steps,
        }
    }
}

/// A drawing surface: tool settings, undo history and gesture state.
///
/// The host feeds pointer events (`on_press`, `on_drag`, `on_release`) and
/// control calls (tool, pen, undo/redo/clear) from a single thread, and
/// repaints via `render` whenever `needs_redraw` is set.
pub struct DrawingSurface {
    /// Steps drawn so far plus the undo cursor
    pub(super) history: History,
    /// Current gesture state machine
    pub(super) state: DrawingState,
    /// Tool applied to the next press
    pub(super) tool: Tool,
    /// Current pen stroke width in pixels
    pub(super) pen_width: f64,
    /// Current pen color
    pub(super) pen_color: Color,
    /// Background color; also the eraser's ink
    pub(super) background_color: Color,
    /// Label text size in pixels
    pub(super) label_font_size: f64,
    /// Label font
    pub(super) font_descriptor: FontDescriptor,
    /// Last text value supplied by the host
    pub(super) label_text: String,
    /// Optional synchronous label-text source
    pub(super) label_prompt: Option<Box<dyn LabelPrompt>>,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new(SurfaceSettings::default())
    }
}

impl DrawingSurface {
    /// Creates an empty surface with the given settings.
    ///
    /// A non-positive or non-finite pen width is replaced with the default.
    pub fn new(settings: SurfaceSettings) -> Self {
        let pen_width = if settings.pen_width.is_finite() && settings.pen_width > 0.0 {
            settings.pen_width
        } else {
            log::warn!(
                "Invalid initial pen width {}, using 3.0",
                settings.pen_width
            );
            3.0
        };

        let label_font_size =
            if settings.label_font_size.is_finite() && settings.label_font_size > 0.0 {
                settings.label_font_size
            } else {
                log::warn!(
                    "Invalid label font size {}, using 100.0",
                    settings.label_font_size
                );
                100.0
            };

        Self {
            history: History::with_max_steps(settings.max_steps),
            state: DrawingState::Idle,
            tool: settings.tool,
            pen_width,
            pen_color: settings.pen_color,
            background_color: settings.background_color,
            label_font_size,
            font_descriptor: settings.font_descriptor,
            label_text: String::new(),
            label_prompt: None,
            needs_redraw: true,
        }
    }

    /// Creates a surface from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(SurfaceSettings::from(config))
    }

    /// Read-only view of the undo history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Read-only view of the gesture state machine.
    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Selects the tool for the next press. The current gesture keeps its tool.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            debug!("Tool changed from {} to {}", self.tool, tool);
        }
        self.tool = tool;
    }

    pub fn pen_width(&self) -> f64 {
        self.pen_width
    }

    /// Sets the stroke width for future steps.
    ///
    /// # Errors
    /// [`SurfaceError::InvalidPenWidth`] if `width` is not a positive, finite number.
    pub fn set_pen_width(&mut self, width: f64) -> Result<(), SurfaceError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(SurfaceError::InvalidPenWidth(width));
        }
        self.pen_width = width;
        debug!("Pen width set to {:.1}", width);
        Ok(())
    }

    pub fn pen_color(&self) -> Color {
        self.pen_color
    }

    /// Sets the pen color for future steps.
    pub fn set_pen_color(&mut self, color: Color) {
        self.pen_color = color;
        debug!("Pen color set to {}", util::color_to_name(&color));
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Snapshots the current pen settings for a new step.
    ///
    /// The eraser inks with the background color instead of the pen color.
    pub(super) fn capture_paint(&self) -> PaintAttributes {
        let color = match self.tool {
            Tool::Eraser => self.background_color,
            _ => self.pen_color,
        };
        PaintAttributes::new(
            self.pen_width,
            color,
            self.label_font_size,
            self.font_descriptor.clone(),
        )
    }

    /// Appends `step` and makes it the active gesture.
    pub(super) fn begin_step(&mut self, step: Step) {
        let kind = step.shape.kind();
        let index = self.history.append(step);
        self.state = DrawingState::Drawing { step: index };
        self.needs_redraw = true;
        debug!("Started {} step at index {}", kind, index);
    }

    /// Drops an in-progress drag gesture; pending label requests are kept.
    pub(super) fn end_gesture(&mut self) {
        if matches!(self.state, DrawingState::Drawing { .. }) {
            self.state = DrawingState::Idle;
        }
    }
}
