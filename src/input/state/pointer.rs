use crate::draw::{Point, Shape, Step};
use crate::input::{PressOutcome, SurfaceError, tool::Tool};
use log::debug;

use super::{DrawingState, DrawingSurface, LabelRequest};

impl DrawingSurface {
    /// Processes a pointer press.
    ///
    /// # Arguments
    /// * `x` - Pointer X coordinate
    /// * `y` - Pointer Y coordinate
    ///
    /// # Behavior
    /// - Pen/Eraser: starts a curve at the press point
    /// - Rectangle/Oval: starts a zero-area box anchored at the press point
    /// - Label: requests text from the host before anything is appended
    /// - While a label request is pending the press is dropped
    pub fn on_press(&mut self, x: f64, y: f64) -> PressOutcome {
        if matches!(self.state, DrawingState::AwaitingLabel { .. }) {
            debug!("Ignoring press at ({x:.1}, {y:.1}): label request pending");
            return PressOutcome::Ignored;
        }

        let point = Point::new(x, y);
        let paint = self.capture_paint();
        let shape = match self.tool {
            Tool::Pen | Tool::Eraser => Shape::curve(point),
            Tool::Rectangle => Shape::rectangle(point),
            Tool::Oval => Shape::oval(point),
            Tool::Label => {
                self.end_gesture();
                let request = LabelRequest {
                    anchor: point,
                    paint,
                };
                return if self.request_label(request) {
                    PressOutcome::StepStarted
                } else {
                    PressOutcome::LabelRequested
                };
            }
        };

        self.begin_step(Step::new(paint, shape));
        PressOutcome::StepStarted
    }

    /// Processes pointer motion while pressed.
    ///
    /// # Errors
    /// - [`SurfaceError::NoActiveGesture`] when no press started a gesture
    ///   (or undo/redo/clear ended it); history is left untouched
    /// - [`SurfaceError::LabelPending`] while the host owes label text
    ///
    /// Dragging an already placed label succeeds without changing it.
    pub fn on_drag(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
        let index = match &self.state {
            DrawingState::Drawing { step } => *step,
            DrawingState::Idle => return Err(SurfaceError::NoActiveGesture),
            DrawingState::AwaitingLabel { .. } => return Err(SurfaceError::LabelPending),
        };

        let step = self
            .history
            .visible_step_mut(index)
            .ok_or(SurfaceError::NoActiveGesture)?;

        if matches!(step.shape, Shape::Label { .. }) {
            return Ok(());
        }

        step.shape.extend_to(Point::new(x, y));
        self.needs_redraw = true;
        Ok(())
    }

    /// Processes pointer release.
    ///
    /// Geometry is already up to date from the drags, so this only ends the
    /// gesture. A pending label request is left alone.
    pub fn on_release(&mut self) {
        self.end_gesture();
    }
}
