//! Label-text handshake between the surface and its host.
//!
//! A LABEL press cannot finish until the host supplies text. Hosts either
//! poll [`DrawingSurface::pending_label_request`] and answer with
//! [`DrawingSurface::set_label_text`] / [`DrawingSurface::cancel_label_request`],
//! or install a blocking [`LabelPrompt`] that is asked inside `on_press`.

use super::{DrawingState, DrawingSurface};
use crate::draw::{PaintAttributes, Point, Shape, Step};
use log::debug;

/// A label waiting for its text.
///
/// Paint is frozen at press time, so tool or pen changes made while the host
/// shows its dialog do not restyle the label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRequest {
    /// Baseline start of the label
    pub anchor: Point,
    /// Paint captured when the label tool was pressed
    pub paint: PaintAttributes,
}

/// Synchronous source of label text.
///
/// Returning `None` means the prompt was dismissed; the label then uses the
/// surface's current text value, which starts out empty.
pub trait LabelPrompt {
    fn request_label(&mut self, request: &LabelRequest) -> Option<String>;
}

impl<F> LabelPrompt for F
where
    F: FnMut(&LabelRequest) -> Option<String>,
{
    fn request_label(&mut self, request: &LabelRequest) -> Option<String> {
        self(request)
    }
}

impl DrawingSurface {
    /// Installs a blocking label prompt, replacing any previous one.
    pub fn set_label_prompt(&mut self, prompt: impl LabelPrompt + 'static) {
        self.label_prompt = Some(Box::new(prompt));
    }

    /// Removes the label prompt; label presses go back to the pending-request slot.
    pub fn clear_label_prompt(&mut self) {
        self.label_prompt = None;
    }

    /// The label request the host still has to answer, if any.
    pub fn pending_label_request(&self) -> Option<&LabelRequest> {
        match &self.state {
            DrawingState::AwaitingLabel { request } => Some(request),
            _ => None,
        }
    }

    /// The last text value supplied by the host.
    pub fn label_text(&self) -> &str {
        &self.label_text
    }

    /// Stores the label text and resolves a pending request with it.
    ///
    /// Returns `true` if a label step was appended.
    pub fn set_label_text(&mut self, text: impl Into<String>) -> bool {
        self.label_text = text.into();
        match self.take_label_request() {
            Some(request) => {
                self.commit_label(request);
                true
            }
            None => false,
        }
    }

    /// Resolves a pending request without new text.
    ///
    /// The label is still created, carrying the current text value. Returns
    /// `true` if a label step was appended.
    pub fn cancel_label_request(&mut self) -> bool {
        match self.take_label_request() {
            Some(request) => {
                debug!("Label request dismissed; using current text value");
                self.commit_label(request);
                true
            }
            None => false,
        }
    }

    /// Starts a label: asks the prompt if one is installed, otherwise parks the
    /// request until the host answers.
    pub(super) fn request_label(&mut self, request: LabelRequest) -> bool {
        if let Some(prompt) = self.label_prompt.as_mut() {
            let answer = prompt.request_label(&request);
            if let Some(text) = answer {
                self.label_text = text;
            } else {
                debug!("Label prompt dismissed; using current text value");
            }
            self.commit_label(request);
            return true;
        }

        debug!(
            "Label requested at ({:.1}, {:.1})",
            request.anchor.x, request.anchor.y
        );
        self.state = DrawingState::AwaitingLabel { request };
        false
    }

    fn take_label_request(&mut self) -> Option<LabelRequest> {
        if !matches!(self.state, DrawingState::AwaitingLabel { .. }) {
            return None;
        }
        match std::mem::replace(&mut self.state, DrawingState::Idle) {
            DrawingState::AwaitingLabel { request } => Some(request),
            _ => None,
        }
    }

    fn commit_label(&mut self, request: LabelRequest) {
        let shape = Shape::label(request.anchor, self.label_text.clone());
        self.begin_step(Step::new(request.paint, shape));
    }
}
