use log::{debug, info};

use super::{DrawingState, DrawingSurface};

impl DrawingSurface {
    /// Hides the newest visible step.
    ///
    /// Ends any drag gesture so it cannot keep reshaping a hidden step.
    /// Returns `false` (and changes nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.history.undo() {
            debug!("Nothing to undo");
            return false;
        }
        self.end_gesture();
        self.needs_redraw = true;
        debug!(
            "Undo: {} visible, {} redoable",
            self.history.visible_prefix().len(),
            self.history.redo_len()
        );
        true
    }

    /// Re-shows the next step of the redo tail.
    ///
    /// Returns `false` (and changes nothing) when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.redo() {
            debug!("Nothing to redo");
            return false;
        }
        self.end_gesture();
        self.needs_redraw = true;
        debug!(
            "Redo: {} visible, {} redoable",
            self.history.visible_prefix().len(),
            self.history.redo_len()
        );
        true
    }

    /// Removes every step and abandons any gesture or pending label request.
    pub fn clear(&mut self) {
        if matches!(self.state, DrawingState::AwaitingLabel { .. }) {
            debug!("Clear cancelled pending label request");
        }
        self.history.clear();
        self.state = DrawingState::Idle;
        self.needs_redraw = true;
        info!("Cleared drawing surface");
    }
}
