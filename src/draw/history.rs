//! Undoable log of drawing steps.

use super::paint::PaintAttributes;
use super::shape::Shape;
use log::debug;

/// One committed drawing action: frozen paint plus the geometry it strokes.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub paint: PaintAttributes,
    pub shape: Shape,
}

impl Step {
    pub fn new(paint: PaintAttributes, shape: Shape) -> Self {
        Self { paint, shape }
    }
}

/// Linear undo/redo history.
///
/// Steps are kept in draw order (first = bottom, last = top). `cursor` points
/// at the last visible step, or is `None` when nothing is visible. Steps after
/// the cursor form the redo tail, which is dropped by the next [`append`].
///
/// [`append`]: History::append
#[derive(Debug, Clone, Default)]
pub struct History {
    steps: Vec<Step>,
    cursor: Option<usize>,
    /// Maximum number of retained steps (0 = unlimited)
    max_steps: usize,
}

impl History {
    /// Creates an empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history that keeps at most `max_steps` steps (0 = unlimited).
    pub fn with_max_steps(max_steps: usize) -> Self {
        Self {
            max_steps,
            ..Self::default()
        }
    }

    /// Drops the redo tail, appends `step` and makes it the visible tip.
    ///
    /// When a step cap is set and exceeded, the oldest step is evicted. Returns
    /// the index of the appended step.
    pub fn append(&mut self, step: Step) -> usize {
        let keep = self.visible_len();
        if keep < self.steps.len() {
            debug!(
                "Discarding {} redoable step(s) before append",
                self.steps.len() - keep
            );
            self.steps.truncate(keep);
        }

        self.steps.push(step);

        if self.max_steps > 0 && self.steps.len() > self.max_steps {
            let evicted = self.steps.len() - self.max_steps;
            self.steps.drain(..evicted);
            debug!(
                "History cap ({}) reached; evicted {} oldest step(s)",
                self.max_steps, evicted
            );
        }

        let index = self.steps.len() - 1;
        self.cursor = Some(index);
        index
    }

    /// Hides the newest visible step. Returns `false` when nothing was visible.
    pub fn undo(&mut self) -> bool {
        match self.cursor {
            Some(0) => {
                self.cursor = None;
                true
            }
            Some(index) => {
                self.cursor = Some(index - 1);
                true
            }
            None => false,
        }
    }

    /// Re-shows the first step of the redo tail. Returns `false` when there is none.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor = Some(self.visible_len());
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.visible_len() < self.steps.len()
    }

    /// Removes every step, visible or not.
    pub fn clear(&mut self) {
        self.steps.clear();
        self.cursor = None;
    }

    /// Visible steps in insertion order (oldest first).
    pub fn visible_prefix(&self) -> &[Step] {
        &self.steps[..self.visible_len()]
    }

    /// Index of the last visible step.
    pub fn current_index(&self) -> Option<usize> {
        self.cursor
    }

    /// Total number of retained steps, including the redo tail.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of steps that `redo` could bring back.
    pub fn redo_len(&self) -> usize {
        self.steps.len() - self.visible_len()
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Mutable access to a visible step.
    ///
    /// Returns `None` for indices in the redo tail or past the end, so a stale
    /// gesture handle can never touch a hidden step.
    pub fn visible_step_mut(&mut self, index: usize) -> Option<&mut Step> {
        if index < self.visible_len() {
            self.steps.get_mut(index)
        } else {
            None
        }
    }

    fn visible_len(&self) -> usize {
        self.cursor.map_or(0, |index| index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{FontDescriptor, Point, color::BLACK};

    fn step(x: f64) -> Step {
        Step::new(
            PaintAttributes::new(3.0, BLACK, 100.0, FontDescriptor::default()),
            Shape::curve(Point::new(x, x)),
        )
    }

    fn cursor_as_signed(history: &History) -> isize {
        history.current_index().map_or(-1, |index| index as isize)
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.visible_prefix().is_empty());
        assert_eq!(history.current_index(), None);
    }

    #[test]
    fn append_moves_cursor_to_tip() {
        let mut history = History::new();
        assert_eq!(history.append(step(0.0)), 0);
        assert_eq!(history.append(step(1.0)), 1);
        assert_eq!(history.current_index(), Some(1));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_then_append_truncates_exactly_the_redo_tail() {
        for total in 1..6usize {
            for undos in 0..=total {
                let mut history = History::new();
                for i in 0..total {
                    history.append(step(i as f64));
                }
                for _ in 0..undos {
                    history.undo();
                }
                let before = cursor_as_signed(&history);
                assert_eq!(history.redo_len(), undos);

                history.append(step(99.0));

                assert_eq!(history.len() as isize, before + 2);
                assert!(!history.can_redo());
                assert_eq!(
                    history.visible_prefix().last().map(|s| &s.shape),
                    Some(&Shape::curve(Point::new(99.0, 99.0)))
                );
            }
        }
    }

    #[test]
    fn undo_at_boundary_is_a_no_op() {
        let mut history = History::new();
        history.append(step(0.0));
        assert!(history.undo());
        assert!(!history.undo());
        assert_eq!(history.current_index(), None);
        assert_eq!(history.len(), 1);
        assert!(history.can_redo());
    }

    #[test]
    fn redo_at_tip_is_a_no_op() {
        let mut history = History::new();
        history.append(step(0.0));
        assert!(!history.redo());
        assert_eq!(history.current_index(), Some(0));
    }

    #[test]
    fn can_flags_track_cursor_position() {
        let mut history = History::new();
        for i in 0..3 {
            history.append(step(i as f64));
        }
        history.undo();
        assert!(history.can_undo());
        assert!(history.can_redo());
        history.undo();
        history.undo();
        assert!(!history.can_undo());
        assert!(history.can_redo());
        history.redo();
        history.redo();
        history.redo();
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn clear_resets_everything() {
        let mut history = History::new();
        history.append(step(0.0));
        history.append(step(1.0));
        history.undo();
        history.clear();
        assert!(history.is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn visible_prefix_keeps_insertion_order() {
        let mut history = History::new();
        for i in 0..4 {
            history.append(step(i as f64));
        }
        history.undo();
        let xs: Vec<_> = history
            .visible_prefix()
            .iter()
            .map(|s| match &s.shape {
                Shape::Curve { points } => points[0].x,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn visible_step_mut_rejects_redo_tail() {
        let mut history = History::new();
        history.append(step(0.0));
        history.append(step(1.0));
        history.undo();
        assert!(history.visible_step_mut(0).is_some());
        assert!(history.visible_step_mut(1).is_none());
        assert!(history.visible_step_mut(5).is_none());
    }

    #[test]
    fn step_cap_evicts_oldest_and_keeps_undo_semantics() {
        let mut history = History::with_max_steps(2);
        history.append(step(0.0));
        history.append(step(1.0));
        assert_eq!(history.append(step(2.0)), 1);
        assert_eq!(history.len(), 2);
        assert_eq!(history.current_index(), Some(1));

        assert!(history.undo());
        assert!(history.undo());
        assert!(!history.undo());
        assert!(history.redo());
        assert_eq!(
            history.visible_prefix()[0].shape,
            Shape::curve(Point::new(1.0, 1.0))
        );
    }
}
