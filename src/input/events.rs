//! Results and errors reported back to the host's event dispatcher.

use thiserror::Error;

/// What a pointer press did to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// A new step was appended and is now the active gesture
    StepStarted,
    /// A label was requested; the host must answer with
    /// `set_label_text` or `cancel_label_request`
    LabelRequested,
    /// The press was dropped because a label request is still pending
    Ignored,
}

/// Errors that can occur while driving a drawing surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("No active gesture: drag received without a preceding press")]
    NoActiveGesture,

    #[error("A label request is pending; pointer input is blocked until it is answered")]
    LabelPending,

    #[error("Invalid pen width {0}: must be positive and finite")]
    InvalidPenWidth(f64),

    #[error("Rendering failed: {0}")]
    Render(#[from] cairo::Error),
}
