//! Pointer input handling and the gesture state machine.
//!
//! This module translates press/drag/release events into history steps.
//! It owns the current tool and pen settings, the undo history, and the
//! pending label request while the host collects label text.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{PressOutcome, SurfaceError};
pub use state::{DrawingState, DrawingSurface, LabelPrompt, LabelRequest, SurfaceSettings};
pub use tool::Tool;
