//! Touch-driven drawing surface with linear undo/redo.
//!
//! [`DrawingSurface`] turns press/drag/release gestures into history steps
//! (freehand curves, eraser strokes, rectangles, ovals and text labels) and
//! replays the visible part of that history onto a Cairo context. Hosts own
//! the windowing and dialogs; the surface asks them for label text through a
//! pending request or a [`LabelPrompt`](input::LabelPrompt).

pub mod config;
pub mod draw;
pub mod input;
pub mod util;

pub use config::Config;
pub use input::{DrawingSurface, PressOutcome, SurfaceError, SurfaceSettings, Tool};
