mod actions;
mod core;
mod label;
mod pointer;
mod render;

pub use core::{DrawingState, DrawingSurface, SurfaceSettings};
pub use label::{LabelPrompt, LabelRequest};
