//! Drawing primitives, undo history and Cairo rendering.
//!
//! This module defines the value types a drawing surface is built from:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`PaintAttributes`]: stroke settings frozen into every step
//! - [`Shape`]: curve, rectangle, oval and label geometry
//! - [`History`]: linear undo/redo log of [`Step`]s
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod font;
pub mod history;
pub mod paint;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use color::Color;
pub use font::FontDescriptor;
pub use history::{History, Step};
pub use paint::PaintAttributes;
pub use render::{render_background, render_step, render_steps};
pub use shape::{Bounds, Point, Shape};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
