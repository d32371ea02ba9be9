//! Drawing tool selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Drawing tool selection.
///
/// The active tool determines what shape a press creates and how drags reshape it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand drawing - follows the pointer path
    Pen,
    /// Freehand drawing in the background color
    Eraser,
    /// Rectangle outline - from press point to current point
    Rectangle,
    /// Ellipse outline inscribed in the press/current box
    Oval,
    /// Text label placed at the press point
    Label,
}

impl Tool {
    pub const ALL: [Tool; 5] = [
        Tool::Pen,
        Tool::Eraser,
        Tool::Rectangle,
        Tool::Oval,
        Tool::Label,
    ];
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tool::Pen => "pen",
            Tool::Eraser => "eraser",
            Tool::Rectangle => "rectangle",
            Tool::Oval => "oval",
            Tool::Label => "label",
        };
        f.write_str(name)
    }
}
