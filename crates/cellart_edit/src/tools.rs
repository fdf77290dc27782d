//! Tool definitions and input context
//!
//! Tools are organized in toggle pairs - selecting an already active tool
//! switches to its partner (hollow/filled shapes, rectangle/lasso selection).

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Available editing tools
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    // === Selection ===
    /// Rectangular selection; dragging inside an existing selection moves it
    #[default]
    Select,
    /// Freeform (lasso) selection
    Lasso,
    /// Select cells matching the clicked cell
    MagicWand,

    // === Drawing ===
    Pencil,
    Eraser,
    Line,
    RectangleOutline,
    RectangleFilled,
    EllipseOutline,
    EllipseFilled,

    // === Single tools ===
    /// Paint bucket
    Fill,
    Gradient,
    /// Pick the brush from the canvas
    Eyedropper,
    /// Keyboard text entry at the clicked cell
    Text,
}

impl Tool {
    /// The other tool of a toggle pair, `self` for single tools.
    pub fn toggle_partner(self) -> Tool {
        match self {
            Tool::Select => Tool::Lasso,
            Tool::Lasso => Tool::Select,
            Tool::RectangleOutline => Tool::RectangleFilled,
            Tool::RectangleFilled => Tool::RectangleOutline,
            Tool::EllipseOutline => Tool::EllipseFilled,
            Tool::EllipseFilled => Tool::EllipseOutline,
            Tool::Pencil => Tool::Eraser,
            Tool::Eraser => Tool::Pencil,
            other => other,
        }
    }

    /// Tools that draw a shape from an anchor to the pointer.
    pub fn is_shape(self) -> bool {
        matches!(
            self,
            Tool::Line | Tool::RectangleOutline | Tool::RectangleFilled | Tool::EllipseOutline | Tool::EllipseFilled
        )
    }

    /// Tools that work on the active selection.
    pub fn is_selection_tool(self) -> bool {
        matches!(self, Tool::Select | Tool::Lasso | Tool::MagicWand)
    }

    pub fn name(self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Lasso => "Lasso",
            Tool::MagicWand => "Magic Wand",
            Tool::Pencil => "Pencil",
            Tool::Eraser => "Eraser",
            Tool::Line => "Line",
            Tool::RectangleOutline => "Rectangle",
            Tool::RectangleFilled => "Filled Rectangle",
            Tool::EllipseOutline => "Ellipse",
            Tool::EllipseFilled => "Filled Ellipse",
            Tool::Fill => "Fill",
            Tool::Gradient => "Gradient",
            Tool::Eyedropper => "Eyedropper",
            Tool::Text => "Text",
        }
    }
}

bitflags! {
    /// Keyboard modifiers held during a pointer event
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Square/circle lock
        const SHIFT = 0b0000_0001;
        const CTRL = 0b0000_0010;
        const ALT = 0b0000_0100;
    }
}

impl Modifiers {
    pub fn shift(self) -> bool {
        self.contains(Modifiers::SHIFT)
    }
}

/// Which part of the UI holds keyboard focus when a key event arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputFocus {
    #[default]
    Canvas,
    /// An editable text field; editor shortcuts must not steal its input
    TextField,
}

/// What clipboard and delete commands act on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditTarget {
    /// Cells of the current frame
    #[default]
    Canvas,
    /// Whole frames
    Timeline,
}
