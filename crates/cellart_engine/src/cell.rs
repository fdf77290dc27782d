use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::{transparent_color, Color};

/// The glyph used for an empty cell.
pub const EMPTY_CHAR: char = ' ';

/// Default foreground of a freshly created canvas.
pub const DEFAULT_FOREGROUND: Color = Color::WHITE;

/// One character cell. Serializes to the persisted `{char, color, bgColor}` format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    #[serde(rename = "char")]
    pub ch: char,

    #[serde(rename = "color")]
    pub fg: Color,

    /// `None` is a transparent background.
    #[serde(rename = "bgColor", with = "transparent_color", default)]
    pub bg: Option<Color>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: EMPTY_CHAR,
            fg: DEFAULT_FOREGROUND,
            bg: None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.bg {
            Some(bg) => write!(f, "'{}' {} on {}", self.ch, self.fg, bg),
            None => write!(f, "'{}' {}", self.ch, self.fg),
        }
    }
}

impl Cell {
    pub fn new(ch: char, fg: Color, bg: Option<Color>) -> Self {
        Self { ch, fg, bg }
    }

    pub fn with_char(ch: char) -> Self {
        Self { ch, ..Default::default() }
    }

    /// The character is the empty marker.
    pub fn has_empty_char(&self) -> bool {
        self.ch == EMPTY_CHAR
    }

    /// A blank cell is invisible: empty character on a transparent background.
    /// Blank cells are never kept in grid storage.
    pub fn is_blank(&self) -> bool {
        self.has_empty_char() && self.bg.is_none()
    }

    /// Compares the attributes selected by `attributes`.
    pub fn matches(&self, other: &Cell, attributes: CellAttributes) -> bool {
        (!attributes.contains(CellAttributes::CHAR) || self.ch == other.ch)
            && (!attributes.contains(CellAttributes::FOREGROUND) || self.fg == other.fg)
            && (!attributes.contains(CellAttributes::BACKGROUND) || self.bg == other.bg)
    }

    /// Returns `self` with the attributes selected by `attributes` taken from `source`.
    pub fn merged(&self, source: &Cell, attributes: CellAttributes) -> Cell {
        let mut result = *self;
        if attributes.contains(CellAttributes::CHAR) {
            result.ch = source.ch;
        }
        if attributes.contains(CellAttributes::FOREGROUND) {
            result.fg = source.fg;
        }
        if attributes.contains(CellAttributes::BACKGROUND) {
            result.bg = source.bg;
        }
        result
    }
}

bitflags! {
    /// Selects cell attributes. Used both as flood fill match criteria and as
    /// the per-attribute "affects" toggles of drawing tools.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CellAttributes: u8 {
        const CHAR = 0b0000_0001;
        const FOREGROUND = 0b0000_0010;
        const BACKGROUND = 0b0000_0100;
    }
}

impl Default for CellAttributes {
    fn default() -> Self {
        CellAttributes::all()
    }
}
