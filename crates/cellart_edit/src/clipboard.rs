//! Clipboard support
//!
//! Copied cells are kept in an internal [`CellClipboard`] with positions relative
//! to the top left corner of the copied bounds. The plain text rendering goes to
//! the system clipboard through a [`ClipboardProvider`] so other programs can
//! paste it. Text coming back from the system clipboard is pasted as cells with
//! the current brush colors.

use std::collections::HashMap;

use cellart_engine::{Cell, EngineError, Grid, Position, Rectangle, Result, Size};
use clipboard_rs::{Clipboard, ClipboardContext};

/// Access to a text clipboard.
pub trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
    fn get_text(&mut self) -> Result<String>;
}

/// The desktop clipboard.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Result<&ClipboardContext> {
        if self.ctx.is_none() {
            let ctx = ClipboardContext::new().map_err(|e| EngineError::clipboard(format!("failed to create clipboard context: {e}")))?;
            self.ctx = Some(ctx);
        }
        self.ctx.as_ref().ok_or_else(|| EngineError::clipboard("clipboard context unavailable"))
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.context()?
            .set_text(text.to_string())
            .map_err(|e| EngineError::clipboard(format!("failed to set clipboard: {e}")))
    }

    fn get_text(&mut self) -> Result<String> {
        self.context()?
            .get_text()
            .map_err(|e| EngineError::clipboard(format!("failed to get clipboard: {e}")))
    }
}

/// Process local clipboard, used headless and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.text = Some(text.to_string());
        Ok(())
    }

    fn get_text(&mut self) -> Result<String> {
        self.text.clone().ok_or_else(|| EngineError::clipboard("clipboard is empty"))
    }
}

/// Copied cells relative to the top left of their bounds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellClipboard {
    pub size: Size,
    pub cells: HashMap<Position, Cell>,
}

impl CellClipboard {
    /// Copies the stored cells at `positions`. `None` if nothing is selected.
    pub fn copy_from(grid: &Grid, positions: &[Position]) -> Option<Self> {
        let first = *positions.first()?;
        let (min, max) = positions.iter().fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
        let cells = positions.iter().filter_map(|pos| grid.cell(*pos).map(|cell| (*pos, *cell)));
        Some(Self::from_cells(Rectangle::from_corners(min, max), cells))
    }

    /// Cells given in canvas coordinates, made relative to `bounds`.
    pub fn from_cells(bounds: Rectangle, cells: impl IntoIterator<Item = (Position, Cell)>) -> Self {
        let origin = bounds.top_left();
        Self {
            size: bounds.size,
            cells: cells.into_iter().map(|(pos, cell)| (pos - origin, cell)).collect(),
        }
    }

    /// Builds cells from plain text, one row per line.
    pub fn from_text(text: &str, template: Cell) -> Self {
        let mut cells = HashMap::new();
        let mut width = 0;
        let mut height = 0;
        for (y, line) in text.lines().enumerate() {
            let mut row_width = 0;
            for (x, ch) in line.chars().enumerate() {
                row_width = x as i32 + 1;
                if ch.is_control() {
                    continue;
                }
                let mut cell = template;
                cell.ch = ch;
                if !cell.is_blank() {
                    cells.insert(Position::new(x as i32, y as i32), cell);
                }
            }
            width = width.max(row_width);
            height = y as i32 + 1;
        }
        Self {
            size: Size::new(width, height),
            cells,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Plain text rendering, trailing blanks trimmed.
    pub fn to_text(&self) -> String {
        let mut grid = Grid::new(self.size.width, self.size.height);
        for (pos, cell) in &self.cells {
            grid.set_cell(*pos, *cell);
        }
        grid.to_text(grid.rectangle())
    }

    /// The cells placed with their top left corner at `origin`.
    pub fn placed_at(&self, origin: Position) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().map(move |(pos, cell)| (*pos + origin, *cell))
    }
}
