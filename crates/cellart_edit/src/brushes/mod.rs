//! Rasterizer and brush library for character cell drawing
//!
//! The shape functions are pure: they produce the set of cells a tool touches
//! and never read the grid. [`DrawContext`] then plots those cells onto any
//! [`DrawTarget`] using the current brush.
//!
//! # Features
//! - Line drawing (Bresenham, direction independent)
//! - Rectangle outline and fill
//! - Ellipse outline and fill
//! - Attribute toggles deciding which parts of a cell a brush overwrites
//!
//! # Example
//! ```ignore
//! use cellart_edit::brushes::{DrawContext, line::draw_line};
//! use cellart_engine::{Grid, Position};
//!
//! let ctx = DrawContext::default();
//! let mut grid = Grid::new(80, 24);
//! draw_line(&mut grid, &ctx, Position::new(0, 0), Position::new(10, 5));
//! ```

pub mod ellipse;
pub mod line;
pub mod rectangle;

pub use ellipse::{get_ellipse_points, get_filled_ellipse_points};
pub use line::get_line_points;
pub use rectangle::{get_filled_rectangle_points, get_rectangle_points};

use cellart_engine::{Cell, CellAttributes, Color, Grid, Position};
use serde::{Deserialize, Serialize};

/// A trait for targets that can be drawn on
///
/// This abstraction allows the brush algorithms to work with
/// any grid-like structure, e.g. a preview overlay.
pub trait DrawTarget {
    /// Get the width of the drawable area
    fn width(&self) -> i32;

    /// Get the height of the drawable area
    fn height(&self) -> i32;

    /// Get the cell at a position
    fn cell_at(&self, pos: Position) -> Cell;

    /// Set the cell at a position
    fn put_cell(&mut self, pos: Position, cell: Cell);

    /// Remove the cell at a position
    fn erase_cell(&mut self, pos: Position);

    /// Check if a position is within bounds
    fn is_valid(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width() && pos.y < self.height()
    }
}

impl DrawTarget for Grid {
    fn width(&self) -> i32 {
        Grid::width(self)
    }

    fn height(&self) -> i32 {
        Grid::height(self)
    }

    fn cell_at(&self, pos: Position) -> Cell {
        self.get_cell(pos)
    }

    fn put_cell(&mut self, pos: Position, cell: Cell) {
        self.set_cell(pos, cell);
    }

    fn erase_cell(&mut self, pos: Position) {
        self.clear_cell(pos);
    }
}

/// What plotting a point does
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushMode {
    /// Write the brush cell, limited to the affected attributes
    #[default]
    Draw,
    /// Clear the cell
    Erase,
}

/// Context for drawing operations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawContext {
    pub mode: BrushMode,

    /// The cell written by the brush
    pub brush: Cell,

    /// Which attributes of the target cell are overwritten
    pub affects: CellAttributes,
}

impl Default for DrawContext {
    fn default() -> Self {
        Self {
            mode: BrushMode::Draw,
            brush: Cell::new('#', Color::WHITE, None),
            affects: CellAttributes::all(),
        }
    }
}

impl DrawContext {
    /// Create a new draw context with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: BrushMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_char(mut self, ch: char) -> Self {
        self.brush.ch = ch;
        self
    }

    pub fn with_foreground(mut self, fg: Color) -> Self {
        self.brush.fg = fg;
        self
    }

    pub fn with_background(mut self, bg: Option<Color>) -> Self {
        self.brush.bg = bg;
        self
    }

    pub fn with_affects(mut self, affects: CellAttributes) -> Self {
        self.affects = affects;
        self
    }

    /// The cell that plotting onto `current` produces
    pub fn apply_to(&self, current: Cell) -> Cell {
        match self.mode {
            BrushMode::Draw => current.merged(&self.brush, self.affects),
            BrushMode::Erase => Cell::default(),
        }
    }

    /// Plot a single point using the current brush settings
    pub fn plot_point<T: DrawTarget>(&self, target: &mut T, pos: Position) {
        if !target.is_valid(pos) {
            return;
        }
        match self.mode {
            BrushMode::Draw => {
                let cell = self.apply_to(target.cell_at(pos));
                target.put_cell(pos, cell);
            }
            BrushMode::Erase => target.erase_cell(pos),
        }
    }

    pub fn plot_points<T: DrawTarget>(&self, target: &mut T, points: &[Position]) {
        for pt in points {
            self.plot_point(target, *pt);
        }
    }
}

/// Clamps `pos` so that the box from `anchor` to it is square, using the larger
/// delta for both axes and keeping each axis' direction.
pub fn constrain_square(anchor: Position, pos: Position) -> Position {
    let dx = pos.x - anchor.x;
    let dy = pos.y - anchor.y;
    let len = dx.abs().max(dy.abs());
    let sx = if dx < 0 { -1 } else { 1 };
    let sy = if dy < 0 { -1 } else { 1 };
    Position::new(anchor.x + sx * len, anchor.y + sy * len)
}
