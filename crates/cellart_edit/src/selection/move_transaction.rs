use std::collections::HashMap;

use cellart_engine::{Cell, Grid, Position};
use super::Selection;

/// Staged relocation of the content under a selection.
///
/// The grid is not touched until [`MoveTransaction::apply`]; until then the moved
/// content only exists here and is shown through [`MoveTransaction::moved_cells`].
/// The total displacement is `base_offset + current_offset`.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveTransaction {
    /// Non blank cells captured from under the selection
    original: HashMap<Position, Cell>,
    anchor: Position,
    base_offset: Position,
    current_offset: Position,
    dragging: bool,
}

impl MoveTransaction {
    /// Captures the stored cells covered by `selection`.
    pub fn capture(grid: &Grid, selection: &Selection) -> Self {
        let original = selection
            .cells(grid)
            .into_iter()
            .filter_map(|pos| grid.cell(pos).map(|cell| (pos, *cell)))
            .collect();
        Self {
            original,
            anchor: Position::ZERO,
            base_offset: Position::ZERO,
            current_offset: Position::ZERO,
            dragging: false,
        }
    }

    pub fn original_cells(&self) -> &HashMap<Position, Cell> {
        &self.original
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    pub fn base_offset(&self) -> Position {
        self.base_offset
    }

    pub fn current_offset(&self) -> Position {
        self.current_offset
    }

    pub fn total_offset(&self) -> Position {
        self.base_offset + self.current_offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Starts (or resumes) a drag at `pos`. The offset accumulated so far is
    /// subtracted from the anchor so the content does not jump.
    pub fn begin_drag(&mut self, pos: Position) {
        self.anchor = pos - self.current_offset;
        self.dragging = true;
    }

    pub fn drag_to(&mut self, pos: Position) {
        if self.dragging {
            self.current_offset = pos - self.anchor;
        }
    }

    /// Ends the drag, folding the current offset into the base offset.
    pub fn end_drag(&mut self) {
        if !self.dragging {
            return;
        }
        self.base_offset += self.current_offset;
        self.current_offset = Position::ZERO;
        self.dragging = false;
    }

    /// Discrete keyboard step.
    pub fn step(&mut self, delta: Position) {
        self.current_offset += delta;
    }

    /// The captured cells at their displaced positions.
    pub fn moved_cells(&self) -> HashMap<Position, Cell> {
        let offset = self.total_offset();
        self.original.iter().map(|(pos, cell)| (*pos + offset, *cell)).collect()
    }

    /// Writes the move into `grid`: the original cells are cleared first, then the
    /// captured cells are written at their displaced positions (out of bounds cells
    /// are dropped).
    pub fn apply(&self, grid: &mut Grid) {
        for pos in self.original.keys() {
            grid.clear_cell(*pos);
        }
        for (pos, cell) in self.moved_cells() {
            grid.set_cell(pos, cell);
        }
    }
}
