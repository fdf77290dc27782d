use cellart_engine::Position;

use crate::selection::Selection;
use crate::tools::EditTarget;
use crate::Result;

use super::EditState;

impl EditState {
    pub fn is_something_selected(&self) -> bool {
        self.selection.is_something_selected()
    }

    /// Replaces the selection. A staged move is committed first.
    pub fn set_selection(&mut self, selection: Selection) {
        self.commit_move();
        self.selection.set_selection(selection);
    }

    pub fn select_rectangle(&mut self, start: impl Into<Position>, end: impl Into<Position>) {
        self.set_selection(Selection::rectangle(start, end));
    }

    pub fn select_all(&mut self) {
        let rect = self.grid.rectangle();
        if rect.is_empty() {
            return;
        }
        self.select_rectangle(rect.top_left(), rect.bottom_right());
    }

    /// Deselects. A staged move is committed first.
    pub fn clear_selection(&mut self) {
        self.commit_move();
        self.selection.clear();
    }

    /// Magic wand: selects the cells matching the cell at `pos` under the wand settings.
    pub fn select_matching(&mut self, pos: impl Into<Position>) {
        self.commit_move();
        let settings = self.wand;
        self.selection.select_matching(&self.grid, pos.into(), settings.contiguous, settings.criteria);
    }

    // === Moving ===

    /// Starts dragging the selected content. Returns false without a selection.
    pub fn begin_move_drag(&mut self, pos: impl Into<Position>) -> bool {
        self.selection.begin_move_drag(&self.grid, pos.into())
    }

    pub fn update_move_drag(&mut self, pos: impl Into<Position>) {
        self.selection.update_move_drag(pos.into());
    }

    pub fn end_move_drag(&mut self) {
        self.selection.end_move_drag();
    }

    /// Moves the selected content by one discrete step without committing.
    pub fn nudge_selection(&mut self, dx: i32, dy: i32) -> bool {
        self.selection.step(&self.grid, Position::new(dx, dy))
    }

    /// Writes a staged move into the grid as one history entry.
    ///
    /// Returns false if nothing was staged. A move that ended where it started
    /// leaves the grid and history untouched.
    pub fn commit_move(&mut self) -> bool {
        self.end_typing();
        let Some(transaction) = self.selection.take_transaction_for_commit() else {
            return false;
        };
        let offset = transaction.total_offset();
        if offset.is_zero() {
            log::debug!("commit: zero offset, nothing to write");
            return false;
        }
        let before = self.grid.snapshot();
        transaction.apply(&mut self.grid);
        log::debug!("commit: moved {} cells by {offset}", transaction.original_cells().len());
        self.push_grid_edit("Move selection", before)
    }

    /// Drops a staged move; the grid is not touched.
    pub fn cancel_move(&mut self) -> bool {
        self.selection.cancel_move()
    }

    /// Deletes the selected cells, or the active frame when the timeline is the edit target.
    pub fn delete_selection(&mut self) -> Result<bool> {
        match self.edit_target {
            EditTarget::Canvas => Ok(self.delete_selection_contents()),
            EditTarget::Timeline => self.delete_frame(self.current_frame).map(|()| true),
        }
    }

    /// Clears every selected cell as one history entry.
    pub fn delete_selection_contents(&mut self) -> bool {
        self.commit_move();
        let Some(selection) = self.selection.selection() else {
            return false;
        };
        let positions = selection.cells(&self.grid);
        let before = self.grid.snapshot();
        for pos in positions {
            self.grid.clear_cell(pos);
        }
        self.push_grid_edit("Delete", before)
    }
}
