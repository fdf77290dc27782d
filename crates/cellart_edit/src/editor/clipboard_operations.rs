use cellart_engine::{Position, Rectangle};

use crate::clipboard::CellClipboard;
use crate::selection::Selection;
use crate::tools::EditTarget;
use crate::Result;

use super::EditState;

impl EditState {
    /// The selected content as currently displayed, including a staged move.
    fn selected_content(&self) -> Option<CellClipboard> {
        let selection = self.selection.selection()?;
        match self.selection.transaction() {
            Some(transaction) => {
                let bounds = self.selection.bounds()?;
                Some(CellClipboard::from_cells(bounds, transaction.moved_cells()))
            }
            None => CellClipboard::copy_from(&self.grid, &selection.cells(&self.grid)),
        }
    }

    /// Copies the selection (or the active frame on the timeline). The text
    /// rendering also goes to the system clipboard; failing that is logged only.
    pub fn copy(&mut self) -> bool {
        if self.edit_target == EditTarget::Timeline {
            return self.copy_frame();
        }
        let Some(content) = self.selected_content() else {
            return false;
        };
        if let Err(err) = self.clipboard.set_text(&content.to_text()) {
            log::warn!("copy: {err}");
        }
        self.cell_clipboard = Some(content);
        true
    }

    /// Copy, then delete what was copied.
    pub fn cut(&mut self) -> Result<bool> {
        if !self.copy() {
            return Ok(false);
        }
        self.delete_selection()
    }

    /// Content to paste: the internal clipboard unless the system clipboard
    /// holds different text, which is then pasted with the brush colors.
    fn paste_content(&mut self) -> Option<CellClipboard> {
        let text = match self.clipboard.get_text() {
            Ok(text) => Some(text),
            Err(err) => {
                log::warn!("paste: {err}");
                None
            }
        };
        match (text, &self.cell_clipboard) {
            (Some(text), Some(internal)) if text == internal.to_text() => Some(internal.clone()),
            (Some(text), _) if !text.is_empty() => Some(CellClipboard::from_text(&text, self.brush.brush)),
            (_, internal) => internal.clone(),
        }
    }

    /// Pastes with the top left corner at `pos` and selects the pasted area.
    pub fn paste_at(&mut self, pos: impl Into<Position>) -> Result<bool> {
        if self.edit_target == EditTarget::Timeline {
            return self.paste_frame();
        }
        let pos = pos.into();
        self.commit_move();
        let Some(content) = self.paste_content() else {
            return Ok(false);
        };
        if content.size.width <= 0 || content.size.height <= 0 {
            return Ok(false);
        }
        let before = self.grid.snapshot();
        for (p, cell) in content.placed_at(pos) {
            self.grid.set_cell(p, cell);
        }
        self.push_grid_edit("Paste", before);
        let bounds = Rectangle::from_min_size(pos, content.size);
        self.selection.set_selection(Selection::rectangle(bounds.top_left(), bounds.bottom_right()));
        Ok(true)
    }

    /// Pastes at the selection's top left corner, or at the origin.
    pub fn paste(&mut self) -> Result<bool> {
        let pos = self.selection_bounds().map_or(Position::ZERO, |r| r.top_left());
        self.paste_at(pos)
    }
}
