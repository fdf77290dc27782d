use cellart_engine::{Cell, GridSnapshot, Position};

use super::EditState;

pub(crate) const TYPING_DESCRIPTION: &str = "Typing";

/// Keyboard text entry at a cursor.
///
/// Typed characters are written at once, but their history entry is deferred:
/// a batch closes when a word boundary character is typed, on a new line or
/// when typing ends, so a word undoes as one unit.
#[derive(Clone, Debug, PartialEq)]
pub struct TypingSession {
    pub cursor: Position,
    /// Column a new line returns to
    line_start: i32,
    batch_before: Option<GridSnapshot>,
}

impl TypingSession {
    fn new(cursor: Position) -> Self {
        Self {
            cursor,
            line_start: cursor.x,
            batch_before: None,
        }
    }
}

impl EditState {
    /// Places the typing cursor, closing the current batch.
    pub fn begin_typing(&mut self, pos: impl Into<Position>) {
        self.end_typing();
        let pos = pos.into();
        if !self.grid.is_valid(pos) {
            return;
        }
        self.typing = Some(TypingSession::new(pos));
    }

    pub fn typing_session(&self) -> Option<&TypingSession> {
        self.typing.as_ref()
    }

    pub fn typing_cursor(&self) -> Option<Position> {
        self.typing.as_ref().map(|t| t.cursor)
    }

    pub(crate) fn has_pending_typing(&self) -> bool {
        self.typing.as_ref().is_some_and(|t| t.batch_before.is_some())
    }

    fn open_batch(&mut self) {
        let snapshot = self.grid.snapshot();
        if let Some(session) = &mut self.typing {
            if session.batch_before.is_none() {
                session.batch_before = Some(snapshot);
            }
        }
    }

    /// Records the open batch as one history entry.
    fn close_batch(&mut self) -> bool {
        let Some(before) = self.typing.as_mut().and_then(|t| t.batch_before.take()) else {
            return false;
        };
        self.push_grid_edit(TYPING_DESCRIPTION, before)
    }

    /// Writes `ch` with the brush colors at the cursor and advances it,
    /// wrapping to the next line at the right edge.
    pub fn type_char(&mut self, ch: char) -> bool {
        if self.typing.is_none() || ch.is_control() {
            return false;
        }
        self.open_batch();
        let fg = self.brush.brush.fg;
        let bg = self.brush.brush.bg;
        let width = self.grid.width();
        let Some(session) = &mut self.typing else {
            return false;
        };
        self.grid.set_cell(session.cursor, Cell::new(ch, fg, bg));
        session.cursor.x += 1;
        if session.cursor.x >= width {
            session.cursor = Position::new(session.line_start, session.cursor.y + 1);
        }
        if self.settings.is_word_boundary(ch) {
            self.close_batch();
        }
        true
    }

    /// Moves the cursor back one cell and clears it.
    pub fn backspace(&mut self) -> bool {
        match &self.typing {
            Some(session) if session.cursor.x > 0 => {}
            _ => return false,
        }
        self.open_batch();
        let Some(session) = &mut self.typing else {
            return false;
        };
        session.cursor.x -= 1;
        self.grid.clear_cell(session.cursor);
        true
    }

    /// Closes the batch and moves the cursor to the start of the next line.
    pub fn newline(&mut self) -> bool {
        if self.typing.is_none() {
            return false;
        }
        self.close_batch();
        if let Some(session) = &mut self.typing {
            session.cursor = Position::new(session.line_start, session.cursor.y + 1);
        }
        true
    }

    /// Records any pending batch and leaves typing mode.
    pub fn end_typing(&mut self) -> bool {
        let pushed = self.close_batch();
        self.typing = None;
        pushed
    }
}
