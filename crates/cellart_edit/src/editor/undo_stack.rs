use serde::{Deserialize, Serialize};

use crate::Result;

use super::EditorUndoOp;

pub trait UndoState {
    fn undo_description(&self) -> Option<String>;
    fn can_undo(&self) -> bool;
    /// Reverts the most recent action.
    ///
    /// # Errors
    ///
    /// Returns an error if the action cannot be applied to the current frames.
    fn undo(&mut self) -> Result<()>;

    fn redo_description(&self) -> Option<String>;
    fn can_redo(&self) -> bool;
    /// Re-applies the most recently undone action.
    ///
    /// # Errors
    ///
    /// Returns an error if the action cannot be applied to the current frames.
    fn redo(&mut self) -> Result<()>;
}

/// Action history. The undo stack holds applied actions, the redo stack the
/// undone ones; the length of the undo stack is the history cursor.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EditorUndoStack {
    undo_stack: Vec<EditorUndoOp>,
    redo_stack: Vec<EditorUndoOp>,
    /// 0 is unlimited
    #[serde(default)]
    max_depth: usize,
}

impl EditorUndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
        self.trim();
    }

    /// Records a new action. The redo tail is discarded.
    pub fn push(&mut self, op: EditorUndoOp) {
        log::debug!("history: push '{}'", op.get_description());
        self.undo_stack.push(op);
        self.redo_stack.clear();
        self.trim();
    }

    fn trim(&mut self) {
        if self.max_depth > 0 && self.undo_stack.len() > self.max_depth {
            let excess = self.undo_stack.len() - self.max_depth;
            self.undo_stack.drain(..excess);
        }
    }

    pub fn pop_undo(&mut self) -> Option<EditorUndoOp> {
        self.undo_stack.pop()
    }

    /// Puts back an action after it has been undone.
    pub fn push_redo(&mut self, op: EditorUndoOp) {
        self.redo_stack.push(op);
    }

    pub fn pop_redo(&mut self) -> Option<EditorUndoOp> {
        self.redo_stack.pop()
    }

    /// Puts back an action after it has been redone, keeping the redo tail.
    pub fn push_undo(&mut self, op: EditorUndoOp) {
        self.undo_stack.push(op);
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.last().map(EditorUndoOp::get_description)
    }

    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(EditorUndoOp::get_description)
    }
}
