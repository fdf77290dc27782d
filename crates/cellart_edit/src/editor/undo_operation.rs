//! Editor undo operations as serializable enum
//!
//! Every action carries everything it needs to be applied in both directions,
//! including which frame was active before and after, so undo/redo restores
//! navigation as well as content.

use cellart_engine::GridSnapshot;
use serde::{Deserialize, Serialize};

use crate::frames::{Frame, FrameStore};
use crate::Result;

use super::EditState;

/// Serializable editor undo operation enum
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EditorUndoOp {
    /// Content change of one frame. `snapshot` holds the content of the frame
    /// that is currently *not* applied: the pre edit content while the action
    /// is done, the post edit content while it is undone.
    GridEdit {
        description: String,
        frame: usize,
        snapshot: GridSnapshot,
    },

    /// Insert a new frame
    AddFrame {
        index: usize,
        frame: Frame,
        prev_current: usize,
        new_current: usize,
    },

    /// Insert a copy of `source`
    DuplicateFrame {
        source: usize,
        index: usize,
        frame: Frame,
        prev_current: usize,
        new_current: usize,
    },

    /// Remove a frame
    DeleteFrame {
        index: usize,
        frame: Frame,
        prev_current: usize,
        new_current: usize,
    },

    /// Move the frame at `from` to `to`
    ReorderFrames {
        from: usize,
        to: usize,
        prev_current: usize,
        new_current: usize,
    },

    /// Change a frame's display duration
    UpdateDuration { index: usize, old: u32, new: u32, current: usize },

    /// Rename a frame
    UpdateName {
        index: usize,
        old: String,
        new: String,
        current: usize,
    },

    /// Switch the active frame
    NavigateFrame { from: usize, to: usize },
}

impl EditorUndoOp {
    pub fn get_description(&self) -> String {
        match self {
            EditorUndoOp::GridEdit { description, .. } => description.clone(),
            EditorUndoOp::AddFrame { .. } => "Add frame".to_string(),
            EditorUndoOp::DuplicateFrame { source, .. } => format!("Duplicate frame {}", source + 1),
            EditorUndoOp::DeleteFrame { frame, .. } => format!("Delete frame '{}'", frame.name),
            EditorUndoOp::ReorderFrames { .. } => "Reorder frames".to_string(),
            EditorUndoOp::UpdateDuration { new, .. } => format!("Set frame duration to {new} ms"),
            EditorUndoOp::UpdateName { new, .. } => format!("Rename frame to '{new}'"),
            EditorUndoOp::NavigateFrame { to, .. } => format!("Go to frame {}", to + 1),
        }
    }

    /// Whether this operation changes document data (affects dirty flag)
    pub fn changes_data(&self) -> bool {
        !matches!(self, EditorUndoOp::NavigateFrame { .. })
    }

    pub fn undo(&mut self, edit_state: &mut EditState) -> Result<()> {
        match self {
            EditorUndoOp::GridEdit { frame, snapshot, .. } => swap_frame_content(edit_state, *frame, snapshot),
            EditorUndoOp::AddFrame { index, prev_current, .. } | EditorUndoOp::DuplicateFrame { index, prev_current, .. } => {
                edit_state.frames.remove(*index)?;
                edit_state.show_frame(*prev_current);
                Ok(())
            }
            EditorUndoOp::DeleteFrame {
                index, frame, prev_current, ..
            } => {
                edit_state.frames.insert(*index, frame.clone())?;
                edit_state.show_frame(*prev_current);
                Ok(())
            }
            EditorUndoOp::ReorderFrames { from, to, prev_current, .. } => {
                edit_state.frames.move_frame(*to, *from)?;
                edit_state.show_frame(*prev_current);
                Ok(())
            }
            EditorUndoOp::UpdateDuration { index, old, current, .. } => {
                edit_state.frames.set_duration(*index, *old)?;
                edit_state.show_frame(*current);
                Ok(())
            }
            EditorUndoOp::UpdateName { index, old, current, .. } => {
                edit_state.frames.set_name(*index, old.clone())?;
                edit_state.show_frame(*current);
                Ok(())
            }
            EditorUndoOp::NavigateFrame { from, .. } => {
                edit_state.show_frame(*from);
                Ok(())
            }
        }
    }

    pub fn redo(&mut self, edit_state: &mut EditState) -> Result<()> {
        match self {
            EditorUndoOp::GridEdit { frame, snapshot, .. } => swap_frame_content(edit_state, *frame, snapshot),
            EditorUndoOp::AddFrame {
                index, frame, new_current, ..
            }
            | EditorUndoOp::DuplicateFrame {
                index, frame, new_current, ..
            } => {
                edit_state.frames.insert(*index, frame.clone())?;
                edit_state.show_frame(*new_current);
                Ok(())
            }
            EditorUndoOp::DeleteFrame { index, new_current, .. } => {
                edit_state.frames.remove(*index)?;
                edit_state.show_frame(*new_current);
                Ok(())
            }
            EditorUndoOp::ReorderFrames { from, to, new_current, .. } => {
                edit_state.frames.move_frame(*from, *to)?;
                edit_state.show_frame(*new_current);
                Ok(())
            }
            EditorUndoOp::UpdateDuration { index, new, current, .. } => {
                edit_state.frames.set_duration(*index, *new)?;
                edit_state.show_frame(*current);
                Ok(())
            }
            EditorUndoOp::UpdateName { index, new, current, .. } => {
                edit_state.frames.set_name(*index, new.clone())?;
                edit_state.show_frame(*current);
                Ok(())
            }
            EditorUndoOp::NavigateFrame { to, .. } => {
                edit_state.show_frame(*to);
                Ok(())
            }
        }
    }
}

/// Exchanges the stored content of `frame` with `snapshot` and shows that frame.
/// A frame that no longer exists is skipped.
fn swap_frame_content(edit_state: &mut EditState, frame: usize, snapshot: &mut GridSnapshot) -> Result<()> {
    let Some(current) = edit_state.frames.frame_data(frame) else {
        log::warn!("history references frame {frame}, which no longer exists; skipping");
        let clamped = edit_state.current_frame;
        edit_state.show_frame(clamped);
        return Ok(());
    };
    edit_state.frames.set_frame_data(frame, std::mem::take(snapshot));
    *snapshot = current;
    edit_state.show_frame(frame);
    Ok(())
}
