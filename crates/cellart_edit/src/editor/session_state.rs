//! Session state for the editor
//!
//! Contains everything needed to resume an editing session on top of the same
//! frames:
//! - Undo/redo stack
//! - Active frame
//! - Selected tool, brush and fill settings
//! - Gradient definition

use serde::{Deserialize, Serialize};

use crate::brushes::DrawContext;
use crate::gradient::GradientDefinition;
use crate::tools::{EditTarget, Tool};
use crate::Result;

use super::{EditState, EditorUndoStack, FillSettings};

/// Session state for the editor
///
/// The frames themselves are not part of the session; the history refers to
/// them by index, so a session must be restored onto the frames it was taken from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EditorSessionState {
    /// Version for future compatibility
    #[serde(default = "default_version")]
    pub version: u32,

    /// The undo/redo stack
    pub undo_stack: EditorUndoStack,

    #[serde(default)]
    pub current_frame: usize,

    #[serde(default)]
    pub tool: Tool,

    #[serde(default)]
    pub brush: DrawContext,

    #[serde(default)]
    pub fill: FillSettings,

    #[serde(default)]
    pub wand: FillSettings,

    #[serde(default)]
    pub gradient: GradientDefinition,

    #[serde(default)]
    pub edit_target: EditTarget,
}

fn default_version() -> u32 {
    1
}

impl EditorSessionState {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl EditState {
    /// Captures the session. Pending typing and a staged move are recorded first.
    pub fn session_state(&mut self) -> EditorSessionState {
        self.commit_move();
        self.settle();
        EditorSessionState {
            version: default_version(),
            undo_stack: self.undo_stack.clone(),
            current_frame: self.current_frame,
            tool: self.tool,
            brush: self.brush,
            fill: self.fill,
            wand: self.wand,
            gradient: self.gradient.clone(),
            edit_target: self.edit_target,
        }
    }

    pub fn restore_session(&mut self, state: EditorSessionState) {
        self.settle();
        self.selection.clear();
        self.undo_stack = state.undo_stack;
        self.undo_stack.set_max_depth(self.settings.max_undo_depth);
        self.tool = state.tool;
        self.brush = state.brush;
        self.fill = state.fill;
        self.wand = state.wand;
        self.gradient = state.gradient;
        self.edit_target = state.edit_target;
        self.show_frame(state.current_frame);
    }
}
