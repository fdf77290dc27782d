pub mod undo_stack;
pub use undo_stack::*;

pub mod undo_operation;
pub use undo_operation::EditorUndoOp;

pub mod session_state;
pub use session_state::EditorSessionState;

mod clipboard_operations;
mod draw_operations;
pub use draw_operations::FillSettings;
mod frame_operations;
mod gradient_operations;
pub use gradient_operations::GradientSession;
mod selection_operations;
mod text_input;
pub use text_input::TypingSession;
mod tool_dispatch;

use std::time::Instant;

use cellart_engine::{Cell, Grid, GridSnapshot, Position, Rectangle};

use crate::{
    brushes::DrawContext,
    clipboard::{CellClipboard, ClipboardProvider, MemoryClipboard},
    frames::{Frame, FrameList, FrameStore},
    gradient::GradientDefinition,
    playback::Playback,
    selection::SelectionModel,
    settings::EditorSettings,
    sync::FrameSync,
    tools::{EditTarget, InputFocus, Tool},
    Result,
};

use draw_operations::{ShapeDraft, Stroke};

/// Owner of all editing state: the working grid of the active frame, the frame
/// list, history, selection and tool state.
///
/// The working grid holds the content of the active frame. Edits go to the
/// grid first and are written back into the frame list by [`FrameSync`]; every
/// path that switches frames or replays history flushes first.
pub struct EditState {
    settings: EditorSettings,

    grid: Grid,
    pub(crate) frames: FrameList,
    pub(crate) current_frame: usize,
    sync: FrameSync,

    undo_stack: EditorUndoStack,
    is_dirty: bool,

    selection: SelectionModel,

    tool: Tool,
    brush: DrawContext,
    fill: FillSettings,
    wand: FillSettings,
    gradient: GradientDefinition,
    edit_target: EditTarget,

    stroke: Option<Stroke>,
    shape: Option<ShapeDraft>,
    gradient_session: Option<GradientSession>,
    typing: Option<TypingSession>,

    cell_clipboard: Option<CellClipboard>,
    frame_clipboard: Option<Frame>,
    clipboard: Box<dyn ClipboardProvider>,

    playback: Option<Playback>,
}

impl Default for EditState {
    fn default() -> Self {
        Self::with_settings(EditorSettings::default())
    }
}

impl EditState {
    /// An editor with default settings and a `width` x `height` canvas.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_settings(EditorSettings {
            canvas_width: width,
            canvas_height: height,
            ..Default::default()
        })
    }

    pub fn with_settings(settings: EditorSettings) -> Self {
        let frames = FrameList::new(settings.default_frame_duration_ms);
        Self::from_frames(settings, frames)
    }

    /// An editor over existing frames, showing the first one.
    pub fn from_frames(settings: EditorSettings, frames: FrameList) -> Self {
        let mut grid = Grid::new(settings.canvas_width, settings.canvas_height);
        if let Some(data) = frames.frame_data(0) {
            grid.set_canvas_data(data);
        }
        Self {
            sync: FrameSync::new(settings.sync_debounce()),
            undo_stack: EditorUndoStack::with_max_depth(settings.max_undo_depth),
            settings,
            grid,
            frames,
            current_frame: 0,
            is_dirty: false,
            selection: SelectionModel::new(),
            tool: Tool::default(),
            brush: DrawContext::default(),
            fill: FillSettings::default(),
            wand: FillSettings::default(),
            gradient: GradientDefinition::default(),
            edit_target: EditTarget::default(),
            stroke: None,
            shape: None,
            gradient_session: None,
            typing: None,
            cell_clipboard: None,
            frame_clipboard: None,
            clipboard: Box::new(MemoryClipboard::new()),
            playback: None,
        }
    }

    /// Replaces the clipboard backend, e.g. with [`crate::clipboard::SystemClipboard`].
    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardProvider>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: EditorSettings) {
        self.sync.set_debounce(settings.sync_debounce());
        self.undo_stack.set_max_depth(settings.max_undo_depth);
        self.settings = settings;
    }

    /// The working grid of the active frame.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn get_cell(&self, pos: impl Into<Position>) -> Cell {
        self.grid.get_cell(pos)
    }

    pub fn frames(&self) -> &FrameList {
        &self.frames
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn brush(&self) -> &DrawContext {
        &self.brush
    }

    pub fn set_brush(&mut self, brush: DrawContext) {
        self.brush = brush;
    }

    pub fn fill_settings(&self) -> FillSettings {
        self.fill
    }

    pub fn set_fill_settings(&mut self, fill: FillSettings) {
        self.fill = fill;
    }

    pub fn wand_settings(&self) -> FillSettings {
        self.wand
    }

    pub fn set_wand_settings(&mut self, wand: FillSettings) {
        self.wand = wand;
    }

    pub fn gradient(&self) -> &GradientDefinition {
        &self.gradient
    }

    pub fn set_gradient(&mut self, gradient: GradientDefinition) {
        self.gradient = gradient;
        if let Some(session) = &mut self.gradient_session {
            session.refresh_area(&self.grid, &self.gradient);
        }
    }

    pub fn edit_target(&self) -> EditTarget {
        self.edit_target
    }

    pub fn set_edit_target(&mut self, edit_target: EditTarget) {
        self.edit_target = edit_target;
    }

    pub fn undo_stack(&self) -> &EditorUndoStack {
        &self.undo_stack
    }

    pub fn undo_stack_len(&self) -> usize {
        self.undo_stack.undo_len()
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn set_clean(&mut self) {
        self.is_dirty = false;
    }

    /// The cell the renderer shows at `pos`: the grid with a staged move
    /// overlaid (captured cells hidden at their origin, shown displaced).
    pub fn display_cell(&self, pos: impl Into<Position>) -> Cell {
        let pos = pos.into();
        if let Some(transaction) = self.selection.transaction() {
            let source = pos - transaction.total_offset();
            if let Some(cell) = transaction.original_cells().get(&source) {
                return *cell;
            }
            if transaction.original_cells().contains_key(&pos) {
                return Cell::default();
            }
        }
        self.grid.get_cell(pos)
    }

    /// Selection bounds at the displayed position.
    pub fn selection_bounds(&self) -> Option<Rectangle> {
        self.selection.bounds()
    }

    /// Offset of the staged move, zero without one.
    pub fn move_offset(&self) -> Position {
        self.selection.move_offset()
    }

    // === Frame sync ===

    fn mark_grid_changed(&mut self) {
        self.sync.mark_dirty(self.current_frame, Instant::now());
    }

    /// Writes a pending grid change into the frame list now.
    pub fn flush(&mut self) -> bool {
        self.sync.flush(&mut self.frames, &self.grid)
    }

    /// Advances time: writes back debounced edits and steps playback.
    pub fn tick(&mut self, now: Instant) {
        self.sync.tick(now, &mut self.frames, &self.grid);

        let Some(playback) = &mut self.playback else {
            return;
        };
        if !playback.is_running() {
            log::debug!("playback stopped at frame {}", self.current_frame);
            self.playback = None;
            return;
        }
        let durations: Vec<u32> = self.frames.iter().map(|f| f.duration_ms).collect();
        if let Some(frame) = playback.tick(now, &durations) {
            // edits in progress belong to the frame that is being left
            self.prepare_frame_change();
            self.show_frame(frame);
        }
    }

    /// Makes `index` (clamped) the active frame and loads its content into the
    /// working grid. Does not record history; the caller has flushed.
    pub(crate) fn show_frame(&mut self, index: usize) {
        let index = self.frames.clamp_index(index);
        if self.sync.is_pending() {
            self.sync.discard();
            log::warn!("show_frame: discarding unflushed edit of frame {}", self.current_frame);
        }
        self.current_frame = index;
        let data = self.frames.frame_data(index).unwrap_or_default();
        self.grid.set_canvas_data(data);
    }

    // === History plumbing ===

    /// Push and execute an undo operation
    pub(crate) fn push_undo_action(&mut self, mut op: EditorUndoOp) -> Result<()> {
        op.redo(self)?;
        self.push_plain_undo(op);
        Ok(())
    }

    /// Push an undo operation without executing it
    pub(crate) fn push_plain_undo(&mut self, op: EditorUndoOp) {
        if op.changes_data() {
            self.is_dirty = true;
        }
        self.undo_stack.push(op);
    }

    /// Records a grid edit of the active frame. `before` is the snapshot taken
    /// before mutating. Nothing is recorded if the content did not change.
    pub(crate) fn push_grid_edit(&mut self, description: &str, before: GridSnapshot) -> bool {
        if before == self.grid.snapshot() {
            return false;
        }
        self.push_plain_undo(EditorUndoOp::GridEdit {
            description: description.to_string(),
            frame: self.current_frame,
            snapshot: before,
        });
        self.mark_grid_changed();
        true
    }

    /// Brings the editor into a state where history can be replayed or frames
    /// restructured: pending typing is recorded, gestures in progress are
    /// finished or dropped, and the grid is written back.
    pub(crate) fn settle(&mut self) {
        self.end_typing();
        self.finish_stroke();
        self.shape = None;
        self.gradient_session = None;
        self.selection.cancel_freeform();
        self.flush();
    }
}

impl UndoState for EditState {
    fn undo_description(&self) -> Option<String> {
        if self.has_pending_typing() {
            return Some(text_input::TYPING_DESCRIPTION.to_string());
        }
        self.undo_stack.undo_description()
    }

    fn can_undo(&self) -> bool {
        self.has_pending_typing() || self.undo_stack.can_undo()
    }

    fn undo(&mut self) -> Result<()> {
        if self.selection.cancel_move() {
            log::debug!("undo: cancelled staged move");
        }
        self.settle();
        let Some(mut op) = self.undo_stack.pop_undo() else {
            return Ok(());
        };
        log::debug!("undo '{}'", op.get_description());
        if op.changes_data() {
            self.is_dirty = true;
        }
        let res = op.undo(self);
        self.undo_stack.push_redo(op);
        res
    }

    fn redo_description(&self) -> Option<String> {
        self.undo_stack.redo_description()
    }

    fn can_redo(&self) -> bool {
        self.undo_stack.can_redo()
    }

    fn redo(&mut self) -> Result<()> {
        if self.selection.cancel_move() {
            log::debug!("redo: cancelled staged move");
        }
        self.settle();
        let Some(mut op) = self.undo_stack.pop_redo() else {
            return Ok(());
        };
        log::debug!("redo '{}'", op.get_description());
        if op.changes_data() {
            self.is_dirty = true;
        }
        let res = op.redo(self);
        self.undo_stack.push_undo(op);
        res
    }
}

impl EditState {
    /// Aborts whatever gesture is in progress, without touching the grid except
    /// to revert an unfinished stroke. Returns whether the event was handled;
    /// with a text field focused nothing happens.
    pub fn cancel(&mut self, focus: InputFocus) -> bool {
        if focus == InputFocus::TextField {
            return false;
        }
        if self.selection.cancel_move() {
            log::debug!("cancel: move discarded");
            return true;
        }
        if self.gradient_session.take().is_some() {
            log::debug!("cancel: gradient discarded");
            return true;
        }
        if self.selection.cancel_freeform() {
            log::debug!("cancel: freeform path discarded");
            return true;
        }
        if self.shape.take().is_some() {
            log::debug!("cancel: shape preview discarded");
            return true;
        }
        if self.cancel_stroke() {
            log::debug!("cancel: stroke reverted");
            return true;
        }
        false
    }
}
