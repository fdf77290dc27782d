use std::time::Instant;

use cellart_engine::{EngineError, Result};

use crate::frames::{Frame, FrameStore};
use crate::playback::{CancelToken, Playback};

use super::{EditState, EditorUndoOp};

impl EditState {
    /// Finishes everything that could still write into the active frame.
    pub(crate) fn prepare_frame_change(&mut self) {
        self.commit_move();
        self.settle();
    }

    fn check_frame(&self, index: usize) -> Result<()> {
        if index >= self.frames.len() {
            return Err(EngineError::FrameOutOfRange {
                index,
                max: self.frames.len(),
            });
        }
        Ok(())
    }

    /// Inserts an empty frame after the active one and switches to it.
    pub fn add_frame(&mut self) -> Result<()> {
        self.prepare_frame_change();
        let index = self.current_frame + 1;
        let frame = Frame::new(self.frames.next_frame_name(), self.settings.default_frame_duration_ms);
        self.push_undo_action(EditorUndoOp::AddFrame {
            index,
            frame,
            prev_current: self.current_frame,
            new_current: index,
        })
    }

    /// Inserts a copy of `source` right after it and switches to the copy.
    pub fn duplicate_frame(&mut self, source: usize) -> Result<()> {
        self.prepare_frame_change();
        self.check_frame(source)?;
        let mut frame = self.frames.get(source).cloned().ok_or(EngineError::FrameOutOfRange {
            index: source,
            max: self.frames.len(),
        })?;
        frame.name = format!("{} copy", frame.name);
        let index = source + 1;
        self.push_undo_action(EditorUndoOp::DuplicateFrame {
            source,
            index,
            frame,
            prev_current: self.current_frame,
            new_current: index,
        })
    }

    /// Removes a frame. The last remaining frame cannot be deleted.
    pub fn delete_frame(&mut self, index: usize) -> Result<()> {
        self.prepare_frame_change();
        self.check_frame(index)?;
        if self.frames.len() == 1 {
            return Err(EngineError::LastFrame);
        }
        let frame = self.frames.get(index).cloned().ok_or(EngineError::FrameOutOfRange {
            index,
            max: self.frames.len(),
        })?;
        let current = self.current_frame;
        let new_current = if current > index { current - 1 } else { current.min(self.frames.len() - 2) };
        self.push_undo_action(EditorUndoOp::DeleteFrame {
            index,
            frame,
            prev_current: current,
            new_current,
        })
    }

    /// Moves the frame at `from` to `to`. The active frame stays active.
    pub fn reorder_frames(&mut self, from: usize, to: usize) -> Result<()> {
        self.prepare_frame_change();
        self.check_frame(from)?;
        self.check_frame(to)?;
        if from == to {
            return Ok(());
        }
        let current = self.current_frame;
        let new_current = if current == from {
            to
        } else if from < current && to >= current {
            current - 1
        } else if from > current && to <= current {
            current + 1
        } else {
            current
        };
        self.push_undo_action(EditorUndoOp::ReorderFrames {
            from,
            to,
            prev_current: current,
            new_current,
        })
    }

    pub fn set_frame_duration(&mut self, index: usize, duration_ms: u32) -> Result<()> {
        self.check_frame(index)?;
        let old = self.frames.get(index).map_or(duration_ms, |f| f.duration_ms);
        if old == duration_ms {
            return Ok(());
        }
        self.prepare_frame_change();
        self.push_undo_action(EditorUndoOp::UpdateDuration {
            index,
            old,
            new: duration_ms,
            current: self.current_frame,
        })
    }

    pub fn rename_frame(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        self.check_frame(index)?;
        let name = name.into();
        let old = self.frames.get(index).map(|f| f.name.clone()).unwrap_or_default();
        if old == name {
            return Ok(());
        }
        self.prepare_frame_change();
        self.push_undo_action(EditorUndoOp::UpdateName {
            index,
            old,
            new: name,
            current: self.current_frame,
        })
    }

    /// Switches the active frame, flushing the active one first.
    pub fn navigate_to_frame(&mut self, index: usize) -> Result<()> {
        self.check_frame(index)?;
        if index == self.current_frame {
            return Ok(());
        }
        self.prepare_frame_change();
        log::debug!("navigate: frame {} -> {index}", self.current_frame);
        self.push_undo_action(EditorUndoOp::NavigateFrame {
            from: self.current_frame,
            to: index,
        })
    }

    pub fn next_frame(&mut self) -> Result<()> {
        let next = (self.current_frame + 1) % self.frames.len();
        self.navigate_to_frame(next)
    }

    pub fn previous_frame(&mut self) -> Result<()> {
        let prev = self.current_frame.checked_sub(1).unwrap_or(self.frames.len() - 1);
        self.navigate_to_frame(prev)
    }

    // === Timeline clipboard ===

    pub(crate) fn copy_frame(&mut self) -> bool {
        self.prepare_frame_change();
        self.frame_clipboard = self.frames.get(self.current_frame).cloned();
        self.frame_clipboard.is_some()
    }

    /// Inserts the copied frame after the active one.
    pub(crate) fn paste_frame(&mut self) -> Result<bool> {
        let Some(frame) = self.frame_clipboard.clone() else {
            return Ok(false);
        };
        self.prepare_frame_change();
        let index = self.current_frame + 1;
        self.push_undo_action(EditorUndoOp::AddFrame {
            index,
            frame,
            prev_current: self.current_frame,
            new_current: index,
        })?;
        Ok(true)
    }

    // === Playback ===

    /// Starts looping playback from the active frame. Frame switches made by
    /// playback are not recorded in history.
    pub fn start_playback(&mut self, now: Instant) -> CancelToken {
        self.prepare_frame_change();
        let playback = Playback::start(self.current_frame, now);
        let token = playback.token();
        self.playback = Some(playback);
        token
    }

    pub fn stop_playback(&mut self) {
        if let Some(playback) = self.playback.take() {
            playback.cancel();
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playback.as_ref().is_some_and(Playback::is_running)
    }

    /// Content of frame `index` as stored in the frame list, with pending edits flushed.
    pub fn frame_snapshot(&mut self, index: usize) -> Option<cellart_engine::GridSnapshot> {
        self.flush();
        self.frames.frame_data(index)
    }
}
