//! Debounced write back of the working grid into the frame store
//!
//! Edits land in the working [`Grid`] immediately. The frame store only receives
//! a snapshot once no further edit arrived for the debounce interval
//! (trailing edge), or when the editor flushes explicitly before switching frames.

use std::time::{Duration, Instant};

use cellart_engine::Grid;

use crate::frames::FrameStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingWrite {
    frame: usize,
    deadline: Instant,
}

#[derive(Clone, Debug)]
pub struct FrameSync {
    debounce: Duration,
    pending: Option<PendingWrite>,
}

impl FrameSync {
    pub fn new(debounce: Duration) -> Self {
        Self { debounce, pending: None }
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn set_debounce(&mut self, debounce: Duration) {
        self.debounce = debounce;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_frame(&self) -> Option<usize> {
        self.pending.map(|p| p.frame)
    }

    /// Records an edit of `frame` at `now`, pushing the deadline out.
    pub fn mark_dirty(&mut self, frame: usize, now: Instant) {
        if let Some(pending) = self.pending {
            if pending.frame != frame {
                // the editor flushes before switching frames, so this means an edit got lost
                log::warn!("frame sync: pending write for frame {} replaced by frame {frame}", pending.frame);
            }
        }
        self.pending = Some(PendingWrite {
            frame,
            deadline: now + self.debounce,
        });
    }

    /// Writes `grid` into the store if the deadline has passed. Returns whether a write happened.
    pub fn tick<S: FrameStore>(&mut self, now: Instant, store: &mut S, grid: &Grid) -> bool {
        match self.pending {
            Some(pending) if now >= pending.deadline => self.flush(store, grid),
            _ => false,
        }
    }

    /// Writes any pending change synchronously.
    pub fn flush<S: FrameStore>(&mut self, store: &mut S, grid: &Grid) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        if !store.set_frame_data(pending.frame, grid.snapshot()) {
            log::warn!("frame sync: frame {} no longer exists, dropping write", pending.frame);
            return false;
        }
        log::debug!("frame sync: wrote {} cells to frame {}", grid.len(), pending.frame);
        true
    }

    /// Forgets the pending write without storing it.
    pub fn discard(&mut self) {
        self.pending = None;
    }
}
