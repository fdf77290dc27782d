//! Animation frames and the frame store contract
//!
//! The editing core only needs two calls from whoever persists frames:
//! [`FrameStore::frame_data`] and [`FrameStore::set_frame_data`]. [`FrameList`]
//! is the in-memory store used by the editor and additionally supports the
//! structural operations (insert, remove, reorder) that the undo stack replays.

use cellart_engine::{EngineError, GridSnapshot, Result};
use serde::{Deserialize, Serialize};

/// Narrow persistence contract for per-frame grid snapshots.
pub trait FrameStore {
    /// Snapshot of the frame at `index`, `None` if there is no such frame.
    fn frame_data(&self, index: usize) -> Option<GridSnapshot>;

    /// Replaces the snapshot of the frame at `index`. Returns false if there is no such frame.
    fn set_frame_data(&mut self, index: usize, snapshot: GridSnapshot) -> bool;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub name: String,
    pub duration_ms: u32,
    pub data: GridSnapshot,
}

impl Frame {
    pub fn new(name: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            name: name.into(),
            duration_ms,
            data: GridSnapshot::new(),
        }
    }

    pub fn with_data(mut self, data: GridSnapshot) -> Self {
        self.data = data;
        self
    }
}

/// Ordered, never empty list of frames.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameList {
    frames: Vec<Frame>,
}

impl FrameList {
    /// A list holding one empty frame.
    pub fn new(default_duration_ms: u32) -> Self {
        Self {
            frames: vec![Frame::new("Frame 1", default_duration_ms)],
        }
    }

    /// Fails on an empty frame vector.
    pub fn from_frames(frames: Vec<Frame>) -> Result<Self> {
        if frames.is_empty() {
            return Err(EngineError::generic("a frame list needs at least one frame"));
        }
        Ok(Self { frames })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Frame> {
        self.frames.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    /// Largest valid index.
    pub fn last_index(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.last_index())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.frames.len() {
            return Err(EngineError::FrameOutOfRange {
                index,
                max: self.frames.len(),
            });
        }
        Ok(())
    }

    /// Inserts at `index`; `index == len()` appends.
    pub fn insert(&mut self, index: usize, frame: Frame) -> Result<()> {
        if index > self.frames.len() {
            return Err(EngineError::FrameOutOfRange {
                index,
                max: self.frames.len(),
            });
        }
        self.frames.insert(index, frame);
        Ok(())
    }

    /// Removes the frame at `index`. The last remaining frame cannot be removed.
    pub fn remove(&mut self, index: usize) -> Result<Frame> {
        self.check_index(index)?;
        if self.frames.len() == 1 {
            return Err(EngineError::LastFrame);
        }
        Ok(self.frames.remove(index))
    }

    /// Moves the frame at `from` so it ends up at `to`.
    pub fn move_frame(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        let frame = self.frames.remove(from);
        self.frames.insert(to, frame);
        Ok(())
    }

    pub fn set_duration(&mut self, index: usize, duration_ms: u32) -> Result<u32> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.frames[index].duration_ms, duration_ms))
    }

    pub fn set_name(&mut self, index: usize, name: String) -> Result<String> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.frames[index].name, name))
    }

    /// Name for a newly created frame that is not taken yet.
    pub fn next_frame_name(&self) -> String {
        let mut n = self.frames.len() + 1;
        loop {
            let name = format!("Frame {n}");
            if !self.frames.iter().any(|f| f.name == name) {
                return name;
            }
            n += 1;
        }
    }
}

impl FrameStore for FrameList {
    fn frame_data(&self, index: usize) -> Option<GridSnapshot> {
        self.frames.get(index).map(|f| f.data.clone())
    }

    fn set_frame_data(&mut self, index: usize, snapshot: GridSnapshot) -> bool {
        match self.frames.get_mut(index) {
            Some(frame) => {
                frame.data = snapshot;
                true
            }
            None => false,
        }
    }
}
