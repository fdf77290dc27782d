//! Cooperative animation playback
//!
//! Playback never blocks or schedules itself. The host calls
//! [`Playback::tick`] from its event loop; the scheduler compares the elapsed
//! time against the active frame's duration and reports the frame to show next.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

/// Shared stop flag of a running playback.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

#[derive(Debug)]
pub struct Playback {
    token: CancelToken,
    frame: usize,
    frame_started: Instant,
}

impl Playback {
    /// Starts playing at `frame`.
    pub fn start(frame: usize, now: Instant) -> Self {
        log::debug!("playback started at frame {frame}");
        Self {
            token: CancelToken::new(),
            frame,
            frame_started: now,
        }
    }

    /// Token that stops this playback when cancelled.
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Advances past every frame whose duration has elapsed, looping at the end.
    /// `durations` holds the duration of every frame in order. Returns the new
    /// frame if it changed.
    pub fn tick(&mut self, now: Instant, durations: &[u32]) -> Option<usize> {
        if !self.is_running() || durations.is_empty() {
            return None;
        }
        let start_frame = self.frame;
        if self.frame >= durations.len() {
            self.frame = 0;
            self.frame_started = now;
        }
        loop {
            // zero length frames would never let the loop end
            let duration = Duration::from_millis(u64::from(durations[self.frame].max(1)));
            if now.duration_since(self.frame_started) < duration {
                break;
            }
            self.frame_started += duration;
            self.frame = (self.frame + 1) % durations.len();
        }
        (self.frame != start_frame).then_some(self.frame)
    }
}
