//! Per-frame event coalescing.
//!
//! High-frequency events (scroll) only mark a frame as pending. The first
//! mark asks the caller to schedule a flush; later marks are absorbed until
//! the flush runs. State is sampled at flush time, never at event time. The
//! scheduling primitive is the caller's choice: `requestAnimationFrame` in
//! the browser, a direct call in tests.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a flush as needed.
    ///
    /// Returns `true` when nothing was pending, meaning the caller must
    /// schedule a flush. Returns `false` when one is already scheduled.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// Consume the pending mark. Returns `false` if no flush was requested.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
