//! Frame scheduling seam.
//!
//! The engine never owns a timer. It asks the host's scheduler for the next
//! display frame and hands the handle back when it cancels. A host on a
//! windowing toolkit implements [`FrameScheduler`] over its redraw request;
//! tests and headless hosts use [`ManualScheduler`].

use std::collections::BTreeSet;

/// Token for one requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

pub trait FrameScheduler {
    /// Request a callback on the next display frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Release a pending request. Cancelling a handle that already fired or
    /// was already cancelled is a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Deterministic scheduler: frames fire only when the host drains them.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: BTreeSet<FrameHandle>,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending handle, oldest first. The caller dispatches each
    /// one to the engine that requested it.
    pub fn drain(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains(&handle)
    }

    /// Total frames ever requested.
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Total pending frames released through `cancel_frame`.
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.insert(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending.remove(&handle) {
            self.cancelled += 1;
        }
    }
}
