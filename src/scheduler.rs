/*
 * Scheduler Module
 *
 * A cancellable repeating frame request. The host fires the clock once per
 * display refresh; whoever holds the pending handle gets to run a frame and
 * is expected to request the next one. At most one request is pending, so
 * frames never overlap. Cancelling the pending handle ends the repetition.
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct FrameClock {
    next_id: u64,
    pending: Option<FrameHandle>,
    fired: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    // Ask for the next frame; replaces any request already pending
    pub fn request(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    // Withdraw `handle` if it is still pending
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    // One display refresh: hand out the pending request, if any
    pub fn fire(&mut self) -> Option<FrameHandle> {
        let handle = self.pending.take()?;
        self.fired += 1;
        Some(handle)
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn frames_fired(&self) -> u64 {
        self.fired
    }
}
