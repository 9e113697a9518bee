use std::thread::{self, ThreadId};

/// Records the engine UI thread so entry points can check they run on it.
#[derive(Debug, Clone, Copy)]
pub struct UiThread {
    owner: ThreadId,
}

impl UiThread {
    /// Capture the calling thread as the UI thread.
    pub fn current() -> Self {
        Self {
            owner: thread::current().id(),
        }
    }

    pub fn is_current(&self) -> bool {
        thread::current().id() == self.owner
    }

    /// Debug-build check that the caller is on the UI thread.
    #[track_caller]
    pub fn assert_current(&self) {
        debug_assert!(self.is_current(), "must be called on the engine UI thread");
    }
}
