use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cancellation token for the pending scan cycle.
///
/// Cloned handles share one flag. Once cancelled, a cycle that was already
/// scheduled observes the flag before touching the surface and does nothing,
/// so teardown can never race a stale cycle.
#[derive(Debug, Clone)]
pub struct ScanTask {
    cancelled: Arc<AtomicBool>,
}

impl ScanTask {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Cancel the task. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Default for ScanTask {
    fn default() -> Self {
        Self::new()
    }
}
