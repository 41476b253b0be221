//! Response id allocation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic source of response ids.
///
/// Owned by the service and shared through `Arc`, so every handler draws
/// from the same sequence. Ids start at 1 and are never reused within a
/// process lifetime.
#[derive(Debug, Default)]
pub struct ResponseCounter {
    last: AtomicU64,
}

impl ResponseCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next id.
    pub fn next_id(&self) -> u64 {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Last id handed out, or 0 if none yet.
    pub fn current(&self) -> u64 {
        self.last.load(Ordering::SeqCst)
    }
}
