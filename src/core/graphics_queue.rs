//=========================================================================
// Graphics Call Queue
//=========================================================================
//
// Mutex-guarded FIFO of runnables destined for the graphics thread.
//
// Architecture:
//   any thread ──push()──> Mutex<Vec<Runnable>>
//                               ↓ (swap under lock)
//   graphics thread ──drain()──> run in FIFO order, lock released
//
// Runnables never execute while the lock is held, so a runnable may
// safely push more work; that work lands in the next drain.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::Runnable;

//=== GraphicsCallQueue ===================================================

/// Unbounded, thread-safe FIFO of pending graphics calls.
///
/// Unexecuted runnables still queued when the queue is dropped are
/// discarded with a warning; the rendering context may already be gone
/// at that point.
#[derive(Debug, Default)]
pub struct GraphicsCallQueue {
    calls: Mutex<Vec<Runnable>>,
}

impl GraphicsCallQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Appends a runnable. Callable from any thread; never blocks beyond
    /// the O(1) critical section.
    pub fn push(&self, runnable: Runnable) {
        self.lock().push(runnable);
    }

    /// Runs every runnable queued at call time, in push order.
    ///
    /// Returns the number of runnables executed.
    pub fn drain(&self) -> usize {
        let calls = std::mem::take(&mut *self.lock());
        let count = calls.len();

        if count > 0 {
            trace!(target: "adapter::graphics", "Running {} queued graphics calls", count);
        }

        for call in calls {
            call.run();
        }

        count
    }

    /// Returns the number of runnables waiting.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Runnable>> {
        // Runnables run outside the lock, so a poisoned vec is still consistent.
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for GraphicsCallQueue {
    fn drop(&mut self) {
        let calls = self.calls.get_mut().unwrap_or_else(PoisonError::into_inner);
        if !calls.is_empty() {
            warn!(
                target: "adapter::graphics",
                "Dropping {} unexecuted graphics calls at shutdown",
                calls.len()
            );
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
