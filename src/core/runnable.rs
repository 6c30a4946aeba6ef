//=========================================================================
// Runnable
//=========================================================================
//
// Owned, deferred unit of work.
//
// A Runnable is consumed by `run()`, so the type system guarantees it
// executes at most once. Ownership moves into whichever queue accepts it.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Runnable ============================================================

/// A boxed closure that runs exactly once on whichever thread consumes it.
pub struct Runnable {
    job: Box<dyn FnOnce() + Send + 'static>,
}

impl Runnable {
    /// Wraps a closure as a runnable.
    pub fn new<F>(job: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self { job: Box::new(job) }
    }

    /// Executes the runnable, consuming it.
    pub fn run(self) {
        (self.job)()
    }
}

impl fmt::Debug for Runnable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Runnable { .. }")
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
