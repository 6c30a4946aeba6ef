//=========================================================================
// Thread Affinity
//=========================================================================
//
// Records which thread owns a resource.
//
// The owner is either fixed at construction or captured lazily by the
// first call to `bind_current()`. Once set it never changes.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::OnceLock;
use std::thread::{self, ThreadId};

//=== ThreadAffinity ======================================================

/// Lazily-captured owning thread.
#[derive(Debug, Default)]
pub struct ThreadAffinity {
    owner: OnceLock<ThreadId>,
}

impl ThreadAffinity {
    /// Creates an affinity with no owner yet.
    pub fn unbound() -> Self {
        Self {
            owner: OnceLock::new(),
        }
    }

    /// Creates an affinity owned by the calling thread.
    pub fn bound_to_current() -> Self {
        Self::bound_to(thread::current().id())
    }

    /// Creates an affinity owned by `id`.
    pub fn bound_to(id: ThreadId) -> Self {
        let owner = OnceLock::new();
        let _ = owner.set(id);
        Self { owner }
    }

    /// Claims the calling thread as owner if none is set yet.
    ///
    /// Returns true if the calling thread is (now) the owner.
    pub fn bind_current(&self) -> bool {
        let current = thread::current().id();
        *self.owner.get_or_init(|| current) == current
    }

    /// Returns true iff an owner is set and it is the calling thread.
    pub fn is_current(&self) -> bool {
        self.owner
            .get()
            .is_some_and(|owner| *owner == thread::current().id())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
