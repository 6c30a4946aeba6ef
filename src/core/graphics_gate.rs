//=========================================================================
// Graphics Gate
//=========================================================================
//
// Flag marking the sanctioned render window, plus the scoped guard that
// opens it.
//
// Only the graphics thread writes the flag. It sits in an AtomicBool so
// the shared dispatch state stays Sync; relaxed ordering is sufficient.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::atomic::{AtomicBool, Ordering};

//=== GraphicsGate ========================================================

/// True only while a render pass is active on the graphics thread.
#[derive(Debug, Default)]
pub struct GraphicsGate {
    allowed: AtomicBool,
}

impl GraphicsGate {
    /// Creates a closed gate.
    pub fn new() -> Self {
        Self {
            allowed: AtomicBool::new(false),
        }
    }

    /// Returns true if graphics calls are currently sanctioned.
    pub fn is_allowed(&self) -> bool {
        self.allowed.load(Ordering::Relaxed)
    }

    /// Panics unless a render pass is active.
    ///
    /// # Panics
    ///
    /// Panics if `op` is issued outside a [`ScopedAllowGraphics`] scope.
    pub fn assert_allowed(&self, op: &str) {
        assert!(
            self.is_allowed(),
            "Graphics operation '{}' issued outside a render pass",
            op
        );
    }

    fn replace(&self, allowed: bool) -> bool {
        self.allowed.swap(allowed, Ordering::Relaxed)
    }
}

//=== ScopedAllowGraphics =================================================

/// Opens a [`GraphicsGate`] for the guard's lifetime.
///
/// The previous value is restored on drop, which covers early returns
/// and panic unwinding as well as normal scope exit.
#[must_use = "the gate closes again as soon as the guard is dropped"]
pub struct ScopedAllowGraphics<'a> {
    gate: &'a GraphicsGate,
    previous: bool,
}

impl<'a> ScopedAllowGraphics<'a> {
    pub fn new(gate: &'a GraphicsGate) -> Self {
        let previous = gate.replace(true);
        Self { gate, previous }
    }
}

impl Drop for ScopedAllowGraphics<'_> {
    fn drop(&mut self) {
        self.gate.replace(self.previous);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
