//=========================================================================
// Logic Thread Bridge
//=========================================================================
//
// Boundary to the logic thread's timer registry.
//
// The registry itself (scheduling, firing) lives with the simulation;
// this crate only defines the contract and the scoped `AppTimer` handle
// built on top of it. All registry calls happen on the logic thread.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod app_timer;

//=== External Dependencies ===============================================

use std::fmt;
use std::time::Duration;

//=== Public API ==========================================================

pub use app_timer::AppTimer;

//=== TimerId =============================================================

/// Opaque registry slot identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u32);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

//=== TimerAction =========================================================

/// Callback fired by the registry. `FnMut` because repeating timers fire
/// more than once; no `Send` bound since it never leaves the logic thread.
pub type TimerAction = Box<dyn FnMut() + 'static>;

//=== LogicTimers =========================================================

/// Logic-thread timer registry.
pub trait LogicTimers {
    /// True iff the calling thread is the logic thread.
    fn in_logic_thread(&self) -> bool;

    fn new_app_timer(&self, length: Duration, repeat: bool, action: TimerAction) -> TimerId;
    fn set_app_timer_length(&self, id: TimerId, length: Duration);
    fn delete_app_timer(&self, id: TimerId);
}
