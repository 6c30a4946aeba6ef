//=========================================================================
// App Timer
//=========================================================================
//
// Scoped handle over one slot in the logic-thread timer registry.
//
// Lifecycle:
//   new()        ──> registry.new_app_timer()       (Created → Active)
//   set_length() ──> registry.set_app_timer_length() (any number of times)
//   drop         ──> registry.delete_app_timer()    (exactly once)
//
// Every step asserts the logic thread; calling from anywhere else is a
// programming error.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::rc::Rc;
use std::thread;
use std::time::Duration;

use log::trace;

//=== Internal Dependencies ===============================================

use super::{LogicTimers, TimerAction, TimerId};

//=== AppTimer ============================================================

/// Registered app timer; unregisters itself when dropped.
pub struct AppTimer {
    id: TimerId,
    length: Duration,
    repeat: bool,
    logic: Rc<dyn LogicTimers>,
}

impl AppTimer {
    /// Registers a timer firing `action` after `length` (every `length`
    /// if `repeat`).
    ///
    /// # Panics
    ///
    /// Panics if not called on the logic thread.
    pub fn new(
        logic: Rc<dyn LogicTimers>,
        length: Duration,
        repeat: bool,
        action: TimerAction,
    ) -> Self {
        assert!(logic.in_logic_thread(), "AppTimer created off the logic thread");

        let id = logic.new_app_timer(length, repeat, action);
        trace!(target: "logic::timer", "Registered {} ({:?}, repeat: {})", id, length, repeat);

        Self {
            id,
            length,
            repeat,
            logic,
        }
    }

    /// Closure convenience for [`new`](Self::new).
    pub fn with_fn<F>(logic: Rc<dyn LogicTimers>, length: Duration, repeat: bool, action: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self::new(logic, length, repeat, Box::new(action))
    }

    /// Changes the timer's length.
    ///
    /// # Panics
    ///
    /// Panics if not called on the logic thread.
    pub fn set_length(&mut self, length: Duration) {
        assert!(
            self.logic.in_logic_thread(),
            "AppTimer length changed off the logic thread"
        );

        self.logic.set_app_timer_length(self.id, length);
        self.length = length;
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn length(&self) -> Duration {
        self.length
    }

    pub fn repeats(&self) -> bool {
        self.repeat
    }
}

impl Drop for AppTimer {
    fn drop(&mut self) {
        // Avoid a double panic when unwinding out of a failed assertion.
        if !thread::panicking() {
            assert!(
                self.logic.in_logic_thread(),
                "AppTimer dropped off the logic thread"
            );
        }

        trace!(target: "logic::timer", "Deleting {}", self.id);
        self.logic.delete_app_timer(self.id);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ThreadAffinity;
    use std::cell::{Cell, RefCell};

    //=====================================================================
    // Test Double
    //=====================================================================

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        New(TimerId, Duration, bool),
        SetLength(TimerId, Duration),
        Delete(TimerId),
    }

    struct RecordingRegistry {
        thread: ThreadAffinity,
        next_id: Cell<u32>,
        calls: RefCell<Vec<Call>>,
        actions: RefCell<Vec<(TimerId, TimerAction)>>,
    }

    impl RecordingRegistry {
        fn on(thread: ThreadAffinity) -> Rc<Self> {
            Rc::new(Self {
                thread,
                next_id: Cell::new(1),
                calls: RefCell::new(Vec::new()),
                actions: RefCell::new(Vec::new()),
            })
        }

        fn here() -> Rc<Self> {
            Self::on(ThreadAffinity::bound_to_current())
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn fire(&self, id: TimerId) {
            for (timer, action) in self.actions.borrow_mut().iter_mut() {
                if *timer == id {
                    action();
                }
            }
        }
    }

    impl LogicTimers for RecordingRegistry {
        fn in_logic_thread(&self) -> bool {
            self.thread.is_current()
        }

        fn new_app_timer(&self, length: Duration, repeat: bool, action: TimerAction) -> TimerId {
            let id = TimerId(self.next_id.get());
            self.next_id.set(id.0 + 1);
            self.calls.borrow_mut().push(Call::New(id, length, repeat));
            self.actions.borrow_mut().push((id, action));
            id
        }

        fn set_app_timer_length(&self, id: TimerId, length: Duration) {
            self.calls.borrow_mut().push(Call::SetLength(id, length));
        }

        fn delete_app_timer(&self, id: TimerId) {
            self.calls.borrow_mut().push(Call::Delete(id));
        }
    }

    fn foreign_thread() -> ThreadAffinity {
        let id = thread::spawn(|| thread::current().id()).join().unwrap();
        ThreadAffinity::bound_to(id)
    }

    //=====================================================================
    // Lifecycle Tests
    //=====================================================================

    #[test]
    fn full_lifecycle_calls_registry_exactly_once_each() {
        let registry = RecordingRegistry::here();

        let mut timer = AppTimer::with_fn(registry.clone(), Duration::from_millis(100), false, || {});
        let id = timer.id();
        assert_eq!(
            registry.calls(),
            vec![Call::New(id, Duration::from_millis(100), false)]
        );

        timer.set_length(Duration::from_millis(200));
        assert_eq!(timer.length(), Duration::from_millis(200));
        assert_eq!(registry.calls().len(), 2);
        assert_eq!(
            registry.calls()[1],
            Call::SetLength(id, Duration::from_millis(200))
        );

        drop(timer);
        assert_eq!(
            registry.calls(),
            vec![
                Call::New(id, Duration::from_millis(100), false),
                Call::SetLength(id, Duration::from_millis(200)),
                Call::Delete(id),
            ]
        );
    }

    #[test]
    fn length_can_change_repeatedly() {
        let registry = RecordingRegistry::here();
        let mut timer = AppTimer::with_fn(registry.clone(), Duration::from_millis(50), true, || {});

        for ms in [10, 20, 30] {
            timer.set_length(Duration::from_millis(ms));
        }

        let updates = registry
            .calls()
            .iter()
            .filter(|c| matches!(c, Call::SetLength(..)))
            .count();
        assert_eq!(updates, 3);
        assert!(timer.repeats());
    }

    #[test]
    fn each_timer_gets_its_own_id() {
        let registry = RecordingRegistry::here();
        let a = AppTimer::with_fn(registry.clone(), Duration::from_millis(1), false, || {});
        let b = AppTimer::with_fn(registry.clone(), Duration::from_millis(1), false, || {});

        assert_ne!(a.id(), b.id());

        let (a_id, b_id) = (a.id(), b.id());
        drop(b);
        drop(a);

        let deletes: Vec<_> = registry
            .calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Delete(_)))
            .collect();
        assert_eq!(deletes, vec![Call::Delete(b_id), Call::Delete(a_id)]);
    }

    #[test]
    fn registry_owns_the_action() {
        let registry = RecordingRegistry::here();
        let fired = Rc::new(Cell::new(0));
        let f = Rc::clone(&fired);

        let timer = AppTimer::with_fn(registry.clone(), Duration::from_millis(5), true, move || {
            f.set(f.get() + 1)
        });

        registry.fire(timer.id());
        registry.fire(timer.id());
        assert_eq!(fired.get(), 2);
    }

    //=====================================================================
    // Thread Affinity Tests
    //=====================================================================

    #[test]
    #[should_panic(expected = "created off the logic thread")]
    fn creation_off_logic_thread_panics() {
        let registry = RecordingRegistry::on(foreign_thread());
        AppTimer::with_fn(registry, Duration::from_millis(100), false, || {});
    }

    #[test]
    fn set_length_off_logic_thread_panics_without_extra_updates() {
        let logic_thread = Rc::new(Cell::new(true));

        struct Switchable {
            inner: Rc<RecordingRegistry>,
            on_logic: Rc<Cell<bool>>,
        }

        impl LogicTimers for Switchable {
            fn in_logic_thread(&self) -> bool {
                self.on_logic.get()
            }
            fn new_app_timer(&self, length: Duration, repeat: bool, action: TimerAction) -> TimerId {
                self.inner.new_app_timer(length, repeat, action)
            }
            fn set_app_timer_length(&self, id: TimerId, length: Duration) {
                self.inner.set_app_timer_length(id, length)
            }
            fn delete_app_timer(&self, id: TimerId) {
                self.inner.delete_app_timer(id)
            }
        }

        let inner = RecordingRegistry::here();
        let registry = Rc::new(Switchable {
            inner: Rc::clone(&inner),
            on_logic: Rc::clone(&logic_thread),
        });

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut timer = AppTimer::with_fn(registry, Duration::from_millis(100), false, || {});
            logic_thread.set(false);
            timer.set_length(Duration::from_millis(200));
        }));

        assert!(result.is_err());
        let calls = inner.calls();
        assert!(!calls.iter().any(|c| matches!(c, Call::SetLength(..))));
        assert_eq!(
            calls.iter().filter(|c| matches!(c, Call::Delete(_))).count(),
            1,
            "Timer is still deleted exactly once while unwinding"
        );
    }
}
