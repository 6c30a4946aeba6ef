//=========================================================================
// Resize Debouncer
//=========================================================================
//
// Coalesces bursts of resize events into a single renderer reload.
//
// Architecture:
//   begin(target) ──> frames = window
//   tick() per render:
//     frames > 0 after decrement ──> Settling (keep old size)
//     frames == 0                ──> Apply(target), pending cleared
//
// A new `begin()` during the window retargets and restarts the countdown.
//
//=========================================================================

//=== Resolution ==========================================================

/// Pixel resolution of the render target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub width: f32,
    pub height: f32,
}

impl Resolution {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

//=== ResizeStep ==========================================================

/// Outcome of one debouncer tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeStep {
    /// No resize pending.
    Idle,

    /// Resize pending; keep rendering at the old size.
    Settling { remaining: u8 },

    /// The burst has settled; reload at this resolution.
    Apply(Resolution),
}

//=== ResizeDebouncer =====================================================

/// Pending target resolution with a frame countdown.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    window: u8,
    frames: u8,
    target: Option<Resolution>,
}

impl ResizeDebouncer {
    /// Creates an idle debouncer that waits `window` frames per burst.
    ///
    /// # Panics
    ///
    /// Panics if `window == 0`.
    pub fn new(window: u8) -> Self {
        assert!(window > 0, "Resize debounce window must be positive");
        Self {
            window,
            frames: 0,
            target: None,
        }
    }

    /// Changes the countdown used by subsequent `begin()` calls.
    ///
    /// # Panics
    ///
    /// Panics if `window == 0`.
    pub fn set_window(&mut self, window: u8) {
        assert!(window > 0, "Resize debounce window must be positive");
        self.window = window;
    }

    /// Records a new target and restarts the countdown.
    pub fn begin(&mut self, target: Resolution) {
        self.target = Some(target);
        self.frames = self.window;
    }

    /// Advances one frame.
    pub fn tick(&mut self) -> ResizeStep {
        let Some(target) = self.target else {
            return ResizeStep::Idle;
        };

        self.frames = self.frames.saturating_sub(1);
        if self.frames > 0 {
            return ResizeStep::Settling {
                remaining: self.frames,
            };
        }

        self.target = None;
        ResizeStep::Apply(target)
    }

    pub fn pending(&self) -> Option<Resolution> {
        self.target
    }

    pub fn remaining_frames(&self) -> u8 {
        self.frames
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: Resolution = Resolution {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn idle_when_nothing_pending() {
        let mut debouncer = ResizeDebouncer::new(3);
        assert_eq!(debouncer.tick(), ResizeStep::Idle);
        assert_eq!(debouncer.pending(), None);
    }

    #[test]
    fn applies_on_nth_tick() {
        let mut debouncer = ResizeDebouncer::new(3);
        debouncer.begin(TARGET);

        assert_eq!(debouncer.tick(), ResizeStep::Settling { remaining: 2 });
        assert_eq!(debouncer.tick(), ResizeStep::Settling { remaining: 1 });
        assert_eq!(debouncer.tick(), ResizeStep::Apply(TARGET));
        assert_eq!(debouncer.tick(), ResizeStep::Idle);
    }

    #[test]
    fn window_of_one_applies_immediately() {
        let mut debouncer = ResizeDebouncer::new(1);
        debouncer.begin(TARGET);
        assert_eq!(debouncer.tick(), ResizeStep::Apply(TARGET));
    }

    #[test]
    fn new_burst_restarts_countdown_and_retargets() {
        let mut debouncer = ResizeDebouncer::new(3);
        debouncer.begin(TARGET);
        debouncer.tick();
        debouncer.tick();

        let later = Resolution::new(640.0, 480.0);
        debouncer.begin(later);
        assert_eq!(debouncer.remaining_frames(), 3);

        assert_eq!(debouncer.tick(), ResizeStep::Settling { remaining: 2 });
        assert_eq!(debouncer.tick(), ResizeStep::Settling { remaining: 1 });
        assert_eq!(debouncer.tick(), ResizeStep::Apply(later));
    }

    #[test]
    fn set_window_affects_next_burst() {
        let mut debouncer = ResizeDebouncer::new(3);
        debouncer.set_window(2);
        debouncer.begin(TARGET);

        assert_eq!(debouncer.tick(), ResizeStep::Settling { remaining: 1 });
        assert_eq!(debouncer.tick(), ResizeStep::Apply(TARGET));
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn zero_window_panics() {
        ResizeDebouncer::new(0);
    }
}
