//=========================================================================
// Window Controls
//=========================================================================
//
// Winit-backed implementation of the adapter's capability queries.
//
// The window is attached lazily (it only exists after `resumed()`);
// until then every query answers as if the capability were absent and
// every command is a no-op.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use log::{debug, info};
use winit::window::{Fullscreen, Window};

//=== Internal Dependencies ===============================================

use crate::adapter::PlatformControls;

//=== WindowControls ======================================================

/// Fullscreen, cursor and termination controls over a winit window.
#[derive(Debug)]
pub struct WindowControls {
    window: Option<Arc<Window>>,
    cursor_visible: bool,
    exit_requested: bool,
}

impl WindowControls {
    pub fn new() -> Self {
        Self {
            window: None,
            cursor_visible: true,
            exit_requested: false,
        }
    }

    /// Attaches the window created by the host.
    pub fn attach(&mut self, window: Arc<Window>) {
        window.set_cursor_visible(self.cursor_visible);
        self.window = Some(window);
    }

    /// True once `terminate()` has been called; the host checks this to
    /// leave its event loop.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

impl Default for WindowControls {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformControls for WindowControls {
    fn fullscreen_available(&self) -> bool {
        self.window.is_some()
    }

    fn is_fullscreen(&self) -> bool {
        self.window
            .as_ref()
            .is_some_and(|window| window.fullscreen().is_some())
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        let Some(window) = &self.window else {
            debug!(target: "platform", "Fullscreen change ignored, no window yet");
            return;
        };

        window.set_fullscreen(fullscreen.then_some(Fullscreen::Borderless(None)));
    }

    fn fullscreen_shortcut(&self) -> Option<String> {
        if cfg!(target_os = "macos") {
            Some("Ctrl+Cmd+F".to_string())
        } else {
            Some("F11".to_string())
        }
    }

    fn should_use_cursor(&self) -> bool {
        true
    }

    fn has_hardware_cursor(&self) -> bool {
        true
    }

    fn set_hardware_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
        if let Some(window) = &self.window {
            window.set_cursor_visible(visible);
        }
    }

    fn has_direct_keyboard_input(&self) -> bool {
        true
    }

    fn terminate(&mut self) {
        info!(target: "platform", "Exit requested");
        self.exit_requested = true;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_window_means_no_fullscreen() {
        let mut controls = WindowControls::new();

        assert!(!controls.fullscreen_available());
        controls.set_fullscreen(true);
        assert!(!controls.is_fullscreen());
    }

    #[test]
    fn shortcut_is_always_reported() {
        assert!(WindowControls::new().fullscreen_shortcut().is_some());
    }

    #[test]
    fn cursor_visibility_is_remembered_before_attach() {
        let mut controls = WindowControls::new();
        assert!(controls.cursor_visible);

        controls.set_hardware_cursor_visible(false);
        assert!(!controls.cursor_visible);
        assert!(controls.has_hardware_cursor());
    }

    #[test]
    fn terminate_sets_exit_flag() {
        let mut controls = WindowControls::new();
        assert!(!controls.exit_requested());

        controls.terminate();
        assert!(controls.exit_requested());
    }
}
