//=========================================================================
// App Adapter
//
// Capability interface between the platform host and the rest of the app.
//
// Architecture:
// ```text
//  Main Thread                 Graphics Thread             Any Thread
//  ┌──────────────────┐       ┌──────────────────────┐    ┌────────────┐
//  │ MainThread-      │◄──────┤ AppAdapter           │◄───┤ Graphics-  │
//  │ Dispatcher       │ push  │  try_render()        │push│ Dispatcher │
//  │  (host UI loop)  │ main  │   ├─ drain queue     │    │  (clone)   │
//  └──────────────────┘       │   ├─ resize/reload   │    └────────────┘
//                             │   └─ render          │
//  PlatformControls ◄─────────┤ capability queries   │
//  (fullscreen, cursor, ...)  └──────────────────────┘
// ```
//
// Components:
// - `AppAdapter`: the capability interface, with base defaults
// - `MainThreadDispatcher`: host hook for UI-thread work
// - `PlatformControls`: platform glue behind capability queries
// - `apple`: the Apple-style adapter implementation
// - `builder`: configuration and construction
// - `renderer`: the rendering pipeline boundary
//
//=========================================================================

//=== Module Declarations =================================================

pub mod apple;
pub mod builder;
pub mod renderer;

//=== External Crates =====================================================

use log::warn;

//=== Internal Imports ====================================================

use crate::core::{AppConfig, GraphicsSettings, Runnable};

//=== Public API ==========================================================

pub use apple::{AppAdapterApple, GraphicsDispatcher};
pub use builder::AdapterBuilder;
pub use renderer::{RenderError, Renderer};

//=== MainThreadDispatcher ================================================

/// Host mechanism for running work on the UI thread.
///
/// Implementations guarantee that every dispatched runnable eventually
/// runs on the main thread, or is dropped with a diagnostic if the host
/// has already shut down.
pub trait MainThreadDispatcher: Send + Sync {
    fn dispatch(&self, runnable: Runnable);
}

//=== PlatformControls ====================================================

/// Platform glue behind the adapter's capability queries.
///
/// Queries take `&self`, commands take `&mut self`. Everything is
/// synchronous; nothing is queued.
pub trait PlatformControls {
    fn fullscreen_available(&self) -> bool;
    fn is_fullscreen(&self) -> bool;
    fn set_fullscreen(&mut self, fullscreen: bool);
    fn fullscreen_shortcut(&self) -> Option<String>;

    fn should_use_cursor(&self) -> bool;
    fn has_hardware_cursor(&self) -> bool;
    fn set_hardware_cursor_visible(&mut self, visible: bool);

    fn has_direct_keyboard_input(&self) -> bool;

    /// Asks the host to shut the app down.
    fn terminate(&mut self);
}

//=== AppAdapter ==========================================================

/// Capability interface every platform adapter implements.
///
/// Capability methods carry conservative defaults so minimal adapters
/// only need to provide thread dispatch and config handling.
pub trait AppAdapter {
    //--- Event Loop & Config ----------------------------------------------

    /// Whether this adapter runs the UI event loop itself.
    fn manages_main_thread_event_loop(&self) -> bool;

    fn do_apply_app_config(&mut self, config: &AppConfig);

    /// Schedules a renderer reload with `settings`.
    fn apply_graphics_settings(&mut self, settings: &GraphicsSettings);

    //--- Thread Dispatch --------------------------------------------------

    fn do_push_main_thread_runnable(&self, runnable: Runnable);
    fn do_push_graphics_context_runnable(&self, runnable: Runnable);

    /// True iff the calling thread owns the rendering context.
    fn in_graphics_context(&self) -> bool;

    /// Runs `call` on the main thread.
    fn push_main_thread_call<F>(&self, call: F)
    where
        F: FnOnce() + Send + 'static,
        Self: Sized,
    {
        self.do_push_main_thread_runnable(Runnable::new(call));
    }

    /// Runs `call` in the graphics context.
    fn push_graphics_context_call<F>(&self, call: F)
    where
        F: FnOnce() + Send + 'static,
        Self: Sized,
    {
        self.do_push_graphics_context_runnable(Runnable::new(call));
    }

    //--- Fullscreen -------------------------------------------------------

    fn fullscreen_control_available(&self) -> bool {
        false
    }

    fn fullscreen_control_get(&self) -> bool {
        false
    }

    fn fullscreen_control_set(&mut self, fullscreen: bool) {
        warn!(target: "adapter", "Fullscreen control unsupported (requested {})", fullscreen);
    }

    fn fullscreen_control_key_shortcut(&self) -> Option<String> {
        None
    }

    //--- Cursor & Keyboard ------------------------------------------------

    fn should_use_cursor(&self) -> bool {
        true
    }

    fn has_hardware_cursor(&self) -> bool {
        false
    }

    fn set_hardware_cursor_visible(&mut self, _visible: bool) {}

    fn has_direct_keyboard_input(&self) -> bool {
        false
    }

    //--- Lifecycle --------------------------------------------------------

    fn terminate_app(&mut self);
}

//=========================================================================
// Unit Tests
//=========================================================================
