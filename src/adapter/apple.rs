//=========================================================================
// Apple-Style App Adapter
//
// Adapter for hosts that own the UI event loop and call back into us
// once per display refresh (Cocoa/UIKit-style drivers).
//
// Architecture:
// ```text
//  Any Thread                      Graphics Thread (first to render)
//  ┌──────────────────────┐       ┌──────────────────────────────────┐
//  │ GraphicsDispatcher   │       │ try_render()                     │
//  │  push(runnable)      │       │  1. bind/check graphics thread   │
//  │   ├─ on gfx thread & │       │  2. ScopedAllowGraphics          │
//  │   │  render active → │ run   │  3. drain GraphicsCallQueue      │
//  │   │  inline          │       │  4. bail if no render target     │
//  │   └─ otherwise ──────┼──────►│  5. resize debounce tick         │
//  │      enqueue         │ queue │  6. settings + size → one reload │
//  └──────────────────────┘       │  7. renderer.render()            │
//                                 └──────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Lazy graphics thread**: whichever thread first calls `try_render`
//   becomes the graphics thread for the adapter's lifetime
// - **Inline when safe**: work pushed from inside a render pass on the
//   graphics thread runs immediately; everything else waits for the
//   next pass, so queued work always runs with graphics allowed
// - **Teardown drops**: calls still queued when the last dispatcher
//   handle goes away are discarded with a warning
// - **Resize debounce**: reloads wait until a resize burst settles
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use super::{AppAdapter, MainThreadDispatcher, PlatformControls, Renderer};
use crate::core::{
    AppConfig, GraphicsCallQueue, GraphicsGate, GraphicsSettings, ResizeDebouncer, ResizeStep,
    Resolution, Runnable, ScopedAllowGraphics, ThreadAffinity,
};

//=== GraphicsDispatcher ==================================================

/// State shared between the adapter and every dispatcher handle.
#[derive(Debug)]
struct GraphicsShared {
    thread: ThreadAffinity,
    gate: GraphicsGate,
    calls: GraphicsCallQueue,
}

/// Cloneable, thread-safe handle for sending work to the graphics thread.
///
/// Obtained once from [`AppAdapterApple::graphics_dispatcher`] and handed
/// to whichever subsystems need to reach the rendering context.
#[derive(Debug, Clone)]
pub struct GraphicsDispatcher {
    shared: Arc<GraphicsShared>,
}

impl GraphicsDispatcher {
    fn new() -> Self {
        Self {
            shared: Arc::new(GraphicsShared {
                thread: ThreadAffinity::unbound(),
                gate: GraphicsGate::new(),
                calls: GraphicsCallQueue::new(),
            }),
        }
    }

    /// Runs `runnable` in the graphics context.
    ///
    /// Runs inline if called on the graphics thread during a render pass;
    /// otherwise queues it for the start of the next pass.
    pub fn push(&self, runnable: Runnable) {
        if self.graphics_allowed() {
            runnable.run();
        } else {
            self.shared.calls.push(runnable);
        }
    }

    /// Closure convenience for [`push`](Self::push).
    pub fn push_call<F>(&self, call: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.push(Runnable::new(call));
    }

    /// True iff the calling thread is the graphics thread.
    pub fn in_graphics_context(&self) -> bool {
        self.shared.thread.is_current()
    }

    /// True iff the calling thread may issue graphics calls right now.
    pub fn graphics_allowed(&self) -> bool {
        // Only the graphics thread ever reads the gate.
        self.in_graphics_context() && self.shared.gate.is_allowed()
    }

    /// Number of calls waiting for the next render pass.
    pub fn pending(&self) -> usize {
        self.shared.calls.len()
    }
}

//=== AppAdapterApple =====================================================

/// Apple-style adapter: bridges the host main thread and the graphics
/// thread, gates rendering, and debounces resizes.
///
/// Built via [`AdapterBuilder`](super::AdapterBuilder). The adapter itself
/// is owned by whoever drives `try_render`; other threads talk to it
/// through a [`GraphicsDispatcher`] clone.
pub struct AppAdapterApple<R: Renderer, P: PlatformControls> {
    graphics: GraphicsDispatcher,
    main_thread: Box<dyn MainThreadDispatcher>,
    renderer: R,
    controls: P,
    resize: ResizeDebouncer,
    settings: GraphicsSettings,
    pending_settings: Option<GraphicsSettings>,
}

impl<R: Renderer, P: PlatformControls> AppAdapterApple<R, P> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn from_parts(
        renderer: R,
        controls: P,
        main_thread: Box<dyn MainThreadDispatcher>,
        settings: GraphicsSettings,
        resize_debounce_frames: u8,
    ) -> Self {
        Self {
            graphics: GraphicsDispatcher::new(),
            main_thread,
            renderer,
            controls,
            resize: ResizeDebouncer::new(resize_debounce_frames),
            settings,
            pending_settings: None,
        }
    }

    //--- Accessors --------------------------------------------------------

    /// Returns a new handle for pushing work to the graphics thread.
    pub fn graphics_dispatcher(&self) -> GraphicsDispatcher {
        self.graphics.clone()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn controls(&self) -> &P {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut P {
        &mut self.controls
    }

    /// Settings the renderer was last loaded with.
    pub fn graphics_settings(&self) -> &GraphicsSettings {
        &self.settings
    }

    /// Target of the in-flight resize burst, if any.
    pub fn pending_resize(&self) -> Option<Resolution> {
        self.resize.pending()
    }

    //--- Render Pass ------------------------------------------------------

    /// Runs one render pass. Called by the host once per display refresh.
    ///
    /// Returns false when the frame could not be rendered (no render
    /// target, surface lost). Skipping is safe; the host simply tries
    /// again next refresh.
    ///
    /// # Panics
    ///
    /// Panics if called from a thread other than the first thread that
    /// ever called it.
    pub fn try_render(&mut self) -> bool {
        let shared = Arc::clone(&self.graphics.shared);
        assert!(
            shared.thread.bind_current(),
            "try_render called off the graphics thread"
        );

        let _allow = ScopedAllowGraphics::new(&shared.gate);

        // Queued state changes must land before this frame renders.
        shared.calls.drain();

        if !self.renderer.has_render_target() {
            trace!(target: "adapter", "No render target, skipping frame");
            return false;
        }

        self.update_renderer();

        shared.gate.assert_allowed("render");
        match self.renderer.render() {
            Ok(()) => true,
            Err(e) => {
                debug!(target: "adapter", "Frame skipped: {}", e);
                false
            }
        }
    }

    //--- Resize -----------------------------------------------------------

    /// Starts (or restarts) a resize burst towards `width` x `height`.
    ///
    /// Frames rendered while the burst settles keep the previous size;
    /// the renderer reloads once, after the debounce window runs out.
    pub fn enable_resize_friendly_mode(&mut self, width: u32, height: u32) {
        trace!(target: "adapter::resize", "Resize requested: {}x{}", width, height);
        self.resize
            .begin(Resolution::new(width as f32, height as f32));
    }

    //--- Internal Helpers -------------------------------------------------

    /// Folds pending settings and a settled resize into at most one reload.
    ///
    /// Settings changes made while a resize is settling stay queued and
    /// ride along with the resize's reload.
    fn update_renderer(&mut self) {
        let target = match self.resize.tick() {
            ResizeStep::Idle => None,
            ResizeStep::Settling { remaining } => {
                trace!(target: "adapter::resize", "Resize settling, {} frames left", remaining);
                return;
            }
            ResizeStep::Apply(target) => Some(target),
        };

        let current = self.renderer.resolution();
        let pending = self.pending_settings.take();
        let settings = pending.filter(|settings| *settings != self.settings);
        let resolution = target.filter(|target| *target != current);

        if target.is_some() && resolution.is_none() {
            debug!(target: "adapter::resize", "Resize settled at current size");
        }

        if settings.is_none() && resolution.is_none() {
            return;
        }

        let settings = settings.unwrap_or_else(|| self.settings.clone());
        self.reload_renderer(settings, resolution.unwrap_or(current));
    }

    fn reload_renderer(&mut self, settings: GraphicsSettings, resolution: Resolution) {
        self.graphics.shared.gate.assert_allowed("reload_renderer");

        debug!(
            target: "adapter",
            "Reloading renderer at {}x{} ({:?})",
            resolution.width,
            resolution.height,
            settings
        );

        self.renderer.reload(&settings, resolution);
        self.settings = settings;
    }
}

//=== AppAdapter Implementation ===========================================

impl<R: Renderer, P: PlatformControls> AppAdapter for AppAdapterApple<R, P> {
    fn manages_main_thread_event_loop(&self) -> bool {
        // The host (Cocoa/UIKit driver) runs the UI loop, not us.
        false
    }

    fn do_apply_app_config(&mut self, config: &AppConfig) {
        if config.resize_debounce_frames == 0 {
            warn!(target: "adapter", "Resize debounce of 0 frames requested, using 1");
        }
        self.resize.set_window(config.resize_debounce_frames.max(1));
        self.apply_graphics_settings(&config.graphics);
    }

    fn apply_graphics_settings(&mut self, settings: &GraphicsSettings) {
        debug!(target: "adapter", "Graphics settings queued for next frame: {:?}", settings);
        self.pending_settings = Some(settings.clone());
    }

    fn do_push_main_thread_runnable(&self, runnable: Runnable) {
        self.main_thread.dispatch(runnable);
    }

    fn do_push_graphics_context_runnable(&self, runnable: Runnable) {
        self.graphics.push(runnable);
    }

    fn in_graphics_context(&self) -> bool {
        self.graphics.in_graphics_context()
    }

    fn fullscreen_control_available(&self) -> bool {
        self.controls.fullscreen_available()
    }

    fn fullscreen_control_get(&self) -> bool {
        self.controls.is_fullscreen()
    }

    fn fullscreen_control_set(&mut self, fullscreen: bool) {
        self.controls.set_fullscreen(fullscreen);
    }

    fn fullscreen_control_key_shortcut(&self) -> Option<String> {
        self.controls.fullscreen_shortcut()
    }

    fn should_use_cursor(&self) -> bool {
        self.controls.should_use_cursor()
    }

    fn has_hardware_cursor(&self) -> bool {
        self.controls.has_hardware_cursor()
    }

    fn set_hardware_cursor_visible(&mut self, visible: bool) {
        self.controls.set_hardware_cursor_visible(visible);
    }

    fn has_direct_keyboard_input(&self) -> bool {
        self.controls.has_direct_keyboard_input()
    }

    fn terminate_app(&mut self) {
        info!(target: "adapter", "App termination requested");
        self.controls.terminate();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
