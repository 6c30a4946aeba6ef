//=========================================================================
// Platform Subsystem
//
// Winit host driver for the Apple-style adapter.
//
// Architecture:
// ```text
//  Main Thread (winit event loop, also the graphics thread here)
//  ┌──────────────────────────────────────────────┐
//  │  Winit Event Loop                            │
//  │   ├─ resumed         → create window, attach │
//  │   ├─ Resized         → resize-friendly mode  │
//  │   ├─ RedrawRequested → frame:                │
//  │   │     1. MainThreadReceiver::run_pending   │◄── any thread
//  │   │     2. AppAdapterApple::try_render       │◄── GraphicsDispatcher
//  │   │     3. request next redraw               │
//  │   ├─ CloseRequested  → exit                  │
//  │   └─ about_to_wait   → exit if terminated    │
//  └──────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: main-thread work and graphics
//   calls both land once per refresh, before rendering
// - **Main thread requirement**: winit mandates the main thread on
//   macOS/iOS, so this runs on the thread that calls `Platform::run()`
// - **Skipped frames are normal**: a failed render pass is logged at
//   trace level and retried on the next redraw
//
//=========================================================================

//=== Submodules ==========================================================

pub mod main_thread;
pub mod window_controls;

//=== External Crates =====================================================

use std::sync::Arc;

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::adapter::{AppAdapterApple, Renderer};

//=== Public API ==========================================================

pub use main_thread::{main_thread_channel, MainThreadReceiver, MainThreadSender};
pub use window_controls::WindowControls;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are typically fatal - if the event loop can't be created,
/// the app cannot run.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
        }
    }
}

//=== Platform ============================================================

/// Winit host that owns the adapter and drives it once per refresh.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(adapter, main_rx)`
/// 2. **Execution**: `platform.run()` - blocks in the event loop
/// 3. **Per frame**: run main-thread work, then `try_render`
/// 4. **Shutdown**: window closed or `terminate_app()` → loop exits
///
/// # Thread Safety
///
/// Must stay on the main thread. Other threads reach it only through a
/// [`MainThreadSender`] or a `GraphicsDispatcher`.
pub struct Platform<R: Renderer> {
    /// OS window handle (None until `resumed()` called).
    window: Option<Arc<winit::window::Window>>,

    adapter: AppAdapterApple<R, WindowControls>,

    main_thread: MainThreadReceiver,

    title: String,
}

impl<R: Renderer> Platform<R> {
    //--- Construction -----------------------------------------------------

    /// Creates a platform host. The window is created lazily in `resumed()`.
    pub fn new(adapter: AppAdapterApple<R, WindowControls>, main_thread: MainThreadReceiver) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            adapter,
            main_thread,
            title: "Aetheric".to_string(),
        }
    }

    /// Sets the window title used when the window is created.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn adapter(&self) -> &AppAdapterApple<R, WindowControls> {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut AppAdapterApple<R, WindowControls> {
        &mut self.adapter
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes or the app terminates.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        info!(target: "platform", "Event loop exited");
        Ok(())
    }

    //--- Internal Helpers -------------------------------------------------

    /// One frame: main-thread work first, then the render pass.
    fn run_frame(&mut self) {
        self.main_thread.run_pending();

        if !self.adapter.try_render() {
            trace!(target: "platform", "Frame skipped");
        }
    }
}

//=== Winit Integration ===================================================

impl<R: Renderer> ApplicationHandler for Platform<R> {
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(800, 600));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );

                let window = Arc::new(window);
                self.adapter.controls_mut().attach(Arc::clone(&window));
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                trace!(target: "platform", "Resized to {}x{}", size.width, size.height);
                self.adapter
                    .enable_resize_friendly_mode(size.width, size.height);
            }

            WindowEvent::RedrawRequested => {
                self.run_frame();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.adapter.controls().exit_requested() {
            info!(target: "platform", "Terminating on request");
            event_loop.exit();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
