//=========================================================================
// Adapter Builder
//
// Configuration and construction of the Apple-style adapter.
//
// Architecture:
// ```text
//     AdapterBuilder  ──build()──>  AppAdapterApple  ──graphics_dispatcher()──> handles
//         │                              │
//         ├─ with_resize_debounce_frames()└─ try_render() once per refresh
//         └─ with_graphics_settings()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use super::{AppAdapterApple, MainThreadDispatcher, PlatformControls, Renderer};
use crate::core::GraphicsSettings;

//=== AdapterBuilder ======================================================

/// Builder for configuring and constructing an [`AppAdapterApple`].
///
/// All collaborators (renderer, platform controls, main-thread
/// dispatcher) are passed in explicitly at [`build`](Self::build), so
/// tests can substitute any of them.
///
/// # Default Values
///
/// - **Resize debounce**: 3 frames
/// - **Graphics settings**: [`GraphicsSettings::default()`]
///
/// # Examples
///
/// ```no_run
/// use aetheric_adapter::adapter::{AdapterBuilder, RenderError, Renderer};
/// use aetheric_adapter::core::{GraphicsSettings, Resolution};
/// use aetheric_adapter::platform::{main_thread_channel, WindowControls};
///
/// struct NullRenderer;
///
/// impl Renderer for NullRenderer {
///     fn has_render_target(&self) -> bool { true }
///     fn resolution(&self) -> Resolution { Resolution::new(800.0, 600.0) }
///     fn reload(&mut self, _: &GraphicsSettings, _: Resolution) {}
///     fn render(&mut self) -> Result<(), RenderError> { Ok(()) }
/// }
///
/// let (main_tx, _main_rx) = main_thread_channel();
/// let mut adapter = AdapterBuilder::new()
///     .with_resize_debounce_frames(4)
///     .build(NullRenderer, WindowControls::new(), main_tx);
///
/// let graphics = adapter.graphics_dispatcher();
/// graphics.push_call(|| println!("runs at the start of the next frame"));
/// adapter.try_render();
/// ```
pub struct AdapterBuilder {
    resize_debounce_frames: u8,
    graphics_settings: GraphicsSettings,
}

impl AdapterBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            resize_debounce_frames: 3,
            graphics_settings: GraphicsSettings::default(),
        }
    }

    /// Sets how many frames a resize burst must stay quiet before the
    /// renderer reloads.
    ///
    /// Larger values ride out longer drags without thrashing GPU
    /// resources, at the cost of showing the old size for longer.
    ///
    /// Default: 3
    ///
    /// # Panics
    ///
    /// Panics if `frames == 0`.
    pub fn with_resize_debounce_frames(mut self, frames: u8) -> Self {
        assert!(frames > 0, "Resize debounce frames must be positive");
        self.resize_debounce_frames = frames;
        self
    }

    /// Sets the graphics settings the renderer is initially loaded with.
    pub fn with_graphics_settings(mut self, settings: GraphicsSettings) -> Self {
        self.graphics_settings = settings;
        self
    }

    /// Builds the adapter.
    ///
    /// The graphics thread is not chosen here; it is captured by the
    /// first call to [`AppAdapterApple::try_render`].
    pub fn build<R, P, D>(self, renderer: R, controls: P, main_thread: D) -> AppAdapterApple<R, P>
    where
        R: Renderer,
        P: PlatformControls,
        D: MainThreadDispatcher + 'static,
    {
        info!(
            target: "adapter",
            "Building adapter (resize debounce: {} frames)",
            self.resize_debounce_frames
        );

        AppAdapterApple::from_parts(
            renderer,
            controls,
            Box::new(main_thread),
            self.graphics_settings,
            self.resize_debounce_frames,
        )
    }
}

impl Default for AdapterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
