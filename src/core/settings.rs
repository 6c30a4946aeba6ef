//=========================================================================
// Settings
//=========================================================================
//
// Graphics settings applied to the renderer, and the runtime-reloadable
// app config that carries them.
//
//=========================================================================

//=== VSync ===============================================================

/// Vertical sync mode requested from the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VSync {
    Never,
    Always,
    #[default]
    Auto,
}

//=== GraphicsSettings ====================================================

/// Renderer configuration. A change triggers a renderer reload on the
/// next render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsSettings {
    pub vsync: VSync,

    /// Frame-rate cap; 0 means uncapped.
    pub max_fps: u32,

    /// Multiplier applied to the window's pixel resolution.
    pub pixel_scale: f32,
}

impl Default for GraphicsSettings {
    fn default() -> Self {
        Self {
            vsync: VSync::Auto,
            max_fps: 60,
            pixel_scale: 1.0,
        }
    }
}

//=== AppConfig ===========================================================

/// Runtime config applied through `AppAdapter::do_apply_app_config`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub graphics: GraphicsSettings,

    /// Frames to wait after the last resize event before reloading.
    ///
    /// Zero is clamped to 1 with a warning when the config is applied at
    /// runtime. [`AdapterBuilder::with_resize_debounce_frames`] panics on
    /// zero instead.
    ///
    /// [`AdapterBuilder::with_resize_debounce_frames`]: crate::adapter::AdapterBuilder::with_resize_debounce_frames
    pub resize_debounce_frames: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graphics: GraphicsSettings::default(),
            resize_debounce_frames: 3,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
