//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_adapter::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Adapter
pub use crate::adapter::{
    AdapterBuilder, AppAdapter, AppAdapterApple, GraphicsDispatcher, MainThreadDispatcher,
    PlatformControls, RenderError, Renderer,
};

// Core building blocks
pub use crate::core::{AppConfig, GraphicsSettings, Resolution, Runnable, VSync};

// Logic thread
pub use crate::logic::{AppTimer, LogicTimers, TimerAction, TimerId};

// Platform host
pub use crate::platform::{main_thread_channel, Platform, PlatformError, WindowControls};
