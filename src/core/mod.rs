//=========================================================================
// Core Building Blocks
//
// Thread-agnostic primitives the adapter is assembled from.
//
// Components:
// - `runnable`: owned deferred unit of work
// - `thread_affinity`: lazily-captured owning thread
// - `graphics_queue`: mutex-guarded FIFO of graphics-thread calls
// - `graphics_gate`: render-window flag and its scoped guard
// - `resize`: resize-burst debouncer
// - `settings`: graphics settings and app config
//
// Notes:
// Nothing in here knows about winit or any concrete renderer; the
// adapter composes these pieces and the platform layer drives them.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod graphics_gate;
pub mod graphics_queue;
pub mod resize;
pub mod runnable;
pub mod settings;
pub mod thread_affinity;

//=== Public API ==========================================================

pub use graphics_gate::{GraphicsGate, ScopedAllowGraphics};
pub use graphics_queue::GraphicsCallQueue;
pub use resize::{ResizeDebouncer, ResizeStep, Resolution};
pub use runnable::Runnable;
pub use settings::{AppConfig, GraphicsSettings, VSync};
pub use thread_affinity::ThreadAffinity;
