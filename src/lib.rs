//=========================================================================
// Aetheric Adapter: Library Root
//
// Thread-bridging layer between a platform host, the graphics thread and
// the logic thread.
//
// Responsibilities:
// - Dispatch work to the graphics thread and the host main thread
// - Gate rendering calls behind a scoped render window
// - Debounce resize bursts into a single renderer reload
// - Provide a scoped handle over logic-thread timers
//
// Typical usage:
// ```no_run
// use aetheric_adapter::prelude::*;
// # struct MyRenderer;
// # impl Renderer for MyRenderer {
// #     fn has_render_target(&self) -> bool { true }
// #     fn resolution(&self) -> Resolution { Resolution::new(800.0, 600.0) }
// #     fn reload(&mut self, _: &GraphicsSettings, _: Resolution) {}
// #     fn render(&mut self) -> Result<(), RenderError> { Ok(()) }
// # }
//
// let (main_tx, main_rx) = main_thread_channel();
// let adapter = AdapterBuilder::new().build(MyRenderer, WindowControls::new(), main_tx);
// Platform::new(adapter, main_rx).run().unwrap();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the thread-agnostic building blocks (runnables, the
// graphics call queue, the render gate, the resize debouncer).
//
// `adapter` defines the capability interface and the Apple-style
// adapter that composes the core pieces.
//
// `logic` is the boundary to the logic thread's timer registry.
//
// `platform` is the winit host that drives the adapter once per frame.
//
pub mod adapter;
pub mod core;
pub mod logic;
pub mod platform;
pub mod prelude;

//--- Public Exports ------------------------------------------------------

pub use adapter::{AdapterBuilder, AppAdapter, AppAdapterApple, GraphicsDispatcher};
