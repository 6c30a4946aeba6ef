//=========================================================================
// Renderer Boundary
//=========================================================================
//
// Contract between the adapter and the rendering pipeline.
//
// The adapter never issues GPU calls itself; it decides *when* the
// renderer may reload or draw, and only ever does so inside a render
// pass on the graphics thread.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::{GraphicsSettings, Resolution};

//=== RenderError =========================================================

/// Recoverable render failures. The caller skips the frame and retries
/// on the next refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No valid render target (app suspended, surface not created yet).
    NoRenderTarget,

    /// The surface was lost mid-frame and must be recreated.
    SurfaceLost(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRenderTarget => write!(f, "No render target available"),
            Self::SurfaceLost(e) => write!(f, "Render surface lost: {}", e),
        }
    }
}

impl std::error::Error for RenderError {}

//=== Renderer ============================================================

/// Rendering pipeline driven by the adapter on the graphics thread.
pub trait Renderer {
    /// Returns false while there is nothing to render into.
    fn has_render_target(&self) -> bool;

    /// Resolution the renderer is currently configured for.
    fn resolution(&self) -> Resolution;

    /// Rebuilds renderer resources for `settings` at `resolution`.
    fn reload(&mut self, settings: &GraphicsSettings, resolution: Resolution);

    /// Issues the frame's rendering commands.
    fn render(&mut self) -> Result<(), RenderError>;
}

//=========================================================================
// Unit Tests
//=========================================================================
