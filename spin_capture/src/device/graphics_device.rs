/// GraphicsDevice trait - factory for off-screen render surfaces

use crate::device::{RenderSurface, SurfaceDesc};
use crate::error::Result;

/// Graphics device trait
///
/// Implemented by backend-specific devices (e.g. `GlDevice`). The device
/// owns whatever context the backend needs; surfaces it creates release their
/// GPU objects when dropped.
pub trait GraphicsDevice {
    /// Create an off-screen surface with a color and a depth/stencil attachment
    ///
    /// # Arguments
    ///
    /// * `desc` - Surface descriptor
    ///
    /// # Errors
    ///
    /// Returns `Error::SurfaceIncomplete` if the attachments do not combine
    /// into a complete framebuffer, or `Error::BackendError` if an object
    /// could not be allocated.
    fn create_surface(&mut self, desc: &SurfaceDesc) -> Result<Box<dyn RenderSurface>>;

    /// Human-readable backend name used in logs
    fn backend_name(&self) -> &str;
}
