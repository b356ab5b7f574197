/// Render target - a validated off-screen surface with pixel readback
///
/// Wraps the backend `RenderSurface` and enforces what the capture pipeline
/// relies on: non-zero, immutable dimensions, attachments of the requested
/// size, and readbacks of exactly `width * height * 4` bytes.

use crate::device::{ClearFlags, ColorFormat, GraphicsDevice, RenderSurface, SurfaceDesc};
use crate::error::{Error, Result};
use crate::spin_bail;
use super::readback::Readback;

const SOURCE: &str = "spin::RenderTarget";

/// Off-screen color + depth/stencil render target
///
/// Created once per capture job and exclusively owned by whoever drives the
/// job. GPU resources are released when the target is dropped.
pub struct RenderTarget {
    surface: Box<dyn RenderSurface>,
    width: u32,
    height: u32,
}

impl RenderTarget {
    /// Create an RGBA8 render target
    ///
    /// # Errors
    ///
    /// Returns `Error::SurfaceIncomplete` if either dimension is zero or the
    /// backend cannot build a complete framebuffer.
    pub fn create(device: &mut dyn GraphicsDevice, width: u32, height: u32) -> Result<Self> {
        Self::with_desc(device, &SurfaceDesc::rgba8(width, height))
    }

    /// Create a render target from a full descriptor
    ///
    /// # Errors
    ///
    /// Same as [`RenderTarget::create`]. A backend that hands back a surface
    /// of a different size than requested is also reported as incomplete.
    pub fn with_desc(device: &mut dyn GraphicsDevice, desc: &SurfaceDesc) -> Result<Self> {
        if desc.width == 0 || desc.height == 0 {
            spin_bail!(
                SOURCE,
                Error::SurfaceIncomplete,
                "Degenerate render target size {}x{}",
                desc.width,
                desc.height
            );
        }

        let surface = match device.create_surface(desc) {
            Ok(surface) => surface,
            Err(err) => {
                crate::spin_error!(SOURCE, "{} backend refused {}x{} surface: {}",
                    device.backend_name(), desc.width, desc.height, err);
                return Err(err);
            }
        };

        if surface.width() != desc.width || surface.height() != desc.height {
            spin_bail!(
                SOURCE,
                Error::SurfaceIncomplete,
                "Attachment size {}x{} does not match requested {}x{}",
                surface.width(),
                surface.height(),
                desc.width,
                desc.height
            );
        }

        crate::spin_debug!(
            SOURCE,
            "Created {}x{} {:?} target on {} backend",
            desc.width,
            desc.height,
            desc.color_format,
            device.backend_name()
        );

        Ok(Self {
            surface,
            width: desc.width,
            height: desc.height,
        })
    }

    /// Width in texels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in texels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color attachment format
    pub fn color_format(&self) -> ColorFormat {
        self.surface.color_format()
    }

    /// Size in bytes of one readback
    pub fn readback_len(&self) -> usize {
        Readback::byte_len(self.width, self.height)
    }

    /// Make this target the active render destination
    ///
    /// Sets the viewport to the full target. Draw calls land here until
    /// another target is bound.
    pub fn bind_for_drawing(&self) {
        self.surface.bind_for_drawing();
    }

    /// Clear color to `color` and clear depth/stencil
    pub fn clear(&self, color: [f32; 4]) {
        self.surface
            .clear(ClearFlags::COLOR | ClearFlags::DEPTH | ClearFlags::STENCIL, color);
    }

    /// Read the current contents into a new buffer (bottom row first)
    ///
    /// # Errors
    ///
    /// Propagates backend readback failures.
    pub fn read_pixels(&self) -> Result<Readback> {
        let mut readback = Readback::new(self.width, self.height);
        self.read_pixels_into(&mut readback)?;
        Ok(readback)
    }

    /// Read the current contents into an existing buffer
    ///
    /// Waits for outstanding GPU work first, so a readback issued after a
    /// draw always observes that draw.
    ///
    /// # Errors
    ///
    /// Returns `Error::BackendError` if `readback` was sized for a different
    /// target, or propagates backend readback failures.
    pub fn read_pixels_into(&self, readback: &mut Readback) -> Result<()> {
        if readback.width() != self.width || readback.height() != self.height {
            spin_bail!(
                SOURCE,
                Error::BackendError,
                "Readback buffer is {}x{}, target is {}x{}",
                readback.width(),
                readback.height(),
                self.width,
                self.height
            );
        }

        self.surface.wait_idle();
        self.surface.read_pixels(readback.as_bytes_mut())
    }
}

impl std::fmt::Debug for RenderTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderTarget")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("color_format", &self.surface.color_format())
            .finish()
    }
}

#[cfg(test)]
#[path = "render_target_tests.rs"]
mod tests;
