/// RenderSurface trait - backend side of an off-screen render target

use bitflags::bitflags;

use crate::error::Result;

/// Color attachment format (8 bits per channel, no mipmaps)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    /// 24-bit RGB; readback reports alpha as fully opaque
    Rgb8,
    /// 32-bit RGBA
    Rgba8,
}

bitflags! {
    /// Attachments affected by a clear
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearFlags: u32 {
        /// Color attachment
        const COLOR = 1 << 0;
        /// Depth part of the depth/stencil attachment
        const DEPTH = 1 << 1;
        /// Stencil part of the depth/stencil attachment
        const STENCIL = 1 << 2;
    }
}

/// Descriptor for creating a render surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceDesc {
    /// Width in texels
    pub width: u32,
    /// Height in texels
    pub height: u32,
    /// Color attachment format
    pub color_format: ColorFormat,
}

impl SurfaceDesc {
    /// RGBA8 surface of the given size
    pub fn rgba8(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            color_format: ColorFormat::Rgba8,
        }
    }
}

/// Render surface trait
///
/// A color attachment and a combined depth/stencil attachment of identical
/// size, bound together into something draw calls can target.
pub trait RenderSurface {
    /// Width in texels
    fn width(&self) -> u32;

    /// Height in texels
    fn height(&self) -> u32;

    /// Color attachment format
    fn color_format(&self) -> ColorFormat;

    /// Make this surface the active render destination with a full-size viewport
    ///
    /// All subsequent draw calls on the context land here until another
    /// surface (or the window) is bound.
    fn bind_for_drawing(&self);

    /// Clear the selected attachments; `color` is only used with `ClearFlags::COLOR`
    fn clear(&self, flags: ClearFlags, color: [f32; 4]);

    /// Block until every command issued so far has completed
    fn wait_idle(&self);

    /// Copy the color attachment into `out` as RGBA8
    ///
    /// Rows are written in the graphics API's native order: the bottom row
    /// of the image comes first. `out` must be exactly `width * height * 4`
    /// bytes long.
    fn read_pixels(&self, out: &mut [u8]) -> Result<()>;
}
