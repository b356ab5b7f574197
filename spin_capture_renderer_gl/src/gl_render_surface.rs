/// GlRenderSurface - OpenGL implementation of RenderSurface
///
/// A framebuffer object with a color texture (no mipmaps, nearest filtering)
/// and a combined 24-bit depth / 8-bit stencil renderbuffer, both sized to
/// the surface.

use std::rc::Rc;

use glow::HasContext;
use spin_capture::spin::device::{ClearFlags, ColorFormat, RenderSurface, SurfaceDesc};
use spin_capture::spin::{Error, Result};
use spin_capture::spin_bail;

use crate::gl_format::{color_attachment_format, framebuffer_status_name, gl_error_name};

const SOURCE: &str = "spin::gl::Surface";
const MAX_PENDING_ERRORS: usize = 16;

/// OpenGL off-screen surface
pub struct GlRenderSurface {
    gl: Rc<glow::Context>,
    framebuffer: glow::NativeFramebuffer,
    color_texture: glow::NativeTexture,
    depth_stencil: glow::NativeRenderbuffer,
    width: u32,
    height: u32,
    format: ColorFormat,
}

impl GlRenderSurface {
    /// Build and validate the framebuffer
    ///
    /// Leaves no framebuffer bound on return.
    ///
    /// # Errors
    ///
    /// `Error::SurfaceIncomplete` when the size exceeds the driver limits or
    /// the framebuffer status is not complete; `Error::BackendError` when a
    /// GL object cannot be created.
    pub fn new(gl: Rc<glow::Context>, desc: &SurfaceDesc) -> Result<Self> {
        let (width, height) = (desc.width, desc.height);

        let max_size = unsafe {
            gl.get_parameter_i32(glow::MAX_TEXTURE_SIZE)
                .min(gl.get_parameter_i32(glow::MAX_RENDERBUFFER_SIZE))
        };
        if width == 0 || height == 0 || width > max_size as u32 || height > max_size as u32 {
            spin_bail!(
                SOURCE,
                Error::SurfaceIncomplete,
                "{}x{} is outside the supported range 1..={}",
                width,
                height,
                max_size
            );
        }

        let surface = unsafe {
            let created = (
                gl.create_framebuffer(),
                gl.create_texture(),
                gl.create_renderbuffer(),
            );
            match created {
                (Ok(framebuffer), Ok(color_texture), Ok(depth_stencil)) => Self {
                    gl: gl.clone(),
                    framebuffer,
                    color_texture,
                    depth_stencil,
                    width,
                    height,
                    format: desc.color_format,
                },
                (framebuffer, texture, renderbuffer) => {
                    let mut reasons = Vec::new();
                    match framebuffer {
                        Ok(framebuffer) => gl.delete_framebuffer(framebuffer),
                        Err(e) => reasons.push(format!("framebuffer: {e}")),
                    }
                    match texture {
                        Ok(texture) => gl.delete_texture(texture),
                        Err(e) => reasons.push(format!("texture: {e}")),
                    }
                    match renderbuffer {
                        Ok(renderbuffer) => gl.delete_renderbuffer(renderbuffer),
                        Err(e) => reasons.push(format!("renderbuffer: {e}")),
                    }
                    spin_bail!(
                        SOURCE,
                        Error::BackendError,
                        "Failed to create framebuffer objects ({})",
                        reasons.join(", ")
                    );
                }
            }
        };

        // From here on Drop releases the objects on every early return
        let status = unsafe { surface.attach_storage() };
        if status != glow::FRAMEBUFFER_COMPLETE {
            spin_bail!(
                SOURCE,
                Error::SurfaceIncomplete,
                "Framebuffer {}x{} {:?} is incomplete: {} (0x{:x})",
                width,
                height,
                desc.color_format,
                framebuffer_status_name(status),
                status
            );
        }

        spin_capture::spin_debug!(
            SOURCE,
            "Framebuffer {}x{} {:?} complete",
            width,
            height,
            desc.color_format
        );
        Ok(surface)
    }

    /// Allocate and attach both attachments, returning the framebuffer status
    unsafe fn attach_storage(&self) -> u32 {
        let gl = &self.gl;
        let (internal_format, pixel_format) = color_attachment_format(self.format);

        gl.bind_texture(glow::TEXTURE_2D, Some(self.color_texture));
        gl.tex_image_2d(
            glow::TEXTURE_2D,
            0,
            internal_format as i32,
            self.width as i32,
            self.height as i32,
            0,
            pixel_format,
            glow::UNSIGNED_BYTE,
            None,
        );
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::NEAREST as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::NEAREST as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::CLAMP_TO_EDGE as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::CLAMP_TO_EDGE as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAX_LEVEL, 0);
        gl.bind_texture(glow::TEXTURE_2D, None);

        gl.bind_renderbuffer(glow::RENDERBUFFER, Some(self.depth_stencil));
        gl.renderbuffer_storage(
            glow::RENDERBUFFER,
            glow::DEPTH24_STENCIL8,
            self.width as i32,
            self.height as i32,
        );
        gl.bind_renderbuffer(glow::RENDERBUFFER, None);

        gl.bind_framebuffer(glow::FRAMEBUFFER, Some(self.framebuffer));
        gl.framebuffer_texture_2d(
            glow::FRAMEBUFFER,
            glow::COLOR_ATTACHMENT0,
            glow::TEXTURE_2D,
            Some(self.color_texture),
            0,
        );
        gl.framebuffer_renderbuffer(
            glow::FRAMEBUFFER,
            glow::DEPTH_STENCIL_ATTACHMENT,
            glow::RENDERBUFFER,
            Some(self.depth_stencil),
        );

        let status = gl.check_framebuffer_status(glow::FRAMEBUFFER);
        gl.bind_framebuffer(glow::FRAMEBUFFER, None);
        status
    }

    /// The color attachment, for sampling the last frame elsewhere
    pub fn color_texture(&self) -> glow::NativeTexture {
        self.color_texture
    }
}

impl RenderSurface for GlRenderSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn color_format(&self) -> ColorFormat {
        self.format
    }

    fn bind_for_drawing(&self) {
        unsafe {
            self.gl.bind_framebuffer(glow::FRAMEBUFFER, Some(self.framebuffer));
            self.gl.viewport(0, 0, self.width as i32, self.height as i32);
            self.gl.enable(glow::DEPTH_TEST);
        }
    }

    fn clear(&self, flags: ClearFlags, color: [f32; 4]) {
        let mut mask = 0;
        if flags.contains(ClearFlags::COLOR) {
            mask |= glow::COLOR_BUFFER_BIT;
        }
        if flags.contains(ClearFlags::DEPTH) {
            mask |= glow::DEPTH_BUFFER_BIT;
        }
        if flags.contains(ClearFlags::STENCIL) {
            mask |= glow::STENCIL_BUFFER_BIT;
        }

        unsafe {
            self.gl.clear_color(color[0], color[1], color[2], color[3]);
            self.gl.clear(mask);
        }
    }

    fn wait_idle(&self) {
        unsafe {
            self.gl.finish();
        }
    }

    fn read_pixels(&self, out: &mut [u8]) -> Result<()> {
        let expected = self.width as usize * self.height as usize * 4;
        if out.len() != expected {
            spin_bail!(
                SOURCE,
                Error::BackendError,
                "Readback buffer is {} bytes, surface needs {}",
                out.len(),
                expected
            );
        }

        let error = unsafe {
            // Drain errors left by earlier calls so the check below is ours.
            // A lost context keeps reporting, hence the bound.
            for _ in 0..MAX_PENDING_ERRORS {
                if self.gl.get_error() == glow::NO_ERROR {
                    break;
                }
            }

            self.gl.bind_framebuffer(glow::READ_FRAMEBUFFER, Some(self.framebuffer));
            self.gl.read_buffer(glow::COLOR_ATTACHMENT0);
            self.gl.pixel_store_i32(glow::PACK_ALIGNMENT, 1);
            self.gl.read_pixels(
                0,
                0,
                self.width as i32,
                self.height as i32,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelPackData::Slice(out),
            );
            self.gl.get_error()
        };

        if error != glow::NO_ERROR {
            spin_bail!(
                SOURCE,
                Error::BackendError,
                "glReadPixels failed: {} (0x{:x})",
                gl_error_name(error),
                error
            );
        }
        Ok(())
    }
}

impl Drop for GlRenderSurface {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_framebuffer(self.framebuffer);
            self.gl.delete_texture(self.color_texture);
            self.gl.delete_renderbuffer(self.depth_stencil);
        }
    }
}
