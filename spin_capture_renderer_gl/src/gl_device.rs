/// GlDevice - OpenGL implementation of GraphicsDevice

use std::path::Path;
use std::rc::Rc;

use glow::HasContext;
use spin_capture::spin::device::{GraphicsDevice, RenderSurface, SurfaceDesc};
use spin_capture::spin::Result;

use crate::gl_render_surface::GlRenderSurface;
use crate::gl_shader_program::GlShaderProgram;

const SOURCE: &str = "spin::gl::Device";

/// Creates GL surfaces and programs on one shared context
///
/// The context must be current on the calling thread for as long as the
/// device and anything created from it are in use.
pub struct GlDevice {
    gl: Rc<glow::Context>,
}

impl GlDevice {
    /// Take ownership of a current context
    pub fn new(gl: glow::Context) -> Self {
        Self::from_shared(Rc::new(gl))
    }

    /// Share a context that other code also draws with
    pub fn from_shared(gl: Rc<glow::Context>) -> Self {
        let (version, renderer) = unsafe {
            (
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::RENDERER),
            )
        };
        spin_capture::spin_info!(SOURCE, "OpenGL {} on {}", version, renderer);
        Self { gl }
    }

    pub fn gl(&self) -> &Rc<glow::Context> {
        &self.gl
    }

    /// Compile and link a program on this device's context
    pub fn create_shader(&self, vertex_src: &str, fragment_src: &str) -> Result<GlShaderProgram> {
        GlShaderProgram::from_sources(self.gl.clone(), vertex_src, fragment_src)
    }

    /// Load, compile and link a program on this device's context
    pub fn create_shader_from_files(
        &self,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<GlShaderProgram> {
        GlShaderProgram::from_files(self.gl.clone(), vertex_path, fragment_path)
    }
}

impl GraphicsDevice for GlDevice {
    fn create_surface(&mut self, desc: &SurfaceDesc) -> Result<Box<dyn RenderSurface>> {
        Ok(Box::new(GlRenderSurface::new(self.gl.clone(), desc)?))
    }

    fn backend_name(&self) -> &str {
        "OpenGL"
    }
}
