/// GlShaderProgram - OpenGL implementation of ShaderProgram
///
/// A linked vertex + fragment program. Uniform locations are looked up once
/// per name and cached, including names the program does not have: those
/// are reported as `UniformNotFound` the first time and ignored afterwards.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use glam::Mat4;
use glow::HasContext;
use rustc_hash::FxHashMap;
use spin_capture::spin::device::ShaderProgram;
use spin_capture::spin::{Error, Result};
use spin_capture::spin_bail;

const SOURCE: &str = "spin::gl::Shader";

/// Linked OpenGL program
pub struct GlShaderProgram {
    gl: Rc<glow::Context>,
    program: glow::NativeProgram,
    uniform_locations: RefCell<FxHashMap<String, Option<glow::NativeUniformLocation>>>,
}

impl GlShaderProgram {
    /// Compile and link a program from GLSL sources
    ///
    /// # Errors
    ///
    /// `Error::ShaderCompilation` with the driver's info log when a stage
    /// fails to compile or the program fails to link.
    pub fn from_sources(gl: Rc<glow::Context>, vertex_src: &str, fragment_src: &str) -> Result<Self> {
        let program = unsafe { link_program(&gl, vertex_src, fragment_src)? };

        spin_capture::spin_debug!(SOURCE, "Linked program {:?}", program);
        Ok(Self {
            gl,
            program,
            uniform_locations: RefCell::new(FxHashMap::default()),
        })
    }

    /// Read both stages from disk, then compile and link
    ///
    /// # Errors
    ///
    /// `Error::ShaderLoad` when a file cannot be read, otherwise as
    /// [`GlShaderProgram::from_sources`].
    pub fn from_files(
        gl: Rc<glow::Context>,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let vertex_src = read_source(vertex_path.as_ref())?;
        let fragment_src = read_source(fragment_path.as_ref())?;
        Self::from_sources(gl, &vertex_src, &fragment_src)
    }

    pub fn program(&self) -> glow::NativeProgram {
        self.program
    }

    /// Cached location of `name`, `None` if the program has no such uniform
    fn location(&self, name: &str) -> Option<glow::NativeUniformLocation> {
        if let Some(cached) = self.uniform_locations.borrow().get(name) {
            return cached.clone();
        }

        let location = unsafe { self.gl.get_uniform_location(self.program, name) };
        if location.is_none() {
            spin_capture::spin_warn!(SOURCE, "UniformNotFound: '{}'", name);
        }
        self.uniform_locations
            .borrow_mut()
            .insert(name.to_string(), location.clone());
        location
    }
}

impl ShaderProgram for GlShaderProgram {
    fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.program));
        }
    }

    fn set_mat4(&self, name: &str, value: &Mat4) {
        if let Some(location) = self.location(name) {
            unsafe {
                self.gl
                    .uniform_matrix_4_f32_slice(Some(&location), false, &value.to_cols_array());
            }
        }
    }

    fn set_int(&self, name: &str, value: i32) {
        if let Some(location) = self.location(name) {
            unsafe {
                self.gl.uniform_1_i32(Some(&location), value);
            }
        }
    }

    fn set_float(&self, name: &str, value: f32) {
        if let Some(location) = self.location(name) {
            unsafe {
                self.gl.uniform_1_f32(Some(&location), value);
            }
        }
    }
}

impl Drop for GlShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.program);
        }
    }
}

fn read_source(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(source) => Ok(source),
        Err(err) => spin_bail!(
            SOURCE,
            Error::ShaderLoad,
            "Cannot read shader {}: {}",
            path.display(),
            err
        ),
    }
}

unsafe fn compile_stage(
    gl: &glow::Context,
    stage: u32,
    label: &str,
    source: &str,
) -> Result<glow::NativeShader> {
    let shader = match gl.create_shader(stage) {
        Ok(shader) => shader,
        Err(e) => spin_bail!(SOURCE, Error::BackendError, "create_shader({}) failed: {}", label, e),
    };
    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if !gl.get_shader_compile_status(shader) {
        let log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        spin_bail!(SOURCE, Error::ShaderCompilation, "{} shader: {}", label, log.trim_end());
    }
    Ok(shader)
}

unsafe fn link_program(
    gl: &glow::Context,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<glow::NativeProgram> {
    let vertex = compile_stage(gl, glow::VERTEX_SHADER, "vertex", vertex_src)?;
    let fragment = match compile_stage(gl, glow::FRAGMENT_SHADER, "fragment", fragment_src) {
        Ok(fragment) => fragment,
        Err(err) => {
            gl.delete_shader(vertex);
            return Err(err);
        }
    };

    let program = match gl.create_program() {
        Ok(program) => program,
        Err(e) => {
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);
            spin_bail!(SOURCE, Error::BackendError, "create_program failed: {}", e);
        }
    };

    gl.attach_shader(program, vertex);
    gl.attach_shader(program, fragment);
    gl.link_program(program);

    gl.detach_shader(program, vertex);
    gl.detach_shader(program, fragment);
    gl.delete_shader(vertex);
    gl.delete_shader(fragment);

    if !gl.get_program_link_status(program) {
        let log = gl.get_program_info_log(program);
        gl.delete_program(program);
        spin_bail!(SOURCE, Error::ShaderCompilation, "link: {}", log.trim_end());
    }
    Ok(program)
}
