/// Mock graphics device for unit tests (no GPU required)
///
/// Surfaces are plain byte vectors stored bottom row first, like the memory
/// an OpenGL readback produces. The shared `MockGpu` records every command so
/// tests can assert on ordering.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Mat4;

use crate::device::{
    ClearFlags, ColorFormat, Drawable, GraphicsDevice, RenderSurface, ShaderProgram, SurfaceDesc,
};
use crate::error::{Error, Result};

// ============================================================================
// Shared mock GPU state
// ============================================================================

/// Backing memory of one mock surface
#[derive(Debug)]
pub struct MockSurfaceMemory {
    pub width: u32,
    pub height: u32,
    pub format: ColorFormat,
    /// RGBA8, bottom row first
    pub pixels: Vec<u8>,
    pub alive: bool,
}

impl MockSurfaceMemory {
    /// Fill memory row `row` (0 = bottom of the image) with one color
    pub fn fill_row(&mut self, row: u32, rgba: [u8; 4]) {
        let stride = (self.width * 4) as usize;
        let start = row as usize * stride;
        for texel in self.pixels[start..start + stride].chunks_exact_mut(4) {
            texel.copy_from_slice(&rgba);
        }
    }
}

/// Uniform upload recorded by MockShader
#[derive(Debug, Clone, PartialEq)]
pub enum MockUniform {
    Mat4(Mat4),
    Int(i32),
    Float(f32),
}

#[derive(Debug, Default)]
pub struct MockGpu {
    pub surfaces: Vec<MockSurfaceMemory>,
    pub bound_surface: Option<usize>,
    pub viewport: Option<(u32, u32)>,
    pub commands: Vec<String>,
    pub uniforms: Vec<(String, MockUniform)>,
    pub missing_uniforms: Vec<String>,
}

impl MockGpu {
    /// Last matrix uploaded under `name`
    pub fn last_mat4(&self, name: &str) -> Option<Mat4> {
        self.uniforms.iter().rev().find_map(|(n, value)| match value {
            MockUniform::Mat4(m) if n == name => Some(*m),
            _ => None,
        })
    }

    /// All matrices uploaded under `name`, in upload order
    pub fn mat4_history(&self, name: &str) -> Vec<Mat4> {
        self.uniforms
            .iter()
            .filter_map(|(n, value)| match value {
                MockUniform::Mat4(m) if n == name => Some(*m),
                _ => None,
            })
            .collect()
    }

    /// Number of recorded commands equal to `command`
    pub fn count(&self, command: &str) -> usize {
        self.commands.iter().filter(|c| c.as_str() == command).count()
    }
}

pub type SharedMockGpu = Rc<RefCell<MockGpu>>;

// ============================================================================
// Mock Device
// ============================================================================

pub struct MockDevice {
    pub gpu: SharedMockGpu,
    /// Report every new surface as incomplete
    pub reject_surfaces: bool,
    /// Hand back surfaces of this size regardless of the request
    pub size_override: Option<(u32, u32)>,
}

impl MockDevice {
    pub fn new() -> Self {
        Self {
            gpu: Rc::new(RefCell::new(MockGpu::default())),
            reject_surfaces: false,
            size_override: None,
        }
    }

    pub fn gpu(&self) -> SharedMockGpu {
        self.gpu.clone()
    }
}

impl GraphicsDevice for MockDevice {
    fn create_surface(&mut self, desc: &SurfaceDesc) -> Result<Box<dyn RenderSurface>> {
        if self.reject_surfaces {
            return Err(Error::SurfaceIncomplete(
                "mock framebuffer status: FRAMEBUFFER_UNSUPPORTED".to_string(),
            ));
        }

        let (width, height) = self.size_override.unwrap_or((desc.width, desc.height));
        let mut gpu = self.gpu.borrow_mut();
        let id = gpu.surfaces.len();
        gpu.surfaces.push(MockSurfaceMemory {
            width,
            height,
            format: desc.color_format,
            pixels: vec![0u8; (width * height * 4) as usize],
            alive: true,
        });
        gpu.commands.push("create_surface".to_string());

        Ok(Box::new(MockSurface {
            id,
            width,
            height,
            format: desc.color_format,
            gpu: self.gpu.clone(),
        }))
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

// ============================================================================
// Mock Surface
// ============================================================================

pub struct MockSurface {
    id: usize,
    width: u32,
    height: u32,
    format: ColorFormat,
    gpu: SharedMockGpu,
}

impl RenderSurface for MockSurface {
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
        let mut gpu = self.gpu.borrow_mut();
        gpu.bound_surface = Some(self.id);
        gpu.viewport = Some((self.width, self.height));
        gpu.commands.push("bind".to_string());
    }

    fn clear(&self, flags: ClearFlags, color: [f32; 4]) {
        let mut gpu = self.gpu.borrow_mut();
        if flags.contains(ClearFlags::COLOR) {
            let alpha = match self.format {
                ColorFormat::Rgb8 => 255,
                ColorFormat::Rgba8 => (color[3].clamp(0.0, 1.0) * 255.0).round() as u8,
            };
            let rgba = [
                (color[0].clamp(0.0, 1.0) * 255.0).round() as u8,
                (color[1].clamp(0.0, 1.0) * 255.0).round() as u8,
                (color[2].clamp(0.0, 1.0) * 255.0).round() as u8,
                alpha,
            ];
            let memory = &mut gpu.surfaces[self.id];
            for texel in memory.pixels.chunks_exact_mut(4) {
                texel.copy_from_slice(&rgba);
            }
        }
        gpu.commands.push(format!("clear:{}", flags.bits()));
    }

    fn wait_idle(&self) {
        self.gpu.borrow_mut().commands.push("wait_idle".to_string());
    }

    fn read_pixels(&self, out: &mut [u8]) -> Result<()> {
        let mut gpu = self.gpu.borrow_mut();
        let memory = &gpu.surfaces[self.id];
        if out.len() != memory.pixels.len() {
            return Err(Error::BackendError(format!(
                "readback buffer is {} bytes, surface needs {}",
                out.len(),
                memory.pixels.len()
            )));
        }
        out.copy_from_slice(&memory.pixels);
        gpu.commands.push("read_pixels".to_string());
        Ok(())
    }
}

impl Drop for MockSurface {
    fn drop(&mut self) {
        let mut gpu = self.gpu.borrow_mut();
        gpu.surfaces[self.id].alive = false;
        gpu.commands.push("delete_surface".to_string());
    }
}

// ============================================================================
// Mock Shader
// ============================================================================

pub struct MockShader {
    active_uniforms: Vec<&'static str>,
    gpu: SharedMockGpu,
}

impl MockShader {
    pub fn new(gpu: SharedMockGpu, active_uniforms: &[&'static str]) -> Self {
        Self {
            active_uniforms: active_uniforms.to_vec(),
            gpu,
        }
    }

    fn upload(&self, name: &str, value: MockUniform) {
        let mut gpu = self.gpu.borrow_mut();
        if self.active_uniforms.contains(&name) {
            gpu.uniforms.push((name.to_string(), value));
        } else {
            crate::spin_warn!("spin::MockShader", "UniformNotFound: '{}'", name);
            gpu.missing_uniforms.push(name.to_string());
        }
    }
}

impl ShaderProgram for MockShader {
    fn use_program(&self) {
        self.gpu.borrow_mut().commands.push("use_program".to_string());
    }

    fn set_mat4(&self, name: &str, value: &Mat4) {
        self.upload(name, MockUniform::Mat4(*value));
    }

    fn set_int(&self, name: &str, value: i32) {
        self.upload(name, MockUniform::Int(value));
    }

    fn set_float(&self, name: &str, value: f32) {
        self.upload(name, MockUniform::Float(value));
    }
}

// ============================================================================
// Mock Drawable
// ============================================================================

/// Paints the top image row red and the bottom image row blue
///
/// In bottom-up memory the top row is the last one, so a correct flip puts
/// red at file row 0.
pub struct MockDrawable {
    gpu: SharedMockGpu,
}

impl MockDrawable {
    pub const TOP: [u8; 4] = [255, 0, 0, 255];
    pub const BOTTOM: [u8; 4] = [0, 0, 255, 255];

    pub fn new(gpu: SharedMockGpu) -> Self {
        Self { gpu }
    }
}

impl Drawable for MockDrawable {
    fn draw(&self, _shader: &dyn ShaderProgram) {
        let mut gpu = self.gpu.borrow_mut();
        gpu.commands.push("draw".to_string());
        if let Some(id) = gpu.bound_surface {
            let memory = &mut gpu.surfaces[id];
            let top = memory.height - 1;
            memory.fill_row(top, Self::TOP);
            memory.fill_row(0, Self::BOTTOM);
        }
    }
}

#[cfg(test)]
#[path = "mock_device_tests.rs"]
mod tests;
