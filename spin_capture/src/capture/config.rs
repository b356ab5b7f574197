/// Capture configuration

use glam::Vec3;
use image::ImageFormat;

use crate::device::{ColorFormat, SurfaceDesc};

/// Capture configuration
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Render target width in texels
    pub width: u32,
    /// Render target height in texels
    pub height: u32,
    /// Render target color format
    pub color_format: ColorFormat,
    /// Color each frame is cleared to before drawing (RGBA)
    pub clear_color: [f32; 4],
    /// Turntable rotation axis (normalized before use)
    pub rotation_axis: Vec3,
    /// Name of the model matrix uniform in the scene shader
    pub model_uniform: String,
    /// Minimum width of the zero-padded frame counter
    pub min_counter_digits: usize,
    /// Encoder used when the output template has no extension
    pub fallback_format: ImageFormat,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            color_format: ColorFormat::Rgba8,
            clear_color: [0.0, 0.0, 0.0, 0.0],
            rotation_axis: Vec3::Y,
            model_uniform: "model".to_string(),
            min_counter_digits: 4,
            fallback_format: ImageFormat::Png,
        }
    }
}

impl CaptureConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_color_format(mut self, color_format: ColorFormat) -> Self {
        self.color_format = color_format;
        self
    }

    pub fn with_clear_color(mut self, clear_color: [f32; 4]) -> Self {
        self.clear_color = clear_color;
        self
    }

    pub fn with_rotation_axis(mut self, axis: Vec3) -> Self {
        self.rotation_axis = axis;
        self
    }

    pub fn with_model_uniform(mut self, name: impl Into<String>) -> Self {
        self.model_uniform = name.into();
        self
    }

    pub fn with_fallback_format(mut self, format: ImageFormat) -> Self {
        self.fallback_format = format;
        self
    }

    /// Surface descriptor for the render target this config asks for
    pub fn surface_desc(&self) -> SurfaceDesc {
        SurfaceDesc {
            width: self.width,
            height: self.height,
            color_format: self.color_format,
        }
    }
}
