/*!
# Spin Capture

Off-screen render-and-capture pipeline for turntable image sequences.

This crate provides the platform-agnostic core: a scene is rendered into a
fixed-resolution color/depth render target, the pixels are read back, the
scanline order is corrected and each frame is written to its own image file.
Graphics backends (OpenGL via `spin_capture_renderer_gl`) plug in through the
capability traits in [`device`].

## Architecture

- **GraphicsDevice**: Factory trait for off-screen render surfaces
- **RenderSurface**: Backend surface (color + depth/stencil attachments)
- **ShaderProgram**: Activate a program and upload named uniforms
- **Drawable**: Anything that issues draw calls with a bound shader
- **RenderTarget**: Validated, exclusively owned surface with pixel readback
- **CaptureSequencer**: Drives an N-frame turntable capture to disk
*/

// Internal modules
mod error;
pub mod log;
pub mod device;
pub mod target;
pub mod capture;

// Main spin namespace module
pub mod spin {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        pub use crate::log::{set_logger, reset_logger};
    }

    // Capabilities consumed from the graphics backend
    pub mod device {
        pub use crate::device::*;
    }

    // Render target and readback
    pub use crate::target::{RenderTarget, Readback};

    // Capture sequencing
    pub use crate::capture::{
        CaptureConfig, CaptureJob, CaptureSequencer, FramePathTemplate, FrameSpec,
    };
    pub use crate::capture::write_frame;
}

// Re-export math library at crate root
pub use glam;
// Re-export image format selection used by CaptureConfig
pub use image::ImageFormat;
