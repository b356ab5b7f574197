//! Error types for spin capture
//!
//! This module defines the error types used throughout the crate:
//! render target construction, frame encoding, job validation and
//! the shader capability of the graphics backends.

use std::fmt;

/// Result type for spin capture operations
pub type Result<T> = std::result::Result<T, Error>;

/// Spin capture errors
///
/// Every variant is fatal for the operation that produced it. Missing shader
/// uniforms are not errors: they are logged as warnings and rendering continues.
#[derive(Debug, Clone)]
pub enum Error {
    /// Render target attachments could not be combined into a usable surface
    SurfaceIncomplete(String),

    /// Image encoding failed (open, write, unsupported extension, disk full)
    Encode(String),

    /// Capture job parameters are invalid (zero frames, empty output template)
    InvalidJob(String),

    /// Shader source could not be read
    ShaderLoad(String),

    /// Shader compilation or program linking failed
    ShaderCompilation(String),

    /// Backend-specific error (OpenGL object creation, GL error codes)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SurfaceIncomplete(msg) => write!(f, "Surface incomplete: {}", msg),
            Error::Encode(msg) => write!(f, "Encode error: {}", msg),
            Error::InvalidJob(msg) => write!(f, "Invalid capture job: {}", msg),
            Error::ShaderLoad(msg) => write!(f, "Shader load failed: {}", msg),
            Error::ShaderCompilation(msg) => write!(f, "Shader compilation failed: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Encode(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
