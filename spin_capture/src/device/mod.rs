/// Device module - capabilities consumed from a graphics backend

// Module declarations
pub mod graphics_device;
pub mod render_surface;
pub mod shader_program;
pub mod drawable;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use render_surface::*;
pub use shader_program::*;
pub use drawable::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_device;
