//! Off-screen render target module
//!
//! A render target is a fixed-size color + depth/stencil surface that draw
//! calls can be redirected to, plus the readback path that copies its pixels
//! into host memory.

mod readback;
mod render_target;

pub use readback::Readback;
pub use render_target::RenderTarget;
