/// OpenGL enum helpers - format mapping and readable status names

use spin_capture::spin::device::ColorFormat;

/// (internal format, pixel format) of the color attachment texture
pub(crate) fn color_attachment_format(format: ColorFormat) -> (u32, u32) {
    match format {
        ColorFormat::Rgba8 => (glow::RGBA8, glow::RGBA),
        ColorFormat::Rgb8 => (glow::RGB8, glow::RGB),
    }
}

/// Name of a `glCheckFramebufferStatus` result
pub(crate) fn framebuffer_status_name(status: u32) -> &'static str {
    match status {
        glow::FRAMEBUFFER_COMPLETE => "FRAMEBUFFER_COMPLETE",
        glow::FRAMEBUFFER_UNDEFINED => "FRAMEBUFFER_UNDEFINED",
        glow::FRAMEBUFFER_INCOMPLETE_ATTACHMENT => "FRAMEBUFFER_INCOMPLETE_ATTACHMENT",
        glow::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => {
            "FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT"
        }
        glow::FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER => "FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER",
        glow::FRAMEBUFFER_INCOMPLETE_READ_BUFFER => "FRAMEBUFFER_INCOMPLETE_READ_BUFFER",
        glow::FRAMEBUFFER_UNSUPPORTED => "FRAMEBUFFER_UNSUPPORTED",
        glow::FRAMEBUFFER_INCOMPLETE_MULTISAMPLE => "FRAMEBUFFER_INCOMPLETE_MULTISAMPLE",
        glow::FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS => "FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS",
        _ => "UNKNOWN_FRAMEBUFFER_STATUS",
    }
}

/// Name of a `glGetError` result
pub(crate) fn gl_error_name(error: u32) -> &'static str {
    match error {
        glow::NO_ERROR => "NO_ERROR",
        glow::INVALID_ENUM => "INVALID_ENUM",
        glow::INVALID_VALUE => "INVALID_VALUE",
        glow::INVALID_OPERATION => "INVALID_OPERATION",
        glow::INVALID_FRAMEBUFFER_OPERATION => "INVALID_FRAMEBUFFER_OPERATION",
        glow::OUT_OF_MEMORY => "OUT_OF_MEMORY",
        _ => "UNKNOWN_GL_ERROR",
    }
}

#[cfg(test)]
#[path = "gl_format_tests.rs"]
mod tests;
