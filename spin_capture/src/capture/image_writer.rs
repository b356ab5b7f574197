/// Frame encoding - readback buffer to image file
///
/// The encoder is picked from the file extension. Files without one are
/// written with the caller's fallback format.

use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::{Error, Result};
use crate::spin_bail;
use crate::target::Readback;

const SOURCE: &str = "spin::FrameWriter";

/// Encode `readback` to `path`, top row first
///
/// # Errors
///
/// Returns `Error::Encode` for an unknown extension, an encoder that rejects
/// the image, or any I/O failure (missing directory, permissions, ...).
pub fn write_frame(readback: &Readback, path: &Path, fallback_format: ImageFormat) -> Result<()> {
    let format = match path.extension() {
        None => fallback_format,
        Some(ext) => match ImageFormat::from_extension(ext) {
            Some(format) => format,
            None => spin_bail!(
                SOURCE,
                Error::Encode,
                "No encoder for extension '{}' ({})",
                ext.to_string_lossy(),
                path.display()
            ),
        },
    };

    let Some(image) = RgbaImage::from_raw(readback.width(), readback.height(), readback.to_top_down())
    else {
        spin_bail!(
            SOURCE,
            Error::Encode,
            "Readback of {} bytes does not hold a {}x{} image",
            readback.len(),
            readback.width(),
            readback.height()
        );
    };

    let result = if format_has_alpha(format) {
        image.save_with_format(path, format)
    } else {
        DynamicImage::ImageRgba8(image).to_rgb8().save_with_format(path, format)
    };

    if let Err(err) = result {
        spin_bail!(SOURCE, Error::Encode, "Failed to write {}: {}", path.display(), err);
    }

    crate::spin_trace!(SOURCE, "Wrote {:?} frame {}", format, path.display());
    Ok(())
}

/// JPEG has no alpha channel; its encoder rejects RGBA input
fn format_has_alpha(format: ImageFormat) -> bool {
    format != ImageFormat::Jpeg
}

#[cfg(test)]
#[path = "image_writer_tests.rs"]
mod tests;
