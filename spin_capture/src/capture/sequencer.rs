/// Capture sequencer - drives an N-frame turntable capture
///
/// Each frame is rendered, read back and written to disk before the next one
/// starts. The first failure aborts the job; frames already written stay on
/// disk.

use std::path::Path;

use glam::Mat4;

use crate::device::{Drawable, GraphicsDevice, ShaderProgram};
use crate::error::Result;
use crate::target::{Readback, RenderTarget};
use super::config::CaptureConfig;
use super::image_writer::write_frame;
use super::job::CaptureJob;

const SOURCE: &str = "spin::Sequencer";

/// Owns the render target and renders captures into it
///
/// Capturing takes `&mut self`, so one target never serves two captures at
/// the same time.
pub struct CaptureSequencer {
    target: RenderTarget,
    config: CaptureConfig,
    readback: Readback,
}

impl CaptureSequencer {
    /// Create the render target described by `config`
    ///
    /// # Errors
    ///
    /// Returns `Error::SurfaceIncomplete` if the target cannot be built.
    pub fn new(device: &mut dyn GraphicsDevice, config: CaptureConfig) -> Result<Self> {
        let target = RenderTarget::with_desc(device, &config.surface_desc())?;
        Ok(Self::from_target(target, config))
    }

    /// Capture into an existing target
    ///
    /// The target's own size wins over `config.width`/`config.height`.
    pub fn from_target(target: RenderTarget, mut config: CaptureConfig) -> Self {
        config.width = target.width();
        config.height = target.height();
        let readback = Readback::new(target.width(), target.height());
        Self {
            target,
            config,
            readback,
        }
    }

    pub fn target(&self) -> &RenderTarget {
        &self.target
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Give the render target back, dropping the readback buffer
    pub fn into_target(self) -> RenderTarget {
        self.target
    }

    /// Render one frame with `model` and read it back
    ///
    /// Binds the target, clears color to `config.clear_color` and clears
    /// depth, uploads `model` under `config.model_uniform`, then draws.
    ///
    /// # Errors
    ///
    /// Propagates readback failures.
    pub fn render_frame(
        &mut self,
        shader: &dyn ShaderProgram,
        drawable: &dyn Drawable,
        model: &Mat4,
    ) -> Result<&Readback> {
        self.target.bind_for_drawing();
        self.target.clear(self.config.clear_color);

        shader.use_program();
        shader.set_mat4(&self.config.model_uniform, model);
        drawable.draw(shader);

        self.target.read_pixels_into(&mut self.readback)?;
        Ok(&self.readback)
    }

    /// Capture `frame_count` frames of one full turn about the configured axis
    ///
    /// Frame `i` is rotated `(i * 360 / frame_count) mod 360` degrees and
    /// written to `<stem><i zero-padded><extension>`, where stem and extension
    /// come from splitting `output` at its last dot.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidJob` for zero frames or an empty template.
    /// Otherwise the first readback or encode failure aborts the job and is
    /// returned as is.
    pub fn render_spin(
        &mut self,
        shader: &dyn ShaderProgram,
        drawable: &dyn Drawable,
        frame_count: u32,
        output: &str,
    ) -> Result<()> {
        let job = match CaptureJob::new(frame_count, output, self.config.min_counter_digits) {
            Ok(job) => job,
            Err(err) => {
                crate::spin_error!(SOURCE, "Rejected capture of {} frames to '{}': {}",
                    frame_count, output, err);
                return Err(err);
            }
        };

        crate::spin_info!(
            SOURCE,
            "Capturing {} frames at {}x{} ({:.3} degrees per frame) to '{}'",
            job.frame_count(),
            self.target.width(),
            self.target.height(),
            job.step_degrees(),
            output
        );

        let axis = self.config.rotation_axis;
        let fallback_format = self.config.fallback_format;

        for frame in job.frames() {
            let model = job.model_transform(frame.index, axis);

            let written = self
                .render_frame(shader, drawable, &model)
                .and_then(|readback| write_frame(readback, &frame.path, fallback_format));

            if let Err(err) = written {
                crate::spin_error!(
                    SOURCE,
                    "Capture aborted at frame {}/{} ({}): {}",
                    frame.index,
                    job.frame_count(),
                    frame.path.display(),
                    err
                );
                return Err(err);
            }

            crate::spin_debug!(
                SOURCE,
                "Frame {} at {:.3} degrees -> {}",
                frame.index,
                frame.angle_degrees,
                frame.path.display()
            );
        }

        crate::spin_info!(SOURCE, "Captured {} frames", job.frame_count());
        Ok(())
    }

    /// Render the unrotated scene to a single file
    ///
    /// # Errors
    ///
    /// Same failures as one frame of [`CaptureSequencer::render_spin`].
    pub fn capture_still(
        &mut self,
        shader: &dyn ShaderProgram,
        drawable: &dyn Drawable,
        path: &Path,
    ) -> Result<()> {
        let fallback_format = self.config.fallback_format;
        let readback = self.render_frame(shader, drawable, &Mat4::IDENTITY)?;
        write_frame(readback, path, fallback_format)?;

        crate::spin_info!(SOURCE, "Captured still {}", path.display());
        Ok(())
    }
}

impl std::fmt::Debug for CaptureSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureSequencer")
            .field("target", &self.target)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
#[path = "sequencer_tests.rs"]
mod tests;
