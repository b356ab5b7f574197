/// Capture job - the frame plan of one turntable capture
///
/// Frame `i` of an `n`-frame job is rotated `i * 360 / n` degrees, so frame 0
/// is always the unrotated scene and the angles increase monotonically
/// without ever reaching 360.

use std::path::PathBuf;

use glam::{Mat4, Vec3};

use crate::error::{Error, Result};
use super::frame_path::{counter_digits, FramePathTemplate};

/// One planned frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSpec {
    /// 0-based frame index
    pub index: u32,
    /// Rotation about the turntable axis, in degrees
    pub angle_degrees: f32,
    /// Output file of this frame
    pub path: PathBuf,
}

/// Transient description of an N-frame capture
#[derive(Debug, Clone)]
pub struct CaptureJob {
    frame_count: u32,
    template: FramePathTemplate,
    counter_digits: usize,
}

impl CaptureJob {
    /// Plan a job of `frame_count` frames written to `output_template`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidJob` when `frame_count` is zero or the
    /// template is empty.
    pub fn new(frame_count: u32, output_template: &str, min_counter_digits: usize) -> Result<Self> {
        if frame_count == 0 {
            return Err(Error::InvalidJob("frame count must be at least 1".to_string()));
        }

        Ok(Self {
            frame_count,
            template: FramePathTemplate::parse(output_template)?,
            counter_digits: counter_digits(frame_count, min_counter_digits),
        })
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn template(&self) -> &FramePathTemplate {
        &self.template
    }

    /// Width of the zero-padded counter in file names
    pub fn counter_digits(&self) -> usize {
        self.counter_digits
    }

    /// Rotation step between consecutive frames, in degrees
    pub fn step_degrees(&self) -> f32 {
        (360.0 / f64::from(self.frame_count)) as f32
    }

    /// Rotation of frame `index`: `(index * 360 / frame_count) mod 360`
    pub fn angle_degrees(&self, index: u32) -> f32 {
        ((f64::from(index) * 360.0 / f64::from(self.frame_count)) % 360.0) as f32
    }

    /// Model matrix of frame `index`: pure rotation about `axis`
    pub fn model_transform(&self, index: u32, axis: Vec3) -> Mat4 {
        let axis = axis.try_normalize().unwrap_or(Vec3::Y);
        Mat4::from_axis_angle(axis, self.angle_degrees(index).to_radians())
    }

    /// Output file of frame `index`
    pub fn frame_path(&self, index: u32) -> PathBuf {
        self.template.frame_path(index, self.counter_digits)
    }

    /// All frames in capture order
    pub fn frames(&self) -> impl Iterator<Item = FrameSpec> + '_ {
        (0..self.frame_count).map(move |index| FrameSpec {
            index,
            angle_degrees: self.angle_degrees(index),
            path: self.frame_path(index),
        })
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
