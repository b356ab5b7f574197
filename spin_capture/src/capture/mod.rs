//! Turntable capture module
//!
//! Plans a capture job (frame angles and file names), drives the render
//! target through each frame and encodes the results to image files.

mod config;
mod frame_path;
mod image_writer;
mod job;
mod sequencer;

pub use config::CaptureConfig;
pub use frame_path::FramePathTemplate;
pub use image_writer::write_frame;
pub use job::{CaptureJob, FrameSpec};
pub use sequencer::CaptureSequencer;
