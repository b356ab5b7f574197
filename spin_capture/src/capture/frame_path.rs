/// Output path template - `<stem><counter><extension>` file naming
///
/// The template is split at its last `.`, as long as that dot belongs to the
/// file name (it comes after the last path separator). A template without
/// such a dot is all stem with an empty extension: `"out"` produces `out0000`,
/// `out0001`, and so on.

use std::path::{is_separator, PathBuf};

use crate::error::{Error, Result};

/// Parsed output path template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePathTemplate {
    stem: String,
    extension: String,
}

impl FramePathTemplate {
    /// Split `template` into stem and extension
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidJob` for an empty template.
    pub fn parse(template: &str) -> Result<Self> {
        if template.is_empty() {
            return Err(Error::InvalidJob("output path template is empty".to_string()));
        }

        let last_separator = template.rfind(is_separator);
        let split = template
            .rfind('.')
            .filter(|&dot| last_separator.map_or(true, |sep| dot > sep));

        let (stem, extension) = match split {
            Some(dot) => template.split_at(dot),
            None => (template, ""),
        };

        Ok(Self {
            stem: stem.to_string(),
            extension: extension.to_string(),
        })
    }

    /// Everything before the counter
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Everything after the counter, including the dot (may be empty)
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn has_extension(&self) -> bool {
        !self.extension.is_empty()
    }

    /// Path of frame `index` with a counter zero-padded to `digits`
    pub fn frame_path(&self, index: u32, digits: usize) -> PathBuf {
        PathBuf::from(format!(
            "{}{:0width$}{}",
            self.stem,
            index,
            self.extension,
            width = digits
        ))
    }
}

/// Counter width that keeps every name of a `frame_count` job unique
///
/// At least `min_digits`; widened to the digit count of the last index when
/// the job is larger than the minimum width can number.
pub fn counter_digits(frame_count: u32, min_digits: usize) -> usize {
    let last_index = frame_count.saturating_sub(1);
    let needed = last_index.checked_ilog10().map_or(1, |log| log as usize + 1);
    needed.max(min_digits)
}

#[cfg(test)]
#[path = "frame_path_tests.rs"]
mod tests;
