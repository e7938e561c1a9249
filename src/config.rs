//! Run configuration for FLE processing.
//!
//! Built by the command layer from CLI arguments; carries the export
//! options that gate and shape the CSV output.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleConfig {
    /// Spread QSOs without an explicit time between their timed neighbours
    pub interpolate_time: bool,

    /// Replace an existing output file
    pub overwrite_output: bool,

    /// CSV output path; defaults to the input path with a `.csv` extension
    pub output_path: Option<PathBuf>,
}

impl FleConfig {
    /// Enable or disable time interpolation
    pub fn with_interpolate_time(mut self, interpolate: bool) -> Self {
        self.interpolate_time = interpolate;
        self
    }

    /// Allow overwriting an existing output file
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite_output = overwrite;
        self
    }

    /// Set an explicit output path
    pub fn with_output_path(mut self, path: Option<PathBuf>) -> Self {
        self.output_path = path;
        self
    }
}
