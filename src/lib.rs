//! FLE Processor Library
//!
//! A Rust library for loading amateur radio logs written in the FLE ("Fast
//! Log Entry") shorthand and exporting them for the SOTA database.
//!
//! This library provides tools for:
//! - Classifying log lines (comments, block comments, blanks, content)
//! - Applying sticky header directives such as `mycall` and `mysota`
//! - Parsing terse QSO lines with carry-forward of band, mode, date and time
//! - Validating callsigns, references, dates and signal reports
//! - Checking completeness and writing SOTA `V2` CSV files

pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod models;
pub mod parser;
pub mod report;
pub mod validators;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::FleConfig;
pub use error::{FleError, Result};
pub use models::{ContactRecord, HeaderState, LoadResult, ValidationError};
