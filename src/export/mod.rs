//! Export of loaded logs
//!
//! - [`completeness`] - Missing-field check gating the SOTA CSV
//! - [`interpolation`] - Optional time fill-in for untimed QSOs
//! - [`sota_csv`] - Export gates and the SOTA `V2` CSV writer

pub mod completeness;
pub mod interpolation;
pub mod sota_csv;

pub use completeness::validate_for_sota_csv;
pub use interpolation::interpolate_times;
pub use sota_csv::{ExportSummary, export_sota_csv, process_csv_command};
