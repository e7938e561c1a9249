//! SOTA CSV export
//!
//! Gates the export on a clean, complete load and writes one `V2` row per
//! QSO. The file is only written once every check has passed, so a failed
//! export never leaves a partial CSV behind.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::completeness::validate_for_sota_csv;
use super::interpolation::interpolate_times;
use crate::config::FleConfig;
use crate::constants::{CSV_EXTENSION, SOTA_CSV_VERSION};
use crate::error::{FleError, Result};
use crate::models::{ContactRecord, LoadResult};
use crate::parser::load_file;
use chrono::NaiveDate;

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub output_path: PathBuf,
    /// Input lines scanned by the load
    pub lines_read: usize,
    pub records_written: usize,
    pub times_interpolated: usize,
}

/// Default output path: the input path with a `.csv` extension
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(CSV_EXTENSION)
}

/// Refuse directories, and existing files unless overwriting is allowed
pub fn check_output_path(path: &Path, overwrite: bool) -> Result<()> {
    if path.is_dir() {
        return Err(FleError::OutputIsDirectory {
            path: path.to_path_buf(),
        });
    }
    if path.exists() && !overwrite {
        return Err(FleError::OutputExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// `yyyy-mm-dd` to the `dd/mm/yy` form expected by the SOTA database
fn sota_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%d/%m/%y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// Frequency column: exact frequency when logged, else the band's lower edge
fn sota_frequency(record: &ContactRecord) -> String {
    if record.frequency.is_empty() {
        format!("{}MHz", record.band_lower_limit)
    } else {
        format!("{}MHz", record.frequency)
    }
}

/// Build the CSV row for one record
pub fn sota_row(record: &ContactRecord) -> [String; 10] {
    [
        SOTA_CSV_VERSION.to_string(),
        record.my_call.clone(),
        record.my_sota.clone(),
        sota_date(&record.date),
        record.time.clone(),
        sota_frequency(record),
        record.mode.clone(),
        record.call.clone(),
        record.sota.clone(),
        record.comment.clone(),
    ]
}

/// Render records as SOTA CSV text
pub fn render_sota_csv(records: &[ContactRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for record in records {
        writer.write_record(sota_row(record))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| FleError::io("Failed to flush CSV buffer", e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Run every export gate and write the CSV
///
/// Gates, in order: no line errors, at least one QSO, completeness,
/// optional time interpolation, then output path checks.
pub fn export_sota_csv(
    load: &LoadResult,
    config: &FleConfig,
    output_path: &Path,
) -> Result<ExportSummary> {
    if !load.is_clean() {
        return Err(FleError::ParseErrors {
            count: load.errors.len(),
        });
    }
    if load.records.is_empty() {
        return Err(FleError::NoData);
    }

    validate_for_sota_csv(&load.records)?;

    let mut records = load.records.clone();
    let times_interpolated = if config.interpolate_time {
        interpolate_times(&mut records)?
    } else {
        0
    };

    check_output_path(output_path, config.overwrite_output)?;

    let content = render_sota_csv(&records)?;
    std::fs::write(output_path, content).map_err(|e| {
        FleError::io(format!("Failed to write {}", output_path.display()), e)
    })?;

    info!("Wrote {} QSOs to {}", records.len(), output_path.display());

    Ok(ExportSummary {
        output_path: output_path.to_path_buf(),
        lines_read: load.line_count,
        records_written: records.len(),
        times_interpolated,
    })
}

/// Load an FLE file and export it as SOTA CSV
///
/// `on_rejected` is called with the load when it recorded line errors, just
/// before the export is refused, so the caller can show them.
pub fn process_csv_command<F>(
    input: &Path,
    config: &FleConfig,
    on_rejected: F,
) -> Result<ExportSummary>
where
    F: FnOnce(&LoadResult),
{
    let output_path = config
        .output_path
        .clone()
        .unwrap_or_else(|| default_output_path(input));
    debug!("CSV output path: {}", output_path.display());

    let load = load_file(input)?;
    if !load.is_clean() {
        on_rejected(&load);
    }
    export_sota_csv(&load, config, &output_path)
}
