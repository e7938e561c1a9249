//! Integration tests for the SOTA CSV export
//!
//! Each test writes an FLE log into a temporary directory, runs the full
//! load-and-export path and checks the CSV file (or its absence).

use fle_processor::FleConfig;
use fle_processor::FleError;
use fle_processor::cli::args::CsvArgs;
use fle_processor::cli::commands::run_csv;
use fle_processor::export::process_csv_command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const COMPLETE_LOG: &str = "\
mycall ON4KJM/P
mysota ON/ON-001
date 2020-05-23
40m cw
1227 dl1abc <tnx, 73>
1235 g4xyz
30m 10.118 1240 oe6xyz g/ld-003
";

fn write_log(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("activation.txt");
    fs::write(&path, content).expect("Failed to write log");
    path
}

/// Full happy path: rows, date format, frequency column and quoting
#[test]
fn test_export_complete_log() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_log(&dir, COMPLETE_LOG);

    let summary =
        process_csv_command(&input, &FleConfig::default(), |_| {}).expect("Export should succeed");

    assert_eq!(summary.records_written, 3);
    assert_eq!(summary.times_interpolated, 0);
    assert_eq!(summary.output_path, dir.path().join("activation.csv"));

    let csv = fs::read_to_string(&summary.output_path).expect("CSV should exist");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        [
            "V2,ON4KJM/P,ON/ON-001,23/05/20,1227,7MHz,CW,DL1ABC,,\"tnx, 73\"",
            "V2,ON4KJM/P,ON/ON-001,23/05/20,1235,7MHz,CW,G4XYZ,,",
            "V2,ON4KJM/P,ON/ON-001,23/05/20,1240,10.118MHz,CW,OE6XYZ,G/LD-003,",
        ]
    );
}

/// Untimed QSOs are filled in evenly when interpolation is enabled
#[test]
fn test_export_with_interpolation() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_log(
        &dir,
        "mycall ON4KJM/P\nmysota ON/ON-001\ndate 2020-05-23\n\
         40m cw\n1200 dl1abc\ng4xyz\noe6xyz\n1209 ea2abc\n",
    );
    let output = dir.path().join("interpolated.csv");
    let config = FleConfig::default()
        .with_interpolate_time(true)
        .with_output_path(Some(output.clone()));

    let summary = process_csv_command(&input, &config, |_| {}).expect("Export should succeed");
    assert_eq!(summary.times_interpolated, 2);

    let csv = fs::read_to_string(&output).expect("CSV should exist");
    let times: Vec<&str> = csv
        .lines()
        .map(|line| line.split(',').nth(4).unwrap_or_default())
        .collect();
    assert_eq!(times, ["1200", "1203", "1206", "1209"]);
}

/// A directory output path is refused and nothing is written
#[test]
fn test_output_directory_is_refused() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_log(&dir, COMPLETE_LOG);
    let output = dir.path().join("out");
    fs::create_dir(&output).expect("Failed to create output dir");

    let config = FleConfig::default().with_output_path(Some(output.clone()));
    let error = process_csv_command(&input, &config, |_| {}).unwrap_err();

    assert!(matches!(error, FleError::OutputIsDirectory { .. }));
    assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
}

/// An existing output file needs the overwrite flag
#[test]
fn test_existing_output_requires_overwrite() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_log(&dir, COMPLETE_LOG);
    let output = dir.path().join("activation.csv");
    fs::write(&output, "old").expect("Failed to write old CSV");

    let error = process_csv_command(&input, &FleConfig::default(), |_| {}).unwrap_err();
    assert!(matches!(error, FleError::OutputExists { .. }));
    assert_eq!(fs::read_to_string(&output).unwrap(), "old");

    let config = FleConfig::default().with_overwrite(true);
    process_csv_command(&input, &config, |_| {}).expect("Overwrite should succeed");
    assert!(fs::read_to_string(&output).unwrap().starts_with("V2,"));
}

/// A log without any QSO has nothing to export
#[test]
fn test_no_data() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_log(&dir, "mycall ON4KJM/P\nmysota ON/ON-001\n");

    let error = process_csv_command(&input, &FleConfig::default(), |_| {}).unwrap_err();
    assert!(matches!(error, FleError::NoData));
    assert!(!dir.path().join("activation.csv").exists());
}

/// Line errors block the export
#[test]
fn test_parse_errors_block_export() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_log(&dir, "mycall ON4KJM/P\nmysota ON/ON-001\n40m cw 1200 dl1abc ???\n");

    let mut rejected_lines: Vec<usize> = Vec::new();
    let error = process_csv_command(&input, &FleConfig::default(), |load| {
        rejected_lines = load.errors.iter().map(|e| e.line).collect();
    })
    .unwrap_err();
    assert!(matches!(error, FleError::ParseErrors { count: 1 }));
    assert_eq!(rejected_lines, [3]);
    assert!(!dir.path().join("activation.csv").exists());
}

/// Missing activator fields are reported before any per-QSO check
#[test]
fn test_incomplete_log() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_log(&dir, "mycall ON4KJM/P\ndate 2020-05-23\n40m cw 1200 dl1abc\n");

    let error = process_csv_command(&input, &FleConfig::default(), |_| {}).unwrap_err();
    assert!(matches!(error, FleError::Completeness { .. }));
    assert!(error.to_string().contains("Missing MY-SOTA reference"), "{}", error);
}

/// The csv subcommand runs the same export path as the library driver
///
/// Purpose: Validate the code the binary ships, from parsed arguments to file
/// Benefit: Keeps the CLI and library export behaviour from drifting apart
#[test]
fn test_csv_subcommand_exports_log() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_log(&dir, COMPLETE_LOG);
    let output = dir.path().join("subcommand.csv");

    let stats = run_csv(&CsvArgs {
        input: input.clone(),
        output: Some(output.clone()),
        interpolate: false,
        overwrite: false,
    })
    .expect("Export should succeed");

    assert_eq!(stats.records_written, 3);
    assert_eq!(stats.lines_read, COMPLETE_LOG.lines().count());

    let library_output = dir.path().join("library.csv");
    let config = FleConfig::default().with_output_path(Some(library_output.clone()));
    process_csv_command(&input, &config, |_| {}).expect("Export should succeed");

    assert_eq!(
        fs::read_to_string(&output).expect("CSV should exist"),
        fs::read_to_string(&library_output).expect("CSV should exist")
    );
}
