//! Command implementations for the FLE processor CLI

use crate::cli::args::{Args, Commands, CsvArgs, LoadArgs};
use crate::error::{FleError, Result};
use crate::export::process_csv_command;
use crate::models::LoadResult;
use crate::parser::load_file;
use crate::report::write_report;
use colored::*;
use std::io::{self, Write};
use tracing::{debug, info, warn};

/// Outcome of a successful command, for the exit summary
#[derive(Debug, Clone, Default)]
pub struct CommandStats {
    pub lines_read: usize,
    pub records_loaded: usize,
    pub records_written: usize,
}

/// Set up structured logging on stderr
///
/// A subscriber that is already installed is kept.
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fle_processor={}", log_level)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    match installed {
        Ok(()) => debug!("Logging initialized at level: {}", log_level),
        Err(e) => debug!("Keeping existing logging subscriber: {}", e),
    }
}

/// Main command runner
pub fn run(args: Args) -> Result<CommandStats> {
    setup_logging(args.log_level());

    match &args.command {
        Commands::Load(load_args) => run_load(load_args),
        Commands::Csv(csv_args) => run_csv(csv_args),
    }
}

/// Load a log and print the column report
pub fn run_load(args: &LoadArgs) -> Result<CommandStats> {
    let load = load_file(&args.input)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &load).map_err(|e| FleError::io("Failed to write report", e))?;

    if !load.is_clean() {
        return Err(FleError::ParseErrors {
            count: load.errors.len(),
        });
    }

    Ok(CommandStats {
        lines_read: load.line_count,
        records_loaded: load.records.len(),
        records_written: 0,
    })
}

/// Load a log and export it as SOTA CSV
pub fn run_csv(args: &CsvArgs) -> Result<CommandStats> {
    let config = args.to_config();

    let summary = process_csv_command(&args.input, &config, |load| {
        if let Err(e) = print_errors(load) {
            warn!("Failed to write errors: {}", e);
        }
    })?;

    if summary.times_interpolated > 0 {
        info!("Interpolated {} QSO times", summary.times_interpolated);
    }
    println!(
        "{} {} QSOs to {}",
        "Exported".green().bold(),
        summary.records_written,
        summary.output_path.display()
    );

    Ok(CommandStats {
        lines_read: summary.lines_read,
        records_loaded: summary.records_written,
        records_written: summary.records_written,
    })
}

fn print_errors(load: &LoadResult) -> io::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    writeln!(out, "{}", "Processing errors:".red().bold())?;
    for error in &load.errors {
        writeln!(out, "{}", error)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_log(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("activation.txt");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_run_load_counts_records() {
        let dir = TempDir::new().unwrap();
        let input = write_log(
            &dir,
            "mycall ON4KJM/P\ndate 2020-05-23\n40m cw\n1200 dl1abc\n5 g4abc\n",
        );

        let stats = run_load(&LoadArgs { input }).unwrap();
        assert_eq!(stats.records_loaded, 2);
        assert_eq!(stats.lines_read, 5);
    }

    #[test]
    fn test_run_load_reports_parse_errors() {
        let dir = TempDir::new().unwrap();
        let input = write_log(&dir, "mycall ON4KJM/P\n40m cw 1200 dl1abc xx!\n");

        let result = run_load(&LoadArgs { input });
        assert!(matches!(result, Err(FleError::ParseErrors { count: 1 })));
    }

    #[test]
    fn test_run_csv_default_output_path() {
        let dir = TempDir::new().unwrap();
        let input = write_log(
            &dir,
            "mycall ON4KJM/P\nmysota ON/ON-001\ndate 2020-05-23\n40m cw\n1200 dl1abc\n",
        );

        let stats = run_csv(&CsvArgs {
            input,
            output: None,
            interpolate: false,
            overwrite: false,
        })
        .unwrap();

        assert_eq!(stats.records_written, 1);
        assert!(dir.path().join("activation.csv").is_file());
    }

    #[test]
    fn test_run_csv_refuses_log_with_errors() {
        let dir = TempDir::new().unwrap();
        let input = write_log(&dir, "mycall ON4KJM/P
mysota ON/ON-001
40m cw 1200 dl1abc ??
");

        let result = run_csv(&CsvArgs {
            input,
            output: None,
            interpolate: false,
            overwrite: false,
        });

        assert!(matches!(result, Err(FleError::ParseErrors { count: 1 })));
        assert!(!dir.path().join("activation.csv").exists());
    }

    #[test]
    fn test_setup_logging_twice_keeps_first_subscriber() {
        setup_logging("debug");
        setup_logging("trace");
    }
}
