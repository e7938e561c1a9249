//! Command line argument definitions

use crate::config::FleConfig;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Load, validate and export FLE shorthand amateur radio logs
#[derive(Parser, Debug)]
#[command(name = "fle-processor")]
#[command(about = "Load, validate and export FLE shorthand amateur radio logs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and validate an FLE log, then print it as a column report
    Load(LoadArgs),

    /// Load an FLE log and export it as a SOTA CSV file
    Csv(CsvArgs),
}

#[derive(Parser, Debug)]
pub struct LoadArgs {
    /// FLE log file to load
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

#[derive(Parser, Debug)]
pub struct CsvArgs {
    /// FLE log file to load
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV file (defaults to the input name with a .csv extension)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Interpolate missing QSO times between explicitly timed QSOs
    #[arg(short = 'i', long)]
    pub interpolate: bool,

    /// Overwrite the output file if it already exists
    #[arg(long)]
    pub overwrite: bool,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Commands {
    /// Input log of the selected command
    pub fn input(&self) -> &Path {
        match self {
            Self::Load(args) => &args.input,
            Self::Csv(args) => &args.input,
        }
    }
}

impl CsvArgs {
    pub fn to_config(&self) -> FleConfig {
        FleConfig::default()
            .with_interpolate_time(self.interpolate)
            .with_overwrite(self.overwrite)
            .with_output_path(self.output.clone())
    }
}
