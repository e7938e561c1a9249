//! Error handling for FLE log processing.
//!
//! Only fatal conditions live here: unreadable input, forbidden output paths
//! and the export gates. Problems found on individual log lines are recorded
//! as [`crate::models::ValidationError`] values and never abort a load.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FleError {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Output path is a directory: {path}")]
    OutputIsDirectory { path: PathBuf },

    #[error("Output file already exists (use --overwrite to replace it): {path}")]
    OutputExists { path: PathBuf },

    /// The load recorded line-level errors; nothing is exported
    #[error("Log contains {count} processing error(s)")]
    ParseErrors { count: usize },

    #[error("No QSO found in the log")]
    NoData,

    /// Aggregated missing-field report from the completeness check
    #[error("Incomplete log: {message}")]
    Completeness { message: String },

    #[error("Time interpolation failed: {message}")]
    Interpolation { message: String },

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
}

impl FleError {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a completeness error from the aggregated message
    pub fn completeness(message: impl Into<String>) -> Self {
        Self::Completeness {
            message: message.into(),
        }
    }

    /// Create a time interpolation error
    pub fn interpolation(message: impl Into<String>) -> Self {
        Self::Interpolation {
            message: message.into(),
        }
    }

    /// True for the I/O family of errors (input unreadable, output forbidden)
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::Io { .. }
                | Self::InputNotFound { .. }
                | Self::OutputIsDirectory { .. }
                | Self::OutputExists { .. }
        )
    }
}

impl From<std::io::Error> for FleError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

pub type Result<T> = std::result::Result<T, FleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_family() {
        let err = FleError::OutputIsDirectory {
            path: PathBuf::from("/tmp"),
        };
        assert!(err.is_io());
        assert!(!FleError::NoData.is_io());
        assert!(!FleError::completeness("Missing MyCall").is_io());
    }

    #[test]
    fn test_completeness_display() {
        let err = FleError::completeness("Missing MyCall");
        assert_eq!(err.to_string(), "Incomplete log: Missing MyCall");
    }
}
