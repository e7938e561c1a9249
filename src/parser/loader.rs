//! Single-pass FLE log loader
//!
//! Owns all mutable scan state (comment span, header state, previous record)
//! in a [`LoadContext`] and feeds it the input lines top to bottom. Line-level
//! problems are collected, never raised.

use std::path::Path;
use tracing::{debug, info, warn};

use super::classifier::LineClassifier;
use super::header::{apply_directive, recognize};
use super::line_parser::parse_line;
use crate::error::{FleError, Result};
use crate::models::{ContactRecord, HeaderState, LoadResult, ValidationError, ValidationErrorKind};

/// Mutable scan state for one load
#[derive(Debug, Default)]
pub struct LoadContext {
    classifier: LineClassifier,
    header: HeaderState,
    previous: ContactRecord,
    result: LoadResult,
}

impl LoadContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header values currently in effect
    pub fn header(&self) -> &HeaderState {
        &self.header
    }

    /// Basis for carry-forward on the next data line
    pub fn previous(&self) -> &ContactRecord {
        &self.previous
    }

    pub fn classifier(&self) -> &LineClassifier {
        &self.classifier
    }

    /// Process one input line (1-based line number)
    pub fn feed(&mut self, line_number: usize, line: &str) {
        self.result.line_count = self.result.line_count.max(line_number);

        if self.classifier.classify(line).is_discarded() {
            return;
        }

        if let Some(directive_line) = recognize(line) {
            let outcome = apply_directive(&mut self.header, &directive_line);
            if let Some(echo) = outcome.echo {
                debug!("Line {}: {}", line_number, echo);
                self.result.cleaned_input.push(echo);
            }
            if let Some(message) = outcome.error {
                warn!("Line {}: {}", line_number, message);
                self.result.errors.push(ValidationError::new(
                    line_number,
                    ValidationErrorKind::DirectiveValue,
                    format!(
                        "Invalid {} at line {}: {} ({})",
                        directive_line.directive.error_label(),
                        line_number,
                        directive_line.value,
                        message
                    ),
                ));
            }
            return;
        }

        let basis = self.previous.with_header(&self.header);
        let (record, error) = parse_line(line, &basis);

        if record.has_contact() {
            debug!("Line {}: QSO with {} at {}", line_number, record.call, record.time);
            self.result.records.push(record.clone());
        }
        if let Some(message) = error {
            warn!("Line {}: {}", line_number, message);
            self.result.errors.push(ValidationError::new(
                line_number,
                ValidationErrorKind::LineParse,
                format!("Parsing error at line {}: {}", line_number, message),
            ));
        }
        self.previous = record;
    }

    pub fn finish(self) -> LoadResult {
        self.result
    }
}

/// Load an FLE log from its full text
pub fn load_str(content: &str) -> LoadResult {
    let mut context = LoadContext::new();
    for (index, line) in content.lines().enumerate() {
        context.feed(index + 1, line);
    }
    let result = context.finish();

    info!(
        "Loaded {} QSOs from {} lines ({} errors)",
        result.records.len(),
        result.line_count,
        result.errors.len()
    );
    result
}

/// Read and load an FLE log file
///
/// The whole file is read before parsing starts; read failures are fatal.
pub fn load_file(path: &Path) -> Result<LoadResult> {
    info!("Loading FLE log: {}", path.display());

    if !path.is_file() {
        return Err(FleError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| FleError::io(format!("Failed to read {}", path.display()), e))?;

    Ok(load_str(&content))
}
