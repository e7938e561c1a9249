//! Core data structures for FLE log processing.
//!
//! Defines the per-QSO contact record, the sticky header state, the
//! per-line validation error and the overall load result.

use crate::constants::ModeType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One logged contact (QSO), with the header values in effect when it was read
///
/// Empty strings mean "not provided"; the completeness check relies on that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    // Header values (snapshot of HeaderState)
    pub my_call: String,
    pub operator: String,
    pub my_wwff: String,
    pub my_sota: String,
    pub qsl_msg: String,
    pub nickname: String,

    /// Canonical `yyyy-mm-dd` date
    pub date: String,

    pub mode: String,
    #[serde(skip)]
    pub mode_type: ModeType,

    /// Band name as found in the band plan, lower case
    pub band: String,
    pub band_lower_limit: f64,
    pub band_upper_limit: f64,

    /// Frequency in MHz with three decimals, empty if not given
    pub frequency: String,

    /// Effective `hhmm` time (carried forward or interpolated)
    pub time: String,

    /// Time explicitly written on the line, empty when carried forward
    pub actual_time: String,

    /// The other station's callsign
    pub call: String,
    pub rst_sent: String,
    pub rst_rcvd: String,
    pub comment: String,
    pub om_name: String,
    pub grid_loc: String,

    /// The other station's WWFF reference
    pub wwff: String,

    /// The other station's SOTA reference
    pub sota: String,
}

impl ContactRecord {
    /// A record carries contact data only when the other station's call is known
    pub fn has_contact(&self) -> bool {
        !self.call.is_empty()
    }

    /// Overlay the header state on this record's fields
    ///
    /// Used by the loader to build the synthetic previous record that a data
    /// line is parsed against. A header date replaces the carried date; with
    /// no `date` directive the date from the last data line is kept.
    pub fn with_header(&self, header: &HeaderState) -> Self {
        let date = if header.date.is_empty() {
            self.date.clone()
        } else {
            header.date.clone()
        };

        Self {
            my_call: header.my_call.clone(),
            operator: header.operator.clone(),
            my_wwff: header.my_wwff.clone(),
            my_sota: header.my_sota.clone(),
            qsl_msg: header.qsl_msg.clone(),
            nickname: header.nickname.clone(),
            date,
            ..self.clone()
        }
    }
}

/// Sticky header directive values in effect for one load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderState {
    pub my_call: String,
    pub operator: String,
    pub my_wwff: String,
    pub my_sota: String,
    pub qsl_msg: String,
    pub nickname: String,
    pub date: String,
}

/// Category of a recorded per-line problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// A header directive value failed its field validator
    DirectiveValue,
    /// A data line could not be fully interpreted
    LineParse,
}

/// A problem found on one input line; the load continues past it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// 1-based input line number
    pub line: usize,
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(line: usize, kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            line,
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of loading one FLE log
#[derive(Debug, Clone, Default)]
pub struct LoadResult {
    /// Contact records in input order
    pub records: Vec<ContactRecord>,

    /// Per-line problems in encounter order
    pub errors: Vec<ValidationError>,

    /// One formatted line per stored header directive; the report lists them
    /// when the log holds no QSO
    pub cleaned_input: Vec<String>,

    /// Number of input lines scanned
    pub line_count: usize,
}

impl LoadResult {
    /// A load is clean when no line-level error was recorded
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_header_keeps_record_fields() {
        let previous = ContactRecord {
            my_call: "OLD".to_string(),
            band: "40m".to_string(),
            mode: "CW".to_string(),
            time: "1200".to_string(),
            call: "DL1ABC".to_string(),
            ..Default::default()
        };
        let header = HeaderState {
            my_call: "ON4KJM/P".to_string(),
            date: "2020-05-24".to_string(),
            ..Default::default()
        };

        let merged = previous.with_header(&header);

        assert_eq!(merged.my_call, "ON4KJM/P");
        assert_eq!(merged.date, "2020-05-24");
        assert_eq!(merged.band, "40m");
        assert_eq!(merged.time, "1200");
        assert_eq!(merged.call, "DL1ABC");
    }

    #[test]
    fn test_with_header_keeps_date_without_date_directive() {
        let previous = ContactRecord {
            date: "2020-06-01".to_string(),
            ..Default::default()
        };
        let header = HeaderState {
            my_call: "ON4KJM/P".to_string(),
            ..Default::default()
        };

        assert_eq!(previous.with_header(&header).date, "2020-06-01");
    }

    #[test]
    fn test_load_result_clean() {
        let mut result = LoadResult::default();
        assert!(result.is_clean());

        result.errors.push(ValidationError::new(
            3,
            ValidationErrorKind::LineParse,
            "Parsing error at line 3: oops",
        ));
        assert!(!result.is_clean());
        assert_eq!(result.errors[0].to_string(), "Parsing error at line 3: oops");
    }
}
