//! Completeness check run before a SOTA CSV export
//!
//! Every record must carry a date, the activator's call and summit, a band,
//! a time, a mode and the other station's call.

use crate::error::{FleError, Result};
use crate::models::ContactRecord;

/// Message used when any record lacks the activator's call
pub const MISSING_MY_CALL: &str = "Missing MyCall";

/// Message used when any record lacks the activated summit
pub const MISSING_MY_SOTA: &str = "Missing MY-SOTA reference";

/// Describe where a record sits, by time when known
fn entry_location(record: &ContactRecord, position: usize) -> String {
    if record.time.is_empty() {
        format!("for log entry #{}", position)
    } else {
        format!("for log entry at {} (#{})", record.time, position)
    }
}

/// Missing-field messages for one record, in field order
fn missing_fields(record: &ContactRecord, position: usize) -> Vec<String> {
    let location = entry_location(record, position);
    let checks = [
        (record.date.is_empty(), "date"),
        (record.band.is_empty(), "band"),
        (record.time.is_empty(), "QSO time"),
        (record.mode.is_empty(), "mode"),
        (record.call.is_empty(), "call"),
    ];

    checks
        .iter()
        .filter(|(missing, _)| *missing)
        .map(|(_, field)| format!("missing {} {}", field, location))
        .collect()
}

/// Check that every record has the fields a SOTA CSV needs
///
/// A missing MyCall or MY-SOTA anywhere yields a single fixed message;
/// other gaps are listed per record, comma separated, in record order.
pub fn validate_for_sota_csv(records: &[ContactRecord]) -> Result<()> {
    if records.iter().any(|r| r.my_call.is_empty()) {
        return Err(FleError::completeness(MISSING_MY_CALL));
    }
    if records.iter().any(|r| r.my_sota.is_empty()) {
        return Err(FleError::completeness(MISSING_MY_SOTA));
    }

    let messages: Vec<String> = records
        .iter()
        .enumerate()
        .map(|(index, record)| missing_fields(record, index + 1))
        .filter(|fields| !fields.is_empty())
        .map(|fields| fields.join(", "))
        .collect();

    if messages.is_empty() {
        Ok(())
    } else {
        Err(FleError::completeness(messages.join(", ")))
    }
}
