//! Human-readable column report of a loaded log

use crate::models::{ContactRecord, LoadResult};
use colored::*;
use std::io::{self, Write};

/// Header values of a record, as one summary line
pub fn header_summary(record: &ContactRecord) -> String {
    let fields = [
        ("MyCall", &record.my_call),
        ("Operator", &record.operator),
        ("MyWWFF", &record.my_wwff),
        ("MySOTA", &record.my_sota),
        ("QSLmsg", &record.qsl_msg),
        ("Nickname", &record.nickname),
    ];

    fields
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Column titles matching [`record_line`]
pub fn column_titles() -> String {
    format!(
        "{:<10} {:<12} {:<6} {:<9} {:<4} {:<12} {:<4} {:<4} {:<12} {}",
        "Date", "MyCall", "Band", "Freq", "Time", "Call", "Sent", "Rcvd", "Ref", "Comment"
    )
}

/// One fixed-width report line for a record
pub fn record_line(record: &ContactRecord) -> String {
    let reference = if record.sota.is_empty() {
        &record.wwff
    } else {
        &record.sota
    };
    format!(
        "{:<10} {:<12} {:<6} {:<9} {:<4} {:<12} {:<4} {:<4} {:<12} {}",
        record.date,
        record.my_call,
        record.band,
        record.frequency,
        record.time,
        record.call,
        record.rst_sent,
        record.rst_rcvd,
        reference,
        record.comment
    )
    .trim_end()
    .to_string()
}

/// Write the full report: summary, titles, records, then errors or success
///
/// A log without QSOs lists its header directive echoes instead of a table.
pub fn write_report<W: Write>(out: &mut W, load: &LoadResult) -> io::Result<()> {
    if let Some(first) = load.records.first() {
        writeln!(out, "{}", header_summary(first))?;
        writeln!(out, "{}", column_titles().bold())?;
        for record in &load.records {
            writeln!(out, "{}", record_line(record))?;
        }
    } else {
        // No QSO to summarise: show the header directives as they were read
        for echo in &load.cleaned_input {
            writeln!(out, "{}", echo)?;
        }
    }

    writeln!(out)?;
    if load.is_clean() {
        writeln!(
            out,
            "{}",
            format!("Successfully parsed {} lines.", load.line_count).green()
        )?;
    } else {
        writeln!(out, "{}", "Processing errors:".red().bold())?;
        for error in &load.errors {
            writeln!(out, "{}", error)?;
        }
    }
    Ok(())
}
