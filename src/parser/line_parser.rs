//! Data line parser for FLE shorthand QSO lines
//!
//! A data line is a sequence of whitespace separated tokens (time, band,
//! mode, frequency, call, reports, references...) plus optional `<comment>`
//! and `[qsl message]` text. Anything not written on the line is carried
//! forward from the previous record.
//!
//! The parser never fails: a broken line still yields a best-effort record
//! together with an error message.

use crate::constants::{ModeType, REFERENCE_KEYWORDS, find_band, mode_type};
use crate::models::ContactRecord;
use crate::validators::{validate_call, validate_date, validate_rst, validate_sota, validate_wwff};
use chrono::{Duration, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static DATE_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}[-/.]\d{1,2}[-/.]\d{1,2}$").expect("valid date token regex")
});

static DAY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^day(\+{0,2})$").expect("valid day regex"));

static PLUS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+{1,2}$").expect("valid plus regex"));

static FREQUENCY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+$").expect("valid frequency regex"));

static CALL_LIKE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d?[A-Z]{1,2}\d([A-Z]{1,4}|\d{3}|\d{1,3}[A-Z])").expect("valid call regex")
});

static FULL_TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("valid time regex"));

static VALID_TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3])[0-5]\d$").expect("valid time regex"));

static PARTIAL_TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-5]\d|\d)$").expect("valid partial time regex"));

static GRID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-R]{2}\d{2}([A-X]{2})?$").expect("valid grid locator regex")
});

static RST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}$").expect("valid report regex"));

/// Start a record from the carried fields of the previous one
///
/// Per-QSO fields (call, reports, comment, references, names) start empty.
fn carried_fields(previous: &ContactRecord) -> ContactRecord {
    ContactRecord {
        my_call: previous.my_call.clone(),
        operator: previous.operator.clone(),
        my_wwff: previous.my_wwff.clone(),
        my_sota: previous.my_sota.clone(),
        qsl_msg: previous.qsl_msg.clone(),
        nickname: previous.nickname.clone(),
        date: previous.date.clone(),
        mode: previous.mode.clone(),
        mode_type: previous.mode_type,
        band: previous.band.clone(),
        band_lower_limit: previous.band_lower_limit,
        band_upper_limit: previous.band_upper_limit,
        frequency: previous.frequency.clone(),
        time: previous.time.clone(),
        ..Default::default()
    }
}

/// Remove the first `open ... close` span from the line and return its content
fn extract_bracketed(input: &str, open: char, close: char) -> (String, Option<String>) {
    let Some(start) = input.find(open) else {
        return (input.to_string(), None);
    };
    let Some(len) = input[start + 1..].find(close) else {
        return (input.to_string(), None);
    };
    let end = start + 1 + len;
    let content = input[start + 1..end].trim().to_string();
    let remainder = format!("{} {}", &input[..start], &input[end + 1..]);
    (remainder, Some(content))
}

/// Advance a `yyyy-mm-dd` date by a number of days
fn increment_date(date: &str, days: i64) -> Result<String, String> {
    if date.is_empty() {
        return Err("Unable to increment the date: no date defined".to_string());
    }
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| format!("Unable to increment invalid date [{}]", date))?;
    Ok((parsed + Duration::days(days)).format("%Y-%m-%d").to_string())
}

/// Parse one data line against the previous record
///
/// Returns the record (its `call` is empty when the line logs no contact)
/// and an error message when part of the line could not be interpreted.
pub fn parse_line(input: &str, previous: &ContactRecord) -> (ContactRecord, Option<String>) {
    let mut record = carried_fields(previous);
    let mut errors: Vec<String> = Vec::new();

    let (rest, comment) = extract_bracketed(input, '<', '>');
    if let Some(comment) = comment {
        record.comment = comment;
    }
    let (rest, qsl_msg) = extract_bracketed(&rest, '[', ']');
    if let Some(qsl_msg) = qsl_msg {
        record.qsl_msg = qsl_msg;
    }

    let tokens: Vec<&str> = rest.split_whitespace().collect();
    let mut rst_count = 0;
    let mut index = 0;

    while index < tokens.len() {
        let token = tokens[index];
        index += 1;
        let upper = token.to_uppercase();

        if DATE_TOKEN_REGEX.is_match(token) {
            let checked = validate_date(token);
            record.date = checked.value;
            errors.extend(checked.error);
            continue;
        }

        if let Some(caps) = DAY_REGEX.captures(token) {
            let mut plus = caps[1].to_string();
            if plus.is_empty() && index < tokens.len() && PLUS_REGEX.is_match(tokens[index]) {
                plus = tokens[index].to_string();
                index += 1;
            }
            if plus.is_empty() {
                errors.push(format!("Missing '+' after [{}]", token));
                continue;
            }
            match increment_date(&record.date, plus.len() as i64) {
                Ok(date) => record.date = date,
                Err(message) => errors.push(message),
            }
            continue;
        }

        let token_mode_type = mode_type(&upper);
        if token_mode_type != ModeType::Unknown {
            record.mode = upper;
            record.mode_type = token_mode_type;
            continue;
        }

        if let Some(band) = find_band(token) {
            if record.band != band.name {
                record.frequency.clear();
            }
            record.band = band.name.to_string();
            record.band_lower_limit = band.lower_mhz;
            record.band_upper_limit = band.upper_mhz;
            continue;
        }

        if FREQUENCY_REGEX.is_match(token) {
            let qrg: f64 = token.parse().unwrap_or_default();
            if record.band.is_empty() {
                errors.push(format!(
                    "Unable to load frequency [{}]: no band defined for that frequency.",
                    token
                ));
            } else if find_band(&record.band).is_some_and(|band| band.contains(qrg)) {
                record.frequency = format!("{:.3}", qrg);
            } else {
                record.frequency.clear();
                errors.push(format!(
                    "Frequency [{}] is invalid for {} band.",
                    token, record.band
                ));
            }
            continue;
        }

        if REFERENCE_KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(token)) {
            continue;
        }

        let wwff = validate_wwff(token);
        if wwff.is_valid() {
            record.wwff = wwff.value;
            continue;
        }

        let sota = validate_sota(token);
        if sota.is_valid() {
            record.sota = sota.value;
            continue;
        }

        if let Some(name) = token.strip_prefix('@') {
            record.om_name = name.to_string();
            continue;
        }

        if let Some(grid) = token.strip_prefix('#') {
            let grid = grid.to_uppercase();
            if !GRID_REGEX.is_match(&grid) {
                errors.push(format!("[{}] is an invalid grid locator", grid));
            }
            record.grid_loc = grid;
            continue;
        }

        if CALL_LIKE_REGEX.is_match(&upper) {
            if record.call.is_empty() {
                let checked = validate_call(token);
                record.call = checked.value;
                errors.extend(checked.error);
            } else {
                errors.push(format!(
                    "Second call [{}] found on the same line as [{}]",
                    upper, record.call
                ));
            }
            continue;
        }

        // Numbers before the call are times, after the call they are reports
        if record.call.is_empty() {
            if FULL_TIME_REGEX.is_match(token) {
                if VALID_TIME_REGEX.is_match(token) {
                    record.time = token.to_string();
                    record.actual_time = token.to_string();
                } else {
                    errors.push(format!("[{}] is an invalid time", token));
                }
                continue;
            }

            if PARTIAL_TIME_REGEX.is_match(token) {
                if record.time.len() == 4 {
                    let kept = &record.time[..4 - token.len()];
                    record.time = format!("{}{}", kept, token);
                    record.actual_time = record.time.clone();
                } else {
                    errors.push(format!(
                        "Partial time [{}] without a previous full time",
                        token
                    ));
                }
                continue;
            }
        } else if RST_REGEX.is_match(token) {
            let checked = validate_rst(token, record.mode_type);
            match rst_count {
                0 => record.rst_sent = checked.value,
                1 => record.rst_rcvd = checked.value,
                _ => errors.push(format!("Too many reports: [{}]", token)),
            }
            errors.extend(checked.error);
            rst_count += 1;
            continue;
        }

        errors.push(format!("Unable to make sense of [{}].", token));
    }

    if record.has_contact() && record.mode_type != ModeType::Unknown {
        let default_rst = record.mode_type.default_rst();
        if record.rst_sent.is_empty() {
            record.rst_sent = default_rst.to_string();
        }
        if record.rst_rcvd.is_empty() {
            record.rst_rcvd = default_rst.to_string();
        }
    }

    let error = (!errors.is_empty()).then(|| errors.join(" "));
    (record, error)
}
