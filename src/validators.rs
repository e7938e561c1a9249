//! Field validators for FLE log values
//!
//! Each validator is a pure function taking the raw text and returning the
//! normalized value together with an optional error message. The value is
//! always returned, even when invalid, so callers can keep propagating it.

use crate::constants::ModeType;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d?[A-Z]{1,2}\d([A-Z]{1,4}|\d{3}|\d{1,3}[A-Z])[A-Z]{0,5}$")
        .expect("valid callsign regex")
});

static PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d?[A-Z]{1,2}\d{0,2}$").expect("valid prefix regex"));

static SUFFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(P|M|MM|AM|QRP|LH|A|\d)$").expect("valid suffix regex")
});

static WWFF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d?[A-Z]{1,2}FF-\d{4}$").expect("valid WWFF regex"));

static SOTA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{1,4}/[A-Z]{2}-\d{3}$").expect("valid SOTA regex"));

static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})[-/. ](\d{1,2})[-/. ](\d{1,2})$").expect("valid date regex")
});

// Without separators month and day need two digits each
static COMPACT_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})(\d{2})(\d{2})$").expect("valid compact date regex"));

/// Output of a field validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checked {
    /// Normalized value (returned even when invalid)
    pub value: String,

    /// What is wrong with the value, if anything
    pub error: Option<String>,
}

impl Checked {
    fn ok(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            error: None,
        }
    }

    fn invalid(value: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            error: Some(error.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Validate an amateur radio callsign, with optional prefix and suffix
///
/// Accepts `CALL`, `CALL/SUFFIX`, `PREFIX/CALL` and `PREFIX/CALL/SUFFIX`.
pub fn validate_call(raw: &str) -> Checked {
    let sign = raw.trim().to_uppercase();
    if sign.is_empty() {
        return Checked::invalid(sign, "Empty call");
    }

    let parts: Vec<&str> = sign.split('/').collect();
    match parts.as_slice() {
        [call] => {
            if CALL_REGEX.is_match(call) {
                Checked::ok(sign)
            } else {
                let message = format!("[{}] is an invalid call", sign);
                Checked::invalid(sign, message)
            }
        }
        [first, second] => {
            // Either CALL/SUFFIX or PREFIX/CALL
            if CALL_REGEX.is_match(first) {
                if SUFFIX_REGEX.is_match(second) {
                    Checked::ok(sign)
                } else {
                    let message = format!("Invalid suffix [{}] in call [{}]", second, sign);
                    Checked::invalid(sign, message)
                }
            } else if !PREFIX_REGEX.is_match(first) {
                let message = format!("Invalid prefix [{}] in call [{}]", first, sign);
                Checked::invalid(sign, message)
            } else if !CALL_REGEX.is_match(second) {
                let message = format!("[{}] is an invalid call", second);
                Checked::invalid(sign, message)
            } else {
                Checked::ok(sign)
            }
        }
        [prefix, call, suffix] => {
            if !PREFIX_REGEX.is_match(prefix) {
                let message = format!("Invalid prefix [{}] in call [{}]", prefix, sign);
                Checked::invalid(sign, message)
            } else if !CALL_REGEX.is_match(call) {
                let message = format!("[{}] is an invalid call", call);
                Checked::invalid(sign, message)
            } else if !SUFFIX_REGEX.is_match(suffix) {
                let message = format!("Invalid suffix [{}] in call [{}]", suffix, sign);
                Checked::invalid(sign, message)
            } else {
                Checked::ok(sign)
            }
        }
        _ => {
            let message = format!("Too many '/' in call [{}]", sign);
            Checked::invalid(sign, message)
        }
    }
}

/// Validate a WWFF reference (`ONFF-0258`)
pub fn validate_wwff(raw: &str) -> Checked {
    let reference = raw.trim().to_uppercase();
    if WWFF_REGEX.is_match(&reference) {
        Checked::ok(reference)
    } else {
        let message = format!("[{}] is an invalid WWFF reference", reference);
        Checked::invalid(reference, message)
    }
}

/// Validate a SOTA reference (`ON/ON-001`)
pub fn validate_sota(raw: &str) -> Checked {
    let reference = raw.trim().to_uppercase();
    if SOTA_REGEX.is_match(&reference) {
        Checked::ok(reference)
    } else {
        let message = format!("[{}] is an invalid SOTA reference", reference);
        Checked::invalid(reference, message)
    }
}

/// Validate a date and normalize it to `yyyy-mm-dd`
///
/// Accepts `-`, `/`, `.` or space as separators (or none), with one or two
/// digit months and days.
pub fn validate_date(raw: &str) -> Checked {
    let input = raw.trim();
    let Some(caps) = DATE_REGEX
        .captures(input)
        .or_else(|| COMPACT_DATE_REGEX.captures(input))
    else {
        let message = format!("[{}] is an invalid date (expected yyyy-mm-dd)", input);
        return Checked::invalid(input, message);
    };

    // The regex guarantees short digit strings
    let year: i32 = caps[1].parse().unwrap_or_default();
    let month: u32 = caps[2].parse().unwrap_or_default();
    let day: u32 = caps[3].parse().unwrap_or_default();

    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => Checked::ok(date.format("%Y-%m-%d").to_string()),
        None => {
            let message = format!("[{}] is not a valid calendar date", input);
            Checked::invalid(input, message)
        }
    }
}

/// Validate a signal report against the mode type and expand shorthand forms
///
/// Phone reports are `RS`; CW and digital reports are `RST`. A single digit
/// is taken as the S value (readability 5, tone 9); for CW/digital two digits
/// are `RS` with tone 9.
pub fn validate_rst(raw: &str, mode_type: ModeType) -> Checked {
    let input = raw.trim();
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        let message = format!("[{}] is an invalid report", input);
        return Checked::invalid(input, message);
    }

    let expanded = match (mode_type, input.len()) {
        (ModeType::Phone, 1) => format!("5{}", input),
        (ModeType::Phone, 2) => input.to_string(),
        (ModeType::Phone, _) => {
            let message = format!("[{}] is an invalid report for a phone mode", input);
            return Checked::invalid(input, message);
        }
        (_, 1) => format!("5{}9", input),
        (_, 2) => format!("{}9", input),
        (_, 3) => input.to_string(),
        _ => {
            let message = format!("[{}] is an invalid report", input);
            return Checked::invalid(input, message);
        }
    };

    let digits: Vec<u32> = expanded.chars().filter_map(|c| c.to_digit(10)).collect();
    let readability_ok = (1..=5).contains(&digits[0]);
    let others_ok = digits[1..].iter().all(|d| (1..=9).contains(d));
    if readability_ok && others_ok {
        Checked::ok(expanded)
    } else {
        let message = format!("[{}] is an invalid report", input);
        Checked::invalid(expanded, message)
    }
}
