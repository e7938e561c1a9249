//! Application constants for the FLE processor
//!
//! This module contains the band plan, mode list, default signal reports
//! and header directive keywords used throughout the loader and exporters.

// =============================================================================
// Header Directives
// =============================================================================

/// Header directive keywords, matched case-insensitively at the start of a line
pub const DIRECTIVE_KEYWORDS: &[&str] = &[
    "mycall", "operator", "mywwff", "mysota", "qslmsg", "nickname", "date",
];

/// Keywords that may precede a reference on a data line and carry no data
pub const REFERENCE_KEYWORDS: &[&str] = &["wwff", "sota", "pota"];

// =============================================================================
// Band Plan
// =============================================================================

/// Amateur band definition with its frequency limits in MHz
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandDefinition {
    /// Band name as written in the log (e.g. "40m", "70cm")
    pub name: &'static str,

    /// Lower band edge in MHz
    pub lower_mhz: f64,

    /// Upper band edge in MHz
    pub upper_mhz: f64,
}

impl BandDefinition {
    /// Check whether a frequency (MHz) falls inside this band
    pub fn contains(&self, freq_mhz: f64) -> bool {
        freq_mhz >= self.lower_mhz && freq_mhz <= self.upper_mhz
    }
}

const fn band(name: &'static str, lower_mhz: f64, upper_mhz: f64) -> BandDefinition {
    BandDefinition {
        name,
        lower_mhz,
        upper_mhz,
    }
}

/// Bands recognised on data lines
pub const BANDS: &[BandDefinition] = &[
    band("2190m", 0.1357, 0.1378),
    band("630m", 0.472, 0.479),
    band("560m", 0.501, 0.504),
    band("160m", 1.8, 2.0),
    band("80m", 3.5, 4.0),
    band("60m", 5.06, 5.45),
    band("40m", 7.0, 7.3),
    band("30m", 10.1, 10.15),
    band("20m", 14.0, 14.35),
    band("17m", 18.068, 18.168),
    band("15m", 21.0, 21.45),
    band("12m", 24.89, 24.99),
    band("10m", 28.0, 29.7),
    band("6m", 50.0, 54.0),
    band("4m", 70.0, 71.0),
    band("2m", 144.0, 148.0),
    band("1.25m", 222.0, 225.0),
    band("70cm", 420.0, 450.0),
    band("33cm", 902.0, 928.0),
    band("23cm", 1240.0, 1300.0),
    band("13cm", 2300.0, 2450.0),
    band("9cm", 3300.0, 3500.0),
    band("6cm", 5650.0, 5925.0),
    band("3cm", 10000.0, 10500.0),
    band("1.25cm", 24000.0, 24250.0),
    band("6mm", 47000.0, 47200.0),
    band("4mm", 75500.0, 81000.0),
    band("2.5mm", 119980.0, 120020.0),
    band("2mm", 142000.0, 149000.0),
    band("1mm", 241000.0, 250000.0),
];

/// Look up a band by name (case-insensitive)
pub fn find_band(name: &str) -> Option<&'static BandDefinition> {
    BANDS.iter().find(|b| b.name.eq_ignore_ascii_case(name))
}

// =============================================================================
// Modes
// =============================================================================

/// Broad category of a mode, used for signal report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeType {
    #[default]
    Unknown,
    Phone,
    Cw,
    Digital,
}

impl ModeType {
    /// Default signal report for this mode type
    pub fn default_rst(&self) -> &'static str {
        match self {
            ModeType::Phone => DEFAULT_PHONE_RST,
            _ => DEFAULT_CW_RST,
        }
    }
}

/// Phone modes (two-digit RS reports)
pub const PHONE_MODES: &[&str] = &["SSB", "FM", "AM", "DIGITALVOICE", "DSTAR", "C4FM"];

/// Modes recognised on data lines, upper case
pub const MODES: &[&str] = &[
    "CW", "SSB", "AM", "FM", "RTTY", "FT8", "FT4", "PSK", "PSK31", "PSK63", "JT65", "JT9",
    "JT4", "JS8", "MFSK", "OLIVIA", "HELL", "SSTV", "ATV", "FAX", "PKT", "PAC", "DSTAR",
    "C4FM", "DIGITALVOICE", "MSK144", "Q65", "WSPR", "THOR", "DOMINO", "CONTESTI", "ROS",
    "T10", "VARA",
];

/// Classify a mode (already upper case) into its mode type
pub fn mode_type(mode: &str) -> ModeType {
    if mode == "CW" {
        ModeType::Cw
    } else if PHONE_MODES.contains(&mode) {
        ModeType::Phone
    } else if MODES.contains(&mode) {
        ModeType::Digital
    } else {
        ModeType::Unknown
    }
}

// =============================================================================
// Signal Reports
// =============================================================================

/// Default report for phone contacts
pub const DEFAULT_PHONE_RST: &str = "59";

/// Default report for CW and digital contacts
pub const DEFAULT_CW_RST: &str = "599";

// =============================================================================
// CSV Export
// =============================================================================

/// Version marker written in the first column of every SOTA CSV row
pub const SOTA_CSV_VERSION: &str = "V2";

/// Extension used for the default CSV output path
pub const CSV_EXTENSION: &str = "csv";
