//! Test utilities for the FLE parser
//!
//! Shared sample logs and helpers used across the parser test modules.

use crate::models::ContactRecord;


/// A small but complete SOTA activation log
pub fn create_test_fle_log() -> String {
    r#"# Header
mycall ON4KJM/P
operator ON4KJM
mysota ON/ON-001
qslmsg tnx for the QSO
nickname Summit Hunter
date 2020-05-23

{ Multi-line comment
  40m cw 0000 k1abc
}
40m cw 1227 dl1abc 559 579
28 g4abc <nice signal>
2m fm 1310 f5xyz
"#
    .to_string()
}

/// Previous record with band, mode, date and time already set
pub fn create_previous_record() -> ContactRecord {
    ContactRecord {
        my_call: "ON4KJM/P".to_string(),
        my_sota: "ON/ON-001".to_string(),
        date: "2020-05-23".to_string(),
        mode: "CW".to_string(),
        mode_type: crate::constants::ModeType::Cw,
        band: "40m".to_string(),
        band_lower_limit: 7.0,
        band_upper_limit: 7.3,
        time: "1227".to_string(),
        call: "DL1ABC".to_string(),
        rst_sent: "559".to_string(),
        ..Default::default()
    }
}
