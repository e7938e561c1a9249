//! Time interpolation for QSOs logged without an explicit time
//!
//! Records whose time was only carried forward get a time spread evenly
//! between the surrounding explicitly timed records.

use crate::error::{FleError, Result};
use crate::models::ContactRecord;
use chrono::{NaiveTime, Timelike};
use tracing::debug;

const MINUTES_PER_DAY: u32 = 24 * 60;

fn to_minutes(time: &str) -> Result<u32> {
    let parsed = NaiveTime::parse_from_str(time, "%H%M")
        .map_err(|_| FleError::interpolation(format!("invalid time [{}]", time)))?;
    Ok(parsed.num_seconds_from_midnight() / 60)
}

fn format_minutes(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    format!("{:02}{:02}", minutes / 60, minutes % 60)
}

/// Fill in times of records without an explicit time
///
/// The first and last records must have an explicit time. Records that
/// already have one are never changed. Returns how many records were filled.
pub fn interpolate_times(records: &mut [ContactRecord]) -> Result<usize> {
    let (Some(first), Some(last)) = (records.first(), records.last()) else {
        return Ok(0);
    };
    if first.actual_time.is_empty() {
        return Err(FleError::interpolation("the first QSO has no explicit time"));
    }
    if last.actual_time.is_empty() {
        return Err(FleError::interpolation("the last QSO has no explicit time"));
    }

    let mut filled = 0;
    let mut anchor = 0;
    for index in 1..records.len() {
        if records[index].actual_time.is_empty() {
            continue;
        }

        let gap = index - anchor - 1;
        if gap > 0 {
            let start = to_minutes(&records[anchor].actual_time)?;
            let mut end = to_minutes(&records[index].actual_time)?;
            if end < start {
                end += MINUTES_PER_DAY;
            }
            let step_count = (gap + 1) as u32;
            for offset in 1..=gap {
                let minutes = start + (end - start) * offset as u32 / step_count;
                let record = &mut records[anchor + offset];
                record.time = format_minutes(minutes);
                debug!("Interpolated time {} for QSO with {}", record.time, record.call);
                filled += 1;
            }
        }
        anchor = index;
    }

    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timed(actual_time: &str) -> ContactRecord {
        ContactRecord {
            time: actual_time.to_string(),
            actual_time: actual_time.to_string(),
            call: "DL1ABC".to_string(),
            ..Default::default()
        }
    }

    fn untimed(carried: &str) -> ContactRecord {
        ContactRecord {
            time: carried.to_string(),
            call: "G4ABC".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_even_distribution() {
        let mut records = vec![timed("1200"), untimed("1200"), untimed("1200"), timed("1206")];
        let filled = interpolate_times(&mut records).unwrap();

        assert_eq!(filled, 2);
        let times: Vec<&str> = records.iter().map(|r| r.time.as_str()).collect();
        assert_eq!(times, vec!["1200", "1202", "1204", "1206"]);
    }

    #[test]
    fn test_timed_records_untouched() {
        let mut records = vec![timed("1200"), timed("1210"), untimed("1210"), timed("1220")];
        interpolate_times(&mut records).unwrap();

        assert_eq!(records[1].time, "1210");
        assert_eq!(records[2].time, "1215");
        assert_eq!(records[3].time, "1220");
    }

    #[test]
    fn test_across_midnight() {
        let mut records = vec![timed("2358"), untimed("2358"), timed("0002")];
        interpolate_times(&mut records).unwrap();
        assert_eq!(records[1].time, "0000");
    }

    #[test]
    fn test_monotonic_with_integer_minutes() {
        let mut records = vec![timed("1200"), untimed(""), untimed(""), timed("1201")];
        interpolate_times(&mut records).unwrap();

        let times: Vec<&str> = records.iter().map(|r| r.time.as_str()).collect();
        assert_eq!(times, vec!["1200", "1200", "1200", "1201"]);
    }

    #[test]
    fn test_requires_timed_ends() {
        let mut records = vec![untimed(""), timed("1200")];
        assert!(matches!(
            interpolate_times(&mut records),
            Err(FleError::Interpolation { .. })
        ));

        let mut records = vec![timed("1200"), untimed("1200")];
        assert!(interpolate_times(&mut records).is_err());
    }

    #[test]
    fn test_empty_and_fully_timed() {
        assert_eq!(interpolate_times(&mut []).unwrap(), 0);

        let mut records = vec![timed("1200"), timed("1201")];
        assert_eq!(interpolate_times(&mut records).unwrap(), 0);
    }
}
