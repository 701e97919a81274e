use chrono::{Duration, NaiveDateTime};

use super::error::DataError;

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

/// The one format the `Date_Time` column is written in by the measurement
/// rig, e.g. `20240101 00:00:01.000000`.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d %H:%M:%S%.f";

/// Parse a `Date_Time` cell. There is no fallback format; a row that does
/// not match fails the whole load.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
}

/// Seconds since the Unix epoch, keeping sub-second precision.
/// This is the unit the range slider works in.
pub fn epoch_secs(ts: NaiveDateTime) -> f64 {
    ts.and_utc().timestamp_micros() as f64 / 1e6
}

/// Inverse of [`epoch_secs`]. `None` for values outside chrono's range.
pub fn timestamp_from_epoch_secs(secs: f64) -> Option<NaiveDateTime> {
    chrono::DateTime::from_timestamp_micros((secs * 1e6).round() as i64)
        .map(|dt| dt.naive_utc())
}

/// Human-readable timestamp for axis ticks and slider readouts.
/// Shows milliseconds only when the value has a fractional component.
pub fn format_timestamp(secs: f64) -> String {
    match timestamp_from_epoch_secs(secs) {
        Some(ts) => {
            if secs.fract().abs() < 1e-6 {
                ts.format("%Y-%m-%d %H:%M:%S").to_string()
            } else {
                ts.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
            }
        }
        None => format!("{secs:.3}"),
    }
}

// ---------------------------------------------------------------------------
// Record / Dataset – one CSV row and the whole file
// ---------------------------------------------------------------------------

/// One measurement row. The schema is fixed; it is validated once at load
/// time instead of being looked up by column name downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub timestamp: NaiveDateTime,
    /// Aqueous-phase pressure [mbar].
    pub aq_press: f64,
    /// Oil-phase pressure [mbar].
    pub oil_press: f64,
    /// Droplet diameter derived from area [um].
    pub droplet_dia: f64,
}

/// The full parsed file, in original row order. The rig does not guarantee
/// the rows are time-sorted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// TimeRange – an inclusive [start, end] window
// ---------------------------------------------------------------------------

/// An inclusive time window with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeRange {
    /// Build a range from slider values. `None` when the values cannot be
    /// converted back to timestamps or are out of order.
    pub fn from_epoch_secs(start: f64, end: f64) -> Option<Self> {
        let start = timestamp_from_epoch_secs(start)?;
        let end = timestamp_from_epoch_secs(end)?;
        (start <= end).then_some(TimeRange { start, end })
    }

    pub fn start_secs(&self) -> f64 {
        epoch_secs(self.start)
    }

    pub fn end_secs(&self) -> f64 {
        epoch_secs(self.end)
    }

    /// Inclusive on both bounds.
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.start <= ts && ts <= self.end
    }
}

/// Min/max timestamp of the dataset, widened to a one-second window when the
/// span is degenerate so the range slider always has room to move.
///
/// The degenerate check runs in epoch seconds, the slider's own unit.
pub fn derive_range(dataset: &Dataset) -> Result<TimeRange, DataError> {
    let first = dataset.records.first().ok_or(DataError::EmptyDataset)?;

    let mut start = first.timestamp;
    let mut end = first.timestamp;
    for record in &dataset.records[1..] {
        if record.timestamp < start {
            start = record.timestamp;
        }
        if record.timestamp > end {
            end = record.timestamp;
        }
    }

    if epoch_secs(start) >= epoch_secs(end) {
        end = start + Duration::seconds(1);
    }

    Ok(TimeRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        parse_timestamp(s).unwrap()
    }

    fn dataset(stamps: &[&str]) -> Dataset {
        Dataset {
            records: stamps
                .iter()
                .map(|s| Record {
                    timestamp: ts(s),
                    aq_press: 1000.0,
                    oil_press: 1010.0,
                    droplet_dia: 50.0,
                })
                .collect(),
        }
    }

    #[test]
    fn parses_rig_timestamps() {
        let parsed = ts("20240101 12:34:56.789012");
        assert_eq!(
            parsed.format("%Y-%m-%d %H:%M:%S%.6f").to_string(),
            "2024-01-01 12:34:56.789012"
        );
        assert!(parse_timestamp("2024-01-01 12:34:56").is_err());
    }

    #[test]
    fn epoch_round_trip_keeps_microseconds() {
        let original = ts("20240318 09:30:00.250000");
        let secs = epoch_secs(original);
        assert_eq!(timestamp_from_epoch_secs(secs), Some(original));
    }

    #[test]
    fn derive_range_spans_unsorted_data() {
        let ds = dataset(&[
            "20240101 00:00:05.000000",
            "20240101 00:00:01.000000",
            "20240101 00:00:03.000000",
        ]);
        let range = derive_range(&ds).unwrap();
        assert_eq!(range.start, ts("20240101 00:00:01.000000"));
        assert_eq!(range.end, ts("20240101 00:00:05.000000"));
        assert!(range.start_secs() <= range.end_secs());
    }

    #[test]
    fn derive_range_widens_single_timestamp_by_one_second() {
        let ds = dataset(&["20240101 00:00:00.000000", "20240101 00:00:00.000000"]);
        let range = derive_range(&ds).unwrap();
        assert_eq!(range.start, ts("20240101 00:00:00.000000"));
        assert_eq!(range.end, ts("20240101 00:00:01.000000"));
    }

    #[test]
    fn derive_range_rejects_empty_dataset() {
        let err = derive_range(&Dataset::default()).unwrap_err();
        assert!(matches!(err, DataError::EmptyDataset));
    }

    #[test]
    fn range_from_slider_values() {
        let ds = dataset(&["20240101 00:00:00.000000", "20240101 00:00:10.000000"]);
        let range = derive_range(&ds).unwrap();
        let rebuilt = TimeRange::from_epoch_secs(range.start_secs(), range.end_secs()).unwrap();
        assert_eq!(rebuilt, range);
        assert!(TimeRange::from_epoch_secs(range.end_secs(), range.start_secs()).is_none());
    }

    #[test]
    fn formats_whole_and_fractional_seconds() {
        let whole = epoch_secs(ts("20240101 08:00:00.000000"));
        let frac = epoch_secs(ts("20240101 08:00:00.250000"));
        assert_eq!(format_timestamp(whole), "2024-01-01 08:00:00");
        assert_eq!(format_timestamp(frac), "2024-01-01 08:00:00.250");
    }
}
