use super::model::{Dataset, TimeRange};

// ---------------------------------------------------------------------------
// Time-window filter
// ---------------------------------------------------------------------------

/// Keep the records whose timestamp falls inside `range`, bounds inclusive.
///
/// Original row order is preserved. A window that misses the data entirely
/// yields an empty dataset, which downstream renders as an empty chart.
pub fn filter_by_range(dataset: &Dataset, range: &TimeRange) -> Dataset {
    Dataset {
        records: dataset
            .records
            .iter()
            .filter(|r| range.contains(r.timestamp))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{parse_timestamp, Record};

    fn record(stamp: &str) -> Record {
        Record {
            timestamp: parse_timestamp(stamp).unwrap(),
            aq_press: 1000.0,
            oil_press: 1010.0,
            droplet_dia: 50.0,
        }
    }

    fn dataset(stamps: &[&str]) -> Dataset {
        Dataset {
            records: stamps.iter().map(|s| record(s)).collect(),
        }
    }

    fn range(start: &str, end: &str) -> TimeRange {
        TimeRange {
            start: parse_timestamp(start).unwrap(),
            end: parse_timestamp(end).unwrap(),
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let ds = dataset(&[
            "20240101 00:00:00.000000",
            "20240101 00:00:01.000000",
            "20240101 00:00:02.000000",
            "20240101 00:00:03.000000",
        ]);
        let window = range("20240101 00:00:01.000000", "20240101 00:00:02.000000");
        let filtered = filter_by_range(&ds, &window);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.records[0].timestamp, ds.records[1].timestamp);
        assert_eq!(filtered.records[1].timestamp, ds.records[2].timestamp);
    }

    #[test]
    fn preserves_file_order_not_time_order() {
        let ds = dataset(&[
            "20240101 00:00:03.000000",
            "20240101 00:00:01.000000",
            "20240101 00:00:02.000000",
        ]);
        let window = range("20240101 00:00:00.000000", "20240101 00:00:10.000000");
        let filtered = filter_by_range(&ds, &window);
        assert_eq!(filtered, ds);
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = dataset(&[
            "20240101 00:00:00.000000",
            "20240101 00:00:01.000000",
            "20240101 00:00:05.000000",
        ]);
        let window = range("20240101 00:00:00.500000", "20240101 00:00:04.000000");
        let once = filter_by_range(&ds, &window);
        let twice = filter_by_range(&once, &window);
        assert_eq!(once, twice);
    }

    #[test]
    fn disjoint_window_yields_empty_dataset() {
        let ds = dataset(&["20240101 00:00:05.000000", "20240101 00:00:06.000000"]);
        let window = range("20230101 00:00:00.000000", "20230101 00:00:01.000000");
        let filtered = filter_by_range(&ds, &window);
        assert!(filtered.is_empty());
    }
}
