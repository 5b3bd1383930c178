//! Row acceptance for the target day.

use quinta_types::{Row, TradingDay};

/// Outcome of checking a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The row belongs to the target day.
    Accept,
    /// The row's timestamp is unset.
    InvalidTimestamp,
    /// The row falls on another UTC calendar day.
    OutsideDay,
}

impl Verdict {
    /// Returns true if the row should be aggregated.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accept)
    }
}

/// Pure predicate selecting rows of a single trading day.
///
/// Prices are not inspected.
#[derive(Debug, Clone, Copy)]
pub struct RowFilter {
    day: TradingDay,
}

impl RowFilter {
    /// Creates a filter for the given day.
    #[must_use]
    pub const fn new(day: TradingDay) -> Self {
        Self { day }
    }

    /// Returns the day rows are filtered to.
    #[must_use]
    pub const fn day(&self) -> TradingDay {
        self.day
    }

    /// Checks a row. The unset timestamp is rejected before the date check,
    /// so it never matches even when the target day is 1970-01-01.
    #[must_use]
    pub fn check(&self, row: &Row) -> Verdict {
        if !row.has_timestamp() {
            Verdict::InvalidTimestamp
        } else if !self.day.contains_nanos(row.timestamp_ns) {
            Verdict::OutsideDay
        } else {
            Verdict::Accept
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn row_at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Row {
        let ns = Utc
            .with_ymd_and_hms(y, m, d, h, min, s)
            .unwrap()
            .timestamp_nanos_opt()
            .unwrap();
        Row::new(ns, 100.0, 101.0, 99.0, 100.5, 10)
    }

    fn filter() -> RowFilter {
        RowFilter::new(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap().into())
    }

    #[test]
    fn test_accepts_target_day() {
        assert_eq!(filter().check(&row_at(2024, 1, 10, 9, 30, 0)), Verdict::Accept);
        assert_eq!(filter().check(&row_at(2024, 1, 10, 0, 0, 0)), Verdict::Accept);
    }

    #[test]
    fn test_rejects_around_midnight() {
        let before = Row {
            timestamp_ns: row_at(2024, 1, 10, 0, 0, 0).timestamp_ns - 1,
            ..row_at(2024, 1, 10, 0, 0, 0)
        };
        assert_eq!(filter().check(&before), Verdict::OutsideDay);
        assert_eq!(
            filter().check(&row_at(2024, 1, 11, 0, 0, 0)),
            Verdict::OutsideDay
        );
    }

    #[test]
    fn test_zero_timestamp_rejected_even_on_epoch_day() {
        let epoch = RowFilter::new(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap().into());
        let row = Row::new(0, 1.0, 1.0, 1.0, 1.0, 1);

        assert_eq!(epoch.check(&row), Verdict::InvalidTimestamp);
        assert!(!epoch.check(&row).is_accepted());
        assert!(epoch.check(&Row { timestamp_ns: 1, ..row }).is_accepted());
    }

    #[test]
    fn test_prices_not_inspected() {
        let row = Row {
            open: f64::NAN,
            high: f64::INFINITY,
            low: -5.0,
            ..row_at(2024, 1, 10, 12, 0, 0)
        };
        assert!(filter().check(&row).is_accepted());
    }
}
