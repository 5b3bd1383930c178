//! Candle (OHLC bar) data structure.

use quinta_types::{BucketKey, Row};
use serde::Serialize;

/// One 5-minute OHLC candle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Candle {
    /// The bucket this candle summarises.
    pub interval: BucketKey,
    /// Open of the first row processed for the bucket.
    pub open: f64,
    /// Highest high in the bucket.
    pub high: f64,
    /// Lowest low in the bucket.
    pub low: f64,
    /// Close of the last row processed for the bucket.
    pub close: f64,
    /// Total volume (saturating).
    pub volume: i64,
    /// Number of rows folded in.
    pub row_count: u32,
}

impl Candle {
    /// Opens a candle from the first row of its bucket.
    #[must_use]
    pub const fn open_with(interval: BucketKey, row: &Row) -> Self {
        Self {
            interval,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
            row_count: 1,
        }
    }

    /// Folds a later row of the same bucket in.
    ///
    /// High and low move only on a strict comparison; a NaN is never
    /// replaced once held.
    pub fn update(&mut self, row: &Row) {
        if row.high > self.high {
            self.high = row.high;
        }
        if row.low < self.low {
            self.low = row.low;
        }
        self.close = row.close;
        self.volume = self.volume.saturating_add(row.volume);
        self.row_count = self.row_count.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> BucketKey {
        BucketKey::from_timestamp_nanos(1_704_879_000_000_000_000)
    }

    #[test]
    fn test_open_with_copies_row() {
        let row = Row::new(1, 1.10, 1.15, 1.05, 1.12, 300);
        let candle = Candle::open_with(key(), &row);

        assert_eq!(candle.open, 1.10);
        assert_eq!(candle.high, 1.15);
        assert_eq!(candle.low, 1.05);
        assert_eq!(candle.close, 1.12);
        assert_eq!(candle.volume, 300);
        assert_eq!(candle.row_count, 1);
    }

    #[test]
    fn test_update_keeps_open() {
        let mut candle = Candle::open_with(key(), &Row::new(1, 10.0, 11.0, 9.0, 10.5, 1));
        candle.update(&Row::new(2, 50.0, 12.0, 9.5, 11.5, 2));

        assert_eq!(candle.open, 10.0);
        assert_eq!(candle.high, 12.0);
        assert_eq!(candle.low, 9.0);
        assert_eq!(candle.close, 11.5);
        assert_eq!(candle.volume, 3);
        assert_eq!(candle.row_count, 2);
    }

    #[test]
    fn test_volume_saturates() {
        let mut candle = Candle::open_with(key(), &Row::new(1, 1.0, 1.0, 1.0, 1.0, i64::MAX));
        candle.update(&Row::new(2, 1.0, 1.0, 1.0, 1.0, 5));
        assert_eq!(candle.volume, i64::MAX);
    }

    #[test]
    fn test_nan_extremes_propagate() {
        let mut candle =
            Candle::open_with(key(), &Row::new(1, 1.0, f64::NAN, f64::NAN, 1.0, 1));
        candle.update(&Row::new(2, 1.0, 9.0, 0.1, 2.0, 1));

        assert!(candle.high.is_nan());
        assert!(candle.low.is_nan());
        assert_eq!(candle.close, 2.0);

        let mut candle = Candle::open_with(key(), &Row::new(1, 1.0, 9.0, 0.1, 1.0, 1));
        candle.update(&Row::new(2, 1.0, f64::NAN, f64::NAN, 2.0, 1));
        assert_eq!(candle.high, 9.0);
        assert_eq!(candle.low, 0.1);
    }
}
