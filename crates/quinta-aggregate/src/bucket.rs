//! Streaming row-to-candle bucketing.

use quinta_types::{BucketKey, Row};
use std::collections::BTreeMap;

use crate::Candle;

/// Folds accepted rows into one [`Candle`] per 5-minute bucket.
///
/// Rows may arrive in any order. High and low are order independent; open and
/// close follow processing order.
#[derive(Debug, Default)]
pub struct BucketAggregator {
    candles: BTreeMap<BucketKey, Candle>,
}

impl BucketAggregator {
    /// Creates an empty aggregator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            candles: BTreeMap::new(),
        }
    }

    /// Folds a row into its bucket, returning the bucket key.
    ///
    /// Each row must be delivered exactly once.
    pub fn update(&mut self, row: &Row) -> BucketKey {
        let key = BucketKey::from_timestamp_nanos(row.timestamp_ns);
        self.candles
            .entry(key)
            .and_modify(|candle| candle.update(row))
            .or_insert_with(|| Candle::open_with(key, row));
        key
    }

    /// Returns the candle for a bucket, if any row has landed in it.
    #[must_use]
    pub fn get(&self, key: &BucketKey) -> Option<&Candle> {
        self.candles.get(key)
    }

    /// Returns the number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// Returns true if no row has been folded in.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Finishes aggregation, returning the candles in chronological order.
    #[must_use]
    pub fn finish(self) -> Vec<Candle> {
        self.candles.into_values().collect()
    }
}
