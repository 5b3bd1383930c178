//! Per-file aggregation session.

use quinta_types::{Row, RowBatch, TradingDay};

use crate::{BucketAggregator, Candle, DailyExtremes, PivotPoints, RowFilter, Verdict};

/// Row counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowCounts {
    /// Rows aggregated.
    pub accepted: u64,
    /// Rows dropped for an unset timestamp.
    pub invalid_timestamp: u64,
    /// Rows dropped for falling on another day.
    pub outside_day: u64,
}

impl RowCounts {
    /// Returns the number of rows seen.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.accepted + self.invalid_timestamp + self.outside_day
    }

    const fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Accept => self.accepted += 1,
            Verdict::InvalidTimestamp => self.invalid_timestamp += 1,
            Verdict::OutsideDay => self.outside_day += 1,
        }
    }
}

/// Aggregation state for one input stream restricted to one day.
///
/// Every accepted row is applied to the daily extremes and to its bucket in
/// the same call, so both see rows in the same relative order.
#[derive(Debug)]
pub struct DaySession {
    filter: RowFilter,
    extremes: DailyExtremes,
    buckets: BucketAggregator,
    counts: RowCounts,
}

impl DaySession {
    /// Creates a session for the given day.
    #[must_use]
    pub const fn new(day: TradingDay) -> Self {
        Self {
            filter: RowFilter::new(day),
            extremes: DailyExtremes::new(),
            buckets: BucketAggregator::new(),
            counts: RowCounts {
                accepted: 0,
                invalid_timestamp: 0,
                outside_day: 0,
            },
        }
    }

    /// Processes a single row.
    pub fn ingest(&mut self, row: &Row) -> Verdict {
        let verdict = self.filter.check(row);
        if verdict.is_accepted() {
            self.extremes.update(row);
            self.buckets.update(row);
        }
        self.counts.record(verdict);
        verdict
    }

    /// Processes every row of a batch in order.
    pub fn ingest_batch(&mut self, batch: &RowBatch) {
        for row in batch {
            self.ingest(row);
        }
    }

    /// Returns the counters so far.
    #[must_use]
    pub const fn counts(&self) -> RowCounts {
        self.counts
    }

    /// Ends the session and computes the pivots.
    #[must_use]
    pub fn finish(self) -> DaySummary {
        DaySummary {
            day: self.filter.day(),
            pivots: PivotPoints::from_extremes(&self.extremes),
            candles: self.buckets.finish(),
            extremes: self.extremes,
            counts: self.counts,
        }
    }
}

/// Final result of a [`DaySession`].
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    /// The day aggregated.
    pub day: TradingDay,
    /// Candles in chronological order.
    pub candles: Vec<Candle>,
    /// Final daily extremes.
    pub extremes: DailyExtremes,
    /// Pivots derived from `extremes`.
    pub pivots: PivotPoints,
    /// Row counters.
    pub counts: RowCounts,
}
