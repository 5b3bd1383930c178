//! OHLCV row representation.

use chrono::{DateTime, Utc};

/// A single OHLCV record.
///
/// The timestamp is kept as raw nanoseconds since the Unix epoch, exactly as
/// it is stored in the source file. A value of `0` marks the timestamp as
/// unset; such rows are never aggregated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    /// Nanoseconds since the Unix epoch (UTC). Zero means unset.
    pub timestamp_ns: i64,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: i64,
}

impl Row {
    /// Creates a new row.
    #[must_use]
    pub const fn new(
        timestamp_ns: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: i64,
    ) -> Self {
        Self {
            timestamp_ns,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Returns true if the timestamp is set (non-zero).
    #[must_use]
    pub const fn has_timestamp(&self) -> bool {
        self.timestamp_ns != 0
    }

    /// Returns the timestamp as a UTC datetime, or `None` if it is unset.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.has_timestamp()
            .then(|| DateTime::from_timestamp_nanos(self.timestamp_ns))
    }
}

/// A batch of rows, as delivered by one read from the source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowBatch {
    /// The rows in this batch, in file order.
    pub rows: Vec<Row>,
}

impl RowBatch {
    /// Creates a new row batch.
    #[must_use]
    pub const fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Returns true if the batch is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows in the batch.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Iterates over the rows in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a RowBatch {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl From<Vec<Row>> for RowBatch {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}
