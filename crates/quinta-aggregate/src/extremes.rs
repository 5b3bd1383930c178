//! Whole-day high, low and close tracking.

use quinta_types::Row;

/// Running extremes over every accepted row of the day.
///
/// Each field stays `None` until the first row arrives, so a genuine zero or
/// negative low is tracked like any other price.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DailyExtremes {
    high: Option<f64>,
    low: Option<f64>,
    close: Option<f64>,
}

impl DailyExtremes {
    /// Creates an empty tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            high: None,
            low: None,
            close: None,
        }
    }

    /// Folds one accepted row in. Must be called in delivery order: `close`
    /// is the close of the last row processed, not of the latest timestamp.
    ///
    /// Extremes only move on a strict comparison, so a NaN already held is
    /// never replaced and a NaN input never displaces a held value.
    pub fn update(&mut self, row: &Row) {
        if self.high.is_none_or(|high| row.high > high) {
            self.high = Some(row.high);
        }
        if self.low.is_none_or(|low| row.low < low) {
            self.low = Some(row.low);
        }
        self.close = Some(row.close);
    }

    /// Returns true if no row has been folded in.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.close.is_none()
    }

    /// Highest high seen.
    #[must_use]
    pub const fn high(&self) -> Option<f64> {
        self.high
    }

    /// Lowest low seen.
    #[must_use]
    pub const fn low(&self) -> Option<f64> {
        self.low
    }

    /// Close of the last processed row.
    #[must_use]
    pub const fn close(&self) -> Option<f64> {
        self.close
    }

    /// Returns `(high, low, close)` with unset fields resolved to `0.0`.
    #[must_use]
    pub fn resolved(&self) -> (f64, f64, f64) {
        (
            self.high.unwrap_or(0.0),
            self.low.unwrap_or(0.0),
            self.close.unwrap_or(0.0),
        )
    }
}
