//! Fibonacci pivot points.

use serde::Serialize;

use crate::DailyExtremes;

const NEAR: f64 = 0.382;
const FAR: f64 = 0.618;
const FULL: f64 = 1.0;

/// Daily support and resistance levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PivotPoints {
    /// Central pivot, `(high + low + close) / 3`.
    pub pivot: f64,
    /// First resistance.
    pub r1: f64,
    /// Second resistance.
    pub r2: f64,
    /// Third resistance.
    pub r3: f64,
    /// First support.
    pub s1: f64,
    /// Second support.
    pub s2: f64,
    /// Third support.
    pub s3: f64,
}

impl PivotPoints {
    /// Computes Fibonacci pivots (ratios 0.382, 0.618, 1.0 of the range).
    ///
    /// No rounding is applied.
    #[must_use]
    pub fn fibonacci(high: f64, low: f64, close: f64) -> Self {
        let pivot = (high + low + close) / 3.0;
        let range = high - low;
        Self {
            pivot,
            r1: pivot + NEAR * range,
            r2: pivot + FAR * range,
            r3: pivot + FULL * range,
            s1: pivot - NEAR * range,
            s2: pivot - FAR * range,
            s3: pivot - FULL * range,
        }
    }

    /// Computes pivots from the day's final extremes. An empty day yields
    /// all-zero levels.
    #[must_use]
    pub fn from_extremes(extremes: &DailyExtremes) -> Self {
        let (high, low, close) = extremes.resolved();
        Self::fibonacci(high, low, close)
    }

    /// Returns the levels in table order: pivot, R1-R3, S1-S3.
    #[must_use]
    pub const fn levels(&self) -> [f64; 7] {
        [
            self.pivot, self.r1, self.r2, self.r3, self.s1, self.s2, self.s3,
        ]
    }
}
