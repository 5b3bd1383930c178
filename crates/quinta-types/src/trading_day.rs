//! Target trading day.

use chrono::{DateTime, NaiveDate};
use std::str::FromStr;

use crate::TradingDayError;

/// The single UTC calendar day a run is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TradingDay(NaiveDate);

impl TradingDay {
    /// Creates a trading day for the given calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the calendar date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }

    /// Returns true if the instant falls on this day in UTC.
    #[must_use]
    pub fn contains_nanos(&self, timestamp_ns: i64) -> bool {
        DateTime::from_timestamp_nanos(timestamp_ns).date_naive() == self.0
    }
}

impl From<NaiveDate> for TradingDay {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

impl std::fmt::Display for TradingDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for TradingDay {
    type Err = TradingDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|source| TradingDayError::Invalid {
                input: s.to_string(),
                source,
            })
    }
}
