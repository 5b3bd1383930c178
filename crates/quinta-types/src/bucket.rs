//! Five-minute bucket keys.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Serialize, Serializer};

/// Width of one candle bucket in minutes.
pub const BUCKET_MINUTES: i64 = 5;

const BUCKET_NANOS: i64 = BUCKET_MINUTES * 60 * 1_000_000_000;

/// Identifies the half-open 5-minute window `[start, start + 5min)` a
/// timestamp falls into.
///
/// Keys order chronologically and display as `YYYY-MM-DD HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BucketKey(DateTime<Utc>);

impl BucketKey {
    /// Returns the key for a timestamp given in nanoseconds since the epoch.
    ///
    /// Unix time has no leap seconds, so flooring the raw nanosecond count to a
    /// multiple of the bucket width is the same as truncating the minute field
    /// (`minute - minute % 5`) and dropping seconds.
    #[must_use]
    pub fn from_timestamp_nanos(timestamp_ns: i64) -> Self {
        let start = timestamp_ns - timestamp_ns.rem_euclid(BUCKET_NANOS);
        Self(DateTime::from_timestamp_nanos(start))
    }

    /// Returns the inclusive start of the window.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.0
    }

    /// Returns the exclusive end of the window.
    #[must_use]
    pub fn end(&self) -> DateTime<Utc> {
        self.0 + TimeDelta::minutes(BUCKET_MINUTES)
    }
}

impl std::fmt::Display for BucketKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M"))
    }
}

impl Serialize for BucketKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
