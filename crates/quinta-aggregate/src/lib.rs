//! Streaming candle and pivot-point aggregation for quinta.
//!
//! This crate provides the aggregation core:
//!
//! - [`RowFilter`] - Accepts rows with a set timestamp on the target day
//! - [`DailyExtremes`] - Running high, low and last close for the day
//! - [`BucketAggregator`] - Folds rows into 5-minute [`Candle`]s
//! - [`PivotPoints`] - Fibonacci pivot levels from the day's extremes
//! - [`DaySession`] - Drives all of the above for one input stream

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bucket;
mod candle;
mod extremes;
mod filter;
mod pivot;
mod session;

pub use bucket::BucketAggregator;
pub use candle::Candle;
pub use extremes::DailyExtremes;
pub use filter::{RowFilter, Verdict};
pub use pivot::PivotPoints;
pub use session::{DaySession, DaySummary, RowCounts};
