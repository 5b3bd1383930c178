//! Core types for the quinta candle and pivot-point builder.
//!
//! This crate provides the fundamental data structures used throughout quinta:
//!
//! - [`Row`] - A single OHLCV record as read from a columnar file
//! - [`RowBatch`] - A batch of rows delivered by the reader
//! - [`BucketKey`] - The 5-minute window a timestamp falls into
//! - [`TradingDay`] - The UTC calendar day being processed

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bucket;
mod error;
mod row;
mod trading_day;

pub use bucket::{BUCKET_MINUTES, BucketKey};
pub use error::TradingDayError;
pub use row::{Row, RowBatch};
pub use trading_day::TradingDay;
