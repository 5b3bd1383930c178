//! Output formatters for quinta.
//!
//! This crate provides writers for the candle and pivot-point tables:
//!
//! - [`CsvFormatter`] - Delimited text with two-decimal prices
//! - [`JsonFormatter`] - JSON with full precision
//! - [`StagedFile`], [`write_atomically`] - Temp-file-and-rename output

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod output;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter};
pub use json::JsonFormatter;
pub use output::{OutputPaths, StagedFile, write_atomically};
