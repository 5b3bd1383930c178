//! Parquet input for quinta.
//!
//! This crate provides the read side of the pipeline:
//!
//! - [`discover_files`] - Finds input files under a directory tree
//! - [`RowReader`] - Lazy, single-pass iterator of [`quinta_types::RowBatch`]es

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod columns;
mod discover;
mod error;
mod reader;

pub use discover::{PARQUET_EXTENSION, discover_files};
pub use error::SourceError;
pub use reader::{ReaderConfig, RowReader};
