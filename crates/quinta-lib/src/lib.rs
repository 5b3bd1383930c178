//! Parquet to 5-minute candles and Fibonacci pivot points.
//!
//! This is a facade crate that re-exports functionality from the quinta
//! workspace crates and adds the file pipeline on top.
//!
//! # Quick Start
//!
//! ```ignore
//! use quinta_lib::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let day: TradingDay = "2024-01-10".parse()?;
//!     let config = PipelineConfig::new("data", "5min_candles", day);
//!
//!     let report = process_directory(&config, &CsvFormatter::new())?;
//!     for file in &report.processed {
//!         println!("{} -> {} candles", file.input.display(), file.candles);
//!     }
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod pipeline;

// Re-export core types
pub use quinta_types::*;

// Re-export aggregation
pub use quinta_aggregate::{
    BucketAggregator, Candle, DailyExtremes, DaySession, DaySummary, PivotPoints, RowCounts,
    RowFilter, Verdict,
};

// Re-export input
pub use quinta_source::{
    PARQUET_EXTENSION, ReaderConfig, RowReader, SourceError, discover_files,
};

// Re-export formatters
pub use quinta_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, OutputPaths, StagedFile,
    write_atomically,
};

pub use pipeline::{
    FileFailure, FileReport, PipelineConfig, PipelineError, RunReport, discover_inputs,
    process_directory, process_file, process_files,
};

/// Prelude module for convenient imports.
///
/// ```
/// use quinta_lib::prelude::*;
/// ```
pub mod prelude {
    pub use quinta_types::{BucketKey, Row, RowBatch, TradingDay};

    pub use quinta_aggregate::{Candle, DaySession, DaySummary, PivotPoints};

    pub use quinta_source::{ReaderConfig, RowReader};

    pub use quinta_format::{CsvFormatter, Formatter, JsonFormatter};

    pub use crate::pipeline::{
        PipelineConfig, PipelineError, RunReport, process_directory, process_file,
    };
}
