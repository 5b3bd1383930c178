//! Output format abstraction.

use quinta_aggregate::{Candle, PivotPoints};
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes the candle table, one record per candle in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_candles<W: Write + Send>(
        &self,
        candles: &[Candle],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Writes the single-record pivot table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_pivots<W: Write + Send>(
        &self,
        pivots: &PivotPoints,
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
