//! Error types for quinta.

use thiserror::Error;

/// Error for an unparseable trading day.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradingDayError {
    /// The input is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid trading day '{input}': {source}")]
    Invalid {
        /// The rejected input.
        input: String,
        /// The underlying chrono parse failure.
        source: chrono::ParseError,
    },
}
