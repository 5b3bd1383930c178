//! JSON output format.

use quinta_aggregate::{Candle, PivotPoints};
use std::io::Write;

use crate::{FormatError, Formatter};

/// JSON formatter.
///
/// Candles are written as an array including volume and row count; pivots as
/// a single object. Values keep full precision.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print.
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new compact JSON formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn write_value<W: Write, T: serde::Serialize + ?Sized>(
        &self,
        value: &T,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_candles<W: Write + Send>(
        &self,
        candles: &[Candle],
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_value(candles, writer)
    }

    fn write_pivots<W: Write + Send>(
        &self,
        pivots: &PivotPoints,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_value(pivots, writer)
    }

    fn extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quinta_types::{BucketKey, Row};
    use std::io::Cursor;

    fn candle() -> Candle {
        let row = Row::new(1_704_879_000_000_000_000, 1.10004, 1.2, 1.0, 1.15, 10);
        Candle::open_with(BucketKey::from_timestamp_nanos(row.timestamp_ns), &row)
    }

    #[test]
    fn test_candles_array() {
        let mut output = Cursor::new(Vec::new());
        JsonFormatter::new()
            .write_candles(&[candle()], &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with('['));
        assert!(result.contains("\"interval\":\"2024-01-10 09:30\""));
        assert!(result.contains("\"open\":1.10004"));
        assert!(result.contains("\"row_count\":1"));
    }

    #[test]
    fn test_pivots_object() {
        let mut output = Cursor::new(Vec::new());
        JsonFormatter::new()
            .write_pivots(&PivotPoints::fibonacci(3.0, 3.0, 3.0), &mut output)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output.into_inner()).unwrap();
        assert_eq!(value["pivot"], 3.0);
        assert_eq!(value["s3"], 3.0);
    }

    #[test]
    fn test_pretty_json() {
        let mut output = Cursor::new(Vec::new());
        JsonFormatter::new()
            .with_pretty(true)
            .write_candles(&[candle()], &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("  "));
    }
}
