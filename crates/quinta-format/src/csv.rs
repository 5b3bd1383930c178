//! CSV output format.

use quinta_aggregate::{Candle, PivotPoints};
use std::io::Write;

use crate::{FormatError, Formatter};

const CANDLE_HEADER: [&str; 5] = ["Interval", "Open", "High", "Low", "Close"];
const PIVOT_HEADER: [&str; 7] = ["Pivot", "R1", "R2", "R3", "S1", "S2", "S3"];

/// CSV formatter. Prices are written with exactly two decimals.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self { delimiter: ',' }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn write_header<W: Write>(&self, writer: &mut W, header: &[&str]) -> std::io::Result<()> {
        let delimiter = self.delimiter.to_string();
        writeln!(writer, "{}", header.join(delimiter.as_str()))
    }
}

impl Formatter for CsvFormatter {
    fn write_candles<W: Write + Send>(
        &self,
        candles: &[Candle],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;
        self.write_header(&mut writer, &CANDLE_HEADER)?;

        for candle in candles {
            writeln!(
                writer,
                "{}{d}{:.2}{d}{:.2}{d}{:.2}{d}{:.2}",
                candle.interval, candle.open, candle.high, candle.low, candle.close
            )?;
        }

        Ok(())
    }

    fn write_pivots<W: Write + Send>(
        &self,
        pivots: &PivotPoints,
        mut writer: W,
    ) -> Result<(), FormatError> {
        self.write_header(&mut writer, &PIVOT_HEADER)?;

        let delimiter = self.delimiter.to_string();
        let line = pivots
            .levels()
            .iter()
            .map(|level| format!("{level:.2}"))
            .collect::<Vec<_>>()
            .join(delimiter.as_str());
        writeln!(writer, "{line}")?;

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}
