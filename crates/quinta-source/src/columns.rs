//! Column resolution and record-batch decoding.

use arrow::array::{Array, Float64Array, Int64Array};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use quinta_types::{Row, RowBatch};

use crate::SourceError;

const TIMESTAMP_NAMES: &[&str] = &["date", "timestamp"];

/// Positions of the OHLCV columns within a file's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnMap {
    timestamp: usize,
    /// Factor turning the stored time value into nanoseconds.
    timestamp_scale: i64,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
    volume: usize,
}

impl ColumnMap {
    /// Locates the required columns, matching names case-insensitively.
    ///
    /// The time column may hold plain integers (read as nanoseconds) or an
    /// Arrow timestamp of any unit.
    pub(crate) fn resolve(schema: &Schema) -> Result<Self, SourceError> {
        let timestamp = TIMESTAMP_NAMES
            .iter()
            .find_map(|name| find(schema, name))
            .ok_or(SourceError::MissingColumn("date"))?;
        let timestamp_scale = match schema.field(timestamp).data_type() {
            DataType::Timestamp(unit, _) => match unit {
                TimeUnit::Second => 1_000_000_000,
                TimeUnit::Millisecond => 1_000_000,
                TimeUnit::Microsecond => 1_000,
                TimeUnit::Nanosecond => 1,
            },
            dt if dt.is_integer() => 1,
            other => return Err(unsupported(schema, timestamp, other)),
        };

        let map = Self {
            timestamp,
            timestamp_scale,
            open: numeric(schema, "open")?,
            high: numeric(schema, "high")?,
            low: numeric(schema, "low")?,
            close: numeric(schema, "close")?,
            volume: numeric(schema, "volume")?,
        };
        tracing::debug!(?map, "resolved parquet columns");
        Ok(map)
    }

    /// Decodes one record batch into rows, preserving row order.
    ///
    /// A null timestamp decodes as unset. Null volumes decode as zero; prices
    /// are passed through unchecked.
    pub(crate) fn decode(&self, batch: &RecordBatch) -> Result<RowBatch, SourceError> {
        let timestamp = cast(batch.column(self.timestamp), &DataType::Int64)?;
        let timestamp = as_int64(timestamp.as_ref())?;
        let volume = cast(batch.column(self.volume), &DataType::Int64)?;
        let volume = as_int64(volume.as_ref())?;
        let open = cast(batch.column(self.open), &DataType::Float64)?;
        let high = cast(batch.column(self.high), &DataType::Float64)?;
        let low = cast(batch.column(self.low), &DataType::Float64)?;
        let close = cast(batch.column(self.close), &DataType::Float64)?;
        let (open, high, low, close) = (
            as_float64(open.as_ref())?,
            as_float64(high.as_ref())?,
            as_float64(low.as_ref())?,
            as_float64(close.as_ref())?,
        );

        let rows = (0..batch.num_rows())
            .map(|idx| {
                let timestamp_ns = if timestamp.is_null(idx) {
                    0
                } else {
                    timestamp.value(idx).saturating_mul(self.timestamp_scale)
                };
                let volume = if volume.is_null(idx) {
                    0
                } else {
                    volume.value(idx)
                };
                Row::new(
                    timestamp_ns,
                    open.value(idx),
                    high.value(idx),
                    low.value(idx),
                    close.value(idx),
                    volume,
                )
            })
            .collect();

        Ok(RowBatch::new(rows))
    }
}

fn find(schema: &Schema, name: &str) -> Option<usize> {
    schema
        .fields()
        .iter()
        .position(|field| field.name().eq_ignore_ascii_case(name))
}

fn numeric(schema: &Schema, name: &'static str) -> Result<usize, SourceError> {
    let idx = find(schema, name).ok_or(SourceError::MissingColumn(name))?;
    let data_type = schema.field(idx).data_type();
    if data_type.is_numeric() {
        Ok(idx)
    } else {
        Err(unsupported(schema, idx, data_type))
    }
}

fn unsupported(schema: &Schema, idx: usize, data_type: &DataType) -> SourceError {
    SourceError::UnsupportedType {
        column: schema.field(idx).name().clone(),
        data_type: data_type.clone(),
    }
}

fn as_int64(array: &dyn Array) -> Result<&Int64Array, SourceError> {
    array
        .as_any()
        .downcast_ref::<Int64Array>()
        .ok_or_else(|| SourceError::UnsupportedType {
            column: "<cast>".to_string(),
            data_type: array.data_type().clone(),
        })
}

fn as_float64(array: &dyn Array) -> Result<&Float64Array, SourceError> {
    array
        .as_any()
        .downcast_ref::<Float64Array>()
        .ok_or_else(|| SourceError::UnsupportedType {
            column: "<cast>".to_string(),
            data_type: array.data_type().clone(),
        })
}
