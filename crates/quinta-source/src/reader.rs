//! Streaming Parquet row reader.

use parquet::arrow::arrow_reader::{ParquetRecordBatchReader, ParquetRecordBatchReaderBuilder};
use quinta_types::RowBatch;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::SourceError;
use crate::columns::ColumnMap;

/// Configuration for [`RowReader`].
#[derive(Debug, Clone, Copy)]
pub struct ReaderConfig {
    /// Maximum rows per batch.
    pub batch_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { batch_size: 8192 }
    }
}

/// Lazy, finite sequence of row batches from one Parquet file.
///
/// Only the current record batch is held in memory. Iteration ends at end of
/// file; any other failure is yielded as an error. To read a file again,
/// open a new reader.
pub struct RowReader {
    path: PathBuf,
    columns: ColumnMap,
    inner: ParquetRecordBatchReader,
}

impl RowReader {
    /// Opens a file and resolves its OHLCV columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, is not Parquet, or lacks
    /// a required column.
    pub fn open(path: impl AsRef<Path>, config: ReaderConfig) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| SourceError::Io {
            path: path.clone(),
            source,
        })?;

        let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
        let columns = ColumnMap::resolve(builder.schema())?;
        let inner = builder.with_batch_size(config.batch_size.max(1)).build()?;

        Ok(Self {
            path,
            columns,
            inner,
        })
    }

    /// Returns the path being read.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for RowReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowReader")
            .field("path", &self.path)
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

impl Iterator for RowReader {
    type Item = Result<RowBatch, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch = match self.inner.next()? {
            Ok(batch) => batch,
            Err(e) => return Some(Err(e.into())),
        };
        Some(self.columns.decode(&batch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{ArrayRef, Float64Array, Int64Array};
    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn write_fixture(path: &Path, stamps: Vec<i64>) {
        let n = stamps.len();
        let schema = Arc::new(Schema::new(vec![
            Field::new("date", DataType::Int64, false),
            Field::new("open", DataType::Float64, false),
            Field::new("high", DataType::Float64, false),
            Field::new("low", DataType::Float64, false),
            Field::new("close", DataType::Float64, false),
            Field::new("volume", DataType::Int64, false),
        ]));
        let closes: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let columns: Vec<ArrayRef> = vec![
            Arc::new(Int64Array::from(stamps)),
            Arc::new(Float64Array::from(vec![1.0; n])),
            Arc::new(Float64Array::from(vec![2.0; n])),
            Arc::new(Float64Array::from(vec![0.5; n])),
            Arc::new(Float64Array::from(closes)),
            Arc::new(Int64Array::from(vec![100; n])),
        ];
        let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();

        let file = File::create(path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();
    }

    #[test]
    fn test_reads_all_rows_in_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("eurusd.parquet");
        write_fixture(&path, vec![30, 10, 20]);

        let reader = RowReader::open(&path, ReaderConfig::default()).unwrap();
        assert_eq!(reader.path(), path.as_path());

        let rows: Vec<_> = reader
            .map(|batch| batch.unwrap())
            .flat_map(|batch| batch.rows)
            .collect();
        let stamps: Vec<_> = rows.iter().map(|r| r.timestamp_ns).collect();
        assert_eq!(stamps, vec![30, 10, 20]);
        assert_eq!(rows[2].close, 2.0);
    }

    #[test]
    fn test_batch_size_splits_batches() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("eurusd.parquet");
        write_fixture(&path, (1..=10).collect());

        let sizes: Vec<_> = RowReader::open(&path, ReaderConfig { batch_size: 4 })
            .unwrap()
            .map(|batch| batch.unwrap().len())
            .collect();
        assert_eq!(sizes, vec![4, 4, 2]);
    }

    #[test]
    fn test_reopen_restarts() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("eurusd.parquet");
        write_fixture(&path, vec![5, 6]);

        let first: usize = RowReader::open(&path, ReaderConfig::default())
            .unwrap()
            .map(|b| b.unwrap().len())
            .sum();
        let second: usize = RowReader::open(&path, ReaderConfig::default())
            .unwrap()
            .map(|b| b.unwrap().len())
            .sum();
        assert_eq!(first, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = RowReader::open(dir.path().join("nope.parquet"), ReaderConfig::default())
            .unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[test]
    fn test_not_parquet() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.parquet");
        std::fs::write(&path, b"definitely not parquet").unwrap();

        let err = RowReader::open(&path, ReaderConfig::default()).unwrap_err();
        assert!(matches!(err, SourceError::Parquet(_)));
    }
}
