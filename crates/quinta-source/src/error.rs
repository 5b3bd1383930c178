//! Read-side errors.

use arrow::datatypes::DataType;
use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering or reading input files.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Filesystem access failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// The file is not readable Parquet.
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Decoding a record batch failed.
    #[error("Failed to read record batch: {0}")]
    Read(#[from] ArrowError),

    /// A required column is absent from the schema.
    #[error("Missing column '{0}'")]
    MissingColumn(&'static str),

    /// A column exists but cannot be interpreted.
    #[error("Column '{column}' has unsupported type {data_type}")]
    UnsupportedType {
        /// The column name.
        column: String,
        /// Its Arrow type.
        data_type: DataType,
    },
}
