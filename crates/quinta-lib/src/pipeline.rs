//! File pipeline: discover, aggregate, write.

use quinta_aggregate::{DaySession, RowCounts};
use quinta_format::{FormatError, Formatter, OutputPaths, StagedFile};
use quinta_source::{PARQUET_EXTENSION, ReaderConfig, RowReader, SourceError, discover_files};
use quinta_types::TradingDay;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Settings for a processing run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory searched recursively for input files.
    pub input_dir: PathBuf,
    /// Directory receiving the output tables.
    pub output_dir: PathBuf,
    /// The UTC day rows are restricted to.
    pub day: TradingDay,
    /// Reader settings.
    pub reader: ReaderConfig,
}

impl PipelineConfig {
    /// Creates a configuration with default reader settings.
    #[must_use]
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        day: TradingDay,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            day,
            reader: ReaderConfig::default(),
        }
    }

    /// Sets the maximum number of rows per read batch.
    #[must_use]
    pub const fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.reader.batch_size = batch_size;
        self
    }
}

/// Errors that can occur while running the pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The input tree could not be walked.
    #[error("Failed to discover input files: {0}")]
    Discover(#[source] SourceError),

    /// The output directory could not be created.
    #[error("Failed to create output directory {path}: {source}")]
    OutputDir {
        /// The directory.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// An input file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// The input file.
        path: PathBuf,
        /// The underlying error.
        source: SourceError,
    },

    /// An output table could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// The output file.
        path: PathBuf,
        /// The underlying error.
        source: FormatError,
    },
}

/// Outcome of one successfully processed file.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// The input file.
    pub input: PathBuf,
    /// Where the tables were written.
    pub outputs: OutputPaths,
    /// Row counters.
    pub counts: RowCounts,
    /// Number of candles written.
    pub candles: usize,
    /// Number of batches read.
    pub batches: u64,
}

/// A file that failed; the rest of the run carried on.
#[derive(Debug)]
pub struct FileFailure {
    /// The input file.
    pub input: PathBuf,
    /// Why it failed.
    pub error: PipelineError,
}

/// Outcome of a whole run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Files whose outputs were written.
    pub processed: Vec<FileReport>,
    /// Files that failed.
    pub failed: Vec<FileFailure>,
}

impl RunReport {
    /// Returns true if no file failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

fn write_err(path: &Path, source: FormatError) -> PipelineError {
    PipelineError::Write {
        path: path.to_path_buf(),
        source,
    }
}

/// Lists the input files for a run, in sorted order.
///
/// # Errors
///
/// Returns an error if the input directory cannot be walked.
pub fn discover_inputs(config: &PipelineConfig) -> Result<Vec<PathBuf>, PipelineError> {
    let files =
        discover_files(&config.input_dir, PARQUET_EXTENSION).map_err(PipelineError::Discover)?;
    debug!(count = files.len(), dir = %config.input_dir.display(), "discovered input files");
    Ok(files)
}

/// Aggregates one file and writes its candle and pivot tables.
///
/// Both tables are written only after the whole file has been read, and
/// neither replaces an existing output unless both were written in full.
///
/// # Errors
///
/// Returns an error if the file cannot be read or an output cannot be written.
pub fn process_file<F: Formatter>(
    path: &Path,
    config: &PipelineConfig,
    formatter: &F,
) -> Result<FileReport, PipelineError> {
    let read_err = |source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    };

    let reader = RowReader::open(path, config.reader).map_err(read_err)?;
    let mut session = DaySession::new(config.day);
    let mut batches = 0u64;
    for batch in reader {
        session.ingest_batch(&batch.map_err(read_err)?);
        batches += 1;
    }

    let summary = session.finish();
    if summary.extremes.is_empty() {
        warn!(
            path = %path.display(),
            day = %config.day,
            rows = summary.counts.total(),
            "no rows on target day, pivot levels will be zero"
        );
    }

    // Both tables are staged before either is renamed into place.
    let outputs = OutputPaths::for_input(&config.output_dir, path, formatter.extension());
    let candles = StagedFile::create(&outputs.candles, |w| {
        formatter.write_candles(&summary.candles, w)
    })
    .map_err(|source| write_err(&outputs.candles, source))?;
    let pivots = StagedFile::create(&outputs.pivots, |w| {
        formatter.write_pivots(&summary.pivots, w)
    })
    .map_err(|source| write_err(&outputs.pivots, source))?;

    candles
        .commit()
        .map_err(|source| write_err(&outputs.candles, source))?;
    pivots
        .commit()
        .map_err(|source| write_err(&outputs.pivots, source))?;

    info!(
        path = %path.display(),
        batches,
        accepted = summary.counts.accepted,
        invalid_timestamp = summary.counts.invalid_timestamp,
        outside_day = summary.counts.outside_day,
        candles = summary.candles.len(),
        "processed file"
    );

    Ok(FileReport {
        input: path.to_path_buf(),
        outputs,
        counts: summary.counts,
        candles: summary.candles.len(),
        batches,
    })
}

/// Processes files in order, calling `progress` after each one.
///
/// A failing file is logged and recorded in the report; the remaining files
/// are still processed.
///
/// # Errors
///
/// Returns an error only if the output directory cannot be created.
pub fn process_files<F, P>(
    files: &[PathBuf],
    config: &PipelineConfig,
    formatter: &F,
    mut progress: P,
) -> Result<RunReport, PipelineError>
where
    F: Formatter,
    P: FnMut(&Path),
{
    fs::create_dir_all(&config.output_dir).map_err(|source| PipelineError::OutputDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let mut report = RunReport::default();
    for path in files {
        let _span = tracing::info_span!("file", path = %path.display()).entered();
        match process_file(path, config, formatter) {
            Ok(file) => report.processed.push(file),
            Err(e) => {
                error!(error = %e, "skipping file");
                report.failed.push(FileFailure {
                    input: path.clone(),
                    error: e,
                });
            }
        }
        progress(path);
    }

    Ok(report)
}

/// Discovers and processes every input file of a run.
///
/// # Errors
///
/// Returns an error if discovery fails or the output directory cannot be
/// created. Per-file failures are reported in [`RunReport::failed`].
pub fn process_directory<F: Formatter>(
    config: &PipelineConfig,
    formatter: &F,
) -> Result<RunReport, PipelineError> {
    let files = discover_inputs(config)?;
    process_files(&files, config, formatter, |_| {})
}
