//! Process command implementation.
//!
//! Aggregates every Parquet file under the input directory and writes one
//! candle table and one pivot table per file.

use crate::display::{Format, file_progress};
use anyhow::{Context, Result, bail};
use quinta_lib::prelude::*;
use quinta_lib::{FileFailure, discover_inputs, process_files};
use std::path::PathBuf;

/// Runs the pipeline over `input` for the given day.
pub(crate) fn process(
    input: PathBuf,
    output: PathBuf,
    day: TradingDay,
    format: Format,
    batch_size: usize,
    quiet: bool,
) -> Result<()> {
    let config = PipelineConfig::new(input, output, day).with_batch_size(batch_size.max(1));

    let files = discover_inputs(&config)
        .with_context(|| format!("Cannot list inputs in {}", config.input_dir.display()))?;
    tracing::info!(
        files = files.len(),
        %day,
        %format,
        output = %config.output_dir.display(),
        "starting run"
    );
    if files.is_empty() {
        tracing::warn!(dir = %config.input_dir.display(), "no .parquet files found");
    }

    let progress = file_progress(files.len(), quiet)?;
    progress.set_message(format!("{day} -> {}", config.output_dir.display()));

    let tick = |path: &std::path::Path| {
        if let Some(name) = path.file_name() {
            progress.set_message(name.to_string_lossy().into_owned());
        }
        progress.inc(1);
    };

    let report = match format {
        Format::Csv => process_files(&files, &config, &CsvFormatter::new(), tick),
        Format::Json => process_files(&files, &config, &JsonFormatter::new(), tick),
    }
    .context("Processing aborted")?;

    progress.finish_with_message(format!(
        "Processed {} files ({} failed)",
        report.processed.len(),
        report.failed.len()
    ));

    if !quiet {
        for file in &report.processed {
            println!(
                "{} -> {} ({} candles)",
                file.input.display(),
                file.outputs.candles.display(),
                file.candles
            );
        }
    }

    if !report.is_success() {
        for FileFailure { input, error } in &report.failed {
            eprintln!("failed: {}: {error}", input.display());
        }
        bail!("{} of {} files failed", report.failed.len(), files.len());
    }

    Ok(())
}
