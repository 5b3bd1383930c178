//! Display utilities and output format selection for the quinta CLI.

use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};

/// Output format for the candle and pivot tables.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Builds the per-file progress bar, hidden in quiet mode.
pub(crate) fn file_progress(total: usize, quiet: bool) -> anyhow::Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}",
            )?
            .progress_chars("=>-"),
    );
    Ok(pb)
}
