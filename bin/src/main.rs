//! quinta CLI - 5-minute candles and Fibonacci pivots from Parquet bar files.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::Format;
use quinta_lib::TradingDay;

#[derive(Parser)]
#[command(name = "quinta")]
#[command(about = "Builds 5-minute candles and Fibonacci pivot points from Parquet files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only, no progress bar)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate every Parquet file under a directory
    Process {
        /// Directory searched recursively for .parquet files
        #[arg(short, long, default_value = "data")]
        input: PathBuf,

        /// Directory receiving the candle and pivot tables
        #[arg(short, long, default_value = "5min_candles")]
        output: PathBuf,

        /// UTC trading day (YYYY-MM-DD)
        #[arg(short, long, default_value = "2024-01-10")]
        date: TradingDay,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Maximum rows per read batch
        #[arg(long, default_value = "8192")]
        batch_size: usize,
    },

    /// Print Fibonacci pivot levels for a given high, low and close
    Pivots {
        /// Daily high
        #[arg(long, allow_negative_numbers = true)]
        high: f64,

        /// Daily low
        #[arg(long, allow_negative_numbers = true)]
        low: f64,

        /// Daily close
        #[arg(long, allow_negative_numbers = true)]
        close: f64,
    },
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Process {
            input,
            output,
            date,
            format,
            batch_size,
        } => commands::process::process(input, output, date, format, batch_size, cli.quiet),
        Commands::Pivots { high, low, close } => {
            commands::pivots::pivots(high, low, close);
            Ok(())
        }
    }
}
