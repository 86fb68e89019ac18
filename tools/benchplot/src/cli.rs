//! Command-line interface definitions for benchplot.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use lnl_bench::PlotMode;
use serde::Deserialize;

/// Plot and tabulate large-number benchmark timings.
#[derive(Parser)]
#[command(name = "benchplot", version, about)]
pub struct Cli {
    /// Subcommand to execute (default: plot with configured settings).
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Configuration file (default: benchplot.toml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print only errors.
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print cut-off indices, resolved settings and timings.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Render the benchmark plot to an SVG file.
    Plot(PlotArgs),
    /// Print the benchmark timings as a table.
    Table(TableArgs),
}

/// Arguments for the `plot` subcommand.
#[derive(Parser, Default)]
pub struct PlotArgs {
    /// Benchmark CSV file.
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// SVG file to write.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Plot layout.
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Chart title (single layout).
    #[arg(long)]
    pub title: Option<String>,

    /// Canvas width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Bit-width threshold of the divided layout; repeat for each panel.
    #[arg(long = "threshold", value_name = "BITS")]
    pub thresholds: Vec<u64>,

    /// Open the written plot in the system viewer.
    #[arg(long)]
    pub open: bool,
}

/// Arguments for the `table` subcommand.
#[derive(Parser)]
pub struct TableArgs {
    /// Benchmark CSV file.
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Show measured times instead of times adjusted to the reference count.
    #[arg(long)]
    pub raw: bool,
}

/// Plot layout, as named on the command line and in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One log-log chart with every series.
    Single,
    /// Linear panels split by bit-width thresholds plus a log-log overview.
    Divided,
}

impl From<Mode> for PlotMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Single => PlotMode::Single,
            Mode::Divided => PlotMode::Divided,
        }
    }
}
