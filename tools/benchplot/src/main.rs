//! Benchmark plotter for the large-number library.
//!
//! Reads the CSV written by the arithmetic benchmarks and renders it as an
//! SVG plot or prints it as a table.
//!
//! Pipeline: read benchplot.toml → merge flags → load CSV → adjust times →
//!           render / print.

mod cli;
mod config;
mod plot_cmd;
mod table_cmd;
mod verbose;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use lnl_bench::Dataset;

use cli::{Command, PlotArgs};
use config::ConfigFile;
use verbose::{Timer, dprintln};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    verbose::init(cli.quiet, cli.verbose);

    let config = ConfigFile::load(cli.config.as_deref())?;

    match cli.command {
        Some(Command::Plot(ref args)) => plot_cmd::cmd_plot(args, &config),
        Some(Command::Table(ref args)) => table_cmd::cmd_table(args, &config),
        None => plot_cmd::cmd_plot(&PlotArgs::default(), &config),
    }
}

/// Load a benchmark table and report its shape.
pub(crate) fn load_dataset(path: &Path) -> Result<Dataset> {
    let _t = Timer::start("load");
    let dataset = lnl_bench::load_csv(path)
        .with_context(|| format!("failed to load benchmark table {}", path.display()))?;
    dprintln!(
        "Loaded {} series x {} rows from {}",
        dataset.len(),
        dataset.row_count(),
        path.display()
    );
    Ok(dataset)
}
