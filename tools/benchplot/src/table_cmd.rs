//! `benchplot table`: print the benchmark timings as a markdown table.

use anyhow::{Context, Result};
use lnl_bench::output::{TableKind, print_times_table};

use crate::cli::TableArgs;
use crate::config::ConfigFile;
use crate::load_dataset;

pub fn cmd_table(args: &TableArgs, config: &ConfigFile) -> Result<()> {
    let input = config.input(args.input.as_deref());
    let dataset = load_dataset(&input)?;

    let kind = if args.raw {
        TableKind::Raw
    } else {
        TableKind::Adjusted
    };
    print_times_table(&dataset, kind)
        .with_context(|| format!("failed to tabulate {}", input.display()))
}
