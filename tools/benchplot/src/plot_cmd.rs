//! `benchplot plot`: render the benchmark table to an SVG file.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};
use lnl_bench::PlotMode;

use crate::cli::PlotArgs;
use crate::config::ConfigFile;
use crate::load_dataset;
use crate::verbose::{Timer, dprintln, vprintln};

/// Load the input, render it and write the plot.
pub fn cmd_plot(args: &PlotArgs, config: &ConfigFile) -> Result<()> {
    let input = config.input(args.input.as_deref());
    let output = config.output(args.output.as_deref());
    let options = config.plot_options(args)?;

    vprintln!("Input:  {}", input.display());
    vprintln!("Output: {}", output.display());
    vprintln!(
        "Layout: {:?}, {}x{}",
        options.mode,
        options.width,
        options.height
    );
    if options.mode == PlotMode::Divided {
        vprintln!("Thresholds: {:?}", options.thresholds);
    }

    let dataset = load_dataset(&input)?;

    let plot = {
        let _t = Timer::start("render");
        lnl_bench::render_svg(&dataset, &options)
            .with_context(|| format!("failed to plot {}", input.display()))?
    };

    for cut_offs in &plot.cut_offs {
        vprintln!("  {} cut-offs: {:?}", cut_offs.series, cut_offs.indices);
    }

    lnl_bench::write_svg(&plot, &output)?;
    dprintln!("Wrote {}", output.display());

    if args.open {
        open_in_viewer(&output)?;
    }

    Ok(())
}

/// Hand `path` to the desktop's default viewer.
fn open_in_viewer(path: &Path) -> Result<()> {
    let status = viewer_command(path)
        .status()
        .with_context(|| format!("failed to launch a viewer for {}", path.display()))?;
    if !status.success() {
        bail!("viewer for {} exited with {status}", path.display());
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
