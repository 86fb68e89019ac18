//! Configuration loading from `benchplot.toml`.
//!
//! Every setting is optional. Command-line flags override the file, and the
//! file overrides the built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use lnl_bench::PlotOptions;
use serde::Deserialize;

use crate::cli::{Mode, PlotArgs};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "benchplot.toml";
/// Benchmark table read when no input is given.
pub const DEFAULT_INPUT: &str = "benchmark-boost-raw.csv";
/// Plot written when no output is given.
pub const DEFAULT_OUTPUT: &str = "benchmark-boost.svg";

/// Contents of a `benchplot.toml` file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub plot: PlotSection,
}

/// The `[plot]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotSection {
    pub mode: Option<Mode>,
    pub title: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub thresholds: Option<Vec<u64>>,
}

impl ConfigFile {
    /// Load the config file.
    ///
    /// An explicit path must exist. Without one, `benchplot.toml` in the
    /// working directory is read if present, otherwise every setting keeps
    /// its default.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = PathBuf::from(CONFIG_FILE);
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse config file contents.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Input path: the flag, then the file, then the default.
    pub fn input(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.input.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    }

    /// Output path: the flag, then the file, then the default.
    pub fn output(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Merge the `[plot]` table and the `plot` flags into render options.
    pub fn plot_options(&self, args: &PlotArgs) -> Result<PlotOptions> {
        let defaults = PlotOptions::default();
        let plot = &self.plot;

        let options = PlotOptions {
            mode: args
                .mode
                .or(plot.mode)
                .map_or(defaults.mode, Into::into),
            title: args
                .title
                .clone()
                .or_else(|| plot.title.clone())
                .unwrap_or(defaults.title),
            width: args.width.or(plot.width).unwrap_or(defaults.width),
            height: args.height.or(plot.height).unwrap_or(defaults.height),
            thresholds: if args.thresholds.is_empty() {
                plot.thresholds.clone().unwrap_or(defaults.thresholds)
            } else {
                args.thresholds.clone()
            },
        };

        if options.width == 0 || options.height == 0 {
            bail!(
                "plot size must be non-zero (got {}x{})",
                options.width,
                options.height
            );
        }
        Ok(options)
    }
}
