//! Plot rendering.
//!
//! Plots are drawn with `plotters` into an in-memory SVG document. Two
//! layouts are available:
//!
//! - [`PlotMode::Single`]: every series on one log-log chart with fixed
//!   bit-width and time ticks and a legend.
//! - [`PlotMode::Divided`]: stacked linear panels partitioned by bit-width
//!   thresholds, followed by a log-log overview of all rows.

pub mod divided;
pub mod single;

use std::path::{Path, PathBuf};

use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use thiserror::Error;

use crate::series::{AdjustError, Dataset};

pub use divided::{CutOffs, cut_off_indices};

/// Title of the single-mode chart.
pub const DEFAULT_TITLE: &str = "Boost cpp_int benchmarks";
/// Canvas size in pixels.
pub const DEFAULT_SIZE: (u32, u32) = (1000, 700);
/// Bit-width thresholds of the divided layout.
pub const DEFAULT_THRESHOLDS: [u64; 3] = [200, 1000, 4000];

/// Ten-color qualitative cycle used for series lines.
const SERIES_COLORS: [RGBColor; 10] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
    RGBColor(0xe3, 0x77, 0xc2),
    RGBColor(0x7f, 0x7f, 0x7f),
    RGBColor(0xbc, 0xbd, 0x22),
    RGBColor(0x17, 0xbe, 0xcf),
];

/// Color of the series at `index`.
pub(crate) fn series_color(index: usize) -> RGBColor {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Plot layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotMode {
    #[default]
    Single,
    Divided,
}

/// Rendering options.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub mode: PlotMode,
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Bit-width thresholds (divided mode only).
    pub thresholds: Vec<u64>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            mode: PlotMode::default(),
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_SIZE.0,
            height: DEFAULT_SIZE.1,
            thresholds: DEFAULT_THRESHOLDS.to_vec(),
        }
    }
}

/// A rendered plot.
#[derive(Debug, Clone)]
pub struct RenderedPlot {
    /// SVG document.
    pub svg: String,
    /// Per-series cut-off indices (divided mode only).
    pub cut_offs: Vec<CutOffs>,
}

/// Errors raised while rendering a plot.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Adjust(#[from] AdjustError),
    #[error("no positive values to place on a log axis")]
    NothingToPlot,
    #[error("series '{series}' crosses {crossed} of {required} bit-width thresholds")]
    ThresholdsNotCrossed {
        series: String,
        crossed: usize,
        required: usize,
    },
    #[error("drawing failed: {0}")]
    Draw(String),
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for RenderError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self::Draw(err.to_string())
    }
}

/// Render `dataset` into an SVG document.
pub fn render_svg(dataset: &Dataset, options: &PlotOptions) -> Result<RenderedPlot, RenderError> {
    let adjusted = dataset.adjusted()?;

    let mut svg = String::new();
    let cut_offs = {
        let root = SVGBackend::with_string(&mut svg, (options.width, options.height))
            .into_drawing_area();
        root.fill(&WHITE)?;
        let cut_offs = match options.mode {
            PlotMode::Single => {
                single::draw(&root, &adjusted, &options.title)?;
                Vec::new()
            }
            PlotMode::Divided => divided::draw(&root, &adjusted, &options.thresholds)?,
        };
        root.present()?;
        cut_offs
    };

    Ok(RenderedPlot { svg, cut_offs })
}

/// Write a rendered plot to `path`.
pub fn write_svg(plot: &RenderedPlot, path: &Path) -> Result<(), RenderError> {
    std::fs::write(path, &plot.svg).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })
}
