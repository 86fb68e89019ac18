//! Benchmark timing analysis for the large-number library.
//!
//! Loads the CSV tables produced by the arithmetic benchmarks (one row per
//! bit-width, one column per operation), normalizes timings taken with
//! different test-case counts, and renders comparison plots and tables.
//!
//! Pipeline: `loader` → `series` (adjusted times) → `render` / `output`.

pub mod axis;
pub mod loader;
pub mod output;
pub mod render;
pub mod series;

pub use loader::{LoadError, load_csv, parse_csv};
pub use render::{PlotMode, PlotOptions, RenderError, RenderedPlot, render_svg, write_svg};
pub use series::{AdjustError, AdjustedSeries, Dataset, Series};
