//! Stacked panels partitioned by bit-width thresholds.
//!
//! Panel `k` shows the rows between the `(k-1)`-th and `k`-th cut-off as a
//! linear line-and-marker plot. A final log-log panel shows every row.
//! Rows past the last cut-off only appear in that overview.

use std::ops::Range;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::single::{LogLogStyle, draw_log_log, tick_label};
use super::{RenderError, series_color};
use crate::axis;
use crate::series::AdjustedSeries;

/// Cut-off indices computed for one series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutOffs {
    pub series: String,
    pub indices: Vec<usize>,
}

/// Index of the first row whose bit-width exceeds each threshold in turn.
///
/// At most one threshold is crossed per row, and scanning stops once every
/// threshold has been crossed. The result is shorter than `thresholds` when
/// the data never grows past the later ones.
pub fn cut_off_indices(bits: &[u64], thresholds: &[u64]) -> Vec<usize> {
    let mut indices = Vec::with_capacity(thresholds.len());
    for (row, &width) in bits.iter().enumerate() {
        let Some(&threshold) = thresholds.get(indices.len()) else {
            break;
        };
        if width > threshold {
            indices.push(row);
        }
    }
    indices
}

/// Row ranges of the linear panels for a complete set of cut-offs.
pub fn panel_rows(cut_offs: &[usize]) -> Vec<Range<usize>> {
    let mut start = 0;
    cut_offs
        .iter()
        .map(|&end| {
            let rows = start..end;
            start = end;
            rows
        })
        .collect()
}

pub(crate) fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &[AdjustedSeries],
    thresholds: &[u64],
) -> Result<Vec<CutOffs>, RenderError> {
    let cut_offs = series
        .iter()
        .map(|s| {
            let indices = cut_off_indices(&s.bits, thresholds);
            if indices.len() < thresholds.len() {
                return Err(RenderError::ThresholdsNotCrossed {
                    series: s.name.clone(),
                    crossed: indices.len(),
                    required: thresholds.len(),
                });
            }
            Ok(CutOffs {
                series: s.name.clone(),
                indices,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let panels = root.split_evenly((thresholds.len() + 1, 1));
    let (overview, linear) = match panels.split_last() {
        Some(split) => split,
        None => return Ok(cut_offs),
    };

    let rows: Vec<Vec<Range<usize>>> = cut_offs.iter().map(|c| panel_rows(&c.indices)).collect();
    for (panel, area) in linear.iter().enumerate() {
        let segments: Vec<Vec<(f64, f64)>> = series
            .iter()
            .zip(&rows)
            .map(|(s, series_rows)| {
                let span = series_rows.get(panel).cloned().unwrap_or(0..0);
                s.points().skip(span.start).take(span.len()).collect()
            })
            .collect();
        draw_linear_panel(area, &segments)?;
    }

    let style = LogLogStyle {
        caption: None,
        markers: false,
        legend: false,
        axis_labels: false,
        x_ticks: Vec::new(),
        y_ticks: Vec::new(),
    };
    draw_log_log(overview, series, &style)?;

    Ok(cut_offs)
}

/// One linear panel; `segments` holds the points of each series in order.
fn draw_linear_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    segments: &[Vec<(f64, f64)>],
) -> Result<(), RenderError> {
    let x_range = axis::linear_range(segments.iter().flatten().map(|p| p.0)).unwrap_or(0.0..1.0);
    let y_range = axis::linear_range(segments.iter().flatten().map(|p| p.1)).unwrap_or(0.0..1.0);

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Bits")
        .y_desc("Time (s)")
        .x_label_formatter(&tick_label)
        .y_label_formatter(&tick_label)
        .draw()?;

    for (index, points) in segments.iter().enumerate() {
        let color = series_color(index);
        chart.draw_series(LineSeries::new(points.iter().copied(), color))?;
        chart.draw_series(
            points
                .iter()
                .map(|&point| Circle::new(point, 3, color.filled())),
        )?;
    }

    Ok(())
}
