//! Single log-log chart with every series.

use plotters::coord::Shift;
use plotters::coord::combinators::{BindKeyPoints, IntoLogRange};
use plotters::prelude::*;

use super::{RenderError, series_color};
use crate::axis;
use crate::series::AdjustedSeries;

/// How a log-log chart is decorated.
pub(crate) struct LogLogStyle<'a> {
    pub caption: Option<&'a str>,
    /// Draw a circle at every data point.
    pub markers: bool,
    pub legend: bool,
    /// Label the axes "Bits" / "Time (s)".
    pub axis_labels: bool,
    /// Fixed tick positions. The axes are widened so every one of them is
    /// drawn. When empty, decades inside the data range are used.
    pub x_ticks: Vec<f64>,
    pub y_ticks: Vec<f64>,
}

/// Draw the default chart: fixed ticks, markers, legend and grid.
pub(crate) fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    series: &[AdjustedSeries],
    title: &str,
) -> Result<(), RenderError> {
    let style = LogLogStyle {
        caption: Some(title),
        markers: true,
        legend: true,
        axis_labels: true,
        x_ticks: axis::bits_ticks(),
        y_ticks: axis::time_ticks(),
    };
    draw_log_log(area, series, &style)
}

/// Draw `series` as lines on log-scaled bit-width and time axes.
///
/// Points with a non-positive coordinate are left out. The axes span the
/// data and the fixed ticks of `style`.
pub(crate) fn draw_log_log<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    series: &[AdjustedSeries],
    style: &LogLogStyle<'_>,
) -> Result<(), RenderError> {
    let plotted: Vec<Vec<(f64, f64)>> = series
        .iter()
        .map(|s| s.points().filter(|&(x, y)| x > 0.0 && y > 0.0).collect())
        .collect();

    if plotted.iter().all(Vec::is_empty) {
        return Err(RenderError::NothingToPlot);
    }
    let x_range = axis::log_range(
        plotted
            .iter()
            .flatten()
            .map(|p| p.0)
            .chain(style.x_ticks.iter().copied()),
    )
    .ok_or(RenderError::NothingToPlot)?;
    let y_range = axis::log_range(
        plotted
            .iter()
            .flatten()
            .map(|p| p.1)
            .chain(style.y_ticks.iter().copied()),
    )
    .ok_or(RenderError::NothingToPlot)?;
    let x_ticks = axis::log_ticks_within(&style.x_ticks, &x_range);
    let y_ticks = axis::log_ticks_within(&style.y_ticks, &y_range);

    let mut builder = ChartBuilder::on(area);
    if let Some(caption) = style.caption {
        builder.caption(caption, ("sans-serif", 24));
    }
    let mut chart = builder
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(
            x_range.log_scale().with_key_points(x_ticks),
            y_range.log_scale().with_key_points(y_ticks),
        )?;

    let mut mesh = chart.configure_mesh();
    mesh.x_label_formatter(&tick_label)
        .y_label_formatter(&tick_label);
    if style.axis_labels {
        mesh.x_desc("Bits").y_desc("Time (s)");
    }
    mesh.draw()?;

    for (index, (s, points)) in series.iter().zip(&plotted).enumerate() {
        let color = series_color(index);
        let line = chart.draw_series(LineSeries::new(
            points.iter().copied(),
            color.stroke_width(2),
        ))?;
        if style.legend {
            line.label(s.name.as_str()).legend(move |(x, y)| {
                PathElement::new(vec![(x - 10, y), (x + 10, y)], color.stroke_width(2))
            });
        }
        if style.markers {
            chart.draw_series(
                points
                    .iter()
                    .map(|&point| Circle::new(point, 4, color.filled())),
            )?;
        }
    }

    if style.legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    Ok(())
}

pub(crate) fn tick_label(value: &f64) -> String {
    axis::format_tick(*value)
}
