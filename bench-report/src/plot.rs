//! Two-panel benchmark figure
//!
//! The left panel plots mean execution time with standard-deviation error bars,
//! the right panel plots measured speedup against the ideal `y = x` line. Both
//! use a base-2 logarithmic thread-count axis.

use crate::config::PlotConfig;
use crate::types::{ReportError, Result, Summary};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::Path;

const X_DESC: &str = "Number of Threads";
const TIME_Y_DESC: &str = "Average Execution Time (seconds)";
const SPEEDUP_Y_DESC: &str = "Speedup (relative to 1 thread)";

/// Padding added on both ends of the log2 thread axis
const X_PADDING: f64 = 0.25;

type DrawResult<DB> = std::result::Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

/// Render both charts side by side into a PNG file
pub fn render(summary: &Summary, path: &Path, config: &PlotConfig) -> Result<()> {
    log::info!(
        "Rendering {}x{} plot to {:?}",
        config.width,
        config.height,
        path
    );

    if summary.is_empty() {
        return Err(ReportError::RenderError("no thread counts to plot".to_string()));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    // The backend flushes whatever was drawn when dropped, so it must go out of
    // scope before a failed figure is cleaned up.
    let drawn = {
        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        draw_figure(&root, summary, config).map_err(|e| e.to_string())
    };

    if let Err(msg) = drawn {
        if path.exists() {
            log::warn!("Removing partially drawn plot: {:?}", path);
            std::fs::remove_file(path)?;
        }
        return Err(ReportError::RenderError(msg));
    }

    log::debug!("Plot written: {:?}", path);
    Ok(())
}

/// Draw the figure on any backend
pub fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    summary: &Summary,
    config: &PlotConfig,
) -> DrawResult<DB> {
    root.fill(&WHITE)?;

    let panels = root.split_evenly((1, 2));
    draw_time_chart(&panels[0], summary, &config.time_title)?;
    draw_speedup_chart(&panels[1], summary, &config.speedup_title)?;

    root.present()?;
    Ok(())
}

fn draw_time_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    summary: &Summary,
    title: &str,
) -> DrawResult<DB> {
    let points = time_points(summary);
    let (x_min, x_max) = x_bounds(summary);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, 0f64..time_y_max(summary))?;

    chart
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(TIME_Y_DESC)
        .x_labels(x_label_count(summary))
        .x_label_formatter(&thread_label)
        .y_label_formatter(&|y| format!("{:.2}", y))
        .draw()?;

    chart.draw_series(summary.rows.iter().filter(|row| !row.std_time.is_nan()).map(|row| {
        ErrorBar::new_vertical(
            log2(row.thread_count),
            row.avg_time - row.std_time,
            row.avg_time,
            row.avg_time + row.std_time,
            BLUE.filled(),
            10,
        )
    }))?;

    chart.draw_series(LineSeries::new(points.clone(), &BLUE))?;
    chart.draw_series(points.iter().map(|&(x, y)| Circle::new((x, y), 4, BLUE.filled())))?;

    Ok(())
}

fn draw_speedup_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    summary: &Summary,
    title: &str,
) -> DrawResult<DB> {
    let measured = speedup_points(summary);
    let ideal = ideal_points(summary);
    let (x_min, x_max) = x_bounds(summary);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, 0f64..speedup_y_max(summary))?;

    chart
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(SPEEDUP_Y_DESC)
        .x_labels(x_label_count(summary))
        .x_label_formatter(&thread_label)
        .y_label_formatter(&|y| format!("{:.1}", y))
        .draw()?;

    chart
        .draw_series(LineSeries::new(measured.clone(), &BLUE))?
        .label("Measured Speedup")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    chart.draw_series(measured.iter().map(|&(x, y)| Circle::new((x, y), 4, BLUE.filled())))?;

    chart
        .draw_series(LineSeries::new(ideal, ideal_style()))?
        .label("Ideal Speedup")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ideal_style()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

fn ideal_style() -> ShapeStyle {
    BLACK.mix(0.7).stroke_width(2)
}

fn log2(thread_count: u32) -> f64 {
    (thread_count as f64).log2()
}

/// Thread-axis range in log2 space
fn x_bounds(summary: &Summary) -> (f64, f64) {
    let min = summary.rows.iter().map(|row| row.thread_count).min().unwrap_or(1);
    (log2(min) - X_PADDING, log2(summary.max_threads()) + X_PADDING)
}

/// One label per power of two
fn x_label_count(summary: &Summary) -> usize {
    log2(summary.max_threads()).ceil() as usize + 1
}

/// Tick label for a log2 axis position, shown as a thread count
fn thread_label(x: &f64) -> String {
    let value = x.exp2();
    if (value - value.round()).abs() < 1e-6 {
        format!("{}", value.round() as u64)
    } else {
        format!("{:.1}", value)
    }
}

fn time_points(summary: &Summary) -> Vec<(f64, f64)> {
    summary
        .rows
        .iter()
        .map(|row| (log2(row.thread_count), row.avg_time))
        .collect()
}

fn speedup_points(summary: &Summary) -> Vec<(f64, f64)> {
    summary
        .rows
        .iter()
        .map(|row| (log2(row.thread_count), row.speedup))
        .collect()
}

fn ideal_points(summary: &Summary) -> Vec<(f64, f64)> {
    summary
        .rows
        .iter()
        .map(|row| (log2(row.thread_count), row.thread_count as f64))
        .collect()
}

/// Top of the time axis, leaving room above the highest error bar
fn time_y_max(summary: &Summary) -> f64 {
    let top = summary
        .rows
        .iter()
        .map(|row| {
            if row.std_time.is_nan() {
                row.avg_time
            } else {
                row.avg_time + row.std_time
            }
        })
        .fold(0.0, f64::max);
    padded(top)
}

/// Top of the speedup axis, covering both measured and ideal curves
fn speedup_y_max(summary: &Summary) -> f64 {
    let top = summary
        .rows
        .iter()
        .map(|row| row.speedup)
        .filter(|s| s.is_finite())
        .fold(summary.max_threads() as f64, f64::max);
    padded(top)
}

fn padded(top: f64) -> f64 {
    if top > 0.0 {
        top * 1.1
    } else {
        1.0
    }
}
