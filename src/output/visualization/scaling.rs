//! Two-panel scalability charts
//!
//! One chart per [`ScalingGroup`] (one Rows value of one metric):
//!
//! ```text
//! ┌──────────────── title ────────────────┬──────────┐
//! │ per-iteration <metric> vs Nodes       │ Tasksize │
//! ├───────────────────────────────────────┤ ── 16    │
//! │ Scalability <metric> vs Nodes         │ ── 32    │
//! └───────────────────────────────────────┴──────────┘
//! ```
//!
//! Each Tasksize is a line with markers and vertical error bars. Both panels
//! share the node range; the legend sits in its own column outside the plots.

use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::metrics::{ScalingGroup, ScalingPoint};
use super::config::{PlotConfig, NO_TITLE};

/// (x, y, error) triples of one line, labelled by its Tasksize
struct PanelSeries {
    label: String,
    points: Vec<(f64, f64, f64)>,
}

// =================================================================================================
// Public API
// =================================================================================================

/// Render a scalability chart for one group
///
/// The top panel plots the per-iteration metric, the bottom panel its
/// scalability against the single-node run.
///
/// # Arguments
///
/// * `group`       — Series of one Rows value, as computed by `metrics::scaling_groups`
/// * `output_path` — Output file path (`.svg` → vector, anything else → PNG bitmap)
/// * `config`      — Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` if the backend cannot draw or write to `output_path`.
///
/// # Example
///
/// ```rust,ignore
/// use nodescale::output::visualization::{plot_scaling, PlotConfig};
///
/// for group in scaling_groups(&table, Metric::AlgorithmTime)? {
///     let config = PlotConfig::scaling("jacobi");
///     plot_scaling(&group, Path::new("chart.png"), Some(&config))?;
/// }
/// ```
pub fn plot_scaling(
    group: &ScalingGroup,
    output_path: &Path,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = PlotConfig::scaling(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let ext = output_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_scaling_impl(backend, group, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_scaling_impl(backend, group, config)
        }
    }
}

// =================================================================================================
// Data preparation
// =================================================================================================

/// Extract one panel's lines from a group
///
/// Non-finite values are dropped; a non-finite error bar is drawn as zero.
fn panel_series(
    group: &ScalingGroup,
    select: impl Fn(&ScalingPoint) -> (f64, f64),
) -> Vec<PanelSeries> {
    group
        .series
        .iter()
        .map(|series| PanelSeries {
            label: series.tasksize.to_string(),
            points: series
                .points
                .iter()
                .filter_map(|point| {
                    let (y, err) = select(point);
                    let err = if err.is_finite() { err.abs() } else { 0.0 };
                    y.is_finite().then_some((point.nodes as f64, y, err))
                })
                .collect(),
        })
        .collect()
}

/// X range covering every node count, padded so edge markers stay visible
fn node_range(group: &ScalingGroup) -> Range<f64> {
    let (lo, hi) = group.node_bounds().unwrap_or((1, 1));
    let (lo, hi) = (lo as f64, hi as f64);
    let pad = (0.05 * (hi - lo)).max(0.5);
    (lo - pad)..(hi + pad)
}

/// Y range covering every value and its error bar, with 10% margins
fn value_range(series: &[PanelSeries]) -> Range<f64> {
    let (lo, hi) = series
        .iter()
        .flat_map(|s| s.points.iter())
        .flat_map(|&(_, y, err)| [y - err, y + err])
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if lo > hi {
        return 0.0..1.0;
    }

    let span = hi - lo;
    let pad = if span > 0.0 {
        0.1 * span
    } else {
        (0.1 * hi.abs()).max(1e-9)
    };
    (lo - pad)..(hi + pad)
}

// =================================================================================================
// Private Plot Implementations
// =================================================================================================

fn plot_scaling_impl<DB: DrawingBackend>(
    backend: DB,
    group: &ScalingGroup,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let titled = root.titled(&config.title, ("sans-serif", 30))?;
    let (panels, legend) = titled.split_horizontally(config.panel_width() as i32);
    let panel_height = panels.dim_in_pixel().1 / 2;
    let (upper, lower) = panels.split_vertically(panel_height as i32);

    let metric = group.metric.column();
    let x_range = node_range(group);

    let values = panel_series(group, |p| (p.value, p.error));
    draw_panel(&upper, &values, x_range.clone(), metric, config)?;

    let speedups = panel_series(group, |p| (p.speedup, p.speedup_error));
    draw_panel(&lower, &speedups, x_range, &format!("Scalability {}", metric), config)?;

    let labels: Vec<&str> = values.iter().map(|s| s.label.as_str()).collect();
    draw_legend(&legend, &labels, config)?;

    root.present()?;
    Ok(())
}

/// Draw one panel: mesh, then line + markers + error bars per series
fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    series: &[PanelSeries],
    x_range: Range<f64>,
    ylabel: &str,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, value_range(series))?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .light_line_style(config.grid_color.mix(0.05))
            .bold_line_style(config.grid_color.mix(0.25))
            .draw()?;
    } else {
        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(&config.xlabel)
            .y_desc(ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .draw()?;
    }

    for (idx, line) in series.iter().enumerate() {
        let color = config.get_series_color(idx);

        chart.draw_series(LineSeries::new(
            line.points.iter().map(|&(x, y, _)| (x, y)),
            color.stroke_width(config.line_width),
        ))?;

        chart.draw_series(
            line.points
                .iter()
                .map(|&(x, y, _)| Circle::new((x, y), config.marker_size, color.filled())),
        )?;

        chart.draw_series(line.points.iter().map(|&(x, y, err)| {
            ErrorBar::new_vertical(x, y - err, y, y + err, color.filled(), config.error_bar_width)
        }))?;
    }

    Ok(())
}

/// Draw the Tasksize legend in its own column
fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    labels: &[&str],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let font = ("sans-serif", 16).into_font();
    let top = (area.dim_in_pixel().1 / 2) as i32 - 12 * (labels.len() as i32 + 1);

    area.draw(&Text::new("Tasksize", (10, top), font.clone()))?;

    for (idx, label) in labels.iter().enumerate() {
        let y = top + 24 * (idx as i32 + 1) + 8;
        let color = config.get_series_color(idx);

        area.draw(&PathElement::new(
            vec![(10, y), (40, y)],
            color.stroke_width(config.line_width),
        ))?;
        area.draw(&Circle::new((25, y), config.marker_size, color.filled()))?;
        area.draw(&Text::new(*label, (48, y - 8), font.clone()))?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
