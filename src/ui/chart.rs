//! Chart renderer: maps a `ChartModel` onto ratatui's chart widgets.
//!
//! Bar shapes go through `BarChart` (one group per category, one bar per
//! series); line, scatter, and composed shapes go through `Chart`, with
//! composed charts mixing `GraphType::Bar` and `GraphType::Line` datasets in
//! one plot. Dimmed elements are split into their own datasets so the whole
//! chart still renders in a single pass.

use ratatui::{
    layout::Rect,
    style::Style,
    symbols,
    text::Line,
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType},
    Frame,
};

use crate::chart::{palette, ChartKind, ChartModel, ChartSeries, SeriesKind};
use crate::dataset::RowId;

use super::theme::COLOR_DIM;

// ============================================================================
// Config
// ============================================================================

/// Per-render options for the chart renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartRenderConfig<'a> {
    /// Rows to render dimmed (linked-table highlight mode). Ignored when the
    /// model carries its own `highlighted` row, which dims everything else.
    pub dim_rows: Option<&'a [RowId]>,
    /// Rows to drop entirely (linked-table filter mode).
    pub hide_rows: Option<&'a [RowId]>,
}

fn is_dimmed(model: &ChartModel, config: &ChartRenderConfig, row: RowId) -> bool {
    if let Some(highlighted) = model.highlighted {
        return highlighted != row;
    }
    config.dim_rows.is_some_and(|rows| rows.contains(&row))
}

fn is_hidden(config: &ChartRenderConfig, row: RowId) -> bool {
    config.hide_rows.is_some_and(|rows| rows.contains(&row))
}

// ============================================================================
// Entry point
// ============================================================================

/// Render the chart into `area`.
pub fn render(frame: &mut Frame, area: Rect, model: &ChartModel, config: &ChartRenderConfig) {
    if area.width < 4 || area.height < 3 {
        return;
    }
    match model.kind {
        ChartKind::Bar => render_bars(frame, area, model, config, false),
        ChartKind::HorizontalBar => render_bars(frame, area, model, config, true),
        ChartKind::Line | ChartKind::Scatter | ChartKind::Composed => {
            render_plot(frame, area, model, config)
        }
    }
}

// ============================================================================
// Bar charts
// ============================================================================

fn render_bars(
    frame: &mut Frame,
    area: Rect,
    model: &ChartModel,
    config: &ChartRenderConfig,
    horizontal: bool,
) {
    let mut chart = BarChart::default().bar_gap(0).group_gap(1);
    if horizontal {
        chart = chart.direction(ratatui::layout::Direction::Horizontal);
    }

    for (index, category) in model.categories.iter().enumerate() {
        if is_hidden(config, category.row) {
            continue;
        }
        let bars: Vec<Bar> = model
            .series
            .iter()
            .filter_map(|series| {
                let point = series.points.iter().find(|p| p.index == index)?;
                let color = if is_dimmed(model, config, point.row) {
                    palette::dim_color(series.color)
                } else {
                    series.color
                };
                // BarChart plots magnitudes; negative values clamp to zero.
                let value = point.value.max(0.0).round() as u64;
                Some(
                    Bar::default()
                        .value(value)
                        .text_value(format!("{}", point.value))
                        .style(Style::default().fg(color)),
                )
            })
            .collect();
        if bars.is_empty() {
            continue;
        }
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(category.label.clone()))
                .bars(&bars),
        );
    }

    let bar_width = bar_width_for(area, model, horizontal);
    frame.render_widget(chart.bar_width(bar_width), area);
}

fn bar_width_for(area: Rect, model: &ChartModel, horizontal: bool) -> u16 {
    let groups = model.categories.len().max(1) as u16;
    let series = model.series.len().max(1) as u16;
    if horizontal {
        return 1;
    }
    let available = area.width.saturating_sub(groups - 1);
    (available / (groups * series)).clamp(1, 9)
}

// ============================================================================
// Line / scatter / composed plots
// ============================================================================

/// Owned point buffers split by dim state, one entry per (series, dimmed).
struct PlotData {
    label: String,
    color: ratatui::style::Color,
    kind: SeriesKind,
    dimmed: bool,
    points: Vec<(f64, f64)>,
}

fn plot_data(model: &ChartModel, config: &ChartRenderConfig, series: &ChartSeries) -> Vec<PlotData> {
    let mut active = Vec::new();
    let mut dimmed = Vec::new();
    for point in &series.points {
        if is_hidden(config, point.row) {
            continue;
        }
        let target = if is_dimmed(model, config, point.row) {
            &mut dimmed
        } else {
            &mut active
        };
        target.push((point.index as f64, point.value));
    }

    let mut out = Vec::new();
    if !active.is_empty() {
        out.push(PlotData {
            label: series.label.clone(),
            color: series.color,
            kind: series.kind,
            dimmed: false,
            points: active,
        });
    }
    if !dimmed.is_empty() {
        out.push(PlotData {
            label: String::new(), // dim half stays out of the legend
            color: palette::dim_color(series.color),
            kind: series.kind,
            dimmed: true,
            points: dimmed,
        });
    }
    out
}

fn graph_type_for(kind: ChartKind, series: SeriesKind) -> GraphType {
    match kind {
        ChartKind::Scatter => GraphType::Scatter,
        ChartKind::Line => GraphType::Line,
        // Area has no terminal analog; composed area series plot as lines.
        ChartKind::Composed => match series {
            SeriesKind::Bar => GraphType::Bar,
            SeriesKind::Line | SeriesKind::Area => GraphType::Line,
        },
        ChartKind::Bar | ChartKind::HorizontalBar => GraphType::Bar,
    }
}

fn render_plot(frame: &mut Frame, area: Rect, model: &ChartModel, config: &ChartRenderConfig) {
    let buffers: Vec<PlotData> = model
        .series
        .iter()
        .flat_map(|series| plot_data(model, config, series))
        .collect();

    let marker = match model.kind {
        ChartKind::Scatter => symbols::Marker::Dot,
        _ => symbols::Marker::Braille,
    };

    let datasets: Vec<Dataset> = buffers
        .iter()
        .map(|buffer| {
            let mut dataset = Dataset::default()
                .marker(marker)
                .graph_type(graph_type_for(model.kind, buffer.kind))
                .style(Style::default().fg(buffer.color))
                .data(&buffer.points);
            if !buffer.dimmed {
                dataset = dataset.name(buffer.label.clone());
            }
            dataset
        })
        .collect();

    let (y_min, y_max) = model.y_bounds();
    let x_max = (model.categories.len().saturating_sub(1)) as f64;

    let x_labels: Vec<Line> = match model.categories.len() {
        0 => Vec::new(),
        1 => vec![Line::from(model.categories[0].label.clone())],
        n => vec![
            Line::from(model.categories[0].label.clone()),
            Line::from(model.categories[n / 2].label.clone()),
            Line::from(model.categories[n - 1].label.clone()),
        ],
    };

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(COLOR_DIM))
                .bounds([0.0, x_max.max(1.0)])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(COLOR_DIM))
                .bounds([y_min, y_max])
                .labels(vec![
                    Line::from(format!("{:.0}", y_min)),
                    Line::from(format!("{:.0}", y_max)),
                ]),
        );

    frame.render_widget(chart, area);
}
