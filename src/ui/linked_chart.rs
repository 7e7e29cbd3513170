//! Linked chart + table composition.
//!
//! Renders a chart above a table over the same dataset, wired through one
//! `LinkedState`: chart clicks restrict the table, table selection feeds
//! back into the chart as highlight or filter, hover mirrors on both sides.

use std::collections::BTreeSet;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    Frame,
};

use crate::chart::{ChartKind, ChartModel, SeriesSpec};
use crate::error::DeckResult;
use crate::linked::{LinkMode, LinkedState};
use crate::table::DataTable;

use super::chart::ChartRenderConfig;
use super::table::TableRenderConfig;
use super::theme::{COLOR_ACCENT, COLOR_DIM};

/// Configuration of one linked chart+table pair.
#[derive(Debug)]
pub struct LinkedChartView<'a> {
    pub table: &'a DataTable,
    pub x_column: &'a str,
    pub series: &'a [SeriesSpec],
    pub kind: ChartKind,
}

/// Render chart, table, and status line into `area`.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &LinkedChartView,
    linked: &LinkedState,
) -> DeckResult<()> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    // Chart side: built over the table's filtered rows, hover highlighted.
    let filtered = view.table.filtered_ids();
    let model = ChartModel::build(
        view.table.dataset(),
        view.table.columns(),
        &filtered,
        view.x_column,
        view.series,
        view.kind,
        None,
    )?
    .with_highlight(linked.hovered());

    let dim_rows: Vec<_> = filtered
        .iter()
        .copied()
        .filter(|id| linked.chart_dimmed(*id))
        .collect();
    let hide_rows: Vec<_> = filtered
        .iter()
        .copied()
        .filter(|id| !linked.chart_visible(*id))
        .collect();
    super::chart::render(
        frame,
        chunks[0],
        &model,
        &ChartRenderConfig {
            dim_rows: Some(&dim_rows),
            hide_rows: Some(&hide_rows),
        },
    );

    // Table side: restricted to the chart-filter set when non-empty.
    let restrict: BTreeSet<_> = linked.table_rows(&filtered).into_iter().collect();
    super::table::render(
        frame,
        chunks[1],
        view.table,
        &TableRenderConfig {
            hovered: linked.hovered(),
            restrict_rows: Some(restrict),
            show_footer: false,
            ..Default::default()
        },
    );

    render_status(frame, chunks[2], linked);
    Ok(())
}

fn render_status(frame: &mut Frame, area: Rect, linked: &LinkedState) {
    let mode = match linked.mode() {
        LinkMode::Highlight => "highlight",
        LinkMode::Filter => "filter",
    };
    let line = Line::from(vec![
        Span::styled(
            format!("{} chart-filtered", linked.chart_filter().len()),
            Style::default().fg(COLOR_DIM),
        ),
        Span::styled(" \u{00B7} ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            format!("{} selected", linked.selected().len()),
            Style::default().fg(COLOR_DIM),
        ),
        Span::styled(" \u{00B7} mode: ", Style::default().fg(COLOR_DIM)),
        Span::styled(mode, Style::default().fg(COLOR_ACCENT)),
    ]);
    frame.render_widget(line, area);
}
