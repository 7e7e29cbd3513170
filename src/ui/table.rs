//! Data table renderer.
//!
//! Renders a `DerivedView` row by row: header with sort indicators, pinned
//! column regions that stay visible under horizontal scroll, group header
//! rows, and selection/hover highlighting. All state lives in the
//! `DataTable`; this module only draws.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::dataset::RowId;
use crate::table::DataTable;
use crate::view_state::{ColumnLayout, PinSide, ViewRow};

use super::theme::{
    COLOR_ACCENT, COLOR_DIM, COLOR_GROUP, COLOR_HEADER, COLOR_HOVER_BG, COLOR_PIN_SEPARATOR,
    COLOR_SELECTED_BG, COLOR_SORT, COLOR_SUCCESS,
};

/// Minimum height to render anything (header + one row).
const MIN_HEIGHT: u16 = 2;

/// Width of the selection marker gutter.
const GUTTER_WIDTH: u16 = 2;

/// Collapsed/expanded group markers.
const MARKER_COLLAPSED: char = '\u{25B8}'; // ▸
const MARKER_EXPANDED: char = '\u{25BE}'; // ▾

// ============================================================================
// Config
// ============================================================================

/// Per-render options for the table renderer.
#[derive(Debug, Clone, Default)]
pub struct TableRenderConfig {
    /// Row to render with hover emphasis.
    pub hovered: Option<RowId>,
    /// Number of unpinned columns scrolled out to the left. Pinned columns
    /// ignore this, which is what makes them sticky.
    pub col_offset: usize,
    /// Render the pagination/selection footer line.
    pub show_footer: bool,
    /// When set, only these data rows render (linked chart filtering).
    pub restrict_rows: Option<std::collections::BTreeSet<RowId>>,
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the table into `area`.
pub fn render(frame: &mut Frame, area: Rect, table: &DataTable, config: &TableRenderConfig) {
    if area.height < MIN_HEIGHT || area.width <= GUTTER_WIDTH {
        return;
    }

    let mut view = table.derived();
    if let Some(restrict) = &config.restrict_rows {
        view.rows.retain(|row| match row.row_id() {
            Some(id) => restrict.contains(&id),
            None => true,
        });
    }
    let segments = place_columns(&view.columns, area, config.col_offset);

    render_header(frame, area, &segments);

    let footer_rows: u16 = if config.show_footer { 1 } else { 0 };
    let body_height = area.height - 1 - footer_rows;

    for (i, row) in view.rows.iter().take(body_height as usize).enumerate() {
        let y = area.y + 1 + i as u16;
        match row {
            ViewRow::GroupHeader {
                key,
                count,
                expanded,
            } => render_group_header(frame, area, y, key, *count, *expanded),
            ViewRow::Data { id } => {
                render_data_row(frame, area, y, table, &segments, *id, config.hovered)
            }
        }
    }

    if config.show_footer {
        render_footer(frame, area, table, &view.total_filtered, view.page_index, view.page_count);
    }
}

// ============================================================================
// Column placement
// ============================================================================

/// One column with its resolved on-screen x position.
struct PlacedColumn<'a> {
    column: &'a ColumnLayout,
    x: u16,
    /// Last column before the right-pinned region gets a separator.
    separator_after: bool,
}

/// Place columns: left-pinned at the left edge (after the selection gutter),
/// right-pinned flush right, unpinned in between honoring `col_offset`.
fn place_columns<'a>(
    columns: &'a [ColumnLayout],
    area: Rect,
    col_offset: usize,
) -> Vec<PlacedColumn<'a>> {
    let right_width: u16 = columns
        .iter()
        .filter(|c| c.pin == Some(PinSide::Right))
        .map(|c| c.width + 1)
        .sum();
    let right_start = (area.x + area.width).saturating_sub(right_width);

    let mut placed = Vec::new();
    let mut x = area.x + GUTTER_WIDTH;

    // Left-pinned, then scrollable middle.
    let mut skipped = 0;
    for column in columns.iter().filter(|c| c.pin != Some(PinSide::Right)) {
        if column.pin.is_none() && skipped < col_offset {
            skipped += 1;
            continue;
        }
        if x + column.width > right_start {
            break;
        }
        placed.push(PlacedColumn {
            column,
            x,
            separator_after: false,
        });
        x += column.width + 1;
    }
    if right_width > 0 {
        if let Some(last) = placed.last_mut() {
            last.separator_after = true;
        }
    }

    // Right-pinned, flush against the right edge.
    let mut x = right_start;
    for column in columns.iter().filter(|c| c.pin == Some(PinSide::Right)) {
        placed.push(PlacedColumn {
            column,
            x,
            separator_after: false,
        });
        x += column.width + 1;
    }

    placed
}

// ============================================================================
// Rows
// ============================================================================

fn render_header(frame: &mut Frame, area: Rect, segments: &[PlacedColumn]) {
    for placed in segments {
        let column = placed.column;
        let mut label = super::fit_to_width(&column.header, column.width);
        if let Some((priority, direction)) = column.sort {
            // Indicator replaces the last cell of the label; priority digit
            // shows up only under multi-sort.
            let mut marker = String::new();
            marker.push(direction.indicator());
            if priority > 0 {
                marker.push_str(&(priority + 1).to_string());
            }
            let keep = (column.width as usize).saturating_sub(marker.len());
            label = super::fit_to_width(&column.header, keep as u16);
            label.push_str(&marker);
        }

        let style = if column.sort.is_some() {
            Style::default().fg(COLOR_SORT).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD)
        };
        frame.render_widget(
            Span::styled(label, style),
            Rect::new(placed.x, area.y, column.width, 1),
        );
        if placed.separator_after {
            frame.render_widget(
                Span::styled("\u{2502}", Style::default().fg(COLOR_PIN_SEPARATOR)),
                Rect::new(placed.x + column.width, area.y, 1, 1),
            );
        }
    }
}

fn render_group_header(
    frame: &mut Frame,
    area: Rect,
    y: u16,
    key: &str,
    count: usize,
    expanded: bool,
) {
    let marker = if expanded {
        MARKER_EXPANDED
    } else {
        MARKER_COLLAPSED
    };
    let text = format!("{} {} ({})", marker, key, count);
    let line = Line::from(Span::styled(
        super::fit_to_width(&text, area.width.saturating_sub(GUTTER_WIDTH)),
        Style::default()
            .fg(COLOR_GROUP)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        line,
        Rect::new(area.x + GUTTER_WIDTH, y, area.width - GUTTER_WIDTH, 1),
    );
}

fn render_data_row(
    frame: &mut Frame,
    area: Rect,
    y: u16,
    table: &DataTable,
    segments: &[PlacedColumn],
    id: RowId,
    hovered: Option<RowId>,
) {
    let selected = table.view_state().selection.contains(id);
    let row_bg = if selected {
        Some(COLOR_SELECTED_BG)
    } else if hovered == Some(id) {
        Some(COLOR_HOVER_BG)
    } else {
        None
    };

    if let Some(bg) = row_bg {
        frame.render_widget(
            Span::styled(" ".repeat(area.width as usize), Style::default().bg(bg)),
            Rect::new(area.x, y, area.width, 1),
        );
    }

    // Selection marker in the gutter.
    if selected {
        let mut style = Style::default().fg(COLOR_SUCCESS);
        if let Some(bg) = row_bg {
            style = style.bg(bg);
        }
        frame.render_widget(
            Span::styled("\u{2713}", style),
            Rect::new(area.x, y, 1, 1),
        );
    }

    let columns = table.columns();
    for placed in segments {
        let column = placed.column;
        let text = crate::column::column_by_id(columns, &column.id)
            .map(|def| def.display(table.dataset(), id))
            .unwrap_or_default();
        let mut style = if hovered == Some(id) {
            Style::default().fg(COLOR_ACCENT)
        } else {
            Style::default()
        };
        if let Some(bg) = row_bg {
            style = style.bg(bg);
        }
        frame.render_widget(
            Span::styled(super::fit_to_width(&text, column.width), style),
            Rect::new(placed.x, y, column.width, 1),
        );
        if placed.separator_after {
            frame.render_widget(
                Span::styled("\u{2502}", Style::default().fg(COLOR_PIN_SEPARATOR)),
                Rect::new(placed.x + column.width, y, 1, 1),
            );
        }
    }
}

fn render_footer(
    frame: &mut Frame,
    area: Rect,
    table: &DataTable,
    total_filtered: &usize,
    page_index: usize,
    page_count: usize,
) {
    let selected = table.view_state().selection.len();
    let mut text = format!(
        "page {}/{} \u{00B7} {} rows",
        page_index + 1,
        page_count,
        total_filtered
    );
    if selected > 0 {
        text.push_str(&format!(" \u{00B7} {} selected", selected));
    }
    frame.render_widget(
        Span::styled(text, Style::default().fg(COLOR_DIM)),
        Rect::new(area.x + GUTTER_WIDTH, area.y + area.height - 1, area.width - GUTTER_WIDTH, 1),
    );
}
