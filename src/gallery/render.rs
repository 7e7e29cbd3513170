//! Gallery screen rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use datadeck::chart::ChartModel;
use datadeck::ui::badge::{Badge, BadgeVariant};
use datadeck::ui::chart::ChartRenderConfig;
use datadeck::ui::checkbox::Checkbox;
use datadeck::ui::linked_chart::LinkedChartView;
use datadeck::ui::progress::Progress;
use datadeck::ui::skeleton::Skeleton;
use datadeck::ui::table::TableRenderConfig;
use datadeck::ui::theme::{COLOR_ACCENT, COLOR_DANGER, COLOR_DIM, COLOR_HEADER};
use datadeck::ui::{chart, linked_chart, table};

use super::{GalleryApp, Screen};

pub fn render(frame: &mut Frame, app: &GalleryApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_tabs(frame, chunks[0], app);
    match app.screen {
        Screen::Table => render_table_screen(frame, chunks[1], app),
        Screen::Chart => render_chart_screen(frame, chunks[1], app),
        Screen::Linked => render_linked_screen(frame, chunks[1], app),
        Screen::Primitives => render_primitives_screen(frame, chunks[1], app),
    }
    render_help(frame, chunks[2], app);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &GalleryApp) {
    let mut spans = Vec::new();
    for (index, screen) in Screen::ALL.iter().enumerate() {
        let style = if *screen == app.screen {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(
            format!(" {} {} ", index + 1, screen.title()),
            style,
        ));
    }
    frame.render_widget(Line::from(spans), area);
}

fn render_table_screen(frame: &mut Frame, area: Rect, app: &GalleryApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    app.filter.render(frame, chunks[0]);
    table::render(
        frame,
        chunks[1],
        &app.table,
        &TableRenderConfig {
            hovered: cursor_row(app),
            col_offset: app.col_offset,
            show_footer: true,
            restrict_rows: None,
        },
    );
}

fn cursor_row(app: &GalleryApp) -> Option<datadeck::dataset::RowId> {
    app.table
        .derived()
        .rows
        .get(app.cursor)
        .and_then(|row| row.row_id())
}

fn render_chart_screen(frame: &mut Frame, area: Rect, app: &GalleryApp) {
    let filtered = app.table.filtered_ids();
    match ChartModel::build(
        app.table.dataset(),
        app.table.columns(),
        &filtered,
        "month",
        &app.series,
        app.chart_kind,
        None,
    ) {
        Ok(model) => chart::render(frame, area, &model, &ChartRenderConfig::default()),
        Err(err) => {
            frame.render_widget(
                Span::styled(format!("chart error: {err}"), Style::default().fg(COLOR_DANGER)),
                Rect::new(area.x, area.y, area.width, 1),
            );
        }
    }
}

fn render_linked_screen(frame: &mut Frame, area: Rect, app: &GalleryApp) {
    let view = LinkedChartView {
        table: &app.table,
        x_column: "month",
        series: &app.series,
        kind: app.chart_kind,
    };
    if let Err(err) = linked_chart::render(frame, area, &view, &app.linked) {
        frame.render_widget(
            Span::styled(format!("linked error: {err}"), Style::default().fg(COLOR_DANGER)),
            Rect::new(area.x, area.y, area.width, 1),
        );
    }
}

fn render_primitives_screen(frame: &mut Frame, area: Rect, app: &GalleryApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // badges
            Constraint::Length(1),
            Constraint::Length(1), // progress
            Constraint::Length(1),
            Constraint::Length(1), // checkbox
            Constraint::Length(1),
            Constraint::Min(8), // date picker / skeleton
        ])
        .split(area);

    let badges = Line::from(vec![
        Badge::new("default").as_span(),
        Span::raw(" "),
        Badge::new("ok").with_variant(BadgeVariant::Success).as_span(),
        Span::raw(" "),
        Badge::new("warn").with_variant(BadgeVariant::Warning).as_span(),
        Span::raw(" "),
        Badge::new("down").with_variant(BadgeVariant::Danger).as_span(),
        Span::raw(" "),
        Badge::new("info").with_variant(BadgeVariant::Info).as_span(),
        Span::raw(" "),
        Badge::new("outline").with_variant(BadgeVariant::Outline).as_span(),
    ]);
    frame.render_widget(badges, chunks[0]);

    Progress::from_counts(app.progress_tick.min(100), 100).render(frame, chunks[2]);

    Checkbox::new("notify on completion", app.checkbox).render(frame, chunks[4]);

    if app.show_skeleton {
        Skeleton::new(4).render(frame, chunks[6], app.anim_frame);
    } else {
        let picker_area = Rect::new(
            chunks[6].x,
            chunks[6].y,
            chunks[6].width,
            chunks[6].height,
        );
        app.date_picker.render(frame, picker_area);
        if let Some(selected) = app.date_picker.selected() {
            let y = chunks[6].y.saturating_add(chunks[6].height.saturating_sub(1));
            frame.render_widget(
                Span::styled(
                    format!("selected: {}", selected.format("%Y-%m-%d")),
                    Style::default().fg(COLOR_HEADER),
                ),
                Rect::new(chunks[6].x, y, chunks[6].width, 1),
            );
        }
    }
}

fn render_help(frame: &mut Frame, area: Rect, app: &GalleryApp) {
    let help = match app.screen {
        Screen::Table => {
            "/ filter  s/m sort  g group  e expand  p pin  [ ] page  +/- size  h/l scroll  space select  a all  x clear  q quit"
        }
        Screen::Chart => "c cycle chart kind  q quit",
        Screen::Linked => "up/down hover  enter chart-filter  space select  m mode  x clear  q quit",
        Screen::Primitives => "arrows move date  enter pick  n/b month  space checkbox  k skeleton  q quit",
    };
    frame.render_widget(
        Span::styled(help, Style::default().fg(COLOR_DIM)),
        area,
    );
}
