//! Component gallery: one screen per component family, driven by a shared
//! sample dataset. This is the interactive showcase for the crate, not part
//! of the library surface.

pub mod data;
pub mod render;

use std::time::Duration;

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use datadeck::chart::{ChartKind, SeriesSpec};
use datadeck::debounce::Debouncer;
use datadeck::linked::LinkedState;
use datadeck::table::DataTable;
use datadeck::ui::checkbox::CheckState;
use datadeck::ui::date_picker::DatePicker;
use datadeck::ui::filter_input::FilterInput;
use datadeck::ui::skeleton;
use datadeck::view_state::{PinSide, ViewRow};

/// Quiet period before a filter keystroke reaches the table.
const FILTER_DEBOUNCE: Duration = Duration::from_millis(200);

/// Which gallery screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Table,
    Chart,
    Linked,
    Primitives,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Table,
        Screen::Chart,
        Screen::Linked,
        Screen::Primitives,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Table => "Table",
            Screen::Chart => "Chart",
            Screen::Linked => "Linked",
            Screen::Primitives => "Primitives",
        }
    }

    pub fn next(&self) -> Screen {
        let index = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Screen {
        let index = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// All gallery state.
pub struct GalleryApp {
    pub screen: Screen,
    pub table: DataTable,
    pub series: Vec<SeriesSpec>,
    pub chart_kind: ChartKind,
    pub linked: LinkedState,
    /// Row cursor into the derived page rows of the table screen.
    pub cursor: usize,
    /// Hover cursor into the filtered ids of the linked screen.
    pub hover_index: usize,
    pub col_offset: usize,
    pub filter: FilterInput,
    pub filter_debounce: Debouncer,
    pub anim_frame: usize,
    pub progress_tick: u64,
    pub date_picker: DatePicker,
    pub checkbox: CheckState,
    pub show_skeleton: bool,
    pub should_quit: bool,
}

impl GalleryApp {
    pub fn new() -> Self {
        let mut table = DataTable::new(data::sample_dataset(), data::sample_columns())
            .with_persistence("gallery");
        table.set_page_size(12);
        Self {
            screen: Screen::Table,
            table,
            series: data::sample_series(),
            chart_kind: ChartKind::Bar,
            linked: LinkedState::new(),
            cursor: 0,
            hover_index: 0,
            col_offset: 0,
            filter: FilterInput::new("filter rows"),
            filter_debounce: Debouncer::new(FILTER_DEBOUNCE),
            anim_frame: 0,
            progress_tick: 0,
            date_picker: DatePicker::new(
                NaiveDate::from_ymd_opt(2025, 6, 15).unwrap_or_default(),
            ),
            checkbox: CheckState::Unchecked,
            show_skeleton: false,
            should_quit: false,
        }
    }

    /// Periodic tick: animations and debounced filter commits.
    pub fn tick(&mut self) {
        self.anim_frame = skeleton::next_frame(self.anim_frame);
        self.progress_tick = (self.progress_tick + 1) % 120;
        if self.filter_debounce.fire() {
            self.table.set_global_filter(self.filter.value());
            self.cursor = 0;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Filter input swallows keys while focused.
        if self.screen == Screen::Table && self.filter.focused {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.filter.focused = false,
                _ => {
                    if self.filter.handle_key(key) {
                        self.filter_debounce.mark();
                    }
                }
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.screen = self.screen.next();
                return;
            }
            KeyCode::BackTab => {
                self.screen = self.screen.prev();
                return;
            }
            KeyCode::Char('1') => {
                self.screen = Screen::Table;
                return;
            }
            KeyCode::Char('2') => {
                self.screen = Screen::Chart;
                return;
            }
            KeyCode::Char('3') => {
                self.screen = Screen::Linked;
                return;
            }
            KeyCode::Char('4') => {
                self.screen = Screen::Primitives;
                return;
            }
            _ => {}
        }

        match self.screen {
            Screen::Table => self.handle_table_key(key),
            Screen::Chart => self.handle_chart_key(key),
            Screen::Linked => self.handle_linked_key(key),
            Screen::Primitives => self.handle_primitives_key(key),
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        let view = self.table.derived();
        let row_count = view.rows.len();
        match key.code {
            KeyCode::Char('/') => self.filter.focused = true,
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => {
                if self.cursor + 1 < row_count {
                    self.cursor += 1;
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => match view.rows.get(self.cursor) {
                Some(ViewRow::Data { id }) => self.table.toggle_row_selection(*id),
                Some(ViewRow::GroupHeader { key, .. }) => {
                    let key = key.clone();
                    self.table.toggle_group(&key);
                }
                None => {}
            },
            KeyCode::Char('s') => self.table.cycle_sort("revenue", false),
            KeyCode::Char('m') => self.table.cycle_sort("month", true),
            KeyCode::Char('g') => {
                let grouped = self.table.view_state().grouping.group_by.is_some();
                self.table
                    .set_group_by(if grouped { None } else { Some("region") });
                self.cursor = 0;
            }
            KeyCode::Char('e') => {
                let auto = self.table.view_state().grouping.auto_expand;
                self.table.set_auto_expand(!auto);
            }
            KeyCode::Char('p') => {
                let pinned = self.table.view_state().layout.pin_of("month").is_some();
                self.table
                    .pin_column("month", if pinned { None } else { Some(PinSide::Left) });
            }
            KeyCode::Char('[') => {
                let index = self.table.view_state().pagination.page_index;
                self.table.set_page_index(index.saturating_sub(1));
                self.cursor = 0;
            }
            KeyCode::Char(']') => {
                let index = self.table.view_state().pagination.page_index;
                self.table.set_page_index(index + 1);
                self.cursor = 0;
            }
            KeyCode::Char('+') => {
                let size = self.table.view_state().pagination.page_size;
                self.table.set_page_size(size + 4);
            }
            KeyCode::Char('-') => {
                let size = self.table.view_state().pagination.page_size;
                self.table.set_page_size(size.saturating_sub(4).max(4));
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.col_offset = self.col_offset.saturating_sub(1);
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.col_offset = (self.col_offset + 1).min(self.table.columns().len() - 1);
            }
            KeyCode::Char('a') => self.table.select_all(),
            KeyCode::Char('x') => {
                self.table.clear_selection();
                self.table.set_global_filter("");
                self.filter.set_value("");
            }
            _ => {}
        }
    }

    fn handle_chart_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') {
            self.chart_kind = match self.chart_kind {
                ChartKind::Bar => ChartKind::HorizontalBar,
                ChartKind::HorizontalBar => ChartKind::Line,
                ChartKind::Line => ChartKind::Scatter,
                ChartKind::Scatter => ChartKind::Composed,
                ChartKind::Composed => ChartKind::Bar,
            };
        }
    }

    fn handle_linked_key(&mut self, key: KeyEvent) {
        let filtered = self.table.filtered_ids();
        if filtered.is_empty() {
            return;
        }
        self.hover_index = self.hover_index.min(filtered.len() - 1);
        match key.code {
            KeyCode::Up => {
                self.hover_index = self.hover_index.saturating_sub(1);
                self.linked.set_hovered(Some(filtered[self.hover_index]));
            }
            KeyCode::Down => {
                self.hover_index = (self.hover_index + 1).min(filtered.len() - 1);
                self.linked.set_hovered(Some(filtered[self.hover_index]));
            }
            KeyCode::Enter => self.linked.toggle_chart_point(filtered[self.hover_index]),
            KeyCode::Char(' ') => self.linked.toggle_selected(filtered[self.hover_index]),
            KeyCode::Char('m') => self.linked.toggle_mode(),
            KeyCode::Esc => self.linked.set_hovered(None),
            KeyCode::Char('x') => self.linked.clear_all(),
            _ => {}
        }
    }

    fn handle_primitives_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.date_picker.move_days(-1),
            KeyCode::Right => self.date_picker.move_days(1),
            KeyCode::Up => self.date_picker.move_days(-7),
            KeyCode::Down => self.date_picker.move_days(7),
            KeyCode::Char('n') => self.date_picker.next_month(),
            KeyCode::Char('b') => self.date_picker.prev_month(),
            KeyCode::Enter => self.date_picker.select(),
            KeyCode::Char(' ') => self.checkbox = self.checkbox.toggled(),
            KeyCode::Char('k') => self.show_skeleton = !self.show_skeleton,
            _ => {}
        }
    }
}

impl Default for GalleryApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use serial_test::serial;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    // Keep the gallery's layout profile inside a tempdir; the returned
    // guard holds the directory alive for the test.
    fn scoped_app() -> (TempDir, GalleryApp) {
        let dir = TempDir::new().expect("tempdir");
        std::env::set_var(datadeck::storage::DATA_DIR_ENV, dir.path());
        (dir, GalleryApp::new())
    }

    #[test]
    #[serial]
    fn test_tab_cycles_screens() {
        let (_dir, mut app) = scoped_app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.screen, Screen::Chart);
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.screen, Screen::Table);
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.screen, Screen::Primitives);
    }

    #[test]
    #[serial]
    fn test_filter_key_is_debounced() {
        let (_dir, mut app) = scoped_app();
        app.handle_key(key(KeyCode::Char('/')));
        assert!(app.filter.focused);
        app.handle_key(key(KeyCode::Char('j')));
        // Keystroke recorded locally but not yet pushed to the table.
        assert_eq!(app.filter.value(), "j");
        assert!(app.filter_debounce.is_pending());
        assert!(app.table.view_state().filters.global().is_empty());
    }

    #[test]
    #[serial]
    fn test_space_toggles_selection_under_cursor() {
        let (_dir, mut app) = scoped_app();
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.table.view_state().selection.len(), 1);
        app.handle_key(key(KeyCode::Char(' ')));
        assert!(app.table.view_state().selection.is_empty());
    }

    #[test]
    #[serial]
    fn test_group_toggle_round_trips() {
        let (_dir, mut app) = scoped_app();
        app.handle_key(key(KeyCode::Char('g')));
        assert_eq!(
            app.table.view_state().grouping.group_by.as_deref(),
            Some("region")
        );
        app.handle_key(key(KeyCode::Char('g')));
        assert!(app.table.view_state().grouping.group_by.is_none());
    }

    #[test]
    #[serial]
    fn test_quit_keys() {
        let (_dir, mut app) = scoped_app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
