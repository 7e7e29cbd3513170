//! Date picker component: a month grid navigated by keyboard.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED_BG};

/// Height of a rendered picker: title + weekday header + up to 6 week rows.
pub const PICKER_HEIGHT: u16 = 8;

/// Width of a rendered picker: 7 day slots of 3 cells.
pub const PICKER_WIDTH: u16 = 21;

/// Month-grid date picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    /// Date the keyboard cursor is on; also decides the visible month.
    cursor: NaiveDate,
    /// Committed selection, if any.
    selected: Option<NaiveDate>,
}

impl DatePicker {
    /// Picker opened at the given date.
    pub fn new(initial: NaiveDate) -> Self {
        Self {
            cursor: initial,
            selected: None,
        }
    }

    /// Current cursor date.
    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    /// Committed selection.
    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Move the cursor by whole days (arrow keys: ±1, ±7).
    pub fn move_days(&mut self, days: i64) {
        self.cursor = if days >= 0 {
            self.cursor
                .checked_add_days(Days::new(days as u64))
                .unwrap_or(self.cursor)
        } else {
            self.cursor
                .checked_sub_days(Days::new(days.unsigned_abs()))
                .unwrap_or(self.cursor)
        };
    }

    /// Jump to the same day in the next month, clamping the day-of-month.
    pub fn next_month(&mut self) {
        if let Some(d) = self.cursor.checked_add_months(Months::new(1)) {
            self.cursor = d;
        }
    }

    /// Jump to the same day in the previous month, clamping the day-of-month.
    pub fn prev_month(&mut self) {
        if let Some(d) = self.cursor.checked_sub_months(Months::new(1)) {
            self.cursor = d;
        }
    }

    /// Commit the cursor date as the selection.
    pub fn select(&mut self) {
        self.selected = Some(self.cursor);
    }

    /// Clear the committed selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// First day of the visible month.
    fn first_of_month(&self) -> NaiveDate {
        self.cursor.with_day(1).unwrap_or(self.cursor)
    }

    /// Number of days in the visible month.
    fn days_in_month(&self) -> u32 {
        let first = self.first_of_month();
        let next = first
            .checked_add_months(Months::new(1))
            .unwrap_or(first);
        next.signed_duration_since(first).num_days() as u32
    }

    /// Render the month grid.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if area.height < PICKER_HEIGHT || area.width < PICKER_WIDTH {
            return;
        }

        let title = self.cursor.format("%B %Y").to_string();
        frame.render_widget(
            Span::styled(
                format!("{:^width$}", title, width = PICKER_WIDTH as usize),
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            ),
            Rect::new(area.x, area.y, PICKER_WIDTH, 1),
        );
        frame.render_widget(
            Span::styled("Mo Tu We Th Fr Sa Su", Style::default().fg(COLOR_DIM)),
            Rect::new(area.x, area.y + 1, PICKER_WIDTH, 1),
        );

        let first = self.first_of_month();
        let offset = first.weekday().num_days_from_monday() as u16;
        let days = self.days_in_month();

        for day in 1..=days {
            let slot = offset + day as u16 - 1;
            let x = area.x + (slot % 7) * 3;
            let y = area.y + 2 + slot / 7;
            let date = first.with_day(day).unwrap_or(first);

            let mut style = Style::default();
            if date.weekday() == Weekday::Sat || date.weekday() == Weekday::Sun {
                style = style.fg(COLOR_DIM);
            }
            if self.selected == Some(date) {
                style = style.bg(COLOR_SELECTED_BG).fg(COLOR_ACCENT);
            }
            if date == self.cursor {
                style = style
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::REVERSED);
            }
            frame.render_widget(
                Line::from(Span::styled(format!("{:>2}", day), style)),
                Rect::new(x, y, 2, 1),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_move_days_crosses_month_boundary() {
        let mut picker = DatePicker::new(date(2026, 1, 30));
        picker.move_days(7);
        assert_eq!(picker.cursor(), date(2026, 2, 6));
        picker.move_days(-7);
        assert_eq!(picker.cursor(), date(2026, 1, 30));
    }

    #[test]
    fn test_month_jump_clamps_day() {
        let mut picker = DatePicker::new(date(2026, 1, 31));
        picker.next_month();
        assert_eq!(picker.cursor(), date(2026, 2, 28));
        picker.prev_month();
        assert_eq!(picker.cursor(), date(2026, 1, 28));
    }

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(DatePicker::new(date(2024, 2, 10)).days_in_month(), 29);
        assert_eq!(DatePicker::new(date(2026, 2, 10)).days_in_month(), 28);
        assert_eq!(DatePicker::new(date(2026, 4, 10)).days_in_month(), 30);
    }

    #[test]
    fn test_select_commits_cursor() {
        let mut picker = DatePicker::new(date(2026, 8, 30));
        assert_eq!(picker.selected(), None);
        picker.select();
        assert_eq!(picker.selected(), Some(date(2026, 8, 30)));
        picker.clear();
        assert_eq!(picker.selected(), None);
    }
}
