//! Progress bar component.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    Frame,
};

use super::theme::{COLOR_DIM, COLOR_PROGRESS, COLOR_PROGRESS_BG};

/// A determinate progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Completion ratio, clamped to 0.0..=1.0.
    ratio: f64,
}

impl Progress {
    /// Progress from a ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio: ratio.clamp(0.0, 1.0),
        }
    }

    /// Progress from current/total counts. A zero total reads as empty.
    pub fn from_counts(current: u64, total: u64) -> Self {
        if total == 0 {
            Self::from_ratio(0.0)
        } else {
            Self::from_ratio(current as f64 / total as f64)
        }
    }

    /// Completion ratio.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Percentage 0-100.
    pub fn percentage(&self) -> u8 {
        (self.ratio * 100.0).round() as u8
    }

    /// Bar plus trailing percentage as one line.
    pub fn as_line(&self, width: u16) -> Line<'static> {
        // Reserve 5 cells for " 100%".
        let bar_width = width.saturating_sub(5) as usize;
        let filled = (bar_width as f64 * self.ratio).round() as usize;
        let empty = bar_width - filled.min(bar_width);
        Line::from(vec![
            Span::styled(
                "\u{2588}".repeat(filled),
                Style::default().fg(COLOR_PROGRESS),
            ),
            Span::styled(
                "\u{2591}".repeat(empty),
                Style::default().fg(COLOR_PROGRESS_BG),
            ),
            Span::styled(
                format!(" {:>3}%", self.percentage()),
                Style::default().fg(COLOR_DIM),
            ),
        ])
    }

    /// Render into a one-row area.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.as_line(area.width), area);
    }
}
