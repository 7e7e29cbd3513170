//! Checkbox component with checked, unchecked, and partial states.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    Frame,
};

use super::theme::{COLOR_DIM, COLOR_SUCCESS};

/// Check state, `Partial` covering "some of the group selected".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    Partial,
}

impl CheckState {
    /// Cycle through user toggles: partial resolves to checked.
    pub fn toggled(&self) -> Self {
        match self {
            CheckState::Unchecked | CheckState::Partial => CheckState::Checked,
            CheckState::Checked => CheckState::Unchecked,
        }
    }

    fn mark(&self) -> &'static str {
        match self {
            CheckState::Unchecked => "[ ]",
            CheckState::Checked => "[\u{2713}]",
            CheckState::Partial => "[-]",
        }
    }
}

/// A checkbox with an optional label.
#[derive(Debug, Clone)]
pub struct Checkbox {
    pub state: CheckState,
    pub label: String,
}

impl Checkbox {
    pub fn new(label: impl Into<String>, state: CheckState) -> Self {
        Self {
            state,
            label: label.into(),
        }
    }

    /// Checkbox as a styled span.
    pub fn as_span(&self) -> Span<'static> {
        let style = match self.state {
            CheckState::Unchecked => Style::default().fg(COLOR_DIM),
            _ => Style::default().fg(COLOR_SUCCESS),
        };
        let text = if self.label.is_empty() {
            self.state.mark().to_string()
        } else {
            format!("{} {}", self.state.mark(), self.label)
        };
        Span::styled(text, style)
    }

    /// Render into a one-row area.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.as_span(), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_resolves_partial_to_checked() {
        assert_eq!(CheckState::Partial.toggled(), CheckState::Checked);
        assert_eq!(CheckState::Checked.toggled(), CheckState::Unchecked);
        assert_eq!(CheckState::Unchecked.toggled(), CheckState::Checked);
    }

    #[test]
    fn test_span_contains_mark_and_label() {
        let checkbox = Checkbox::new("all rows", CheckState::Partial);
        assert_eq!(checkbox.as_span().content, "[-] all rows");
    }
}
