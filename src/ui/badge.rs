//! Badge component: a small variant-styled label.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DANGER, COLOR_INFO, COLOR_SUCCESS, COLOR_WARNING};

/// Visual variant of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Danger,
    Info,
    /// Border color only, no fill.
    Outline,
}

impl BadgeVariant {
    fn color(&self) -> ratatui::style::Color {
        match self {
            BadgeVariant::Default => COLOR_ACCENT,
            BadgeVariant::Success => COLOR_SUCCESS,
            BadgeVariant::Warning => COLOR_WARNING,
            BadgeVariant::Danger => COLOR_DANGER,
            BadgeVariant::Info => COLOR_INFO,
            BadgeVariant::Outline => COLOR_BORDER,
        }
    }
}

/// A badge: label plus variant.
#[derive(Debug, Clone)]
pub struct Badge {
    pub label: String,
    pub variant: BadgeVariant,
}

impl Badge {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: BadgeVariant::default(),
        }
    }

    /// Builder-style setter for the variant.
    pub fn with_variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Badge as a styled span, for embedding in table cells and lines.
    pub fn as_span(&self) -> Span<'static> {
        let style = match self.variant {
            BadgeVariant::Outline => Style::default().fg(self.variant.color()),
            _ => Style::default()
                .fg(self.variant.color())
                .add_modifier(Modifier::BOLD),
        };
        Span::styled(format!("[{}]", self.label), style)
    }

    /// Display width of the rendered badge.
    pub fn width(&self) -> u16 {
        self.label.chars().count() as u16 + 2
    }

    /// Render standalone.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.as_span(), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_span_brackets_label() {
        let badge = Badge::new("beta").with_variant(BadgeVariant::Warning);
        assert_eq!(badge.as_span().content, "[beta]");
        assert_eq!(badge.width(), 6);
    }

    #[test]
    fn test_variant_colors_differ() {
        assert_ne!(BadgeVariant::Success.color(), BadgeVariant::Danger.color());
    }
}
