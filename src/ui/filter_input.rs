//! Single-line filter input, used for the global filter box.
//!
//! Holds its own editing state (value + cursor); the table only sees the
//! committed text. Callers debounce at the event loop before pushing the
//! value into `DataTable::set_global_filter`.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

/// Editing state of a single-line input.
#[derive(Debug, Clone, Default)]
pub struct FilterInput {
    value: String,
    /// Cursor position in characters.
    cursor: usize,
    pub focused: bool,
    pub placeholder: String,
}

impl FilterInput {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Default::default()
        }
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the text, moving the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    /// Handle a key event; returns true if the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                let byte = self.byte_index();
                self.value.insert(byte, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let byte = self.byte_index();
                    self.value.remove(byte);
                    true
                } else {
                    false
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.value.chars().count() {
                    let byte = self.byte_index();
                    self.value.remove(byte);
                    true
                } else {
                    false
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                false
            }
            _ => false,
        }
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Render into a one-row area as `/ value`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let prefix_style = if self.focused {
            Style::default().fg(COLOR_ACCENT)
        } else {
            Style::default().fg(COLOR_BORDER)
        };
        let mut spans = vec![Span::styled("/ ", prefix_style)];

        if self.value.is_empty() && !self.focused {
            spans.push(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(COLOR_DIM),
            ));
        } else if self.focused {
            // Show the cursor as a reversed cell.
            let chars: Vec<char> = self.value.chars().collect();
            let before: String = chars[..self.cursor].iter().collect();
            let at: String = chars
                .get(self.cursor)
                .map(|c| c.to_string())
                .unwrap_or_else(|| " ".to_string());
            let after: String = if self.cursor < chars.len() {
                chars[self.cursor + 1..].iter().collect()
            } else {
                String::new()
            };
            spans.push(Span::raw(before));
            spans.push(Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)));
            spans.push(Span::raw(after));
        } else {
            spans.push(Span::raw(self.value.clone()));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_inserts_at_cursor() {
        let mut input = FilterInput::new("filter...");
        assert!(input.handle_key(key(KeyCode::Char('a'))));
        assert!(input.handle_key(key(KeyCode::Char('c'))));
        input.handle_key(key(KeyCode::Left));
        assert!(input.handle_key(key(KeyCode::Char('b'))));
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = FilterInput::new("");
        assert!(!input.handle_key(key(KeyCode::Backspace)));
        input.set_value("x");
        input.handle_key(key(KeyCode::Home));
        assert!(!input.handle_key(key(KeyCode::Backspace)));
        assert_eq!(input.value(), "x");
    }

    #[test]
    fn test_delete_removes_under_cursor() {
        let mut input = FilterInput::new("");
        input.set_value("abc");
        input.handle_key(key(KeyCode::Home));
        assert!(input.handle_key(key(KeyCode::Delete)));
        assert_eq!(input.value(), "bc");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = FilterInput::new("");
        input.set_value("na\u{EF}ve");
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        assert!(input.handle_key(key(KeyCode::Delete)));
        assert_eq!(input.value(), "nave");
    }
}
