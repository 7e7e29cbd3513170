//! Rendering components
//!
//! Visual layer over the view-state modules: the table renderer, chart
//! renderer, linked chart+table composition, and the primitive components
//! (badge, progress, skeleton, checkbox, date picker, filter input). All
//! components render into a ratatui `Frame` and hold no authoritative state
//! of their own.

pub mod badge;
pub mod chart;
pub mod checkbox;
pub mod date_picker;
pub mod filter_input;
pub mod linked_chart;
pub mod progress;
pub mod skeleton;
pub mod table;
pub mod theme;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Fit text into a cell width: pad with spaces or truncate with an ellipsis.
///
/// Width accounting is display-width aware so wide glyphs do not shift
/// neighboring columns.
pub fn fit_to_width(text: &str, width: u16) -> String {
    let width = width as usize;
    if width == 0 {
        return String::new();
    }
    let text_width = UnicodeWidthStr::width(text);
    if text_width <= width {
        let mut out = text.to_string();
        out.push_str(&" ".repeat(width - text_width));
        return out;
    }
    if width == 1 {
        return "\u{2026}".to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('\u{2026}');
    out.push_str(&" ".repeat(width.saturating_sub(used + 1)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_short_text() {
        assert_eq!(fit_to_width("ab", 4), "ab  ");
    }

    #[test]
    fn test_fit_truncates_with_ellipsis() {
        assert_eq!(fit_to_width("abcdef", 4), "abc\u{2026}");
    }

    #[test]
    fn test_fit_exact_width_untouched() {
        assert_eq!(fit_to_width("abcd", 4), "abcd");
    }

    #[test]
    fn test_fit_zero_and_one_widths() {
        assert_eq!(fit_to_width("abc", 0), "");
        assert_eq!(fit_to_width("abc", 1), "\u{2026}");
    }

    #[test]
    fn test_fit_wide_glyphs() {
        // Each CJK glyph is 2 cells wide.
        assert_eq!(fit_to_width("\u{6771}\u{4EAC}", 4), "\u{6771}\u{4EAC}");
        assert_eq!(fit_to_width("\u{6771}\u{4EAC}", 3), "\u{6771}\u{2026}");
    }
}
