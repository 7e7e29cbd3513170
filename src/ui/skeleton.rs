//! Skeleton component: animated placeholder blocks shown while data loads.

use ratatui::{layout::Rect, style::Style, text::Span, Frame};

use super::theme::COLOR_SKELETON;

/// Shimmer animation shades, cycled by frame index.
const SHIMMER_FRAMES: [char; 3] = ['\u{2591}', '\u{2592}', '\u{2593}'];

/// Advance the shimmer frame.
pub fn next_frame(current: usize) -> usize {
    (current + 1) % SHIMMER_FRAMES.len()
}

/// A skeleton placeholder covering a number of lines.
#[derive(Debug, Clone, Copy)]
pub struct Skeleton {
    /// Number of placeholder lines.
    pub lines: u16,
    /// Gap rows between placeholder lines.
    pub gap: u16,
}

impl Skeleton {
    pub fn new(lines: u16) -> Self {
        Self { lines, gap: 1 }
    }

    /// Builder-style setter for the gap between lines.
    pub fn with_gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Total height consumed.
    pub fn height(&self) -> u16 {
        if self.lines == 0 {
            0
        } else {
            self.lines + (self.lines - 1) * self.gap
        }
    }

    /// Render at an animation frame index. Each line shimmers one step out
    /// of phase with its neighbor.
    pub fn render(&self, frame: &mut Frame, area: Rect, anim_frame: usize) {
        for i in 0..self.lines {
            let y = area.y + i * (1 + self.gap);
            if y >= area.y + area.height {
                break;
            }
            let shade = SHIMMER_FRAMES[(anim_frame + i as usize) % SHIMMER_FRAMES.len()];
            frame.render_widget(
                Span::styled(
                    shade.to_string().repeat(area.width as usize),
                    Style::default().fg(COLOR_SKELETON),
                ),
                Rect::new(area.x, y, area.width, 1),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_frame_wraps() {
        assert_eq!(next_frame(0), 1);
        assert_eq!(next_frame(2), 0);
    }

    #[test]
    fn test_height_includes_gaps() {
        assert_eq!(Skeleton::new(3).height(), 5);
        assert_eq!(Skeleton::new(3).with_gap(0).height(), 3);
        assert_eq!(Skeleton::new(0).height(), 0);
    }
}
