//! Loading indicator

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// One-line spinner with a message, animated by the app tick
#[derive(Debug, Clone)]
pub struct LoadingSpinner<'a> {
    message: &'a str,
    tick: usize,
}

impl<'a> LoadingSpinner<'a> {
    pub fn new(message: &'a str, tick: usize) -> Self {
        Self { message, tick }
    }

    fn frame(&self) -> &'static str {
        FRAMES[self.tick % FRAMES.len()]
    }
}

impl Widget for LoadingSpinner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.frame(), Style::default().fg(Color::Cyan)),
            Span::raw(" "),
            Span::styled(self.message, Style::default().fg(Color::White)),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_advance_with_tick() {
        assert_eq!(LoadingSpinner::new("", 0).frame(), "|");
        assert_eq!(LoadingSpinner::new("", 1).frame(), "/");
        assert_eq!(LoadingSpinner::new("", 4).frame(), "|");
    }
}
