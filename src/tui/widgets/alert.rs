//! Inline alert widget
//!
//! Displays a dismissible message in the color of its kind.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Kind of alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// Informational message
    Info,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl AlertKind {
    /// Get the color for this alert kind
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    /// Get the icon/prefix for this alert kind
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }

    /// Get the title for this alert kind
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// An inline alert
#[derive(Debug, Clone)]
pub struct AlertMessage<'a> {
    kind: AlertKind,
    message: &'a str,
    dismissible: bool,
}

impl<'a> AlertMessage<'a> {
    pub fn new(kind: AlertKind, message: &'a str) -> Self {
        Self {
            kind,
            message,
            dismissible: false,
        }
    }

    pub fn error(message: &'a str) -> Self {
        Self::new(AlertKind::Error, message)
    }

    pub fn success(message: &'a str) -> Self {
        Self::new(AlertKind::Success, message)
    }

    pub fn warning(message: &'a str) -> Self {
        Self::new(AlertKind::Warning, message)
    }

    /// Show the `[Esc]` hint in the border
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    /// Rows needed to show the alert with borders
    pub const HEIGHT: u16 = 3;
}

impl Widget for AlertMessage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.message.is_empty() {
            return;
        }

        let color = self.kind.color();
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} {} ", self.kind.icon(), self.kind.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        if self.dismissible {
            block = block.title_bottom(Line::from(vec![
                Span::styled(" [Esc]", Style::default().fg(Color::White)),
                Span::raw(" dismiss "),
            ]));
        }

        Paragraph::new(self.message)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(widget: AlertMessage, width: u16) -> String {
        let area = Rect::new(0, 0, width, AlertMessage::HEIGHT);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_alert_kinds() {
        assert_eq!(AlertKind::Info.color(), Color::Blue);
        assert_eq!(AlertKind::Success.color(), Color::Green);
        assert_eq!(AlertKind::Warning.color(), Color::Yellow);
        assert_eq!(AlertKind::Error.color(), Color::Red);
    }

    #[test]
    fn test_renders_message_and_title() {
        let text = rendered(AlertMessage::error("insufficient funds").dismissible(true), 40);
        assert!(text.contains("x Error"));
        assert!(text.contains("insufficient funds"));
        assert!(text.contains("[Esc] dismiss"));
    }

    #[test]
    fn test_empty_message_renders_nothing() {
        let text = rendered(AlertMessage::error(""), 20);
        assert!(text.trim().is_empty());
    }
}
