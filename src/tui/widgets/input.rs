//! Text input widget
//!
//! Renders a [`TextField`] on one line: label, content and a block cursor
//! when focused, or the placeholder when empty.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::controllers::TextField;

/// A labelled view of a text field
pub struct TextInput<'a> {
    field: &'a TextField,
    label: &'a str,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> TextInput<'a> {
    pub fn new(field: &'a TextField) -> Self {
        Self {
            field,
            label: "",
            placeholder: "",
            focused: false,
        }
    }

    /// Set the label
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let mut spans = Vec::new();
        if !self.label.is_empty() {
            spans.push(Span::styled(format!("{}: ", self.label), label_style));
        }

        let content = self.field.value();
        let value_style = Style::default().fg(Color::White);

        if content.is_empty() && !self.focused {
            spans.push(Span::styled(
                self.placeholder,
                Style::default().fg(Color::DarkGray),
            ));
        } else if self.focused {
            let cursor = self.field.cursor();
            let before: String = content.chars().take(cursor).collect();
            let mut rest = content.chars().skip(cursor);
            let cursor_char = rest.next().unwrap_or(' ');
            let after: String = rest.collect();

            spans.push(Span::styled(before, value_style));
            spans.push(Span::styled(
                cursor_char.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
            spans.push(Span::styled(after, value_style));
        } else {
            spans.push(Span::styled(content, value_style));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_line(input: TextInput, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        input.render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let field = TextField::new();
        let line = render_line(
            TextInput::new(&field).label("Name").placeholder("e.g. Alice"),
            30,
        );
        assert!(line.starts_with("Name: e.g. Alice"));
    }

    #[test]
    fn test_render_shows_content_when_focused() {
        let field = TextField::new().content("1.5");
        let line = render_line(TextInput::new(&field).label("Amount").focused(true), 30);
        assert!(line.starts_with("Amount: 1.5"));
    }
}
