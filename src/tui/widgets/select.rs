//! Select field widget
//!
//! A one-line stand-in for a drop-down: shows the current choice between
//! arrows, cycled with ←/→ by the screen's key handler.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::models::Account;

/// Text used for an account in a selector: name (or address) plus a short address
pub fn option_label(account: &Account) -> String {
    format!(
        "{} ({})",
        account.display_name(),
        account.address.truncated(10, 0)
    )
}

/// A labelled, focusable selector
pub struct SelectField<'a> {
    label: &'a str,
    value: Option<String>,
    placeholder: &'a str,
    focused: bool,
    enabled: bool,
}

impl<'a> SelectField<'a> {
    pub fn new(label: &'a str, placeholder: &'a str) -> Self {
        Self {
            label,
            value: None,
            placeholder,
            focused: false,
            enabled: true,
        }
    }

    pub fn value(mut self, value: Option<String>) -> Self {
        self.value = value;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Widget for SelectField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let (text, value_style) = match (&self.value, self.enabled) {
            (_, false) => (self.placeholder.to_string(), Style::default().fg(Color::DarkGray)),
            (Some(value), true) => (value.clone(), Style::default().fg(Color::White)),
            (None, true) => (self.placeholder.to_string(), Style::default().fg(Color::DarkGray)),
        };

        let arrow_style = if self.focused && self.enabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let line = Line::from(vec![
            Span::styled(format!("{}: ", self.label), label_style),
            Span::styled("◀ ", arrow_style),
            Span::styled(text, value_style),
            Span::styled(" ▶", arrow_style),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
