//! Status bar view
//!
//! Shows the input mode, the backend in use, transient messages and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    let (mode, mode_color) = match app.input_mode {
        InputMode::Normal => (" NORMAL ", Color::Blue),
        InputMode::Editing => (" EDIT ", Color::Green),
    };
    spans.push(Span::styled(
        mode,
        Style::default()
            .fg(Color::Black)
            .bg(mode_color)
            .add_modifier(Modifier::BOLD),
    ));

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        app.api_base_url.as_str(),
        Style::default().fg(Color::Cyan),
    ));

    // Status message if any
    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = match app.input_mode {
        InputMode::Normal => " 1-3:Navigate  Esc:Dismiss  q:Quit ",
        InputMode::Editing => " Enter:Submit  Esc:Stop editing  Ctrl-C:Quit ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
