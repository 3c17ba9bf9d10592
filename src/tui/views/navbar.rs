//! Navigation bar
//!
//! Tabs for each route; the active route is highlighted.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::tui::app::App;
use crate::tui::router::Route;

/// Render the navbar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Route::ALL
        .iter()
        .map(|route| Line::from(format!("[{}] {}", route.shortcut(), route.title())))
        .collect();

    let selected = Route::ALL
        .iter()
        .position(|route| *route == app.route())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" chain-console ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" │ ");

    frame.render_widget(tabs, area);
}
