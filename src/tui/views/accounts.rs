//! Accounts view
//!
//! Lists every account with its balance. A refresh reloads the whole table.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::controllers::AccountsListController;
use crate::tui::layout::{stack, MainPanelLayout};
use crate::tui::widgets::{AccountTable, AlertMessage, LoadingSpinner};

/// Render the accounts view in the main panel
pub fn render(frame: &mut Frame, controller: &AccountsListController, tick: usize, area: Rect) {
    let layout = MainPanelLayout::new(area);

    render_header(frame, controller, layout.header);

    let mut heights = Vec::new();
    if controller.error().is_some() {
        heights.push(AlertMessage::HEIGHT);
    }
    if controller.is_loading() {
        heights.push(1);
    }
    let rows = stack(layout.content, &heights);
    let mut row = 0;

    if let Some(error) = controller.error() {
        frame.render_widget(AlertMessage::error(error).dismissible(true), rows[row]);
        row += 1;
    }
    if controller.is_loading() {
        frame.render_widget(LoadingSpinner::new("Loading accounts...", tick), rows[row]);
        row += 1;
    }

    let table = AccountTable::new(controller.accounts(), controller.balances())
        .selected(
            (!controller.accounts().is_empty()).then_some(controller.selected_index),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(table, rows[row]);
}

/// Render header
fn render_header(frame: &mut Frame, controller: &AccountsListController, area: Rect) {
    let hint_style = if controller.can_refresh() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![
        Span::styled("[r]", Style::default().fg(Color::Cyan)),
        Span::styled(" Refresh", hint_style),
    ];
    if let Some(at) = controller.refreshed_at() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("updated {}", at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default()
        .title(" Accounts ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Right)
        .block(block);

    frame.render_widget(header, area);
}
