//! Create account view
//!
//! A single optional name field. After a successful create the new account,
//! private key included, is shown once under a warning.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::controllers::{create_account::PRIVATE_KEY_WARNING, CreateAccountController};
use crate::tui::app::InputMode;
use crate::tui::layout::{stack, MainPanelLayout};
use crate::tui::widgets::{AccountCard, AlertMessage, LoadingSpinner, TextInput};

/// Render the create-account view
pub fn render(
    frame: &mut Frame,
    controller: &CreateAccountController,
    input_mode: InputMode,
    tick: usize,
    area: Rect,
) {
    let layout = MainPanelLayout::new(area);

    let header = Paragraph::new("[Enter] Create  [i] Edit name  [Esc] Stop editing")
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .title(" Create Account ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        );
    frame.render_widget(header, layout.header);

    // Form, then status line, then any alert and the created account
    let mut heights = vec![1, 1];
    if controller.error().is_some() {
        heights.push(AlertMessage::HEIGHT);
    }
    if controller.created().is_some() {
        heights.extend([AlertMessage::HEIGHT, AccountCard::HEIGHT]);
    }
    let rows = stack(layout.content, &heights);

    frame.render_widget(
        TextInput::new(&controller.name_input)
            .label("Account Name (optional)")
            .placeholder("e.g. Alice")
            .focused(input_mode == InputMode::Editing),
        rows[0],
    );

    if controller.is_submitting() {
        frame.render_widget(LoadingSpinner::new("Creating account...", tick), rows[1]);
    }

    let mut row = 2;
    if let Some(error) = controller.error() {
        frame.render_widget(AlertMessage::error(error).dismissible(true), rows[row]);
        row += 1;
    }

    if let Some(account) = controller.created() {
        frame.render_widget(
            AlertMessage::success("Account created successfully!"),
            rows[row],
        );
        frame.render_widget(AccountCard::new(account), rows[row + 1]);

        let warning = Paragraph::new(PRIVATE_KEY_WARNING)
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(warning, rows[row + 2]);
    }
}
