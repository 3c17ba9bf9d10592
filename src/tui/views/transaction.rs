//! Send transaction view
//!
//! Sender and recipient selectors, the sender's balance, an amount field and
//! the submission outcome.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::controllers::{SenderBalance, TransactionController, TransactionField};
use crate::models::Address;
use crate::tui::app::InputMode;
use crate::tui::layout::{stack, MainPanelLayout};
use crate::tui::widgets::{option_label, AlertMessage, LoadingSpinner, SelectField, TextInput};

/// Render the transaction view
pub fn render(
    frame: &mut Frame,
    controller: &TransactionController,
    input_mode: InputMode,
    tick: usize,
    area: Rect,
) {
    let layout = MainPanelLayout::new(area);

    let header = Paragraph::new(
        "[Tab] Next field  [←/→] Choose  [i] Edit amount  [Enter/s] Send",
    )
    .style(Style::default().fg(Color::DarkGray))
    .block(
        Block::default()
            .title(" Send Transaction ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );
    frame.render_widget(header, layout.header);

    let errors = controller.errors();
    let success = controller.success_message();

    // From, balance, To, Amount, spacer, status
    let mut heights = vec![1, 1, 1, 1, 1, 1];
    heights.extend(errors.iter().map(|_| AlertMessage::HEIGHT));
    if success.is_some() {
        heights.push(AlertMessage::HEIGHT);
    }
    let rows = stack(layout.content, &heights);

    let selectors_enabled = !controller.is_loading_accounts();
    let focused = controller.focused_field;

    let from_label = label_for(controller, controller.from());
    frame.render_widget(
        SelectField::new("From", "-- Select sender --")
            .value(from_label)
            .focused(focused == TransactionField::From)
            .enabled(selectors_enabled),
        rows[0],
    );

    render_balance(frame, controller.sender_balance(), tick, rows[1]);

    let to_label = label_for(controller, controller.to());
    frame.render_widget(
        SelectField::new("To", "-- Select recipient --")
            .value(to_label)
            .focused(focused == TransactionField::To)
            .enabled(selectors_enabled),
        rows[2],
    );

    let amount_focused = focused == TransactionField::Amount;
    frame.render_widget(
        TextInput::new(&controller.amount_input)
            .label("Amount")
            .placeholder("e.g. 1.0")
            .focused(amount_focused && input_mode == InputMode::Editing),
        rows[3],
    );

    if controller.is_loading_accounts() {
        frame.render_widget(LoadingSpinner::new("Loading accounts...", tick), rows[5]);
    } else if controller.is_submitting() {
        frame.render_widget(
            LoadingSpinner::new("Broadcasting transaction...", tick),
            rows[5],
        );
    }

    let mut row = 6;
    for error in &errors {
        frame.render_widget(AlertMessage::error(error).dismissible(true), rows[row]);
        row += 1;
    }
    if let Some(message) = &success {
        frame.render_widget(
            AlertMessage::success(message).dismissible(true),
            rows[row],
        );
    }
}

fn label_for(controller: &TransactionController, address: Option<&Address>) -> Option<String> {
    let address = address?;
    controller
        .accounts()
        .iter()
        .find(|a| &a.address == address)
        .map(option_label)
        .or_else(|| Some(address.to_string()))
}

fn render_balance(frame: &mut Frame, balance: &SenderBalance, tick: usize, area: Rect) {
    let indent = Span::raw("      ");
    match balance {
        SenderBalance::Unselected => {}
        SenderBalance::Loading => {
            frame.render_widget(LoadingSpinner::new("Fetching balance...", tick), area);
        }
        SenderBalance::Loaded(amount) => {
            let line = Line::from(vec![
                indent,
                Span::styled("Balance: ", Style::default().fg(Color::White)),
                Span::styled(
                    format!("{} ETH", amount),
                    Style::default().fg(Color::Green),
                ),
            ]);
            frame.render_widget(Paragraph::new(line), area);
        }
        SenderBalance::Failed => {
            let line = Line::from(vec![
                indent,
                Span::styled("Balance: ", Style::default().fg(Color::White)),
                Span::styled("Error", Style::default().fg(Color::Red)),
            ]);
            frame.render_widget(Paragraph::new(line), area);
        }
    }
}
