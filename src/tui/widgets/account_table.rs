//! Account table widget
//!
//! Renders accounts with their balances. Addresses are shortened to fit;
//! a failed balance lookup shows `Error` in its own row.

use std::collections::HashMap;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::controllers::BalanceCell;
use crate::models::{Account, Address};

/// Table of accounts and balances
pub struct AccountTable<'a> {
    accounts: &'a [Account],
    balances: &'a HashMap<Address, BalanceCell>,
    selected: Option<usize>,
    block: Option<Block<'a>>,
}

impl<'a> AccountTable<'a> {
    pub fn new(accounts: &'a [Account], balances: &'a HashMap<Address, BalanceCell>) -> Self {
        Self {
            accounts,
            balances,
            selected: None,
            block: None,
        }
    }

    pub fn selected(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

/// Text and style for a balance cell
pub fn balance_cell(cell: Option<&BalanceCell>) -> (String, Style) {
    match cell {
        Some(BalanceCell::Amount(balance)) => {
            (balance.to_string(), Style::default().fg(Color::Green))
        }
        Some(BalanceCell::Error) => ("Error".to_string(), Style::default().fg(Color::Red)),
        None => ("—".to_string(), Style::default().fg(Color::DarkGray)),
    }
}

impl Widget for AccountTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self
            .block
            .unwrap_or_else(|| Block::default().borders(Borders::ALL));

        if self.accounts.is_empty() {
            Paragraph::new("No accounts found.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .render(area, buf);
            return;
        }

        let widths = [
            Constraint::Length(20), // Name
            Constraint::Length(20), // Address
            Constraint::Min(14),    // Balance
        ];

        let header = Row::new(vec![
            Cell::from("Name").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Address").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Balance").style(Style::default().add_modifier(Modifier::BOLD)),
        ])
        .style(Style::default().fg(Color::Yellow))
        .height(1);

        let rows: Vec<Row> = self
            .accounts
            .iter()
            .map(|account| {
                let (balance, balance_style) = balance_cell(self.balances.get(&account.address));
                Row::new(vec![
                    Cell::from(account.label().unwrap_or("—").to_string()),
                    Cell::from(account.address.short()),
                    Cell::from(balance).style(balance_style),
                ])
            })
            .collect();

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = TableState::default();
        state.select(self.selected);

        StatefulWidget::render(table, area, buf, &mut state);
    }
}
