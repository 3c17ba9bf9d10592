//! Account card widget
//!
//! Shows a freshly created account, private key included. Only the create
//! screen renders it, and only for the account it just created.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::models::Account;

/// Card with name, address and private key
pub struct AccountCard<'a> {
    account: &'a Account,
}

impl<'a> AccountCard<'a> {
    pub fn new(account: &'a Account) -> Self {
        Self { account }
    }

    /// Rows needed: borders, the address and key lines, and one spare for a wrapped key
    pub const HEIGHT: u16 = 5;
}

impl Widget for AccountCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label = Style::default().fg(Color::Yellow);
        let mono = Style::default().fg(Color::White);

        let private_key = self
            .account
            .private_key
            .as_ref()
            .map(|k| k.expose())
            .unwrap_or("(not returned)");

        let lines = vec![
            Line::from(vec![
                Span::styled("Address:     ", label),
                Span::styled(self.account.address.as_str(), mono),
            ]),
            Line::from(vec![
                Span::styled("Private Key: ", label),
                Span::styled(private_key, Style::default().fg(Color::LightRed)),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(format!(
                " {} ",
                self.account.label().unwrap_or("Unnamed Account")
            ))
            .title_style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            );

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
